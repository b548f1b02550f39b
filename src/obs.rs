//! Optional observability helpers for core auth operations.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `nourish_auth.op` with the `op`
//!   (operation) and `stage` (call site) fields.
//! - Enable `metrics` to increment the `nourish_auth_op_total` counter for every
//!   attempt/success/failure, labeled by `op` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Core operations observed by the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AuthOp {
	/// Access-token issuance.
	IssueAccess,
	/// Refresh-token issuance.
	IssueRefresh,
	/// Access-token verification.
	VerifyAccess,
	/// Refresh-token verification.
	VerifyRefresh,
	/// Password hashing.
	HashPassword,
	/// Password verification against a stored hash.
	VerifyPassword,
	/// Rate-limit admission check.
	RateCheck,
}
impl AuthOp {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			AuthOp::IssueAccess => "issue_access",
			AuthOp::IssueRefresh => "issue_refresh",
			AuthOp::VerifyAccess => "verify_access",
			AuthOp::VerifyRefresh => "verify_refresh",
			AuthOp::HashPassword => "hash_password",
			AuthOp::VerifyPassword => "verify_password",
			AuthOp::RateCheck => "rate_check",
		}
	}
}
impl Display for AuthOp {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpOutcome {
	/// Entry to a core operation.
	Attempt,
	/// Successful completion (for a rate check, admission).
	Success,
	/// Failure propagated back to the caller (for a rate check, denial).
	Failure,
}
impl OpOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			OpOutcome::Attempt => "attempt",
			OpOutcome::Success => "success",
			OpOutcome::Failure => "failure",
		}
	}
}
impl Display for OpOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
