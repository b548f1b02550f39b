//! In-memory sliding-window rate limiting keyed by caller-defined strings.

// self
use crate::{
	_prelude::*,
	obs::{self, AuthOp, OpOutcome, OpSpan},
};

/// Named request budget for an endpoint: a limit over a trailing window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RatePolicy {
	/// Maximum permitted events inside the trailing window.
	pub limit: usize,
	/// Trailing window length.
	pub window: Duration,
}
impl RatePolicy {
	/// Budget guarding account registration.
	pub const REGISTRATION: Self = Self::new(5, Duration::HOUR);
	/// Budget guarding login attempts.
	pub const LOGIN: Self = Self::new(10, Duration::HOUR);

	/// Creates a budget from a limit and window.
	pub const fn new(limit: usize, window: Duration) -> Self {
		Self { limit, window }
	}
}

/// Builds the conventional `<action>_<client>` bucket key.
pub fn scoped_key(action: &str, client: &str) -> String {
	format!("{action}_{client}")
}

/// Sliding-window admission control over an in-process bucket map.
///
/// Buckets are created on first access and live for the process lifetime;
/// distinct keys accumulate without eviction, an accepted limit for a
/// single-instance deployment. The prune-check-append sequence for a call
/// runs as one critical section, so concurrent callers can never admit more
/// than `limit` events inside a window. State is neither persisted nor
/// shared across processes; swapping in a distributed counter only needs to
/// preserve the [`is_allowed`](Self::is_allowed) boundary.
#[derive(Debug, Default)]
pub struct SlidingWindowLimiter {
	buckets: Mutex<HashMap<String, Vec<OffsetDateTime>>>,
}
impl SlidingWindowLimiter {
	/// Creates an empty limiter.
	pub fn new() -> Self {
		Self::default()
	}

	/// Admits or denies an event for `key` under the current clock.
	///
	/// Denied attempts are not recorded, so a denied caller does not push its
	/// own recovery further out.
	pub fn is_allowed(&self, key: &str, limit: usize, window: Duration) -> bool {
		self.is_allowed_at(key, limit, window, OffsetDateTime::now_utc())
	}

	/// [`is_allowed`](Self::is_allowed) with an explicit observation instant.
	pub fn is_allowed_at(
		&self,
		key: &str,
		limit: usize,
		window: Duration,
		now: OffsetDateTime,
	) -> bool {
		let _guard = OpSpan::new(AuthOp::RateCheck, "is_allowed").entered();

		obs::record_op_outcome(AuthOp::RateCheck, OpOutcome::Attempt);

		let mut buckets = self.buckets.lock();
		let bucket = buckets.entry(key.to_owned()).or_default();

		// Lazy purge: drop timestamps that fell out of the trailing window.
		bucket.retain(|instant| now - *instant < window);

		if bucket.len() >= limit {
			obs::record_op_outcome(AuthOp::RateCheck, OpOutcome::Failure);

			return false;
		}

		bucket.push(now);

		obs::record_op_outcome(AuthOp::RateCheck, OpOutcome::Success);

		true
	}

	/// Admits or denies an event for `key` under a named budget.
	pub fn check(&self, policy: RatePolicy, key: &str) -> bool {
		self.is_allowed(key, policy.limit, policy.window)
	}
}
