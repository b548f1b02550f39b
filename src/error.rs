//! Core error types shared across token, password, and rate-limit modules.

// self
use crate::{_prelude::*, password::PolicyViolation, token::TokenKind};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical core error exposed by public APIs.
///
/// Handlers translate these into transport responses (401 with a bearer
/// challenge for [`Error::Unauthorized`], 400 with itemized reasons for
/// [`Error::ValidationFailed`]); the core itself never touches the transport.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem (bad key material, unencodable payload).
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Authentication failure on token verification.
	#[error(transparent)]
	Unauthorized(#[from] UnauthorizedError),
	/// Caller attempted to set a core-owned claim key.
	#[error(transparent)]
	Claims(#[from] crate::token::ClaimsError),
	/// Password hashing failed.
	#[error(transparent)]
	Hash(#[from] crate::password::HashError),
	/// Password rejected by the strength policy; every violated rule is listed.
	#[error("Password validation failed: {}", join_violations(.violations))]
	ValidationFailed {
		/// Ordered list of violated rules.
		violations: Vec<PolicyViolation>,
	},
}

/// Authentication failures raised while verifying bearer tokens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum UnauthorizedError {
	/// Signature is invalid, the payload is malformed, or the signing
	/// algorithm does not match the configured one.
	#[error("Could not validate credentials.")]
	InvalidToken,
	/// The embedded expiration instant has passed.
	#[error("Token has expired.")]
	Expired,
	/// The token-kind discriminator does not match the verifying operation.
	#[error("Invalid token type: expected {expected}.")]
	WrongKind {
		/// Kind the verifying operation expected.
		expected: TokenKind,
	},
}

/// Configuration and encoding failures raised by the core.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Signing secret was empty or whitespace.
	#[error("Signing secret cannot be empty.")]
	EmptySecret,
	/// Default access-token lifetime was zero or negative.
	#[error("Access-token lifetime must be positive.")]
	NonPositiveTtl,
	/// Claims payload could not be signed; indicates misconfigured key material.
	#[error("Token could not be encoded.")]
	TokenEncoding {
		/// Underlying encoder failure.
		#[source]
		source: jsonwebtoken::errors::Error,
	},
}

fn join_violations(violations: &[PolicyViolation]) -> String {
	violations.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn validation_failed_lists_every_violation() {
		let error = Error::ValidationFailed {
			violations: vec![PolicyViolation::MissingDigit, PolicyViolation::MissingUppercase],
		};
		let rendered = error.to_string();

		assert!(rendered.starts_with("Password validation failed:"));
		assert!(rendered.contains("digit"));
		assert!(rendered.contains("uppercase"));
	}

	#[test]
	fn wrong_kind_names_the_expected_kind() {
		let error = UnauthorizedError::WrongKind { expected: TokenKind::Refresh };

		assert_eq!(error.to_string(), "Invalid token type: expected refresh.");
	}
}
