//! One-way password hashing over self-describing Argon2 PHC strings.

// crates.io
use argon2::{
	Argon2,
	password_hash::{
		PasswordHash, PasswordHasher as PhcHasher, PasswordVerifier, SaltString, rand_core::OsRng,
	},
};
// self
use crate::{
	_prelude::*,
	obs::{self, AuthOp, OpOutcome, OpSpan},
};

/// Error raised when a password cannot be hashed (parameter or salt failure).
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("Password hashing failed: {message}.")]
pub struct HashError {
	/// Underlying PHC-layer failure, rendered as text.
	message: String,
}

/// Salted, deliberately slow password hasher.
///
/// Each [`hash`](Self::hash) call draws a fresh random salt, so two hashes of
/// the same password differ while both verify. The produced PHC string embeds
/// the algorithm identifier, cost parameters, salt, and digest; verification
/// recomputes from those embedded values and compares in constant time.
#[derive(Clone, Copy, Debug, Default)]
pub struct PasswordHasher;
impl PasswordHasher {
	/// Creates a hasher with the library-default Argon2id parameters.
	pub fn new() -> Self {
		Self
	}

	/// Hashes `password` into a self-describing PHC string.
	pub fn hash(&self, password: &str) -> Result<String> {
		let _guard = OpSpan::new(AuthOp::HashPassword, "hash").entered();

		obs::record_op_outcome(AuthOp::HashPassword, OpOutcome::Attempt);

		let salt = SaltString::generate(&mut OsRng);

		match Argon2::default().hash_password(password.as_bytes(), &salt) {
			Ok(hash) => {
				obs::record_op_outcome(AuthOp::HashPassword, OpOutcome::Success);

				Ok(hash.to_string())
			},
			Err(error) => {
				obs::record_op_outcome(AuthOp::HashPassword, OpOutcome::Failure);

				Err(HashError { message: error.to_string() }.into())
			},
		}
	}

	/// Verifies `password` against a stored PHC string.
	///
	/// Malformed hash input is treated as a verification failure rather than
	/// an error; this is the only permitted comparison path for passwords.
	pub fn verify(&self, password: &str, hash: &str) -> bool {
		let _guard = OpSpan::new(AuthOp::VerifyPassword, "verify").entered();

		obs::record_op_outcome(AuthOp::VerifyPassword, OpOutcome::Attempt);

		let verified = match PasswordHash::new(hash) {
			Ok(parsed) => Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok(),
			Err(_) => false,
		};
		let outcome = if verified { OpOutcome::Success } else { OpOutcome::Failure };

		obs::record_op_outcome(AuthOp::VerifyPassword, outcome);

		verified
	}
}
