//! Cryptographically random credential generation.

// crates.io
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::Rng;

/// Default length for generated passwords.
pub const DEFAULT_PASSWORD_LENGTH: usize = 12;

// Letters, digits, and the fixed punctuation set accepted for generated passwords.
const PASSWORD_ALPHABET: &[u8] =
	b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*";
// Raw entropy baked into verification tokens before encoding.
const VERIFICATION_TOKEN_BYTES: usize = 32;

/// Generates a random password of the requested length.
///
/// Output is drawn uniformly from letters, digits, and a fixed punctuation
/// set using the thread-local CSPRNG; it is not validated against the
/// strength policy. Use [`DEFAULT_PASSWORD_LENGTH`] when no caller preference
/// exists.
pub fn generate_random_password(length: usize) -> String {
	let mut rng = rand::rng();

	(0..length)
		.map(|_| PASSWORD_ALPHABET[rng.random_range(0..PASSWORD_ALPHABET.len())] as char)
		.collect()
}

/// Generates a URL-safe token with 32 bytes of entropy for out-of-band
/// verification flows such as email confirmation.
pub fn generate_verification_token() -> String {
	let mut bytes = [0_u8; VERIFICATION_TOKEN_BYTES];

	rand::rng().fill(&mut bytes[..]);

	URL_SAFE_NO_PAD.encode(bytes)
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn passwords_honor_requested_length_and_alphabet() {
		for length in [0, 1, DEFAULT_PASSWORD_LENGTH, 64] {
			let password = generate_random_password(length);

			assert_eq!(password.chars().count(), length);
			assert!(password.bytes().all(|byte| PASSWORD_ALPHABET.contains(&byte)));
		}
	}

	#[test]
	fn consecutive_passwords_differ() {
		// A repeat at 24 characters means a broken RNG hookup, not bad luck.
		assert_ne!(generate_random_password(24), generate_random_password(24));
	}

	#[test]
	fn verification_tokens_are_url_safe() {
		let token = generate_verification_token();

		// 32 bytes encode to 43 base64 characters without padding.
		assert_eq!(token.len(), 43);
		assert!(
			token.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'),
			"token must stay within the URL-safe alphabet"
		);
	}

	#[test]
	fn verification_tokens_are_unique() {
		assert_ne!(generate_verification_token(), generate_verification_token());
	}
}
