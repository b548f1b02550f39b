//! Process-wide signing configuration, built once at startup and immutable after.

// self
use crate::{_prelude::*, error::ConfigError};

/// Default access-token lifetime applied when the builder does not override it.
pub const DEFAULT_ACCESS_TTL: Duration = Duration::minutes(30);

/// Symmetric signing algorithms accepted for bearer tokens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SigningAlgorithm {
	/// HMAC with SHA-256.
	#[default]
	Hs256,
	/// HMAC with SHA-384.
	Hs384,
	/// HMAC with SHA-512.
	Hs512,
}
impl SigningAlgorithm {
	/// Returns the standard JOSE label for the algorithm.
	pub const fn as_str(self) -> &'static str {
		match self {
			SigningAlgorithm::Hs256 => "HS256",
			SigningAlgorithm::Hs384 => "HS384",
			SigningAlgorithm::Hs512 => "HS512",
		}
	}
}
impl Display for SigningAlgorithm {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Redacted signing-secret wrapper keeping key material out of logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigningSecret(String);
impl SigningSecret {
	/// Wraps a new secret string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner secret. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for SigningSecret {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for SigningSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("SigningSecret").field(&"<redacted>").finish()
	}
}
impl Display for SigningSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

/// Validated signing configuration consumed by the token service.
#[derive(Clone, Debug)]
pub struct AuthConfig {
	secret: SigningSecret,
	algorithm: SigningAlgorithm,
	access_ttl: Duration,
}
impl AuthConfig {
	/// Returns a builder seeded with the provided signing secret.
	pub fn builder(secret: impl Into<String>) -> AuthConfigBuilder {
		AuthConfigBuilder::new(secret)
	}

	/// The configured signing secret.
	pub fn secret(&self) -> &SigningSecret {
		&self.secret
	}

	/// The configured signing algorithm.
	pub fn algorithm(&self) -> SigningAlgorithm {
		self.algorithm
	}

	/// The default access-token lifetime.
	pub fn access_ttl(&self) -> Duration {
		self.access_ttl
	}
}

/// Builder for [`AuthConfig`]; validation happens in [`build`](Self::build).
#[derive(Clone, Debug)]
pub struct AuthConfigBuilder {
	secret: String,
	algorithm: SigningAlgorithm,
	access_ttl: Duration,
}
impl AuthConfigBuilder {
	fn new(secret: impl Into<String>) -> Self {
		Self {
			secret: secret.into(),
			algorithm: SigningAlgorithm::default(),
			access_ttl: DEFAULT_ACCESS_TTL,
		}
	}

	/// Overrides the signing algorithm (defaults to HS256).
	pub fn algorithm(mut self, algorithm: SigningAlgorithm) -> Self {
		self.algorithm = algorithm;

		self
	}

	/// Overrides the default access-token lifetime (defaults to 30 minutes).
	pub fn access_ttl(mut self, ttl: Duration) -> Self {
		self.access_ttl = ttl;

		self
	}

	/// Consumes the builder and produces a validated [`AuthConfig`].
	pub fn build(self) -> Result<AuthConfig, ConfigError> {
		if self.secret.trim().is_empty() {
			return Err(ConfigError::EmptySecret);
		}
		if !self.access_ttl.is_positive() {
			return Err(ConfigError::NonPositiveTtl);
		}

		Ok(AuthConfig {
			secret: SigningSecret::new(self.secret),
			algorithm: self.algorithm,
			access_ttl: self.access_ttl,
		})
	}
}
