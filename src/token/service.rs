//! Issues and verifies signed, expiring, typed bearer tokens.

// crates.io
use jsonwebtoken::{
	Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
// self
use crate::{
	_prelude::*,
	config::{AuthConfig, SigningAlgorithm},
	error::{ConfigError, UnauthorizedError},
	obs::{self, AuthOp, OpOutcome, OpSpan},
	token::claims::{Claims, EXPIRY_CLAIM, KIND_CLAIM, TokenKind},
};

/// Fixed refresh-token lifetime; deliberately not configurable per call.
pub const REFRESH_TTL: Duration = Duration::days(7);

/// Stateless issuer/verifier for signed, expiring, typed bearer tokens.
///
/// Pure function of its inputs plus the configured secret/algorithm/clock;
/// safe to share across request handlers without synchronization. Tokens are
/// opaque strings carried by convention in an `Authorization: Bearer` header;
/// this service only sees the bare token.
#[derive(Clone)]
pub struct TokenService {
	header: Header,
	encoding_key: EncodingKey,
	decoding_key: DecodingKey,
	validation: Validation,
	access_ttl: Duration,
}
impl TokenService {
	/// Builds a service from validated startup configuration.
	pub fn new(config: &AuthConfig) -> Self {
		let algorithm = match config.algorithm() {
			SigningAlgorithm::Hs256 => Algorithm::HS256,
			SigningAlgorithm::Hs384 => Algorithm::HS384,
			SigningAlgorithm::Hs512 => Algorithm::HS512,
		};
		let secret = config.secret().expose().as_bytes();
		let mut validation = Validation::new(algorithm);

		// Expiry checks must be exact; no leeway window.
		validation.leeway = 0;
		validation.set_required_spec_claims(&[EXPIRY_CLAIM]);

		Self {
			header: Header::new(algorithm),
			encoding_key: EncodingKey::from_secret(secret),
			decoding_key: DecodingKey::from_secret(secret),
			validation,
			access_ttl: config.access_ttl(),
		}
	}

	/// Signs `claims` into an access token using the configured default lifetime.
	pub fn issue_access(&self, claims: &Claims) -> Result<String> {
		self.issue(claims, TokenKind::Access, self.access_ttl)
	}

	/// Signs `claims` into an access token with an explicit lifetime.
	pub fn issue_access_with_ttl(&self, claims: &Claims, ttl: Duration) -> Result<String> {
		self.issue(claims, TokenKind::Access, ttl)
	}

	/// Signs `claims` into a refresh token with the fixed seven-day lifetime.
	pub fn issue_refresh(&self, claims: &Claims) -> Result<String> {
		self.issue(claims, TokenKind::Refresh, REFRESH_TTL)
	}

	/// Verifies signature, expiry, and kind, returning the full claims payload.
	pub fn verify_access(&self, token: &str) -> Result<Claims> {
		self.verify(token, TokenKind::Access, AuthOp::VerifyAccess)
	}

	/// Verifies signature, expiry, and kind, rejecting non-refresh tokens.
	pub fn verify_refresh(&self, token: &str) -> Result<Claims> {
		self.verify(token, TokenKind::Refresh, AuthOp::VerifyRefresh)
	}

	fn issue(&self, claims: &Claims, kind: TokenKind, ttl: Duration) -> Result<String> {
		let op = match kind {
			TokenKind::Access => AuthOp::IssueAccess,
			TokenKind::Refresh => AuthOp::IssueRefresh,
		};
		let _guard = OpSpan::new(op, "issue").entered();

		obs::record_op_outcome(op, OpOutcome::Attempt);

		let expires_at = OffsetDateTime::now_utc() + ttl;
		let mut payload = claims.clone();

		payload.insert_reserved(EXPIRY_CLAIM, Value::from(expires_at.unix_timestamp()));
		payload.insert_reserved(KIND_CLAIM, Value::from(kind.as_str()));

		match encode(&self.header, &payload, &self.encoding_key) {
			Ok(token) => {
				obs::record_op_outcome(op, OpOutcome::Success);

				Ok(token)
			},
			Err(source) => {
				obs::record_op_outcome(op, OpOutcome::Failure);

				Err(ConfigError::TokenEncoding { source }.into())
			},
		}
	}

	fn verify(&self, token: &str, expected: TokenKind, op: AuthOp) -> Result<Claims> {
		let _guard = OpSpan::new(op, "verify").entered();

		obs::record_op_outcome(op, OpOutcome::Attempt);

		let outcome = self.verify_inner(token, expected);

		match &outcome {
			Ok(_) => obs::record_op_outcome(op, OpOutcome::Success),
			Err(_) => obs::record_op_outcome(op, OpOutcome::Failure),
		}

		outcome.map_err(Into::into)
	}

	fn verify_inner(&self, token: &str, expected: TokenKind) -> Result<Claims, UnauthorizedError> {
		let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
			.map_err(unauthorized_from)?;
		let claims = data.claims;

		// Kind enforcement is symmetric: each verifier rejects the other kind.
		if claims.kind() != Some(expected) {
			return Err(UnauthorizedError::WrongKind { expected });
		}

		Ok(claims)
	}
}
impl Debug for TokenService {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenService")
			.field("algorithm", &self.header.alg)
			.field("encoding_key", &"<redacted>")
			.field("decoding_key", &"<redacted>")
			.field("access_ttl", &self.access_ttl)
			.finish()
	}
}

fn unauthorized_from(error: jsonwebtoken::errors::Error) -> UnauthorizedError {
	match error.kind() {
		ErrorKind::ExpiredSignature => UnauthorizedError::Expired,
		_ => UnauthorizedError::InvalidToken,
	}
}
