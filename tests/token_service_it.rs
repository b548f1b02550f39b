// crates.io
use jsonwebtoken::{EncodingKey, Header};
use serde_json::json;
use time::{Duration, OffsetDateTime};
// self
use nourish_auth::{
	config::{AuthConfig, SigningAlgorithm},
	error::{Error, UnauthorizedError},
	token::{Claims, EMAIL_CLAIM, ROLE_CLAIM, Role, TokenKind, TokenService, USER_ID_CLAIM},
};

const SECRET: &str = "integration-test-signing-secret";

fn make_service() -> TokenService {
	let config = AuthConfig::builder(SECRET)
		.build()
		.expect("Config fixture should build successfully.");

	TokenService::new(&config)
}

fn identity_claims() -> Claims {
	Claims::new()
		.with_claim(USER_ID_CLAIM, "b7a3d9e0-0000-4000-8000-5c1f00000000")
		.and_then(|claims| claims.with_claim(EMAIL_CLAIM, "volunteer@example.org"))
		.and_then(|claims| claims.with_claim(ROLE_CLAIM, Role::Volunteer.as_str()))
		.expect("Identity claims fixture should accept conventional keys.")
}

#[test]
fn round_trip_preserves_caller_claims_and_adds_reserved_keys() {
	let service = make_service();
	let claims = identity_claims();
	let token =
		service.issue_access(&claims).expect("Issuing an access token should succeed.");
	let verified =
		service.verify_access(&token).expect("Fresh access token should verify cleanly.");

	for (key, value) in claims.iter() {
		assert_eq!(verified.get(key), Some(value), "caller claim `{key}` must survive");
	}

	assert_eq!(verified.kind(), Some(TokenKind::Access));
	assert!(verified.expires_at().expect("Verified claims should carry an expiry.") > OffsetDateTime::now_utc());
	assert_eq!(verified.role(), Some(Role::Volunteer));
}

#[test]
fn kind_enforcement_rejects_cross_use_in_both_directions() {
	let service = make_service();
	let access =
		service.issue_access(&identity_claims()).expect("Access issuance should succeed.");
	let refresh =
		service.issue_refresh(&identity_claims()).expect("Refresh issuance should succeed.");

	assert!(matches!(
		service.verify_refresh(&access),
		Err(Error::Unauthorized(UnauthorizedError::WrongKind { expected: TokenKind::Refresh }))
	));
	assert!(matches!(
		service.verify_access(&refresh),
		Err(Error::Unauthorized(UnauthorizedError::WrongKind { expected: TokenKind::Access }))
	));
}

#[test]
fn expired_tokens_are_rejected_deterministically() {
	let service = make_service();
	// Craft a structurally valid access token whose expiry already passed.
	let exp = (OffsetDateTime::now_utc() - Duration::hours(1)).unix_timestamp();
	let payload = json!({
		"user_id": "user-1",
		"exp": exp,
		"type": "access",
	});
	let token = jsonwebtoken::encode(
		&Header::default(),
		&payload,
		&EncodingKey::from_secret(SECRET.as_bytes()),
	)
	.expect("Encoding the expired fixture token should succeed.");

	for _ in 0..3 {
		assert!(matches!(
			service.verify_access(&token),
			Err(Error::Unauthorized(UnauthorizedError::Expired))
		));
	}
}

#[test]
fn tokens_missing_an_expiry_are_rejected() {
	let payload = json!({ "user_id": "user-1", "type": "access" });
	let token = jsonwebtoken::encode(
		&Header::default(),
		&payload,
		&EncodingKey::from_secret(SECRET.as_bytes()),
	)
	.expect("Encoding the expiry-less fixture token should succeed.");

	assert!(matches!(
		make_service().verify_access(&token),
		Err(Error::Unauthorized(UnauthorizedError::InvalidToken))
	));
}

#[test]
fn foreign_secrets_and_tampering_are_rejected() {
	let service = make_service();
	let foreign = {
		let config = AuthConfig::builder("some-other-secret")
			.build()
			.expect("Foreign config fixture should build successfully.");

		TokenService::new(&config)
	};
	let foreign_claims = Claims::new()
		.with_claim(USER_ID_CLAIM, "attacker-7")
		.expect("Foreign claims fixture should accept a user identifier.");
	let token =
		foreign.issue_access(&foreign_claims).expect("Foreign issuance should succeed.");

	assert!(matches!(
		service.verify_access(&token),
		Err(Error::Unauthorized(UnauthorizedError::InvalidToken))
	));

	let own = service.issue_access(&identity_claims()).expect("Issuance should succeed.");
	let tampered = {
		let mut parts: Vec<String> = own.split('.').map(str::to_owned).collect();

		// Swap the payload for one from a different token; the signature no
		// longer matches.
		parts[1] = token.split('.').nth(1).expect("JWTs have three segments.").to_owned();
		parts.join(".")
	};

	assert!(matches!(
		service.verify_access(&tampered),
		Err(Error::Unauthorized(UnauthorizedError::InvalidToken))
	));
}

#[test]
fn algorithm_mismatches_are_rejected() {
	let hs256 = make_service();
	let hs512 = {
		let config = AuthConfig::builder(SECRET)
			.algorithm(SigningAlgorithm::Hs512)
			.build()
			.expect("HS512 config fixture should build successfully.");

		TokenService::new(&config)
	};
	let token =
		hs512.issue_access(&identity_claims()).expect("HS512 issuance should succeed.");

	assert!(hs512.verify_access(&token).is_ok());
	assert!(matches!(
		hs256.verify_access(&token),
		Err(Error::Unauthorized(UnauthorizedError::InvalidToken))
	));
}

#[test]
fn explicit_ttl_overrides_the_default() {
	let service = make_service();
	let token = service
		.issue_access_with_ttl(&identity_claims(), Duration::minutes(5))
		.expect("Issuance with explicit TTL should succeed.");
	let claims = service.verify_access(&token).expect("Short-lived token should verify.");
	let remaining = claims.expires_at().expect("Claims should carry an expiry.")
		- OffsetDateTime::now_utc();

	assert!(remaining <= Duration::minutes(5));
	assert!(remaining > Duration::minutes(4));
}
