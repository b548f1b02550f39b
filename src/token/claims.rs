//! Open string-keyed claims payloads with core-owned reserved keys.

// self
use crate::_prelude::*;

/// Reserved claim key carrying the expiration timestamp (Unix seconds).
pub const EXPIRY_CLAIM: &str = "exp";
/// Reserved claim key carrying the token-kind discriminator.
pub const KIND_CLAIM: &str = "type";
/// Conventional claim key carrying the user identifier.
pub const USER_ID_CLAIM: &str = "user_id";
/// Conventional claim key carrying the account email.
pub const EMAIL_CLAIM: &str = "email";
/// Conventional claim key carrying the account role.
pub const ROLE_CLAIM: &str = "user_type";

/// Error returned when a caller attempts to set a core-owned claim key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum ClaimsError {
	/// `exp` and `type` are injected by the token service and cannot be supplied.
	#[error("Claim key `{key}` is reserved and managed by the token service.")]
	ReservedKey {
		/// The offending key.
		key: String,
	},
}

/// Token kinds distinguished by the reserved `type` claim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
	/// Short-lived token presented on every authenticated request.
	Access,
	/// Long-lived token exchanged for fresh access tokens.
	Refresh,
}
impl TokenKind {
	/// Returns the stable label embedded in the `type` claim.
	pub const fn as_str(self) -> &'static str {
		match self {
			TokenKind::Access => "access",
			TokenKind::Refresh => "refresh",
		}
	}

	/// Parses a `type` claim label back into a kind.
	pub fn from_label(label: &str) -> Option<Self> {
		match label {
			"access" => Some(TokenKind::Access),
			"refresh" => Some(TokenKind::Refresh),
			_ => None,
		}
	}
}
impl Display for TokenKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Platform account roles carried in the conventional `user_type` claim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
	/// Organizations or individuals donating food.
	Donor,
	/// Organizations or individuals receiving food.
	Recipient,
	/// People helping with transport and coordination.
	Volunteer,
	/// Platform administrators.
	Admin,
}
impl Role {
	/// Returns the stable label stored in the `user_type` claim.
	pub const fn as_str(self) -> &'static str {
		match self {
			Role::Donor => "donor",
			Role::Recipient => "recipient",
			Role::Volunteer => "volunteer",
			Role::Admin => "admin",
		}
	}

	/// Parses a `user_type` claim label back into a role.
	pub fn from_label(label: &str) -> Option<Self> {
		match label {
			"donor" => Some(Role::Donor),
			"recipient" => Some(Role::Recipient),
			"volunteer" => Some(Role::Volunteer),
			"admin" => Some(Role::Admin),
			_ => None,
		}
	}
}
impl Display for Role {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Open mapping of claim keys to JSON values embedded into a token.
///
/// Callers may attach arbitrary identity fields; the two reserved keys
/// ([`EXPIRY_CLAIM`] and [`KIND_CLAIM`]) are injected by the token service at
/// issue time and rejected here. Payloads returned by verification include the
/// reserved keys so handlers can inspect them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims(BTreeMap<String, Value>);
impl Claims {
	/// Creates an empty claims payload.
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts a caller-supplied claim, rejecting core-owned keys.
	pub fn insert(
		&mut self,
		key: impl Into<String>,
		value: impl Into<Value>,
	) -> Result<(), ClaimsError> {
		let key = key.into();

		if key == EXPIRY_CLAIM || key == KIND_CLAIM {
			return Err(ClaimsError::ReservedKey { key });
		}

		self.0.insert(key, value.into());

		Ok(())
	}

	/// Builder-style [`insert`](Self::insert).
	pub fn with_claim(
		mut self,
		key: impl Into<String>,
		value: impl Into<Value>,
	) -> Result<Self, ClaimsError> {
		self.insert(key, value)?;

		Ok(self)
	}

	/// Inserts a core-owned claim; only the token service may call this.
	pub(crate) fn insert_reserved(&mut self, key: &str, value: Value) {
		self.0.insert(key.to_owned(), value);
	}

	/// Number of claims, reserved keys included.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true when no claims are present.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Returns true when the payload contains the provided key.
	pub fn contains(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	/// Looks up a claim value by key.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.0.get(key)
	}

	/// Looks up a claim and narrows it to a string.
	pub fn get_str(&self, key: &str) -> Option<&str> {
		self.0.get(key).and_then(Value::as_str)
	}

	/// Iterator over claim entries in key order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.0.iter().map(|(key, value)| (key.as_str(), value))
	}

	/// The conventional user identifier, when present.
	pub fn user_id(&self) -> Option<&str> {
		self.get_str(USER_ID_CLAIM)
	}

	/// The conventional account email, when present.
	pub fn email(&self) -> Option<&str> {
		self.get_str(EMAIL_CLAIM)
	}

	/// The account role parsed from the conventional `user_type` claim.
	pub fn role(&self) -> Option<Role> {
		self.get_str(ROLE_CLAIM).and_then(Role::from_label)
	}

	/// The token kind parsed from the reserved `type` claim.
	pub fn kind(&self) -> Option<TokenKind> {
		self.get_str(KIND_CLAIM).and_then(TokenKind::from_label)
	}

	/// The expiration instant parsed from the reserved `exp` claim.
	pub fn expires_at(&self) -> Option<OffsetDateTime> {
		let seconds = self.get(EXPIRY_CLAIM)?.as_i64()?;

		OffsetDateTime::from_unix_timestamp(seconds).ok()
	}
}
