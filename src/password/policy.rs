//! Stateless password strength policy with itemized violations.

// self
use crate::_prelude::*;

/// Minimum password length accepted by the policy.
pub const MIN_PASSWORD_LENGTH: usize = 8;

// Valid passwords at or beyond this length are labeled strong.
const STRONG_LENGTH: usize = 12;

/// A single strength rule a candidate password violated.
///
/// Rules are checked independently; a report lists every violated rule so
/// callers can surface all problems at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum PolicyViolation {
	/// Password is shorter than the minimum length.
	#[error("Password must be at least {min} characters long.")]
	TooShort {
		/// The enforced minimum.
		min: usize,
	},
	/// Password contains no digit.
	#[error("Password must contain at least one digit.")]
	MissingDigit,
	/// Password contains no uppercase letter.
	#[error("Password must contain at least one uppercase letter.")]
	MissingUppercase,
	/// Password contains no lowercase letter.
	#[error("Password must contain at least one lowercase letter.")]
	MissingLowercase,
}

/// Coarse strength label attached to a [`StrengthReport`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
	/// At least one rule is violated.
	Weak,
	/// All rules pass.
	Fair,
	/// All rules pass and the password is comfortably long.
	Strong,
}
impl Strength {
	/// Returns a stable label suitable for responses or logs.
	pub const fn as_str(self) -> &'static str {
		match self {
			Strength::Weak => "weak",
			Strength::Fair => "fair",
			Strength::Strong => "strong",
		}
	}
}
impl Display for Strength {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Transient evaluation result; computed fresh per call, never stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthReport {
	/// True iff zero rules were violated.
	pub is_valid: bool,
	/// Every violated rule, in rule order.
	pub violations: Vec<PolicyViolation>,
	/// Coarse strength label.
	pub strength: Strength,
}
impl StrengthReport {
	/// Renders the violations as human-readable messages, in rule order.
	pub fn messages(&self) -> Vec<String> {
		self.violations.iter().map(ToString::to_string).collect()
	}
}

/// Stateless strength evaluator; safe to call concurrently.
#[derive(Clone, Copy, Debug, Default)]
pub struct PasswordPolicy;
impl PasswordPolicy {
	/// Creates the evaluator.
	pub fn new() -> Self {
		Self
	}

	/// Checks every rule independently and reports all violations.
	pub fn evaluate(&self, password: &str) -> StrengthReport {
		let mut violations = Vec::new();
		let length = password.chars().count();

		if length < MIN_PASSWORD_LENGTH {
			violations.push(PolicyViolation::TooShort { min: MIN_PASSWORD_LENGTH });
		}
		if !password.chars().any(|c| c.is_ascii_digit()) {
			violations.push(PolicyViolation::MissingDigit);
		}
		if !password.chars().any(|c| c.is_ascii_uppercase()) {
			violations.push(PolicyViolation::MissingUppercase);
		}
		if !password.chars().any(|c| c.is_ascii_lowercase()) {
			violations.push(PolicyViolation::MissingLowercase);
		}

		let is_valid = violations.is_empty();
		let strength = if !is_valid {
			Strength::Weak
		} else if length >= STRONG_LENGTH {
			Strength::Strong
		} else {
			Strength::Fair
		};

		StrengthReport { is_valid, violations, strength }
	}

	/// Evaluates and converts a failing report into [`Error::ValidationFailed`].
	pub fn require(&self, password: &str) -> Result<()> {
		let report = self.evaluate(password);

		if report.is_valid {
			Ok(())
		} else {
			Err(Error::ValidationFailed { violations: report.violations })
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn minimal_compliant_password_passes() {
		let report = PasswordPolicy::new().evaluate("Ab1defgh");

		assert!(report.is_valid);
		assert!(report.violations.is_empty());
		assert_eq!(report.strength, Strength::Fair);
	}

	#[test]
	fn weak_password_reports_every_violation() {
		let report = PasswordPolicy::new().evaluate("weak");

		assert!(!report.is_valid);
		assert_eq!(
			report.violations,
			vec![
				PolicyViolation::TooShort { min: MIN_PASSWORD_LENGTH },
				PolicyViolation::MissingDigit,
				PolicyViolation::MissingUppercase,
			]
		);
		assert_eq!(report.strength, Strength::Weak);
	}

	#[test]
	fn rules_are_checked_independently() {
		let report = PasswordPolicy::new().evaluate("12345678");

		assert_eq!(
			report.violations,
			vec![PolicyViolation::MissingUppercase, PolicyViolation::MissingLowercase]
		);
	}

	#[test]
	fn long_compliant_password_is_strong() {
		let report = PasswordPolicy::new().evaluate("Abcdefghijk1");

		assert!(report.is_valid);
		assert_eq!(report.strength, Strength::Strong);
	}

	#[test]
	fn require_surfaces_violations_as_error() {
		let error = PasswordPolicy::new()
			.require("short")
			.expect_err("Non-compliant password should be rejected.");

		match error {
			Error::ValidationFailed { violations } => assert!(!violations.is_empty()),
			other => panic!("unexpected error variant: {other:?}"),
		}
	}

	#[test]
	fn messages_render_in_rule_order() {
		let report = PasswordPolicy::new().evaluate("weak");
		let messages = report.messages();

		assert_eq!(messages[0], "Password must be at least 8 characters long.");
		assert_eq!(messages[1], "Password must contain at least one digit.");
	}
}
