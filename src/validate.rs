//! Character-level validation helpers for handler-facing input fields.

/// Returns true when `email` is a plausibly formed address.
///
/// Accepts `local@domain.tld` where the local part uses letters, digits, or
/// `._%+-`, the domain uses letters, digits, dots, or hyphens, and the final
/// label is at least two letters. This is a shape check for early rejection,
/// not RFC 5321 conformance; deliverability is proven by the verification
/// token flow.
pub fn email_format(email: &str) -> bool {
	let Some((local, domain)) = email.split_once('@') else {
		return false;
	};

	if local.is_empty()
		|| !local.chars().all(|c| c.is_ascii_alphanumeric() || "._%+-".contains(c))
	{
		return false;
	}

	let Some((host, tld)) = domain.rsplit_once('.') else {
		return false;
	};

	if host.is_empty() || !host.chars().all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
	{
		return false;
	}

	tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

/// Strips angle brackets, ampersands, and quote characters, then trims
/// surrounding whitespace. A coarse pre-filter for free-text fields headed
/// to the datastore; proper escaping stays the renderer's job.
pub fn sanitize(text: &str) -> String {
	text.chars()
		.filter(|c| !matches!(c, '<' | '>' | '&' | '"' | '\''))
		.collect::<String>()
		.trim()
		.to_owned()
}
