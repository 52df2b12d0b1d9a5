//! Identity token wrapper that redacts sensitive material.

// self
use crate::_prelude::*;

/// Short-lived identity token issued by the auth provider, kept out of logs.
#[derive(Clone, PartialEq, Eq)]
pub struct IdToken(String);
impl IdToken {
	/// Wraps a new token string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the raw token. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}

	/// Renders the `Authorization` header value for this token.
	pub fn bearer_header(&self) -> Result<HeaderValue, ::http::header::InvalidHeaderValue> {
		let mut value = HeaderValue::from_str(&format!("Bearer {}", self.0))?;

		value.set_sensitive(true);

		Ok(value)
	}
}
impl AsRef<str> for IdToken {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl From<String> for IdToken {
	fn from(value: String) -> Self {
		Self(value)
	}
}
impl From<&str> for IdToken {
	fn from(value: &str) -> Self {
		Self(value.to_owned())
	}
}
impl Debug for IdToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("IdToken").field(&"<redacted>").finish()
	}
}
impl Display for IdToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}
