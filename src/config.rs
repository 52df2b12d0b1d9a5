//! Immutable client configuration: base URL, request timeout, and default headers.

// self
use crate::{_prelude::*, error::ConfigError};

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Settings shared by every request issued through one [`HttpClient`](crate::HttpClient).
///
/// Values are fixed once built; use [`ClientConfig::builder`] to change any of them.
#[derive(Clone, Debug)]
pub struct ClientConfig {
	base_url: Url,
	timeout: Duration,
	default_headers: HeaderMap,
}
impl ClientConfig {
	/// Starts a builder seeded with the defaults.
	pub fn builder() -> ClientConfigBuilder {
		ClientConfigBuilder::default()
	}

	/// Base URL that relative request paths are appended to.
	pub fn base_url(&self) -> &Url {
		&self.base_url
	}

	/// Timeout applied to requests that do not carry their own.
	pub fn timeout(&self) -> Duration {
		self.timeout
	}

	/// Headers merged into every request before any interceptor runs.
	pub fn default_headers(&self) -> &HeaderMap {
		&self.default_headers
	}

	/// Resolves a request URL against the base URL.
	///
	/// Absolute URLs (`scheme://…`) pass through untouched. Anything else, including paths whose
	/// first segment contains a colon, is relative. Relative paths are appended to the base path
	/// with exactly one `/` between them, so a base of `http://host/api` and a path of `/products`
	/// yields `http://host/api/products`.
	pub fn resolve(&self, url: &str) -> Result<Url, ConfigError> {
		if let Ok(absolute) = Url::parse(url) {
			let has_authority = url
				.get(absolute.scheme().len()..)
				.is_some_and(|rest| rest.starts_with("://"));

			if has_authority {
				return Ok(absolute);
			}
		}
		if url.is_empty() {
			return Ok(self.base_url.clone());
		}

		let joined =
			format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), url.trim_start_matches('/'));

		Url::parse(&joined)
			.map_err(|source| ConfigError::InvalidRequestUrl { url: url.to_owned(), source })
	}
}
impl Default for ClientConfig {
	fn default() -> Self {
		let mut default_headers = HeaderMap::new();

		default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

		Self {
			base_url: Url::parse(DEFAULT_BASE_URL).expect("Default base URL must be valid."),
			timeout: DEFAULT_TIMEOUT,
			default_headers,
		}
	}
}

/// Builder for [`ClientConfig`]; validation happens in [`build`](Self::build).
#[derive(Clone, Debug)]
pub struct ClientConfigBuilder {
	base_url: String,
	timeout: Duration,
	default_headers: Vec<(String, String)>,
}
impl ClientConfigBuilder {
	/// Overrides the base URL (defaults to `http://localhost:8000`).
	pub fn base_url(mut self, url: impl Into<String>) -> Self {
		self.base_url = url.into();

		self
	}

	/// Overrides the request timeout (defaults to 10 seconds).
	pub fn timeout(mut self, timeout: Duration) -> Self {
		self.timeout = timeout;

		self
	}

	/// Adds or replaces a default header.
	pub fn default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		let name = name.into();

		self.default_headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(&name));
		self.default_headers.push((name, value.into()));

		self
	}

	/// Drops every default header, including the JSON content type.
	pub fn clear_default_headers(mut self) -> Self {
		self.default_headers.clear();

		self
	}

	/// Validates the inputs and freezes them into a [`ClientConfig`].
	pub fn build(self) -> Result<ClientConfig, ConfigError> {
		let base_url = Url::parse(&self.base_url).map_err(|source| {
			ConfigError::InvalidBaseUrl { url: self.base_url.clone(), source: Some(source) }
		})?;

		if base_url.cannot_be_a_base() {
			return Err(ConfigError::InvalidBaseUrl { url: self.base_url, source: None });
		}

		let mut default_headers = HeaderMap::with_capacity(self.default_headers.len());

		for (name, value) in self.default_headers {
			let header_name = HeaderName::from_bytes(name.as_bytes())
				.map_err(|source| ConfigError::InvalidHeaderName { name: name.clone(), source })?;
			let header_value = HeaderValue::from_str(&value)
				.map_err(|source| ConfigError::InvalidHeaderValue { name, source })?;

			default_headers.insert(header_name, header_value);
		}

		Ok(ClientConfig { base_url, timeout: self.timeout, default_headers })
	}
}
impl Default for ClientConfigBuilder {
	fn default() -> Self {
		Self {
			base_url: DEFAULT_BASE_URL.into(),
			timeout: DEFAULT_TIMEOUT,
			default_headers: vec![(CONTENT_TYPE.as_str().into(), "application/json".into())],
		}
	}
}
