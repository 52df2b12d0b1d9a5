//! Mutable per-call request description handed through the pipeline.

// self
use crate::_prelude::*;

/// Everything needed to issue one request.
///
/// `url` may be absolute or a path relative to the configured base URL. Interceptors receive the
/// context by value and hand it back, so they may rewrite any field; the built-in auth
/// decorator only touches the `Authorization` header.
#[derive(Clone, Debug)]
pub struct RequestContext {
	/// HTTP method.
	pub method: Method,
	/// Absolute URL or path relative to the base URL.
	pub url: String,
	/// Query pairs appended to the resolved URL.
	pub query: Vec<(String, String)>,
	/// Request headers; defaults from the config are merged in before interceptors run.
	pub headers: HeaderMap,
	/// Raw request body.
	pub body: Option<Vec<u8>>,
	/// Per-request timeout overriding the configured one.
	pub timeout: Option<Duration>,
}
impl RequestContext {
	/// Creates a body-less request.
	pub fn new(method: Method, url: impl Into<String>) -> Self {
		Self {
			method,
			url: url.into(),
			query: Vec::new(),
			headers: HeaderMap::new(),
			body: None,
			timeout: None,
		}
	}

	/// Shorthand for a `GET` request.
	pub fn get(url: impl Into<String>) -> Self {
		Self::new(Method::GET, url)
	}

	/// Shorthand for a `POST` request.
	pub fn post(url: impl Into<String>) -> Self {
		Self::new(Method::POST, url)
	}

	/// Shorthand for a `PUT` request.
	pub fn put(url: impl Into<String>) -> Self {
		Self::new(Method::PUT, url)
	}

	/// Shorthand for a `DELETE` request.
	pub fn delete(url: impl Into<String>) -> Self {
		Self::new(Method::DELETE, url)
	}

	/// Adds a query pair.
	pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.query.push((key.into(), value.into()));

		self
	}

	/// Sets or replaces a header.
	pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
		self.headers.insert(name, value);

		self
	}

	/// Sets a raw body.
	pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
		self.body = Some(body.into());

		self
	}

	/// Serializes `value` as the JSON body and marks the content type.
	pub fn with_json<T>(mut self, value: &T) -> Result<Self>
	where
		T: ?Sized + Serialize,
	{
		let body = serde_json::to_vec(value).map_err(|source| Error::Encode { source })?;

		self.headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
		self.body = Some(body);

		Ok(self)
	}

	/// Overrides the configured timeout for this request only.
	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = Some(timeout);

		self
	}

	/// Fills in every default header the request does not already set.
	pub fn merge_defaults(&mut self, defaults: &HeaderMap) {
		for (name, value) in defaults {
			if !self.headers.contains_key(name) {
				self.headers.insert(name.clone(), value.clone());
			}
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn request_headers_win_over_defaults() {
		let mut defaults = HeaderMap::new();

		defaults.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
		defaults.insert("x-client", HeaderValue::from_static("web"));

		let mut request = RequestContext::post("/products/")
			.with_header(CONTENT_TYPE, HeaderValue::from_static("multipart/form-data"));

		request.merge_defaults(&defaults);

		assert_eq!(
			request.headers.get(CONTENT_TYPE),
			Some(&HeaderValue::from_static("multipart/form-data")),
		);
		assert_eq!(request.headers.get("x-client"), Some(&HeaderValue::from_static("web")));
	}

	#[test]
	fn json_body_sets_content_type() {
		let request = RequestContext::post("/orders/")
			.with_json(&serde_json::json!({ "items": [{ "product_id": "p-1", "quantity": 2 }] }))
			.expect("JSON literal should serialize.");

		assert_eq!(request.method, Method::POST);
		assert_eq!(
			request.headers.get(CONTENT_TYPE),
			Some(&HeaderValue::from_static("application/json")),
		);
		assert_eq!(
			request.body.as_deref(),
			Some(&br#"{"items":[{"product_id":"p-1","quantity":2}]}"#[..]),
		);
	}
}
