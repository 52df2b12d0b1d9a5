//! Buffered HTTP response returned to callers.

// std
use std::borrow::Cow;
// self
use crate::_prelude::*;

/// Fully buffered response: status, headers, and body bytes exactly as received.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
	/// HTTP status.
	pub status: StatusCode,
	/// Response headers.
	pub headers: HeaderMap,
	/// Raw body bytes.
	pub body: Vec<u8>,
}
impl ApiResponse {
	/// Assembles a response from its parts.
	pub fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
		Self { status, headers, body }
	}

	/// Returns `true` for 2xx statuses.
	pub fn is_success(&self) -> bool {
		self.status.is_success()
	}

	/// Body as text, replacing invalid UTF-8.
	pub fn text(&self) -> Cow<'_, str> {
		String::from_utf8_lossy(&self.body)
	}

	/// Deserializes the body as JSON, reporting the failing field path on error.
	pub fn json<T>(&self) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let mut de = serde_json::Deserializer::from_slice(&self.body);

		serde_path_to_error::deserialize(&mut de)
			.map_err(|source| Error::Decode { source, status: self.status })
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde::Deserialize;
	// self
	use super::*;

	#[derive(Debug, Deserialize)]
	struct Product {
		#[allow(dead_code)]
		name: String,
		#[allow(dead_code)]
		price: f64,
	}

	#[test]
	fn json_decode_reports_field_path() {
		let response = ApiResponse::new(
			StatusCode::OK,
			HeaderMap::new(),
			br#"{"name":"Lamp","price":"free"}"#.to_vec(),
		);
		let err = response.json::<Product>().expect_err("String price should not decode.");

		match err {
			Error::Decode { source, status } => {
				assert_eq!(source.path().to_string(), "price");
				assert_eq!(status, StatusCode::OK);
			},
			other => panic!("Unexpected error variant: {other:?}."),
		}
	}

	#[test]
	fn text_is_lossy() {
		let response = ApiResponse::new(StatusCode::OK, HeaderMap::new(), b"ok \xff".to_vec());

		assert_eq!(response.text(), "ok \u{fffd}");
	}
}
