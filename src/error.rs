//! Client-level error types shared by the transport, the pipeline, and callers.

// self
use crate::{_prelude::*, auth::AuthFetchError, http::ApiResponse};

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

pub(crate) type BoxError = Box<dyn StdError + Send + Sync>;

/// Canonical error surfaced by [`HttpClient::send`](crate::HttpClient::send).
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem (bad URL, header, or transport builder).
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// The request never produced an HTTP response (timeout, refused connection, DNS).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// The server answered with a non-success status.
	#[error("Server responded with status {}.", .response.status)]
	ServerResponse {
		/// Response returned by the server, body included.
		response: ApiResponse,
	},
	/// The auth provider could not produce an identity token.
	#[error(transparent)]
	AuthFetch(#[from] AuthFetchError),

	/// Request body could not be serialized as JSON.
	#[error("Request body could not be encoded as JSON.")]
	Encode {
		/// Underlying serializer failure.
		#[source]
		source: serde_json::Error,
	},
	/// Response body could not be deserialized into the requested type.
	#[error("Response body could not be decoded.")]
	Decode {
		/// Structured parsing failure including the offending field path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status of the decoded response.
		status: StatusCode,
	},
}
impl Error {
	/// Wraps a non-success response.
	pub fn server_response(response: ApiResponse) -> Self {
		Self::ServerResponse { response }
	}

	/// Returns the HTTP response attached to this error, if the server produced one.
	pub fn response(&self) -> Option<&ApiResponse> {
		match self {
			Self::ServerResponse { response } => Some(response),
			_ => None,
		}
	}

	/// Returns the HTTP status attached to this error, if any.
	pub fn status(&self) -> Option<StatusCode> {
		match self {
			Self::ServerResponse { response } => Some(response.status),
			Self::Decode { status, .. } => Some(*status),
			_ => None,
		}
	}

	/// Returns `true` when the request failed below HTTP, so no response exists.
	pub fn is_network(&self) -> bool {
		matches!(self, Self::Transport(_))
	}
}

/// Configuration and validation failures raised while building or dispatching requests.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Base URL cannot be parsed or cannot carry paths.
	#[error("Base URL `{url}` is invalid.")]
	InvalidBaseUrl {
		/// Offending input.
		url: String,
		/// Underlying parsing failure, when parsing was the problem.
		#[source]
		source: Option<url::ParseError>,
	},
	/// Request URL cannot be resolved against the base URL.
	#[error("Request URL `{url}` is invalid.")]
	InvalidRequestUrl {
		/// Offending input.
		url: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Header name is not a valid HTTP token.
	#[error("Header name `{name}` is invalid.")]
	InvalidHeaderName {
		/// Offending input.
		name: String,
		/// Underlying validation failure.
		#[source]
		source: ::http::header::InvalidHeaderName,
	},
	/// Header value contains bytes HTTP does not allow.
	#[error("Value for header `{name}` is invalid.")]
	InvalidHeaderValue {
		/// Header the value was meant for.
		name: String,
		/// Underlying validation failure.
		#[source]
		source: ::http::header::InvalidHeaderValue,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + StdError) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures: the server never produced a response.
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// The request exceeded its timeout.
	#[error("Request timed out before the API server responded.")]
	Timeout {
		/// Transport-specific timeout error.
		#[source]
		source: BoxError,
	},
	/// The API server could not be reached.
	#[error("Unable to connect to the API server.")]
	Connect {
		/// Transport-specific connection error.
		#[source]
		source: BoxError,
	},
	/// Any other failure below HTTP (TLS, body streaming, protocol).
	#[error("Network error occurred while calling the API server.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
}
impl TransportError {
	/// Wraps a timeout reported by the transport.
	pub fn timeout(src: impl 'static + Send + Sync + StdError) -> Self {
		Self::Timeout { source: Box::new(src) }
	}

	/// Wraps a connection failure reported by the transport.
	pub fn connect(src: impl 'static + Send + Sync + StdError) -> Self {
		Self::Connect { source: Box::new(src) }
	}

	/// Wraps any other network failure reported by the transport.
	pub fn network(src: impl 'static + Send + Sync + StdError) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		if e.is_timeout() {
			Self::timeout(e)
		} else if e.is_connect() {
			Self::connect(e)
		} else {
			Self::network(e)
		}
	}
}
