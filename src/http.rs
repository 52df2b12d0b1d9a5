//! Transport primitives for API calls.
//!
//! [`Transport`] is the client's only dependency on an HTTP stack. It receives a request that
//! has already passed through every request interceptor and must resolve to either a 2xx
//! [`ApiResponse`] or an [`Error`]: non-success statuses become [`Error::ServerResponse`] with
//! the response attached, while failures below HTTP become [`Error::Transport`] so response
//! interceptors can tell the two apart.

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// self
use crate::{_prelude::*, config::ClientConfig};
#[cfg(feature = "reqwest")] use crate::error::{ConfigError, TransportError};

/// Boxed future returned by [`Transport::execute`].
pub type TransportFuture<'a> = Pin<Box<dyn Future<Output = Result<ApiResponse>> + 'a + Send>>;

/// HTTP stack able to execute a fully decorated [`RequestContext`].
///
/// Implementations resolve `request.url` with [`ClientConfig::resolve`] and apply
/// `request.timeout`, falling back to [`ClientConfig::timeout`].
pub trait Transport
where
	Self: 'static + Send + Sync,
{
	/// Performs the request.
	fn execute<'a>(
		&'a self,
		config: &'a ClientConfig,
		request: RequestContext,
	) -> TransportFuture<'a>;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestTransport {
	/// Builds a reqwest client whose overall timeout matches `config`.
	pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
		let client = ReqwestClient::builder().timeout(config.timeout()).build()?;

		Ok(Self(client))
	}

	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestTransport {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestTransport {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Transport for ReqwestTransport {
	fn execute<'a>(
		&'a self,
		config: &'a ClientConfig,
		request: RequestContext,
	) -> TransportFuture<'a> {
		Box::pin(async move {
			let url = config.resolve(&request.url)?;
			let mut builder = self
				.0
				.request(request.method, url)
				.headers(request.headers)
				.timeout(request.timeout.unwrap_or_else(|| config.timeout()));

			if !request.query.is_empty() {
				builder = builder.query(&request.query);
			}
			if let Some(body) = request.body {
				builder = builder.body(body);
			}

			let response = builder.send().await.map_err(TransportError::from)?;
			let status = response.status();
			let headers = response.headers().to_owned();
			let body = response.bytes().await.map_err(TransportError::from)?.to_vec();
			let response = ApiResponse::new(status, headers, body);

			if status.is_success() { Ok(response) } else { Err(Error::server_response(response)) }
		})
	}
}
