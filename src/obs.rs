//! Observability helpers: log sinks, request spans, and optional counters.
//!
//! # Feature Flags
//!
//! - Spans named `api_client.request` carrying `method` and `url` fields wrap every
//!   [`HttpClient::send`](crate::HttpClient::send) call.
//! - Enable `metrics` to increment `api_client_request_total` (labeled by `outcome`) for every
//!   settled request and `api_client_auth_total` (labeled by `outcome`) for every auth
//!   decoration.

mod metrics;
mod sink;
mod span;

pub use self::metrics::*;
pub use self::sink::*;
pub use self::span::*;

// self
use crate::_prelude::*;

/// How a request settled, as seen by response interceptors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestOutcome {
	/// 2xx response.
	Success,
	/// Server answered with a non-success status.
	ServerError,
	/// No response was received.
	TransportError,
	/// Request failed locally before or after the transport (config, encode, decode).
	ClientError,
}
impl RequestOutcome {
	/// Classifies a settled request.
	pub fn of(outcome: &Result<crate::http::ApiResponse>) -> Self {
		match outcome {
			Ok(_) => Self::Success,
			Err(Error::ServerResponse { .. }) => Self::ServerError,
			Err(Error::Transport(_)) => Self::TransportError,
			Err(_) => Self::ClientError,
		}
	}

	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			RequestOutcome::Success => "success",
			RequestOutcome::ServerError => "server_error",
			RequestOutcome::TransportError => "transport_error",
			RequestOutcome::ClientError => "client_error",
		}
	}
}
impl Display for RequestOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// What the auth decorator did to a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AuthOutcome {
	/// A bearer token was attached.
	Attached,
	/// No session existed; the request went out unauthenticated.
	Anonymous,
	/// Token fetch failed; the request went out unauthenticated.
	Failed,
}
impl AuthOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			AuthOutcome::Attached => "attached",
			AuthOutcome::Anonymous => "anonymous",
			AuthOutcome::Failed => "failed",
		}
	}
}
impl Display for AuthOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
