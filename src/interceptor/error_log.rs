// self
use crate::{
	_prelude::*,
	http::ApiResponse,
	interceptor::ResponseStage,
	obs::{self, LogKind, LogLine, LogSink},
};

/// Logs every failed request, adding a network line when no response was received.
///
/// "No response" covers transport failures as well as local failures that stopped the request
/// before it was sent (bad URL, unencodable body): in both cases the server never answered.
#[derive(Clone)]
pub struct ErrorLogger {
	sink: Arc<dyn LogSink>,
}
impl ErrorLogger {
	/// Stage name reported by [`ResponseStage::name`].
	pub const NAME: &'static str = "error_logger";
	/// Extra line emitted when the request never received a response.
	pub const NETWORK_MESSAGE: &'static str = "Network error or API server not responding";

	/// Creates a logger writing to `sink`.
	pub fn new(sink: Arc<dyn LogSink>) -> Self {
		Self { sink }
	}

	/// Logs `err`.
	pub fn observe(&self, err: &Error) {
		let message = format!("API Error: {}", obs::error_chain(err));

		self.sink.log(LogLine::new(LogKind::ApiError, message));

		if err.response().is_none() {
			self.sink.log(LogLine::new(LogKind::NetworkError, Self::NETWORK_MESSAGE));
		}
	}
}
impl ResponseStage for ErrorLogger {
	fn name(&self) -> &'static str {
		Self::NAME
	}

	fn on_response(&self, outcome: &Result<ApiResponse>) {
		if let Err(e) = outcome {
			self.observe(e);
		}
	}
}
impl Debug for ErrorLogger {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ErrorLogger").finish_non_exhaustive()
	}
}
