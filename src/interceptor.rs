//! Ordered interceptor pipeline wrapped around every request.
//!
//! Request stages run in registration order before the transport and may rewrite the
//! [`RequestContext`]; they cannot abort the call. Response stages run in registration order
//! after the transport settles and only observe the outcome: they borrow it immutably, so the
//! caller always receives exactly what the transport produced.

mod auth;
mod error_log;

pub use self::{auth::*, error_log::*};

// self
use crate::{
	_prelude::*,
	auth::AuthProvider,
	http::{ApiResponse, RequestContext},
	obs::{LogSink, TracingSink},
};

/// Boxed future returned by [`RequestStage::on_request`].
pub type StageFuture<'a> = Pin<Box<dyn Future<Output = RequestContext> + 'a + Send>>;

/// Hook invoked before the transport sees a request.
pub trait RequestStage
where
	Self: Send + Sync,
{
	/// Stable stage name used in logs and tests.
	fn name(&self) -> &'static str;

	/// Returns the (possibly rewritten) request.
	fn on_request(&self, request: RequestContext) -> StageFuture<'_>;
}

/// Hook invoked after the transport settles, before the caller sees the outcome.
pub trait ResponseStage
where
	Self: Send + Sync,
{
	/// Stable stage name used in logs and tests.
	fn name(&self) -> &'static str;

	/// Observes the outcome.
	fn on_response(&self, outcome: &Result<ApiResponse>);
}

/// Request and response stages in the order they run.
#[derive(Clone, Default)]
pub struct Pipeline {
	request_stages: Vec<Arc<dyn RequestStage>>,
	response_stages: Vec<Arc<dyn ResponseStage>>,
}
impl Pipeline {
	/// Builds the standard pipeline: [`AuthDecorator`] then [`ErrorLogger`], sharing `sink`.
	pub fn standard(provider: impl 'static + AuthProvider, sink: Arc<dyn LogSink>) -> Self {
		Self::default()
			.with_request_stage(AuthDecorator::new(provider, sink.clone()))
			.with_response_stage(ErrorLogger::new(sink))
	}

	/// Standard pipeline logging through `tracing`.
	pub fn traced(provider: impl 'static + AuthProvider) -> Self {
		Self::standard(provider, Arc::new(TracingSink))
	}

	/// Appends a request stage.
	pub fn with_request_stage(mut self, stage: impl 'static + RequestStage) -> Self {
		self.request_stages.push(Arc::new(stage));

		self
	}

	/// Appends a response stage.
	pub fn with_response_stage(mut self, stage: impl 'static + ResponseStage) -> Self {
		self.response_stages.push(Arc::new(stage));

		self
	}

	/// Names of the request stages in run order.
	pub fn request_stage_names(&self) -> Vec<&'static str> {
		self.request_stages.iter().map(|stage| stage.name()).collect()
	}

	/// Names of the response stages in run order.
	pub fn response_stage_names(&self) -> Vec<&'static str> {
		self.response_stages.iter().map(|stage| stage.name()).collect()
	}

	/// Threads `request` through every request stage.
	pub async fn run_request(&self, mut request: RequestContext) -> RequestContext {
		for stage in &self.request_stages {
			request = stage.on_request(request).await;
		}

		request
	}

	/// Shows `outcome` to every response stage and hands it back untouched.
	pub fn run_response(&self, outcome: Result<ApiResponse>) -> Result<ApiResponse> {
		for stage in &self.response_stages {
			stage.on_response(&outcome);
		}

		outcome
	}
}
impl Debug for Pipeline {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Pipeline")
			.field("request_stages", &self.request_stage_names())
			.field("response_stages", &self.response_stage_names())
			.finish()
	}
}
