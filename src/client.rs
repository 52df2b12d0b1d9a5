//! The shared API client.

// self
use crate::{
	_prelude::*,
	auth::AuthProvider,
	config::ClientConfig,
	http::{ApiResponse, RequestContext, Transport},
	interceptor::Pipeline,
	obs::{self, RequestOutcome, RequestSpan},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestTransport;

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestHttpClient = HttpClient<ReqwestTransport>;

/// Issues API requests through the interceptor pipeline.
///
/// Each [`send`](Self::send) merges the configured default headers into the request, runs every
/// request stage (the auth decorator awaits one token fetch), hands the result to the transport,
/// then shows the outcome to every response stage before returning it unchanged. Calls share
/// nothing mutable, so one client can serve any number of concurrent requests.
pub struct HttpClient<T>
where
	T: ?Sized + Transport,
{
	config: Arc<ClientConfig>,
	transport: Arc<T>,
	pipeline: Pipeline,
}
impl<T> HttpClient<T>
where
	T: ?Sized + Transport,
{
	/// Creates a client over a caller-provided transport and pipeline.
	pub fn with_transport(
		config: ClientConfig,
		transport: impl Into<Arc<T>>,
		pipeline: Pipeline,
	) -> Self {
		Self { config: Arc::new(config), transport: transport.into(), pipeline }
	}

	/// Configuration this client was built with.
	pub fn config(&self) -> &ClientConfig {
		&self.config
	}

	/// Interceptor pipeline this client runs.
	pub fn pipeline(&self) -> &Pipeline {
		&self.pipeline
	}

	/// Sends `request` through the pipeline and transport.
	///
	/// Non-2xx responses surface as [`Error::ServerResponse`] and failures without a response as
	/// [`Error::Transport`]; both are logged by the response stages first. Auth failures never
	/// surface here. The JSON verbs also hand body-encoding failures to the response stages.
	pub async fn send(&self, mut request: RequestContext) -> Result<ApiResponse> {
		let span = RequestSpan::new(&request);

		span.instrument(async move {
			request.merge_defaults(self.config.default_headers());

			let request = self.pipeline.run_request(request).await;
			let outcome = self.transport.execute(&self.config, request).await;

			self.settle(outcome)
		})
		.await
	}

	/// Issues a `GET` request.
	pub async fn get(&self, url: impl Into<String>) -> Result<ApiResponse> {
		self.send(RequestContext::get(url)).await
	}

	/// Issues a `DELETE` request.
	pub async fn delete(&self, url: impl Into<String>) -> Result<ApiResponse> {
		self.send(RequestContext::delete(url)).await
	}

	/// Issues a `POST` request with a JSON body.
	pub async fn post_json<B>(&self, url: impl Into<String>, body: &B) -> Result<ApiResponse>
	where
		B: ?Sized + Serialize,
	{
		match RequestContext::post(url).with_json(body) {
			Ok(request) => self.send(request).await,
			Err(e) => self.settle(Err(e)),
		}
	}

	/// Issues a `PUT` request with a JSON body.
	pub async fn put_json<B>(&self, url: impl Into<String>, body: &B) -> Result<ApiResponse>
	where
		B: ?Sized + Serialize,
	{
		match RequestContext::put(url).with_json(body) {
			Ok(request) => self.send(request).await,
			Err(e) => self.settle(Err(e)),
		}
	}

	/// Records `outcome` and shows it to the response stages.
	fn settle(&self, outcome: Result<ApiResponse>) -> Result<ApiResponse> {
		obs::record_request_outcome(RequestOutcome::of(&outcome));

		self.pipeline.run_response(outcome)
	}
}
impl<T> Clone for HttpClient<T>
where
	T: ?Sized + Transport,
{
	fn clone(&self) -> Self {
		Self {
			config: Arc::clone(&self.config),
			transport: Arc::clone(&self.transport),
			pipeline: self.pipeline.clone(),
		}
	}
}
#[cfg(feature = "reqwest")]
impl HttpClient<ReqwestTransport> {
	/// Creates the standard client: reqwest transport, auth decorator, and error logger writing
	/// to `tracing`.
	pub fn new(config: ClientConfig, provider: impl 'static + AuthProvider) -> Result<Self> {
		let transport = ReqwestTransport::new(&config)?;

		Ok(Self::with_transport(config, transport, Pipeline::traced(provider)))
	}
}
impl<T> Debug for HttpClient<T>
where
	T: ?Sized + Transport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("HttpClient")
			.field("config", &self.config)
			.field("pipeline", &self.pipeline)
			.finish()
	}
}
