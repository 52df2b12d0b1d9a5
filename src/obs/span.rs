// crates.io
use tracing::{Instrument, Span, instrument::Instrumented};
// self
use crate::{_prelude::*, http::RequestContext};

/// Span wrapping one pass through the client pipeline.
#[derive(Clone, Debug)]
pub struct RequestSpan {
	span: Span,
}
impl RequestSpan {
	/// Creates a new span tagged with the request's method and URL.
	pub fn new(request: &RequestContext) -> Self {
		let span = tracing::info_span!(
			"api_client.request",
			method = %request.method,
			url = %request.url
		);

		Self { span }
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> Instrumented<Fut>
	where
		Fut: Future,
	{
		fut.instrument(self.span.clone())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::RequestSpan;
	use crate::http::RequestContext;

	#[tokio::test]
	async fn instrument_wraps_future() {
		let span = RequestSpan::new(&RequestContext::get("/products/"));
		let value = span.instrument(async { 42 }).await;

		assert_eq!(value, 42);
	}
}
