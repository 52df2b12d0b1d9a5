// self
use crate::{
	_prelude::*,
	auth::{AuthFetchError, AuthProvider},
	http::RequestContext,
	interceptor::{RequestStage, StageFuture},
	obs::{self, AuthOutcome, LogKind, LogLine, LogSink},
};

/// Attaches `Authorization: Bearer <token>` for the signed-in user.
///
/// A fresh token is requested from the session on every call. When no session exists the request
/// is forwarded untouched; when the token cannot be fetched or encoded the failure is logged and
/// the original request is forwarded without credentials.
pub struct AuthDecorator {
	provider: Box<dyn AuthProvider>,
	sink: Arc<dyn LogSink>,
}
impl AuthDecorator {
	/// Stage name reported by [`RequestStage::name`].
	pub const NAME: &'static str = "auth_decorator";

	/// Creates a decorator reading sessions from `provider` and logging to `sink`.
	pub fn new(provider: impl 'static + AuthProvider, sink: Arc<dyn LogSink>) -> Self {
		Self { provider: Box::new(provider), sink }
	}

	/// Decorates `request`, falling back to the untouched request on any failure.
	pub async fn decorate(&self, mut request: RequestContext) -> RequestContext {
		let Some(session) = self.provider.current_session() else {
			obs::record_auth_outcome(AuthOutcome::Anonymous);

			return request;
		};
		let header = match session.id_token().await {
			Ok(token) => token.bearer_header().map_err(|source| AuthFetchError::InvalidToken { source }),
			Err(e) => Err(e),
		};

		match header {
			Ok(value) => {
				request.headers.insert(AUTHORIZATION, value);
				obs::record_auth_outcome(AuthOutcome::Attached);
			},
			Err(e) => {
				let err = Error::from(e);

				self.sink.log(LogLine::new(
					LogKind::AuthTokenFailure,
					format!("Error setting auth token: {}", obs::error_chain(&err)),
				));
				obs::record_auth_outcome(AuthOutcome::Failed);
			},
		}

		request
	}
}
impl RequestStage for AuthDecorator {
	fn name(&self) -> &'static str {
		Self::NAME
	}

	fn on_request(&self, request: RequestContext) -> StageFuture<'_> {
		Box::pin(self.decorate(request))
	}
}
impl Debug for AuthDecorator {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AuthDecorator").finish_non_exhaustive()
	}
}
