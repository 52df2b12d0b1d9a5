//! Contracts for the external auth provider that owns the signed-in session.

// self
use crate::{_prelude::*, auth::IdToken, error::BoxError};

/// Boxed future returned by [`AuthSession::id_token`].
pub type IdTokenFuture<'a> =
	Pin<Box<dyn Future<Output = Result<IdToken, AuthFetchError>> + 'a + Send>>;

/// Signed-in user session exposed by the auth provider.
///
/// Every call to [`id_token`](Self::id_token) is expected to hand back a currently valid token;
/// the client never caches the result across requests.
pub trait AuthSession
where
	Self: Send + Sync,
{
	/// Fetches a fresh identity token for this session.
	fn id_token(&self) -> IdTokenFuture<'_>;
}

/// Source of the current session, if any user is signed in.
pub trait AuthProvider
where
	Self: Send + Sync,
{
	/// Returns the active session without blocking.
	fn current_session(&self) -> Option<Arc<dyn AuthSession>>;
}
impl<P> AuthProvider for Arc<P>
where
	P: ?Sized + AuthProvider,
{
	fn current_session(&self) -> Option<Arc<dyn AuthSession>> {
		(**self).current_session()
	}
}

/// Failure raised while obtaining an identity token.
#[derive(Debug, ThisError)]
pub enum AuthFetchError {
	/// The provider reported an error (network, revoked session, SDK failure).
	#[error("Auth provider failed to issue an identity token.")]
	Provider {
		/// Provider-specific failure.
		#[source]
		source: BoxError,
	},
	/// The provider returned a token that cannot be sent as an HTTP header.
	#[error("Identity token cannot be encoded as an Authorization header.")]
	InvalidToken {
		/// Underlying header validation failure.
		#[source]
		source: ::http::header::InvalidHeaderValue,
	},
}
impl AuthFetchError {
	/// Wraps a provider-specific failure.
	pub fn provider(src: impl 'static + Send + Sync + StdError) -> Self {
		Self::Provider { source: Box::new(src) }
	}
}
