//! In-process auth provider and fixed-token session.

// self
use crate::{
	_prelude::*,
	auth::{AuthProvider, AuthSession, IdToken, IdTokenFuture},
};

/// Auth provider whose session is swapped at runtime by sign-in and sign-out calls.
///
/// Clones share the same session slot, so a handle kept by the UI layer and the one given to
/// [`HttpClient`](crate::HttpClient) always agree on who is signed in.
#[derive(Clone, Default)]
pub struct MemoryAuthProvider {
	session: Arc<RwLock<Option<Arc<dyn AuthSession>>>>,
}
impl MemoryAuthProvider {
	/// Creates a provider with a signed-in session.
	pub fn signed_in(session: impl 'static + AuthSession) -> Self {
		let provider = Self::default();

		provider.sign_in(session);

		provider
	}

	/// Replaces the current session.
	pub fn sign_in(&self, session: impl 'static + AuthSession) {
		*self.session.write() = Some(Arc::new(session));
	}

	/// Clears the current session.
	pub fn sign_out(&self) {
		*self.session.write() = None;
	}

	/// Returns `true` while a session is present.
	pub fn is_signed_in(&self) -> bool {
		self.session.read().is_some()
	}
}
impl AuthProvider for MemoryAuthProvider {
	fn current_session(&self) -> Option<Arc<dyn AuthSession>> {
		self.session.read().clone()
	}
}
impl Debug for MemoryAuthProvider {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("MemoryAuthProvider").field("signed_in", &self.is_signed_in()).finish()
	}
}

/// Session that always yields the same token.
#[derive(Clone, Debug)]
pub struct StaticSession(IdToken);
impl StaticSession {
	/// Creates a session around a fixed token.
	pub fn new(token: impl Into<IdToken>) -> Self {
		Self(token.into())
	}
}
impl AuthSession for StaticSession {
	fn id_token(&self) -> IdTokenFuture<'_> {
		let token = self.0.clone();

		Box::pin(async move { Ok(token) })
	}
}
