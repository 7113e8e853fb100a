//! Run-scoped mailbox session handle.

// self
use crate::auth::secret::TokenSecret;

/// Bearer token for one mailbox session.
///
/// A session lives for exactly one refresh run and is dropped when the run
/// ends. It is deliberately not serializable, so it can never land in a store
/// next to the credential record.
#[derive(Clone, Debug)]
pub struct MailboxSession(TokenSecret);
impl MailboxSession {
	/// Wraps the bearer value returned by the mailbox token endpoint.
	pub fn new(token: impl Into<String>) -> Self {
		Self(TokenSecret::new(token))
	}

	/// Returns the bearer value for the `Authorization` header.
	pub fn bearer(&self) -> &str {
		self.0.expose()
	}
}
