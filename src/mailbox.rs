//! Transient-mailbox client: session auth and message listing.

// self
use crate::{
	_prelude::*,
	auth::MailboxSession,
	error::TransportError,
	http::{self, ReqwestHttpClient},
	provider::MailboxDescriptor,
};

/// Minimal view of a mailbox message.
///
/// The provider returns more fields than this; only the ones the broker
/// consults are kept, and each of them defaults when absent so a sparse
/// payload never fails the run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageSummary {
	/// Provider-assigned message identifier.
	#[serde(default)]
	pub id: String,
	/// Message subject line.
	#[serde(default)]
	pub subject: String,
	/// Short plain-text preview of the message body.
	#[serde(default)]
	pub intro: String,
}

#[derive(Serialize)]
struct SessionRequest<'a> {
	address: &'a str,
	password: &'a str,
}

#[derive(Deserialize)]
struct SessionResponse {
	token: String,
}

#[derive(Deserialize)]
struct MessagePage {
	#[serde(default, rename = "hydra:member")]
	members: Vec<MessageSummary>,
}

/// REST client for the transient mailbox provider.
#[derive(Clone)]
pub struct MailboxClient {
	http_client: ReqwestHttpClient,
	descriptor: MailboxDescriptor,
}
impl MailboxClient {
	/// Creates a client with its own default transport.
	pub fn new(descriptor: MailboxDescriptor) -> Self {
		Self::with_http_client(descriptor, ReqwestHttpClient::default())
	}

	/// Creates a client that reuses the caller-provided transport.
	pub fn with_http_client(descriptor: MailboxDescriptor, http_client: ReqwestHttpClient) -> Self {
		Self { http_client, descriptor }
	}

	/// Returns the descriptor this client was built from.
	pub fn descriptor(&self) -> &MailboxDescriptor {
		&self.descriptor
	}

	/// Exchanges the mailbox credentials for a run-scoped bearer session.
	pub async fn authenticate(&self) -> Result<MailboxSession> {
		let endpoint = self.descriptor.token_endpoint()?;
		let body = SessionRequest {
			address: &self.descriptor.address,
			password: self.descriptor.password.expose(),
		};
		let response = self
			.http_client
			.post(endpoint)
			.json(&body)
			.send()
			.await
			.map_err(TransportError::from)?;
		let status = response.status();

		if !status.is_success() {
			return Err(Error::Authentication { status: status.as_u16() });
		}

		let session = http::read_json::<SessionResponse>(response, "mailbox token").await?;

		Ok(MailboxSession::new(session.token))
	}

	/// Lists mailbox messages, newest first per provider convention.
	///
	/// An empty listing is a normal result here; callers decide whether that
	/// counts as a failure for their run.
	pub async fn list_messages(&self, session: &MailboxSession) -> Result<Vec<MessageSummary>> {
		let endpoint = self.descriptor.messages_endpoint()?;
		let response = self
			.http_client
			.get(endpoint)
			.bearer_auth(session.bearer())
			.send()
			.await
			.map_err(TransportError::from)?;
		let status = response.status();

		if !status.is_success() {
			return Err(Error::Fetch { status: status.as_u16() });
		}

		let page = http::read_json::<MessagePage>(response, "mailbox messages").await?;

		Ok(page.members)
	}
}
impl Debug for MailboxClient {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("MailboxClient").field("descriptor", &self.descriptor).finish()
	}
}
