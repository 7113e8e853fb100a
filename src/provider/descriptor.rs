//! Validated collaborator metadata and the builders that assemble it.
//!
//! Descriptors are this crate's configuration layer: base URLs, the account
//! identity on each side, and the signing secret all arrive through the
//! builders below, which reject incomplete setups before any request is made.
//! Both descriptor types (de)serialize cleanly, so deployments can keep them
//! in configuration files.

// self
use crate::{_prelude::*, auth::TokenSecret, error::ConfigError};

/// Default event name sent with OTP dispatch requests.
pub const DEFAULT_DISPATCH_EVENT: &str = "register";

/// Errors raised while constructing or validating descriptors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum DescriptorError {
	/// Mailbox address is required.
	#[error("Missing mailbox address.")]
	MissingAddress,
	/// Mailbox password is required.
	#[error("Missing mailbox password.")]
	MissingPassword,
	/// Platform account email is required.
	#[error("Missing platform account email.")]
	MissingEmail,
	/// Platform client params blob is required.
	#[error("Missing platform client params.")]
	MissingClientParams,
	/// Platform signing secret is required.
	#[error("Missing platform secret key.")]
	MissingSecretKey,
}

/// Immutable transient-mailbox descriptor consumed by
/// [`MailboxClient`](crate::mailbox::MailboxClient).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailboxDescriptor {
	/// REST base URL of the mailbox provider.
	pub base: Url,
	/// Mailbox address used to open sessions.
	pub address: String,
	/// Mailbox password; redacted in debug output.
	pub password: TokenSecret,
}
impl MailboxDescriptor {
	/// Creates a new builder for the provided base URL.
	pub fn builder(base: Url) -> MailboxDescriptorBuilder {
		MailboxDescriptorBuilder::new(base)
	}

	/// Endpoint that exchanges mailbox credentials for a session bearer.
	pub fn token_endpoint(&self) -> Result<Url, ConfigError> {
		join_endpoint(&self.base, "token")
	}

	/// Endpoint that lists mailbox messages, newest first.
	pub fn messages_endpoint(&self) -> Result<Url, ConfigError> {
		join_endpoint(&self.base, "messages")
	}
}

/// Builder for [`MailboxDescriptor`] values.
#[derive(Debug)]
pub struct MailboxDescriptorBuilder {
	/// REST base URL of the mailbox provider.
	pub base: Url,
	/// Mailbox address used to open sessions.
	pub address: Option<String>,
	/// Mailbox password.
	pub password: Option<TokenSecret>,
}
impl MailboxDescriptorBuilder {
	fn new(base: Url) -> Self {
		Self { base, address: None, password: None }
	}

	/// Sets the mailbox address.
	pub fn address(mut self, address: impl Into<String>) -> Self {
		self.address = Some(address.into());

		self
	}

	/// Sets the mailbox password.
	pub fn password(mut self, password: impl Into<String>) -> Self {
		self.password = Some(TokenSecret::new(password));

		self
	}

	/// Consumes the builder and validates the resulting descriptor.
	pub fn build(self) -> Result<MailboxDescriptor, DescriptorError> {
		let address =
			self.address.filter(|a| !a.is_empty()).ok_or(DescriptorError::MissingAddress)?;
		let password = self
			.password
			.filter(|p| !p.expose().is_empty())
			.ok_or(DescriptorError::MissingPassword)?;

		Ok(MailboxDescriptor { base: self.base, address, password })
	}
}

/// Immutable target-platform descriptor consumed by
/// [`PlatformClient`](crate::platform::PlatformClient).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformDescriptor {
	/// REST base URL of the target platform.
	pub base: Url,
	/// Account email the OTP is dispatched to and the login is made for.
	pub email: String,
	/// Opaque client params blob forwarded verbatim with every request.
	pub clientparams: String,
	/// Shared signing secret; redacted in debug output.
	pub secret_key: TokenSecret,
	/// Event name sent with OTP dispatch requests.
	pub dispatch_event: String,
}
impl PlatformDescriptor {
	/// Creates a new builder for the provided base URL.
	pub fn builder(base: Url) -> PlatformDescriptorBuilder {
		PlatformDescriptorBuilder::new(base)
	}

	/// Endpoint that asks the platform to email an OTP code.
	pub fn dispatch_endpoint(&self) -> Result<Url, ConfigError> {
		join_endpoint(&self.base, "ems/send")
	}

	/// Endpoint that performs the signed email login.
	pub fn login_endpoint(&self) -> Result<Url, ConfigError> {
		join_endpoint(&self.base, "email/login")
	}
}

/// Builder for [`PlatformDescriptor`] values.
#[derive(Debug)]
pub struct PlatformDescriptorBuilder {
	/// REST base URL of the target platform.
	pub base: Url,
	/// Account email the OTP is dispatched to.
	pub email: Option<String>,
	/// Opaque client params blob.
	pub clientparams: Option<String>,
	/// Shared signing secret.
	pub secret_key: Option<TokenSecret>,
	/// Event name sent with OTP dispatch requests.
	pub dispatch_event: String,
}
impl PlatformDescriptorBuilder {
	fn new(base: Url) -> Self {
		Self {
			base,
			email: None,
			clientparams: None,
			secret_key: None,
			dispatch_event: DEFAULT_DISPATCH_EVENT.into(),
		}
	}

	/// Sets the account email.
	pub fn email(mut self, email: impl Into<String>) -> Self {
		self.email = Some(email.into());

		self
	}

	/// Sets the opaque client params blob.
	pub fn clientparams(mut self, clientparams: impl Into<String>) -> Self {
		self.clientparams = Some(clientparams.into());

		self
	}

	/// Sets the shared signing secret.
	pub fn secret_key(mut self, secret_key: impl Into<String>) -> Self {
		self.secret_key = Some(TokenSecret::new(secret_key));

		self
	}

	/// Overrides the dispatch event name (defaults to
	/// [`DEFAULT_DISPATCH_EVENT`]).
	pub fn dispatch_event(mut self, event: impl Into<String>) -> Self {
		self.dispatch_event = event.into();

		self
	}

	/// Consumes the builder and validates the resulting descriptor.
	pub fn build(self) -> Result<PlatformDescriptor, DescriptorError> {
		let email = self.email.filter(|e| !e.is_empty()).ok_or(DescriptorError::MissingEmail)?;
		let clientparams = self
			.clientparams
			.filter(|c| !c.is_empty())
			.ok_or(DescriptorError::MissingClientParams)?;
		let secret_key = self
			.secret_key
			.filter(|s| !s.expose().is_empty())
			.ok_or(DescriptorError::MissingSecretKey)?;

		Ok(PlatformDescriptor {
			base: self.base,
			email,
			clientparams,
			secret_key,
			dispatch_event: self.dispatch_event,
		})
	}
}

fn join_endpoint(base: &Url, path: &str) -> Result<Url, ConfigError> {
	Url::parse(&format!("{}/{path}", base.as_str().trim_end_matches('/')))
		.map_err(|e| ConfigError::InvalidEndpoint { source: e })
}
