//! High-level refresh orchestration.

pub mod refresh;

pub use refresh::*;

// std
use std::time::Duration as StdDuration;
// self
use crate::{
	_prelude::*,
	http::ReqwestHttpClient,
	mailbox::MailboxClient,
	platform::PlatformClient,
	provider::{MailboxDescriptor, PlatformDescriptor},
	store::TokenStore,
};

/// Default blind wait between OTP dispatch and the mailbox listing.
pub const DEFAULT_SETTLE_DELAY: StdDuration = StdDuration::from_secs(5);

/// Coordinates one credential refresh flow end to end.
///
/// The refresher owns the two collaborator clients (sharing one transport),
/// the injected store capability, and the settle delay. It performs no
/// locking: overlapping runs against the same mailbox and account can race,
/// and the store resolves concurrent writes as last-write-wins.
#[derive(Clone)]
pub struct Refresher {
	/// Transient-mailbox client used for session auth and listing.
	pub mailbox: MailboxClient,
	/// Target-platform client used for dispatch and login.
	pub platform: PlatformClient,
	/// Store capability that persists the resulting record.
	pub store: Arc<dyn TokenStore>,
	/// Blind wait inserted between dispatch and the mailbox listing.
	pub settle_delay: StdDuration,
	/// Shared counters for run outcomes.
	pub refresh_metrics: Arc<RefreshMetrics>,
}
impl Refresher {
	/// Creates a refresher with its own default transport.
	pub fn new(
		store: Arc<dyn TokenStore>,
		mailbox: MailboxDescriptor,
		platform: PlatformDescriptor,
	) -> Self {
		Self::with_http_client(store, mailbox, platform, ReqwestHttpClient::default())
	}

	/// Creates a refresher whose clients share the caller-provided transport.
	pub fn with_http_client(
		store: Arc<dyn TokenStore>,
		mailbox: MailboxDescriptor,
		platform: PlatformDescriptor,
		http_client: ReqwestHttpClient,
	) -> Self {
		Self {
			mailbox: MailboxClient::with_http_client(mailbox, http_client.clone()),
			platform: PlatformClient::with_http_client(platform, http_client),
			store,
			settle_delay: DEFAULT_SETTLE_DELAY,
			refresh_metrics: Default::default(),
		}
	}

	/// Overrides the settle delay (defaults to five seconds).
	pub fn with_settle_delay(mut self, delay: StdDuration) -> Self {
		self.settle_delay = delay;

		self
	}
}
impl Debug for Refresher {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Refresher")
			.field("mailbox", self.mailbox.descriptor())
			.field("platform", self.platform.descriptor())
			.field("settle_delay", &self.settle_delay)
			.finish()
	}
}
