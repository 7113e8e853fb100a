//! The six-stage refresh run.
//!
//! One run walks a fixed sequence with no branching, no loop, and no retry:
//! mailbox auth, OTP dispatch, a blind settle delay, message listing, code
//! extraction, signed login. The first failing stage aborts the run, and the
//! store is only written after the final stage succeeds, so a failed run
//! leaves prior state untouched. Nothing serializes concurrent runs; two
//! overlapping runs share the mailbox and the account and may consume each
//! other's codes.

mod metrics;

pub use metrics::RefreshMetrics;

// self
use crate::{
	_prelude::*,
	auth::CredentialRecord,
	error::OtpNotFoundError,
	flows::Refresher,
	obs::{self, FlowOutcome, RefreshStage, RunSpan},
	otp,
};

impl Refresher {
	/// Runs one refresh and returns the freshly stored record.
	pub async fn refresh(&self) -> Result<CredentialRecord> {
		let span = RunSpan::new(&self.platform.descriptor().email);

		obs::record_refresh_outcome(FlowOutcome::Attempt);
		self.refresh_metrics.record_attempt();

		let result = span.instrument(self.run()).await;

		match &result {
			Ok(_) => {
				self.refresh_metrics.record_success();
				obs::record_refresh_outcome(FlowOutcome::Success);
			},
			Err(_) => {
				self.refresh_metrics.record_failure();
				obs::record_refresh_outcome(FlowOutcome::Failure);
			},
		}

		result
	}

	/// Reads the currently stored record for this refresher's account.
	pub async fn current(&self) -> Result<Option<CredentialRecord>> {
		Ok(self.store.get(&self.platform.descriptor().email).await?)
	}

	async fn run(&self) -> Result<CredentialRecord> {
		obs::record_stage(RefreshStage::MailboxAuth);

		let session = self.mailbox.authenticate().await?;

		obs::record_stage(RefreshStage::Dispatch);
		self.platform.request_otp_dispatch().await?;
		obs::record_stage(RefreshStage::Settle);
		tokio::time::sleep(self.settle_delay).await;
		obs::record_stage(RefreshStage::Fetch);

		let messages = self.mailbox.list_messages(&session).await?;
		let newest = messages.first().ok_or(OtpNotFoundError::EmptyMailbox)?;

		obs::record_stage(RefreshStage::Extract);

		let code = otp::extract(&newest.intro)?;

		obs::record_stage(RefreshStage::Login);

		let token = self.platform.login(code).await?;
		let record = CredentialRecord::issue_now(token);

		self.store.put(&self.platform.descriptor().email, record.clone()).await?;

		Ok(record)
	}
}
