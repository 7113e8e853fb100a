//! Optional observability helpers for refresh runs.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit an `otp_broker.refresh` span around each run and
//!   debug events marking every stage transition.
//! - Enable `metrics` to increment the `otp_broker_refresh_total` counter for
//!   every attempt/success/failure, labeled by `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Ordered stages of one refresh run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RefreshStage {
	/// Mailbox session authentication.
	MailboxAuth,
	/// OTP dispatch request to the platform.
	Dispatch,
	/// Blind settle delay while the email travels.
	Settle,
	/// Mailbox message listing.
	Fetch,
	/// OTP extraction from the newest message.
	Extract,
	/// Signed login submission.
	Login,
}
impl RefreshStage {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			RefreshStage::MailboxAuth => "mailbox_auth",
			RefreshStage::Dispatch => "dispatch",
			RefreshStage::Settle => "settle",
			RefreshStage::Fetch => "fetch",
			RefreshStage::Extract => "extract",
			RefreshStage::Login => "login",
		}
	}
}
impl Display for RefreshStage {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowOutcome {
	/// Entry to the refresh entry point.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl FlowOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			FlowOutcome::Attempt => "attempt",
			FlowOutcome::Success => "success",
			FlowOutcome::Failure => "failure",
		}
	}
}
impl Display for FlowOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
