// self
use crate::{_prelude::*, obs::RefreshStage};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedRun<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedRun<F> = F;

/// Span wrapped around one refresh run.
#[derive(Clone, Debug)]
pub struct RunSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl RunSpan {
	/// Creates a new span tagged with the account the run refreshes.
	pub fn new(account: &str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("otp_broker.refresh", account);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = account;

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await`
	/// points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedRun<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Emits a debug event marking entry into a refresh stage (when enabled).
pub fn record_stage(stage: RefreshStage) {
	#[cfg(feature = "tracing")]
	tracing::debug!(stage = stage.as_str(), "Entering refresh stage.");

	#[cfg(not(feature = "tracing"))]
	{
		let _ = stage;
	}
}
