// self
use crate::obs::FlowOutcome;

/// Records a run outcome via the global metrics recorder (when enabled).
pub fn record_refresh_outcome(outcome: FlowOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!("otp_broker_refresh_total", "outcome" => outcome.as_str()).increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = outcome;
	}
}
