// self
use crate::obs::{AuthOutcome, RequestOutcome};

/// Records a settled request via the global metrics recorder (when enabled).
pub fn record_request_outcome(outcome: RequestOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!("api_client_request_total", "outcome" => outcome.as_str()).increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = outcome;
	}
}

/// Records an auth decoration via the global metrics recorder (when enabled).
pub fn record_auth_outcome(outcome: AuthOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!("api_client_auth_total", "outcome" => outcome.as_str()).increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = outcome;
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn recorders_noop_without_metrics() {
		record_request_outcome(RequestOutcome::TransportError);
		record_auth_outcome(AuthOutcome::Failed);
	}
}
