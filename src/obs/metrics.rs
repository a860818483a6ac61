// self
use crate::obs::{IssueOutcome, ResolutionOutcome};

/// Records a resolution outcome via the global metrics recorder (when enabled).
pub fn record_resolution_outcome(outcome: ResolutionOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"oauth2_validity_override_resolution_total",
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = outcome;
	}
}

/// Records an issuance outcome via the global metrics recorder (when enabled).
pub fn record_issue_outcome(outcome: IssueOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!("oauth2_validity_override_issue_total", "outcome" => outcome.as_str())
			.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = outcome;
	}
}
