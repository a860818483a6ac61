//! Observability helpers for override resolution and issuance.
//!
//! # Feature Flags
//!
//! - `tracing` (default) emits spans named `oauth2_validity_override.issue` with `client_id` and
//!   `grant` fields, a debug event for every accepted override, and a warning through
//!   [`TracingSink`] for every rejected one.
//! - `metrics` increments `oauth2_validity_override_resolution_total` (labeled by `outcome`) for
//!   every resolution and `oauth2_validity_override_issue_total` (labeled by `outcome`) for every
//!   issuance attempt/success/failure.

#[cfg(all(test, feature = "tracing"))]
pub(crate) mod capture;
mod metrics;
mod sink;
mod tracing;

pub use metrics::*;
pub use sink::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded for each override resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResolutionOutcome {
	/// No qualifying override; the host default was kept.
	Default,
	/// Override accepted.
	Overridden,
	/// Override present but rejected; the host default was kept.
	Rejected,
}
impl ResolutionOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ResolutionOutcome::Default => "default",
			ResolutionOutcome::Overridden => "overridden",
			ResolutionOutcome::Rejected => "rejected",
		}
	}
}
impl Display for ResolutionOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each issuance call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IssueOutcome {
	/// Entry to [`ValidityOverrideIssuer::access_token`](crate::issuer::ValidityOverrideIssuer::access_token).
	Attempt,
	/// Delegate produced a token.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl IssueOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			IssueOutcome::Attempt => "attempt",
			IssueOutcome::Success => "success",
			IssueOutcome::Failure => "failure",
		}
	}
}
impl Display for IssueOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
