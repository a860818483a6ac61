// self
use crate::{
	_prelude::*,
	auth::{ClientId, GrantType},
	request::ValidityPeriod,
};

/// Span wrapping a single issuance call.
#[derive(Clone, Debug)]
pub struct IssueSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl IssueSpan {
	/// Creates a new span tagged with the client and grant of the request.
	pub fn new(client_id: &ClientId, grant: GrantType) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"oauth2_validity_override.issue",
				client_id = %client_id,
				grant = grant.as_str()
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (client_id, grant);

			Self {}
		}
	}

	/// Enters the span for the duration of the returned guard.
	pub fn entered(self) -> IssueSpanGuard {
		#[cfg(feature = "tracing")]
		{
			IssueSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			IssueSpanGuard {}
		}
	}
}

/// RAII guard returned by [`IssueSpan::entered`].
pub struct IssueSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for IssueSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("IssueSpanGuard(..)")
	}
}

/// Emits a debug event for an accepted override.
pub fn trace_override_applied(seconds: i64, validity: ValidityPeriod) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(seconds, millis = validity.as_millis(), "Custom expiry time applied.");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (seconds, validity);
	}
}
