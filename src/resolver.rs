//! Parsing and validation of client-supplied validity overrides.
//!
//! The resolver scans the request parameters for the first entry whose key matches the configured
//! override parameter and whose first value is present. That value is read as base-10 seconds and
//! converted to milliseconds. Anything that cannot be parsed (or, when bounds are configured,
//! falls outside them) is reported to the [`DiagnosticSink`] and the current validity is kept.
//! Malformed client input never fails the call.

// self
use crate::{
	_prelude::*,
	config::ResolverConfig,
	obs::{self, DiagnosticSink, ResolutionOutcome, TracingSink},
	request::{RequestParameter, ValidityPeriod},
};

/// Why an override value was discarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverrideRejection {
	/// Value is not a base-10 integer.
	NotAnInteger,
	/// Value does not fit the supported range once converted to milliseconds.
	Overflow,
	/// Value lies outside the configured bounds.
	OutOfBounds,
}
impl OverrideRejection {
	/// Returns a stable label suitable for log fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			OverrideRejection::NotAnInteger => "not_an_integer",
			OverrideRejection::Overflow => "overflow",
			OverrideRejection::OutOfBounds => "out_of_bounds",
		}
	}
}

/// Advisory diagnostic for an override that was present but unusable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
#[error("Invalid expiry time format: {raw}. Using default validity period.")]
pub struct InvalidOverrideFormat {
	/// Offending value exactly as the client sent it.
	pub raw: String,
	/// Rejection reason.
	pub reason: OverrideRejection,
}
impl InvalidOverrideFormat {
	/// Creates a diagnostic for the raw client value.
	pub fn new(raw: impl Into<String>, reason: OverrideRejection) -> Self {
		Self { raw: raw.into(), reason }
	}
}

/// Outcome of resolving one parameter set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
	/// No qualifying override was present.
	Default,
	/// Override accepted.
	Overridden {
		/// Seconds requested by the client.
		seconds: i64,
		/// Effective validity.
		validity: ValidityPeriod,
	},
	/// Override present but discarded.
	Rejected(InvalidOverrideFormat),
}
impl Resolution {
	/// Effective validity given the current one.
	pub fn effective(&self, current: ValidityPeriod) -> ValidityPeriod {
		match self {
			Resolution::Overridden { validity, .. } => *validity,
			Resolution::Default | Resolution::Rejected(_) => current,
		}
	}

	/// Accepted override, if any.
	pub fn override_validity(&self) -> Option<ValidityPeriod> {
		match self {
			Resolution::Overridden { validity, .. } => Some(*validity),
			Resolution::Default | Resolution::Rejected(_) => None,
		}
	}

	/// Diagnostic carried by a rejected override.
	pub fn diagnostic(&self) -> Option<&InvalidOverrideFormat> {
		match self {
			Resolution::Rejected(diagnostic) => Some(diagnostic),
			Resolution::Default | Resolution::Overridden { .. } => None,
		}
	}

	/// Outcome label for metrics.
	pub fn outcome(&self) -> ResolutionOutcome {
		match self {
			Resolution::Default => ResolutionOutcome::Default,
			Resolution::Overridden { .. } => ResolutionOutcome::Overridden,
			Resolution::Rejected(_) => ResolutionOutcome::Rejected,
		}
	}
}

/// Stateless resolver for client-supplied validity overrides.
///
/// Safe to share across threads; every call only reads its arguments.
#[derive(Clone)]
pub struct ValidityOverrideResolver {
	config: ResolverConfig,
	sink: Arc<dyn DiagnosticSink>,
}
impl ValidityOverrideResolver {
	/// Creates a resolver that reports diagnostics through [`TracingSink`].
	pub fn new(config: ResolverConfig) -> Self {
		Self { config, sink: Arc::new(TracingSink) }
	}

	/// Replaces the diagnostic sink.
	pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
		self.sink = sink;

		self
	}

	/// Active configuration.
	pub fn config(&self) -> &ResolverConfig {
		&self.config
	}

	/// Returns the effective validity in milliseconds.
	///
	/// Rejected overrides are reported to the sink exactly once and `current_validity_millis`
	/// is returned unchanged.
	pub fn resolve(&self, parameters: &[RequestParameter], current_validity_millis: i64) -> i64 {
		let current = ValidityPeriod::from_millis(current_validity_millis);

		self.resolve_period(parameters, current).as_millis()
	}

	/// Typed form of [`resolve`](Self::resolve).
	pub fn resolve_period(
		&self,
		parameters: &[RequestParameter],
		current: ValidityPeriod,
	) -> ValidityPeriod {
		self.resolve_detailed(parameters).effective(current)
	}

	/// Resolves the parameters and reports the full outcome.
	///
	/// Diagnostics are forwarded to the sink and outcome metrics recorded before returning.
	pub fn resolve_detailed(&self, parameters: &[RequestParameter]) -> Resolution {
		let resolution = match self.find_override(parameters) {
			None => Resolution::Default,
			Some(raw) => self.evaluate(raw),
		};

		match &resolution {
			Resolution::Overridden { seconds, validity } =>
				obs::trace_override_applied(*seconds, *validity),
			Resolution::Rejected(diagnostic) => self.sink.invalid_override(diagnostic),
			Resolution::Default => {},
		}

		obs::record_resolution_outcome(resolution.outcome());

		resolution
	}

	fn find_override<'a>(&self, parameters: &'a [RequestParameter]) -> Option<&'a str> {
		parameters
			.iter()
			.filter(|param| param.key() == self.config.parameter)
			.find_map(RequestParameter::first_value)
	}

	fn evaluate(&self, raw: &str) -> Resolution {
		let seconds = match parse_seconds(raw) {
			Ok(seconds) => seconds,
			Err(reason) => return Resolution::Rejected(InvalidOverrideFormat::new(raw, reason)),
		};

		if self.config.bounds.is_some_and(|bounds| !bounds.contains(seconds)) {
			return Resolution::Rejected(InvalidOverrideFormat::new(
				raw,
				OverrideRejection::OutOfBounds,
			));
		}

		match ValidityPeriod::from_seconds(seconds) {
			Some(validity) => Resolution::Overridden { seconds, validity },
			None => Resolution::Rejected(InvalidOverrideFormat::new(raw, OverrideRejection::Overflow)),
		}
	}
}
impl Default for ValidityOverrideResolver {
	fn default() -> Self {
		Self::new(ResolverConfig::default())
	}
}
impl Debug for ValidityOverrideResolver {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ValidityOverrideResolver").field("config", &self.config).finish()
	}
}

// Accepts an optional sign followed by ASCII digits, nothing else. Non-ASCII decimal digits
// (e.g. Arabic-Indic) are rejected.
fn parse_seconds(raw: &str) -> Result<i64, OverrideRejection> {
	raw.parse::<i64>().map_err(|e| match e.kind() {
		std::num::IntErrorKind::PosOverflow | std::num::IntErrorKind::NegOverflow =>
			OverrideRejection::Overflow,
		_ => OverrideRejection::NotAnInteger,
	})
}
