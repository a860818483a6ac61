//! Request-scoped issuance context and validity period values.

// self
use crate::{
	_prelude::*,
	auth::{ClientId, GrantType},
	error::ContextError,
	request::RequestParameter,
};

/// Access token validity period in milliseconds.
///
/// Signed so that unbounded client overrides (zero or negative) can be represented as received.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidityPeriod(i64);
impl ValidityPeriod {
	/// Zero-length validity.
	pub const ZERO: Self = Self(0);

	/// Wraps a millisecond count.
	pub const fn from_millis(millis: i64) -> Self {
		Self(millis)
	}

	/// Converts whole seconds, returning `None` if the millisecond count overflows.
	pub const fn from_seconds(seconds: i64) -> Option<Self> {
		match seconds.checked_mul(1_000) {
			Some(millis) => Some(Self(millis)),
			None => None,
		}
	}

	/// Converts a duration, returning `None` outside the `i64` millisecond range.
	pub fn from_duration(duration: Duration) -> Option<Self> {
		i64::try_from(duration.whole_milliseconds()).ok().map(Self)
	}

	/// Millisecond count.
	pub const fn as_millis(self) -> i64 {
		self.0
	}

	/// Validity as a [`Duration`].
	pub fn as_duration(self) -> Duration {
		Duration::milliseconds(self.0)
	}

	/// Returns `true` for negative periods.
	pub const fn is_negative(self) -> bool {
		self.0 < 0
	}
}
impl Display for ValidityPeriod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "{} ms", self.0)
	}
}

/// Where the context's current validity period came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValiditySource {
	/// Default assigned by the host before resolution.
	#[default]
	HostDefault,
	/// Client-supplied override accepted by the resolver.
	ClientOverride,
}

/// Mutable state for a single token request, exclusively owned by the caller for one issuance.
///
/// Parameters are read-only once the context is built. The validity period is written at most
/// once, by override resolution, before the context is handed to the delegate.
#[derive(Clone, Debug)]
pub struct TokenRequestContext {
	/// Authenticated client the token is issued to.
	pub client_id: ClientId,
	/// Grant type of the request.
	pub grant_type: GrantType,
	parameters: Vec<RequestParameter>,
	validity_period: ValidityPeriod,
	validity_source: ValiditySource,
	resolved: bool,
}
impl TokenRequestContext {
	/// Creates a context carrying the host default validity.
	pub fn new(client_id: ClientId, grant_type: GrantType, default_validity: ValidityPeriod) -> Self {
		Self {
			client_id,
			grant_type,
			parameters: Vec::new(),
			validity_period: default_validity,
			validity_source: ValiditySource::HostDefault,
			resolved: false,
		}
	}

	/// Appends a request parameter.
	pub fn with_parameter(mut self, parameter: RequestParameter) -> Self {
		self.parameters.push(parameter);

		self
	}

	/// Appends request parameters, keeping their order.
	pub fn with_parameters(mut self, parameters: impl IntoIterator<Item = RequestParameter>) -> Self {
		self.parameters.extend(parameters);

		self
	}

	/// Request parameters in the order the host decoded them.
	pub fn parameters(&self) -> &[RequestParameter] {
		&self.parameters
	}

	/// Current validity period.
	pub fn validity_period(&self) -> ValidityPeriod {
		self.validity_period
	}

	/// Origin of the current validity period.
	pub fn validity_source(&self) -> ValiditySource {
		self.validity_source
	}

	/// Returns `true` once override resolution ran on this context.
	pub fn is_resolved(&self) -> bool {
		self.resolved
	}

	/// Checks that the context can still go through resolution.
	pub(crate) fn ensure_resolvable(&self) -> Result<(), ContextError> {
		if self.resolved {
			return Err(ContextError::AlreadyResolved);
		}

		Ok(())
	}

	/// Records the resolution result; `None` keeps the host default.
	pub(crate) fn apply_resolution(&mut self, validity: Option<ValidityPeriod>) {
		if let Some(validity) = validity {
			self.validity_period = validity;
			self.validity_source = ValiditySource::ClientOverride;
		}

		self.resolved = true;
	}
}
