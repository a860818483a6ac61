//! Crate-level error types shared by the issuer, request context, and configuration layers.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

pub(crate) type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
///
/// Malformed client overrides never surface here; they are absorbed by the resolver and reported
/// through a [`DiagnosticSink`](crate::obs::DiagnosticSink) instead.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Host issuance failed; the wrapped failure is passed through untouched.
	#[error(transparent)]
	Issuance(#[from] IssuanceFailure),
	/// Caller handed over a request context that violates its contract.
	#[error(transparent)]
	InvalidContext(#[from] ContextError),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
}

/// Opaque failure raised by a [`TokenIssuanceDelegate`](crate::issuer::TokenIssuanceDelegate).
///
/// The crate never inspects or recovers from this value; it only carries it back to the caller.
#[derive(Debug, ThisError)]
#[error("Token issuance failed.")]
pub struct IssuanceFailure {
	#[source]
	source: BoxError,
}
impl IssuanceFailure {
	/// Wraps the host's issuance error.
	pub fn new(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self { source: Box::new(src) }
	}

	/// Wraps an already boxed host error.
	pub fn from_boxed(source: BoxError) -> Self {
		Self { source }
	}

	/// Consumes the failure and returns the host error.
	pub fn into_inner(self) -> Box<dyn std::error::Error + Send + Sync> {
		self.source
	}
}

/// Contract violations on a [`TokenRequestContext`](crate::request::TokenRequestContext).
///
/// These indicate a defect in the calling code rather than bad client input.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum ContextError {
	/// The context already went through override resolution.
	#[error("Request context validity period has already been resolved.")]
	AlreadyResolved,
}

/// Configuration and validation failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Configuration JSON could not be parsed.
	#[error("Resolver configuration is malformed at `{path}`.")]
	Parse {
		/// JSON path to the offending field.
		path: String,
		/// Underlying parsing failure.
		#[source]
		source: serde_json::Error,
	},
	/// Override parameter name is empty.
	#[error("Override parameter name cannot be empty.")]
	EmptyParameterName,
	/// Minimum bound exceeds the maximum bound.
	#[error("Validity bounds are inverted: min {min_seconds}s exceeds max {max_seconds}s.")]
	InvertedBounds {
		/// Configured lower bound, in seconds.
		min_seconds: i64,
		/// Configured upper bound, in seconds.
		max_seconds: i64,
	},
}
impl From<serde_path_to_error::Error<serde_json::Error>> for ConfigError {
	fn from(e: serde_path_to_error::Error<serde_json::Error>) -> Self {
		let path = e.path().to_string();

		Self::Parse { path, source: e.into_inner() }
	}
}
