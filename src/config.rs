//! Resolver configuration: which request parameter carries the override and how it is bounded.
//!
//! The default configuration reads `expiry_time` and applies no bounds, so zero, negative, and
//! arbitrarily large overrides become the effective lifetime. Deployments exposing the parameter
//! to untrusted clients should configure [`ValidityBounds`].

// self
use crate::{_prelude::*, error::ConfigError};

/// Request parameter consulted when no other name is configured.
pub const DEFAULT_OVERRIDE_PARAMETER: &str = "expiry_time";

/// Inclusive bounds, in seconds, applied to client-supplied overrides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidityBounds {
	/// Lowest accepted override.
	pub min_seconds: i64,
	/// Highest accepted override.
	pub max_seconds: i64,
}
impl ValidityBounds {
	/// Creates bounds after checking they are ordered.
	pub fn new(min_seconds: i64, max_seconds: i64) -> Result<Self, ConfigError> {
		let bounds = Self { min_seconds, max_seconds };

		bounds.validate()?;

		Ok(bounds)
	}

	/// Returns `true` if `seconds` falls inside the bounds.
	pub fn contains(&self, seconds: i64) -> bool {
		(self.min_seconds..=self.max_seconds).contains(&seconds)
	}

	fn validate(&self) -> Result<(), ConfigError> {
		if self.min_seconds > self.max_seconds {
			return Err(ConfigError::InvertedBounds {
				min_seconds: self.min_seconds,
				max_seconds: self.max_seconds,
			});
		}

		Ok(())
	}
}

/// Settings for [`ValidityOverrideResolver`](crate::resolver::ValidityOverrideResolver).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverConfig {
	/// Request parameter key carrying the override, in seconds.
	pub parameter: String,
	/// Optional inclusive bounds; `None` accepts any parseable value.
	pub bounds: Option<ValidityBounds>,
}
impl ResolverConfig {
	/// Returns a builder seeded with the defaults.
	pub fn builder() -> ResolverConfigBuilder {
		ResolverConfigBuilder::default()
	}

	/// Parses and validates a JSON document, reporting the path of malformed fields.
	pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
		let mut de = serde_json::Deserializer::from_str(json);
		let config: Self = serde_path_to_error::deserialize(&mut de)?;

		config.validate()?;

		Ok(config)
	}

	/// Checks the configuration invariants.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.parameter.is_empty() {
			return Err(ConfigError::EmptyParameterName);
		}
		if let Some(bounds) = &self.bounds {
			bounds.validate()?;
		}

		Ok(())
	}
}
impl Default for ResolverConfig {
	fn default() -> Self {
		Self { parameter: DEFAULT_OVERRIDE_PARAMETER.into(), bounds: None }
	}
}

/// Builder for [`ResolverConfig`] values.
#[derive(Debug, Default)]
pub struct ResolverConfigBuilder {
	config: ResolverConfig,
}
impl ResolverConfigBuilder {
	/// Overrides the request parameter key.
	pub fn parameter(mut self, key: impl Into<String>) -> Self {
		self.config.parameter = key.into();

		self
	}

	/// Applies inclusive bounds, in seconds.
	pub fn bounds(mut self, min_seconds: i64, max_seconds: i64) -> Self {
		self.config.bounds = Some(ValidityBounds { min_seconds, max_seconds });

		self
	}

	/// Removes any configured bounds.
	pub fn unbounded(mut self) -> Self {
		self.config.bounds = None;

		self
	}

	/// Validates and returns the configuration.
	pub fn build(self) -> Result<ResolverConfig, ConfigError> {
		self.config.validate()?;

		Ok(self.config)
	}
}
