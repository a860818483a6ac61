//! Token request parameters and the request-scoped issuance context.

pub mod context;

pub use context::*;

// self
use crate::_prelude::*;

// Values under these keys never show up in `Debug` output.
const REDACTED_KEYS: [&str; 8] = [
	"assertion",
	"client_assertion",
	"client_secret",
	"code",
	"code_verifier",
	"password",
	"refresh_token",
	"subject_token",
];

/// Single token request parameter as decoded by the host.
///
/// Keys are not unique across a request; values keep their wire order and may contain missing
/// entries. Only the first value is ever consulted for overrides.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestParameter {
	key: String,
	value: Vec<Option<String>>,
}
impl RequestParameter {
	/// Creates a parameter whose values are all present.
	pub fn new<I, V>(key: impl Into<String>, values: I) -> Self
	where
		I: IntoIterator<Item = V>,
		V: Into<String>,
	{
		Self { key: key.into(), value: values.into_iter().map(|v| Some(v.into())).collect() }
	}

	/// Creates a parameter with a single value.
	pub fn single(key: impl Into<String>, value: impl Into<String>) -> Self {
		Self { key: key.into(), value: vec![Some(value.into())] }
	}

	/// Creates a parameter from raw host values, preserving missing entries.
	pub fn from_raw(key: impl Into<String>, value: Vec<Option<String>>) -> Self {
		Self { key: key.into(), value }
	}

	/// Parameter key.
	pub fn key(&self) -> &str {
		&self.key
	}

	/// All values in wire order.
	pub fn values(&self) -> &[Option<String>] {
		&self.value
	}

	/// Returns the first value when it is present and non-empty.
	pub fn first_value(&self) -> Option<&str> {
		self.value.first()?.as_deref().filter(|v| !v.is_empty())
	}

	fn is_redacted(&self) -> bool {
		REDACTED_KEYS.contains(&self.key.as_str())
	}
}
impl Debug for RequestParameter {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		let mut s = f.debug_struct("RequestParameter");

		s.field("key", &self.key);

		if self.is_redacted() {
			s.field("value", &"<redacted>");
		} else {
			s.field("value", &self.value);
		}

		s.finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn first_value_skips_missing_and_empty_entries() {
		assert_eq!(RequestParameter::single("expiry_time", "60").first_value(), Some("60"));
		assert_eq!(RequestParameter::new("expiry_time", Vec::<String>::new()).first_value(), None);
		assert_eq!(RequestParameter::single("expiry_time", "").first_value(), None);
		assert_eq!(
			RequestParameter::from_raw("expiry_time", vec![None, Some("60".into())]).first_value(),
			None
		);
	}

	#[test]
	fn debug_redacts_credentials() {
		let secret = RequestParameter::single("client_secret", "hunter2");
		let plain = RequestParameter::single("scope", "openid");

		assert!(!format!("{secret:?}").contains("hunter2"));
		assert!(format!("{plain:?}").contains("openid"));
	}
}
