//! OAuth 2.0 grant types observed by the token endpoint.

// self
use crate::_prelude::*;

/// Grant type of the token request being served.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GrantType {
	/// Authorization Code grant.
	#[serde(rename = "authorization_code")]
	AuthorizationCode,
	/// Refresh Token grant.
	#[serde(rename = "refresh_token")]
	RefreshToken,
	/// Client Credentials grant.
	#[serde(rename = "client_credentials")]
	ClientCredentials,
	/// Resource Owner Password Credentials grant.
	#[serde(rename = "password")]
	Password,
	/// Device Authorization grant (RFC 8628).
	#[serde(rename = "urn:ietf:params:oauth:grant-type:device_code")]
	DeviceCode,
	/// JWT bearer assertion grant (RFC 7523).
	#[serde(rename = "urn:ietf:params:oauth:grant-type:jwt-bearer")]
	JwtBearer,
	/// Token Exchange grant (RFC 8693).
	#[serde(rename = "urn:ietf:params:oauth:grant-type:token-exchange")]
	TokenExchange,
}
impl GrantType {
	const ALL: [Self; 7] = [
		Self::AuthorizationCode,
		Self::RefreshToken,
		Self::ClientCredentials,
		Self::Password,
		Self::DeviceCode,
		Self::JwtBearer,
		Self::TokenExchange,
	];

	/// Returns the registered `grant_type` identifier.
	pub const fn as_str(self) -> &'static str {
		match self {
			GrantType::AuthorizationCode => "authorization_code",
			GrantType::RefreshToken => "refresh_token",
			GrantType::ClientCredentials => "client_credentials",
			GrantType::Password => "password",
			GrantType::DeviceCode => "urn:ietf:params:oauth:grant-type:device_code",
			GrantType::JwtBearer => "urn:ietf:params:oauth:grant-type:jwt-bearer",
			GrantType::TokenExchange => "urn:ietf:params:oauth:grant-type:token-exchange",
		}
	}
}
impl Display for GrantType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for GrantType {
	type Err = UnknownGrantType;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|grant| grant.as_str() == s)
			.ok_or_else(|| UnknownGrantType { value: s.to_owned() })
	}
}

/// Error returned when a `grant_type` string is not recognized.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("Unknown grant type `{value}`.")]
pub struct UnknownGrantType {
	/// Unrecognized identifier.
	pub value: String,
}
