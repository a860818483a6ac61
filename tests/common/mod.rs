#![allow(dead_code)]

// std
use std::{io, sync::Arc};
// crates.io
use parking_lot::Mutex;
// self
use oauth2_validity_override::{
	auth::{ClientId, GrantType},
	error::IssuanceFailure,
	issuer::TokenIssuanceDelegate,
	request::{RequestParameter, TokenRequestContext, ValidityPeriod, ValiditySource},
};

/// Token minted by [`EchoDelegate`], recording what the host would have seen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IssuedToken {
	pub access_token: String,
	pub client_id: ClientId,
	pub validity: ValidityPeriod,
	pub source: ValiditySource,
}

/// Delegate that echoes the received validity and keeps a copy of every context.
#[derive(Debug, Default)]
pub struct EchoDelegate {
	received: Mutex<Vec<TokenRequestContext>>,
}
impl EchoDelegate {
	pub fn received(&self) -> Vec<TokenRequestContext> {
		self.received.lock().clone()
	}
}
impl TokenIssuanceDelegate for EchoDelegate {
	type Token = IssuedToken;

	fn issue(&self, context: TokenRequestContext) -> Result<Self::Token, IssuanceFailure> {
		let token = IssuedToken {
			access_token: format!("at-{}-{}", context.client_id, context.validity_period().as_millis()),
			client_id: context.client_id.clone(),
			validity: context.validity_period(),
			source: context.validity_source(),
		};

		self.received.lock().push(context);

		Ok(token)
	}
}

/// Delegate that always fails the way a host keystore outage would.
#[derive(Debug, Default)]
pub struct FailingDelegate;
impl TokenIssuanceDelegate for FailingDelegate {
	type Token = IssuedToken;

	fn issue(&self, _: TokenRequestContext) -> Result<Self::Token, IssuanceFailure> {
		Err(IssuanceFailure::new(io::Error::other("signing key unavailable")))
	}
}

pub fn client(id: &str) -> ClientId {
	ClientId::new(id).expect("Client fixture should be valid.")
}

pub fn context(default_millis: i64, params: Vec<RequestParameter>) -> TokenRequestContext {
	TokenRequestContext::new(
		client("client-it"),
		GrantType::ClientCredentials,
		ValidityPeriod::from_millis(default_millis),
	)
	.with_parameters(params)
}

pub fn shared_echo() -> Arc<EchoDelegate> {
	Arc::new(EchoDelegate::default())
}
