//! Access token issuance decorated with client validity overrides.
//!
//! The host keeps ownership of token generation through [`TokenIssuanceDelegate`];
//! [`ValidityOverrideIssuer`] only rewrites the request context's validity period before
//! handing it over.

// self
use crate::{
	_prelude::*,
	error::IssuanceFailure,
	obs::{self, IssueOutcome, IssueSpan},
	request::TokenRequestContext,
	resolver::ValidityOverrideResolver,
};

/// Host capability that generates access tokens from a request context.
///
/// Implementations must be stateless or internally synchronized; the issuer may call them from
/// many threads at once, each with its own context.
pub trait TokenIssuanceDelegate: Send + Sync {
	/// Opaque token artifact produced by the host.
	type Token;

	/// Issues a token for the consumed context.
	fn issue(&self, context: TokenRequestContext) -> Result<Self::Token, IssuanceFailure>;
}
impl<D> TokenIssuanceDelegate for Arc<D>
where
	D: ?Sized + TokenIssuanceDelegate,
{
	type Token = D::Token;

	fn issue(&self, context: TokenRequestContext) -> Result<Self::Token, IssuanceFailure> {
		(**self).issue(context)
	}
}

/// Adapts a closure into a [`TokenIssuanceDelegate`].
#[derive(Clone)]
pub struct FnDelegate<F>(F);
impl<F> FnDelegate<F> {
	/// Wraps the closure.
	pub fn new(f: F) -> Self {
		Self(f)
	}
}
impl<F, T> TokenIssuanceDelegate for FnDelegate<F>
where
	F: Send + Sync + Fn(TokenRequestContext) -> Result<T, IssuanceFailure>,
{
	type Token = T;

	fn issue(&self, context: TokenRequestContext) -> Result<Self::Token, IssuanceFailure> {
		(self.0)(context)
	}
}
impl<F> Debug for FnDelegate<F> {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("FnDelegate(..)")
	}
}

/// Decorator that applies client validity overrides before delegating to the host.
#[derive(Clone, Debug)]
pub struct ValidityOverrideIssuer<D> {
	resolver: ValidityOverrideResolver,
	delegate: D,
}
impl<D> ValidityOverrideIssuer<D>
where
	D: TokenIssuanceDelegate,
{
	/// Wraps the delegate with the default resolver (`expiry_time`, unbounded, tracing sink).
	pub fn new(delegate: D) -> Self {
		Self { resolver: ValidityOverrideResolver::default(), delegate }
	}

	/// Replaces the resolver.
	pub fn with_resolver(mut self, resolver: ValidityOverrideResolver) -> Self {
		self.resolver = resolver;

		self
	}

	/// Resolver applied to every request.
	pub fn resolver(&self) -> &ValidityOverrideResolver {
		&self.resolver
	}

	/// Wrapped host delegate.
	pub fn delegate(&self) -> &D {
		&self.delegate
	}

	/// Resolves the override carried by `context` and issues a token through the delegate.
	///
	/// Malformed overrides never fail the call. Delegate failures come back unchanged as
	/// [`Error::Issuance`]; a context that was already resolved is rejected with
	/// [`Error::InvalidContext`] before the delegate runs. The host default is passed through as
	/// assigned.
	pub fn access_token(&self, context: TokenRequestContext) -> Result<D::Token> {
		let _span = IssueSpan::new(&context.client_id, context.grant_type).entered();

		obs::record_issue_outcome(IssueOutcome::Attempt);

		let result = self.resolve_and_issue(context);

		match &result {
			Ok(_) => obs::record_issue_outcome(IssueOutcome::Success),
			Err(_) => obs::record_issue_outcome(IssueOutcome::Failure),
		}

		result
	}

	fn resolve_and_issue(&self, mut context: TokenRequestContext) -> Result<D::Token> {
		context.ensure_resolvable()?;

		let resolution = self.resolver.resolve_detailed(context.parameters());

		context.apply_resolution(resolution.override_validity());

		Ok(self.delegate.issue(context)?)
	}
}
