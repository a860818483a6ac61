//! Client-driven access token validity overrides for OAuth 2.0 issuers. Parse the untrusted
//! `expiry_time` request parameter, optionally bound it, and hand the updated request context to
//! the host's default token generation.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod config;
pub mod error;
pub mod issuer;
pub mod obs;
pub mod request;
pub mod resolver;

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		str::FromStr,
		sync::Arc,
	};

	pub use parking_lot::Mutex;
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::Duration;

	pub use crate::error::{Error, Result};
}

#[cfg(test)] use {color_eyre as _, tokio as _, tracing_subscriber as _};
