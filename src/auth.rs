//! Client identifiers and grant types carried by token requests.

pub mod grant;
pub mod id;

pub use grant::*;
pub use id::*;
