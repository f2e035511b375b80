//! `hexamod-auth` — stateless request-authentication boundary.
//!
//! This crate is intentionally decoupled from HTTP framework types and
//! storage: it holds the credential store, the basic-credential codec, and
//! the ordered route policy. Adapters translate transport details into these
//! types and back.

pub mod basic;
pub mod credentials;
pub mod policy;

pub use basic::{decode_basic, BasicAuthError, BasicCredentials};
pub use credentials::{CredentialRecord, CredentialStore, Role};
pub use policy::{AccessRule, PathPattern, RoutePolicy};
