//! `hexamod-domain` — pure domain model.
//!
//! This crate contains **pure domain** types (no transport, no framework
//! concerns). Everything here is immutable and compared by value.

pub mod greeting;

pub use greeting::Greeting;
