//! Property unique identifier generation.
//!
//! Identifiers have the form `{PREFIX}-{counter:05}` where the prefix is
//! derived from the scheme name and the counter runs per prefix. The id must
//! exist before the property row is inserted, so generation never depends
//! on the storage-assigned row id.

pub mod generator;
pub mod rule;

pub use generator::*;
pub use rule::*;
