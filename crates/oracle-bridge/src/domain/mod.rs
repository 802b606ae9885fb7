//! # Domain Module
//!
//! Core domain types and logic for the oracle bridge.

pub mod attestation;
pub mod disputes;
pub mod entities;
pub mod errors;
pub mod extractor;
pub mod proposals;
pub mod value_objects;

pub use attestation::*;
pub use disputes::*;
pub use entities::*;
pub use errors::*;
pub use proposals::*;
pub use value_objects::*;
