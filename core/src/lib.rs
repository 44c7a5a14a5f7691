//! Core types for the reconfiguration validator.
//!
//! This crate provides the shared vocabulary of the workspace:
//! - Vertex identifiers and canonical vertex sets
//! - The declared start/goal endpoints and the claimed certificate
//! - Ordinal formatting for positional diagnostics

mod certificate;
mod ordinal;
mod vertex;

pub use certificate::*;
pub use ordinal::*;
pub use vertex::*;
