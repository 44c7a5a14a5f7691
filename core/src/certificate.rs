//! Declared endpoints and the claimed certificate.

use crate::VertexSet;

/// The declared start and goal independent sets, built once by ingestion
/// and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Endpoints {
    /// The start token placement.
    pub start: VertexSet,
    /// The goal token placement.
    pub goal: VertexSet,
}

/// A claimed answer to a reconfiguration instance.
#[derive(Debug, Clone)]
pub enum Certificate {
    /// The answer declared `NO`: no reconfiguration sequence exists.
    NoSequence,
    /// The claimed sequence of states, in file order. May be empty.
    Sequence(Vec<VertexSet>),
}
