//! Graph model for the reconfiguration validator.
//!
//! Holds the vertex count and edge list of the input graph and answers the
//! one question validation needs: is a given vertex set independent?

mod graph;

pub use graph::*;
