//! Undirected graph storage and the independence check.

use recon_core::{VertexId, VertexSet};

/// An undirected graph described by a vertex count and an edge list.
#[derive(Debug, Clone)]
pub struct Graph {
    /// Number of vertices; valid identifiers are `1..=num_vertices`.
    num_vertices: u32,
    /// Edges in input order, as unordered vertex pairs.
    edges: Vec<(VertexId, VertexId)>,
}

impl Graph {
    /// Create a graph from a vertex count and an edge list.
    pub fn new(num_vertices: u32, edges: Vec<(VertexId, VertexId)>) -> Self {
        Self {
            num_vertices,
            edges,
        }
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> u32 {
        self.num_vertices
    }

    /// The edges in input order.
    pub fn edges(&self) -> &[(VertexId, VertexId)] {
        &self.edges
    }

    /// Check whether `state` is an independent set: no edge may have both
    /// endpoints present. The empty set is trivially independent.
    ///
    /// The membership table is sized `num_vertices + 1` so 1-based
    /// identifiers index it directly; identifiers outside that range are
    /// ignored rather than panicking.
    pub fn is_independent_set(&self, state: &VertexSet) -> bool {
        let mut present = vec![false; self.num_vertices as usize + 1];
        for v in state.iter() {
            if let Some(slot) = present.get_mut(v as usize) {
                *slot = true;
            }
        }
        !self.edges.iter().any(|&(u, v)| {
            present.get(u as usize).copied().unwrap_or(false)
                && present.get(v as usize).copied().unwrap_or(false)
        })
    }
}
