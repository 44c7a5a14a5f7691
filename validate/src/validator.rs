//! The certificate walk.

use std::collections::HashSet;

use recon_core::{Certificate, Endpoints, VertexSet};
use recon_graph::Graph;

use crate::{Outcome, Report};

/// Walk the claimed certificate and classify it.
///
/// Checks are ordered so the first structural defect wins: start mismatch,
/// then independence, then single-move, then (after the full walk) goal
/// mismatch. The walk stops at the first defect and never accumulates
/// several. Duplicate states only latch the non-fatal warning flag; the
/// flag is reported even when a later defect ends the walk early.
pub fn validate(graph: &Graph, endpoints: &Endpoints, certificate: &Certificate) -> Report {
    let states = match certificate {
        Certificate::NoSequence => {
            // Non-existence is not verifiable here; accept the claim.
            return Report {
                outcome: Outcome::NoSequenceClaimed,
                duplicate_state: false,
            };
        }
        Certificate::Sequence(states) => states,
    };

    let mut seen: HashSet<String> = HashSet::new();
    let mut duplicate_state = false;
    let mut previous: Option<&VertexSet> = None;

    for (index, state) in states.iter().enumerate() {
        let position = index + 1;

        if position == 1 && *state != endpoints.start {
            return Report {
                outcome: Outcome::StartMismatch,
                duplicate_state,
            };
        }

        if !graph.is_independent_set(state) {
            return Report {
                outcome: Outcome::NotIndependentSet { position },
                duplicate_state,
            };
        }

        if let Some(previous) = previous {
            // Set sizes are invariant across a valid move, so "exactly one
            // vertex left the set" also means exactly one arrived.
            if previous.difference(state).len() != 1 {
                return Report {
                    outcome: Outcome::NotSingleMove { position },
                    duplicate_state,
                };
            }
        }

        if !seen.insert(state.key()) {
            duplicate_state = true;
        }
        previous = Some(state);
    }

    // An empty sequence flows through the same comparison with an empty
    // last state.
    let empty = VertexSet::new();
    let last = previous.unwrap_or(&empty);
    if *last != endpoints.goal {
        return Report {
            outcome: Outcome::GoalMismatch,
            duplicate_state,
        };
    }

    Report {
        outcome: Outcome::Valid,
        duplicate_state,
    }
}
