//! Sequence validator for token-sliding reconfiguration certificates.
//!
//! Walks a claimed sequence of independent sets and classifies it into one
//! of a closed set of outcomes: the first state must equal the declared
//! start set, every state must be independent, consecutive states must
//! differ by exactly one moved token, and the last state must equal the
//! declared goal set. Repeated states are a non-fatal warning.

mod outcome;
mod validator;

pub use outcome::*;
pub use validator::*;
