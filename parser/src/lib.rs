//! Line-oriented ingestion adapters for the three validator inputs.
//!
//! - DIMACS-like graph files (`c` / `p` / `e` lines)
//! - Start/goal files (`s` / `t` lines)
//! - Answer files (`a` lines: a YES/NO declaration followed by states)
//!
//! All three readers share the same idiom: dispatch on the first character
//! of a line, skip the leading token, and parse the remaining
//! whitespace-separated integers. Every error here is fatal; no partial
//! input is handed to the validator.

mod answer;
mod error;
mod graph_file;
mod stfile;
mod tokens;

pub use answer::*;
pub use error::*;
pub use graph_file::*;
pub use stfile::*;
