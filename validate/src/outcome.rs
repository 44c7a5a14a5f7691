//! Validation outcomes and the user-facing report.

use recon_core::ordinal;

/// Warning line printed once when a state repeats within the sequence.
pub const DUPLICATE_WARNING: &str = "Warning: The same state appears multiple times";

/// The closed set of validation results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The certificate declared NO. Accepted as-is: this validator cannot
    /// verify that a sequence does not exist.
    NoSequenceClaimed,
    /// The sequence passed every check.
    Valid,
    /// The first state differs from the declared start set.
    StartMismatch,
    /// The last state differs from the declared goal set.
    GoalMismatch,
    /// The state at the given 1-based position is not an independent set.
    NotIndependentSet { position: usize },
    /// The state at the given 1-based position does not follow from its
    /// predecessor by moving exactly one token.
    NotSingleMove { position: usize },
}

/// The sole externally observable result of a validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// How the run was classified.
    pub outcome: Outcome,
    /// Some state appeared more than once (non-fatal).
    pub duplicate_state: bool,
}

impl Report {
    /// Stable two-digit code for this report.
    pub fn code(&self) -> &'static str {
        match self.outcome {
            Outcome::NoSequenceClaimed => "00",
            Outcome::Valid => {
                if self.duplicate_state {
                    "02"
                } else {
                    "01"
                }
            }
            Outcome::StartMismatch => "10",
            Outcome::GoalMismatch => "11",
            Outcome::NotIndependentSet { .. } => "12",
            Outcome::NotSingleMove { .. } => "13",
        }
    }

    /// Whether this report classifies the run as a success. Codes 00-02
    /// are successes; 10-13 are validation failures.
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::NoSequenceClaimed | Outcome::Valid)
    }

    /// The full outcome line: `[CodeXX] ...` for successes,
    /// `ValidationError: [CodeXX] ...` for failures.
    pub fn message(&self) -> String {
        match &self.outcome {
            Outcome::NoSequenceClaimed => "[Code00] (Answer: NO) Validation success \
                 (Note: This validator cannot ensure that whether a correct \
                 reconfiguration sequence does not exist for the input)"
                .to_string(),
            Outcome::Valid => {
                if self.duplicate_state {
                    "[Code02] (Answer: YES) Validation success, but there is some warning"
                        .to_string()
                } else {
                    "[Code01] (Answer: YES) Validation success without any warning".to_string()
                }
            }
            Outcome::StartMismatch => {
                "ValidationError: [Code10] The initial state must be equal to the start state"
                    .to_string()
            }
            Outcome::GoalMismatch => {
                "ValidationError: [Code11] The last state must be equal to the target state"
                    .to_string()
            }
            Outcome::NotIndependentSet { position } => format!(
                "ValidationError: [Code12] The {} state is not an independent set",
                ordinal(*position)
            ),
            Outcome::NotSingleMove { .. } => {
                "ValidationError: [Code13] Each independent set in the sequence results from \
                 the previous one by moving exactly one token to another node"
                    .to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        let valid = Report {
            outcome: Outcome::Valid,
            duplicate_state: false,
        };
        let warned = Report {
            outcome: Outcome::Valid,
            duplicate_state: true,
        };

        assert_eq!(valid.code(), "01");
        assert_eq!(warned.code(), "02");
        assert!(valid.is_success());
        assert!(warned.is_success());
    }

    #[test]
    fn test_failure_codes() {
        let start = Report {
            outcome: Outcome::StartMismatch,
            duplicate_state: false,
        };
        let goal = Report {
            outcome: Outcome::GoalMismatch,
            duplicate_state: false,
        };

        assert_eq!(start.code(), "10");
        assert_eq!(goal.code(), "11");
        assert!(!start.is_success());
        assert!(!goal.is_success());
    }

    #[test]
    fn test_independence_message_carries_ordinal() {
        let report = Report {
            outcome: Outcome::NotIndependentSet { position: 22 },
            duplicate_state: false,
        };

        assert_eq!(report.code(), "12");
        assert_eq!(
            report.message(),
            "ValidationError: [Code12] The 22nd state is not an independent set"
        );
    }
}
