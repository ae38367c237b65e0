use thiserror::Error;

/// Errors raised by the coverage planners.
///
/// All of them are detected before any agent's intended action is written,
/// so a failed round leaves every agent untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlanningError {
    #[error("Iteration count must be at least 1")]
    ZeroIterations,

    #[error("Gradient batch size must be at least 1")]
    ZeroBatchSize,

    #[error("Agent {agent} has no successors")]
    NoSuccessors { agent: usize },

    #[error("Agent {agent} offers {found} actions, expected {expected}")]
    ActionCountMismatch {
        agent: usize,
        expected: usize,
        found: usize,
    },

    #[error("Probability sub-vector of agent {agent} sums to zero")]
    DegenerateSubvector { agent: usize },
}
