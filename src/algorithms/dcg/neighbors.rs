//! Which agents' iterates an agent may average with.

use std::fmt::Debug;

/// Decides the consensus neighborhood of each agent.
///
/// Implementations return the indices whose current iterates agent `agent`
/// averages before its update; the agent itself should be included.
pub trait NeighborPolicy: Debug + Send + Sync {
    fn neighbors(&self, agent: usize, n_agents: usize) -> Vec<usize>;

    /// Returns a human-readable name for this policy.
    fn name(&self) -> &str;
}

/// Every agent sees every agent.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllToAll;

impl NeighborPolicy for AllToAll {
    fn neighbors(&self, _agent: usize, n_agents: usize) -> Vec<usize> {
        (0..n_agents).collect()
    }

    fn name(&self) -> &str {
        "all_to_all"
    }
}
