//! Sequential greedy baseline.
//!
//! Agents are visited in input order. Each picks the successor whose footprint
//! adds the most cells to those already claimed by earlier agents, then
//! claims its footprint. The first maximal successor wins ties.

use std::collections::HashSet;

use tracing::debug;

use super::error::PlanningError;
use super::{CoveragePlanner, Plan};
use crate::agent::CoverageAgent;

/// Sequential greedy planner for coverage.
///
/// Gives the classic 1/2 approximation for monotone submodular objectives
/// under a one-action-per-agent constraint. Deterministic. Agents may offer
/// different numbers of actions.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialGreedy;

impl SequentialGreedy {
    /// Creates a new sequential greedy planner.
    pub fn new() -> Self {
        Self
    }

    /// Chooses actions for `agents` without touching any of them.
    ///
    /// # Errors
    ///
    /// [`PlanningError::NoSuccessors`] if an agent offers no action.
    pub fn choose<A: CoverageAgent>(
        &self,
        agents: &[A],
    ) -> Result<Plan<A::Action>, PlanningError> {
        let mut claimed: HashSet<A::Cell> = HashSet::new();
        let mut plan = Plan::empty();

        for (i, agent) in agents.iter().enumerate() {
            let successors = agent.successors();
            if successors.is_empty() {
                return Err(PlanningError::NoSuccessors { agent: i });
            }

            let mut best: Option<(usize, HashSet<A::Cell>)> = None;
            let mut best_cost = 0usize;
            for (j, (state, _)) in successors.iter().enumerate() {
                let footprint = agent.observe(state);
                let fresh = footprint.iter().filter(|c| !claimed.contains(*c)).count();
                let cost = claimed.len() + fresh;
                if best.is_none() || cost > best_cost {
                    best = Some((j, footprint));
                    best_cost = cost;
                }
            }

            if let Some((j, footprint)) = best {
                claimed.extend(footprint);
                let mut row = vec![0.0; successors.len()];
                row[j] = 1.0;
                plan.actions.push(successors[j].1.clone());
                plan.action_indices.push(j);
                plan.probabilities.push(row);
            }
        }

        plan.coverage = claimed.len();
        Ok(plan)
    }
}

impl<A: CoverageAgent> CoveragePlanner<A> for SequentialGreedy {
    fn plan(&mut self, agents: &mut [A]) -> Result<Plan<A::Action>, PlanningError> {
        let plan = self.choose(agents)?;
        debug!(
            agents = plan.len(),
            coverage = plan.coverage,
            "sequential greedy round planned"
        );
        plan.commit(agents);
        Ok(plan)
    }

    fn name(&self) -> &str {
        "sequential_greedy"
    }
}
