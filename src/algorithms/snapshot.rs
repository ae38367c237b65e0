//! Immutable per-round view of the team used by the planners.
//!
//! Every successor footprint is observed once up front; the estimators then
//! only read this table, so planning is a pure function of the snapshot.

use std::collections::HashSet;
use std::hash::Hash;
use std::ops::Range;

use super::error::PlanningError;
use crate::agent::CoverageAgent;
use crate::objective::union_size;

/// Footprint table `[agent][action] -> observed cells`, plus action labels.
#[derive(Debug, Clone)]
pub struct Snapshot<L, C> {
    n_actions: usize,
    labels: Vec<Vec<L>>,
    footprints: Vec<Vec<HashSet<C>>>,
}

impl<L, C> Snapshot<L, C>
where
    L: Clone,
    C: Clone + Eq + Hash,
{
    /// Observes every successor of every agent.
    ///
    /// Fails if an agent has no successors or if agents disagree on the
    /// number of actions, since the flattened layout assumes a fixed stride.
    pub fn capture<A>(agents: &[A]) -> Result<Self, PlanningError>
    where
        A: CoverageAgent<Action = L, Cell = C>,
    {
        let mut n_actions = 0;
        let mut labels = Vec::with_capacity(agents.len());
        let mut footprints = Vec::with_capacity(agents.len());

        for (i, agent) in agents.iter().enumerate() {
            let successors = agent.successors();
            if successors.is_empty() {
                return Err(PlanningError::NoSuccessors { agent: i });
            }
            if i == 0 {
                n_actions = successors.len();
            } else if successors.len() != n_actions {
                return Err(PlanningError::ActionCountMismatch {
                    agent: i,
                    expected: n_actions,
                    found: successors.len(),
                });
            }

            let (row_fp, row_labels): (Vec<_>, Vec<_>) = successors
                .into_iter()
                .map(|(state, label)| (agent.observe(&state), label))
                .unzip();
            footprints.push(row_fp);
            labels.push(row_labels);
        }

        Ok(Self {
            n_actions,
            labels,
            footprints,
        })
    }

    pub fn n_agents(&self) -> usize {
        self.footprints.len()
    }

    pub fn n_actions(&self) -> usize {
        self.n_actions
    }

    /// Length of the flattened action-probability vector.
    pub fn dim(&self) -> usize {
        self.n_agents() * self.n_actions
    }

    /// Coordinates of `agent`'s block in the flattened vector.
    pub fn block(&self, agent: usize) -> Range<usize> {
        agent * self.n_actions..(agent + 1) * self.n_actions
    }

    pub fn footprint(&self, agent: usize, action: usize) -> &HashSet<C> {
        &self.footprints[agent][action]
    }

    pub fn label(&self, agent: usize, action: usize) -> &L {
        &self.labels[agent][action]
    }

    /// Coverage of a 0/1 sample over the flattened action vector.
    ///
    /// Every active coordinate contributes its footprint, so an agent with
    /// several active actions unions all of them and an agent with none
    /// contributes nothing. Samples drawn for gradient estimation are not
    /// one-hot and rely on this.
    pub fn check_cost(&self, sample: &[bool]) -> usize {
        debug_assert_eq!(sample.len(), self.dim());
        let active = sample
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .map(|(k, _)| self.footprint(k / self.n_actions, k % self.n_actions));
        union_size(active)
    }
}
