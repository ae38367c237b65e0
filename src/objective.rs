//! The coverage objective: number of distinct cells observed by a team.
//!
//! Coverage is a monotone submodular set function of the (agent, state)
//! assignments, which is what the greedy and continuous-greedy guarantees
//! rely on.

use std::collections::HashSet;
use std::hash::Hash;

use crate::agent::CoverageAgent;

/// Size of the union of the cells observed by each `(agent, state)` pair.
pub fn coverage_cost<'a, A, I>(assignments: I) -> usize
where
    A: CoverageAgent + 'a,
    I: IntoIterator<Item = (&'a A, A::State)>,
{
    let mut observed: HashSet<A::Cell> = HashSet::new();
    for (agent, state) in assignments {
        observed.extend(agent.observe(&state));
    }
    observed.len()
}

/// Coverage of the agents at their current states.
pub fn compute_cost<A: CoverageAgent>(agents: &[A]) -> usize {
    coverage_cost(agents.iter().map(|a| (a, a.state())))
}

/// Size of the union of already-materialized footprints.
pub fn union_size<'a, C, I>(footprints: I) -> usize
where
    C: Eq + Hash + 'a,
    I: IntoIterator<Item = &'a HashSet<C>>,
{
    let mut observed: HashSet<&C> = HashSet::new();
    for footprint in footprints {
        observed.extend(footprint.iter());
    }
    observed.len()
}
