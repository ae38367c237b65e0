pub mod dcg;
pub mod error;
pub mod greedy;
pub mod snapshot;

pub use dcg::{AllToAll, DcgPlanner, NeighborPolicy};
pub use error::PlanningError;
pub use greedy::SequentialGreedy;
pub use snapshot::Snapshot;

use std::hash::Hash;

use crate::agent::CoverageAgent;

/// Algorithm choosing one action per agent for the next round.
///
/// # Type Parameters
///
/// * `A` - Agent type implementing [`CoverageAgent`]
pub trait CoveragePlanner<A: CoverageAgent> {
    /// Chooses an action for every agent and records it with
    /// [`CoverageAgent::set_intended_action`].
    ///
    /// Either every agent receives an intended action or, on error, none is
    /// modified.
    ///
    /// # Returns
    ///
    /// The [`Plan`] that was committed to the agents
    fn plan(&mut self, agents: &mut [A]) -> Result<Plan<A::Action>, PlanningError>;

    /// Returns a human-readable name for this planner.
    fn name(&self) -> &str;
}

impl<A, P> CoveragePlanner<A> for Box<P>
where
    A: CoverageAgent,
    P: CoveragePlanner<A> + ?Sized,
{
    fn plan(&mut self, agents: &mut [A]) -> Result<Plan<A::Action>, PlanningError> {
        (**self).plan(agents)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Outcome of one planning round.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan<L> {
    /// Chosen action label per agent.
    pub actions: Vec<L>,
    /// Position of the chosen action in each agent's successor list.
    pub action_indices: Vec<usize>,
    /// Final action probabilities per agent (one-hot for discrete planners).
    pub probabilities: Vec<Vec<f64>>,
    /// Coverage of the chosen joint action.
    pub coverage: usize,
}

impl<L: Clone> Plan<L> {
    /// Plan for an empty team.
    pub fn empty() -> Self {
        Self {
            actions: Vec::new(),
            action_indices: Vec::new(),
            probabilities: Vec::new(),
            coverage: 0,
        }
    }

    /// Builds a plan from chosen indices against `snapshot`.
    pub fn from_choices<C>(
        snapshot: &Snapshot<L, C>,
        action_indices: Vec<usize>,
        probabilities: Vec<Vec<f64>>,
    ) -> Self
    where
        C: Clone + Eq + Hash,
    {
        let mut chosen = vec![false; snapshot.dim()];
        for (agent, &j) in action_indices.iter().enumerate() {
            chosen[snapshot.block(agent).start + j] = true;
        }
        let actions = action_indices
            .iter()
            .enumerate()
            .map(|(agent, &j)| snapshot.label(agent, j).clone())
            .collect();
        Self {
            actions,
            coverage: snapshot.check_cost(&chosen),
            action_indices,
            probabilities,
        }
    }

    /// Writes the chosen actions into the agents.
    pub fn commit<A>(&self, agents: &mut [A])
    where
        A: CoverageAgent<Action = L>,
    {
        for (agent, action) in agents.iter_mut().zip(&self.actions) {
            agent.set_intended_action(action.clone());
        }
    }

    /// Number of agents the plan covers.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns true for a plan over an empty team.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
