//! The interface planners use to query and instruct agents.

use std::collections::HashSet;
use std::hash::Hash;

/// An agent that can be planned for by a [`CoveragePlanner`](crate::algorithms::CoveragePlanner).
///
/// Planners only read the agent through [`state`](Self::state),
/// [`successors`](Self::successors) and [`observe`](Self::observe), and record
/// the chosen move with [`set_intended_action`](Self::set_intended_action).
/// Applying the intended action is left to the simulation loop.
///
/// # Type Parameters
///
/// * `State` - Discrete agent state (e.g. a grid cell)
/// * `Action` - Action label returned alongside each successor
/// * `Cell` - Observed cell coordinate; coverage is the size of a union of these
pub trait CoverageAgent {
    type State: Clone;
    type Action: Clone;
    type Cell: Clone + Eq + Hash;

    /// Current discrete state.
    fn state(&self) -> Self::State;

    /// Candidate next states paired with the action that reaches them.
    ///
    /// The sequence has the same length and order for every agent within a
    /// planning round; position `j` always refers to the same action.
    fn successors(&self) -> Vec<(Self::State, Self::Action)>;

    /// Cells observed from a hypothetical `state`.
    fn observe(&self, state: &Self::State) -> HashSet<Self::Cell>;

    /// Records the action chosen by a planner.
    fn set_intended_action(&mut self, action: Self::Action);
}
