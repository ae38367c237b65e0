//! Grid agent state and dynamics.

use std::collections::HashSet;

use super::observation::ObservationModel;
use super::types::{Action, ActionSet, Cell};
use crate::agent::CoverageAgent;
use crate::Id;

/// A single agent moving on the grid.
///
/// Each agent has a cell, the team's shared action list, an observation
/// footprint, and the action most recently chosen for it by a planner.
#[derive(Debug, Clone)]
pub struct GridAgent {
    /// Unique identifier for this agent.
    pub id: Id,
    /// Current cell.
    pub cell: Cell,
    actions: ActionSet,
    observation: ObservationModel,
    intended: Action,
}

impl GridAgent {
    /// Creates a new agent whose intended action is [`Action::Stay`].
    pub fn new(id: Id, cell: Cell, actions: ActionSet, observation: ObservationModel) -> Self {
        Self {
            id,
            cell,
            actions,
            observation,
            intended: Action::Stay,
        }
    }

    /// Creates an agent with a freshly generated id.
    pub fn spawn(cell: Cell, actions: ActionSet, observation: ObservationModel) -> Self {
        Self::new(crate::generate_id(), cell, actions, observation)
    }

    /// The action recorded by the last planning round.
    pub fn intended_action(&self) -> Action {
        self.intended
    }

    /// Moves the agent by `action`.
    pub fn step(&mut self, action: Action) {
        self.cell = action.apply(self.cell);
    }
}

impl CoverageAgent for GridAgent {
    type State = Cell;
    type Action = Action;
    type Cell = Cell;

    fn state(&self) -> Cell {
        self.cell
    }

    fn successors(&self) -> Vec<(Cell, Action)> {
        self.actions
            .iter()
            .map(|action| (action.apply(self.cell), *action))
            .collect()
    }

    fn observe(&self, state: &Cell) -> HashSet<Cell> {
        self.observation.observe(*state)
    }

    fn set_intended_action(&mut self, action: Action) {
        self.intended = action;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent_at(x: i32, y: i32) -> GridAgent {
        GridAgent::new(
            "a1".into(),
            Cell::new(x, y),
            ActionSet::default(),
            ObservationModel::square(2),
        )
    }

    #[test]
    fn successors_follow_action_order() {
        let agent = agent_at(5, 5);
        let succ = agent.successors();
        assert_eq!(succ.len(), 5);
        assert_eq!(succ[0], (Cell::new(5, 5), Action::Stay));
        assert_eq!(succ[1], (Cell::new(5, 6), Action::Up));
        assert_eq!(succ[4], (Cell::new(6, 5), Action::Right));
    }

    #[test]
    fn planning_does_not_move_agent() {
        let mut agent = agent_at(1, 1);
        agent.set_intended_action(Action::Down);
        assert_eq!(agent.cell, Cell::new(1, 1));
        assert_eq!(agent.intended_action(), Action::Down);
    }

    #[test]
    fn step_applies_displacement() {
        let mut agent = agent_at(1, 1);
        agent.step(Action::Left);
        assert_eq!(agent.cell, Cell::new(0, 1));
    }

    #[test]
    fn spawned_agents_get_distinct_ids() {
        let spawn = || {
            GridAgent::spawn(
                Cell::origin(),
                ActionSet::default(),
                ObservationModel::single_cell(),
            )
        };
        let (a, b) = (spawn(), spawn());
        assert_ne!(a.id, b.id);
    }
}
