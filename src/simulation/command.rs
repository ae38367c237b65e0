//! Explicit movement commands.
//!
//! Planning only records intended actions; agents move when the simulation
//! applies the resulting commands in one step.

use crate::grid::{Action, GridAgent};

/// Move `agent` (an index into the team) by `action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionCommand {
    pub agent: usize,
    pub action: Action,
}

impl ActionCommand {
    pub fn new(agent: usize, action: Action) -> Self {
        Self { agent, action }
    }
}

/// Applies every command to its agent. Commands naming a missing agent are
/// ignored.
pub fn apply_actions(agents: &mut [GridAgent], commands: &[ActionCommand]) {
    for command in commands {
        if let Some(agent) = agents.get_mut(command.agent) {
            agent.step(command.action);
        }
    }
}
