//! Coverage simulation loop.
//!
//! Each round follows: measure coverage, plan, apply actions, measure again.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use super::command::{apply_actions, ActionCommand};
use crate::algorithms::{CoveragePlanner, PlanningError};
use crate::config::SimulationConfig;
use crate::grid::{Action, ActionSet, Cell, GridAgent, ObservationModel};
use crate::objective::compute_cost;

/// Result of a single simulated round.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundReport {
    /// Round number, starting at 1.
    pub round: usize,
    /// Coverage before the agents moved.
    pub coverage_before: usize,
    /// Coverage the planner predicted for its joint action.
    pub planned_coverage: usize,
    /// Coverage after the agents moved.
    pub coverage_after: usize,
    /// Action applied to each agent.
    pub actions: Vec<Action>,
}

/// A team of grid agents driven by a planner.
///
/// # Lifecycle
///
/// 1. Build with [`Simulator::new`] or [`Simulator::spawn`].
/// 2. Call [`Simulator::step`] (or [`Simulator::run`]) once per round.
/// 3. Inspect [`RoundReport`]s for coverage telemetry.
#[derive(Debug)]
pub struct Simulator<P> {
    agents: Vec<GridAgent>,
    planner: P,
    round: usize,
}

impl<P: CoveragePlanner<GridAgent>> Simulator<P> {
    /// Creates a simulator over an existing team.
    pub fn new(agents: Vec<GridAgent>, planner: P) -> Self {
        Self {
            agents,
            planner,
            round: 0,
        }
    }

    /// Places `config.n_agents` agents uniformly at random in the
    /// `width x height` area, all sharing the default action list.
    pub fn spawn(config: &SimulationConfig, planner: P) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let actions = ActionSet::default();
        let agents = (0..config.n_agents)
            .map(|_| {
                let cell = Cell::new(
                    rng.gen_range(0..config.width.max(1)),
                    rng.gen_range(0..config.height.max(1)),
                );
                GridAgent::spawn(
                    cell,
                    actions.clone(),
                    ObservationModel::square(config.sensing_radius),
                )
            })
            .collect();
        Self::new(agents, planner)
    }

    pub fn agents(&self) -> &[GridAgent] {
        &self.agents
    }

    pub fn planner(&self) -> &P {
        &self.planner
    }

    /// Number of rounds simulated so far.
    pub fn round(&self) -> usize {
        self.round
    }

    /// Cells currently observed by the team.
    pub fn coverage(&self) -> usize {
        compute_cost(&self.agents)
    }

    /// Plans one round and moves every agent.
    ///
    /// If planning fails no agent moves and the round counter is unchanged.
    pub fn step(&mut self) -> Result<RoundReport, PlanningError> {
        let coverage_before = self.coverage();
        let plan = self.planner.plan(&mut self.agents)?;

        let commands: Vec<ActionCommand> = self
            .agents
            .iter()
            .enumerate()
            .map(|(agent, a)| ActionCommand::new(agent, a.intended_action()))
            .collect();
        apply_actions(&mut self.agents, &commands);

        self.round += 1;
        let report = RoundReport {
            round: self.round,
            coverage_before,
            planned_coverage: plan.coverage,
            coverage_after: self.coverage(),
            actions: commands.iter().map(|c| c.action).collect(),
        };
        info!(
            planner = self.planner.name(),
            round = report.round,
            coverage_before = report.coverage_before,
            coverage_after = report.coverage_after,
            "round simulated"
        );
        Ok(report)
    }

    /// Simulates `rounds` consecutive rounds.
    pub fn run(&mut self, rounds: usize) -> Result<Vec<RoundReport>, PlanningError> {
        (0..rounds).map(|_| self.step()).collect()
    }
}
