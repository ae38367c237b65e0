//! coverswarm - multi-agent area coverage planning on a discrete grid.
//!
//! A team of agents picks one discrete move per round so that the union of
//! the cells they observe is as large as possible. Two planners are provided:
//! a sequential greedy baseline and Decentralized Continuous Greedy (DCG),
//! which optimizes the multilinear extension of the coverage objective with
//! stochastic gradients and rounds the result back to one action per agent.

pub mod agent;
pub mod algorithms;
pub mod config;
pub mod grid;
pub mod objective;
pub mod simulation;

pub use agent::CoverageAgent;
pub use algorithms::{CoveragePlanner, DcgPlanner, Plan, PlanningError, SequentialGreedy};
pub use config::{PlannerConfig, SimulationConfig};
pub use objective::{compute_cost, coverage_cost};

/// Identifier type used for agents.
pub type Id = String;

/// Generates a new unique identifier (UUID v4).
pub fn generate_id() -> Id {
    uuid::Uuid::new_v4().to_string()
}
