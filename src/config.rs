//! Configuration for the planners and the coverage simulation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::algorithms::PlanningError;

/// Configuration for the Decentralized Continuous Greedy planner.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlannerConfig {
    /// Number of Frank-Wolfe rounds T.
    pub iterations: usize,
    /// Monte-Carlo trials per gradient estimate.
    pub batch_size: usize,
    /// Communication radius. Reserved for a range-limited neighbor policy;
    /// it currently has no effect.
    pub radius: Option<f64>,
    /// Spread gradient trials across the rayon thread pool.
    pub parallel: bool,
    /// Seed for the sampling RNG. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl PlannerConfig {
    /// Rejects settings that leave the optimizer with nothing to do.
    pub fn validate(&self) -> Result<(), PlanningError> {
        if self.iterations == 0 {
            return Err(PlanningError::ZeroIterations);
        }
        if self.batch_size == 0 {
            return Err(PlanningError::ZeroBatchSize);
        }
        Ok(())
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            iterations: 10,
            batch_size: 20,
            radius: Some(3.0),
            parallel: false,
            seed: None,
        }
    }
}

/// Configuration for the outer simulation loop.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimulationConfig {
    /// Number of planning rounds to simulate.
    pub rounds: usize,
    /// Number of agents spawned.
    pub n_agents: usize,
    /// Side length of each agent's square sensing area.
    pub sensing_radius: u32,
    /// Width of the spawn area.
    pub width: i32,
    /// Height of the spawn area.
    pub height: i32,
    /// Seed for agent placement.
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rounds: 5,
            n_agents: 5,
            sensing_radius: 2,
            width: 10,
            height: 10,
            seed: 42,
        }
    }
}
