//! Decentralized Continuous Greedy (DCG) planner.
//!
//! Each agent keeps its own copy `y_i` of the flattened action-probability
//! vector (one block of `n_actions` entries per agent). For `t = 1..=T`, and
//! for each agent `i` in order:
//!
//! 1. Estimate the gradient of the multilinear extension at `y_i`
//!    ([`gradient`]) against the whole team.
//! 2. Keep only agent `i`'s block, renormalized ([`projection`]).
//! 3. Average the current iterates of `i`'s neighbors ([`neighbors`]).
//! 4. Set `y_i` to the average plus `1/t` times the projected gradient, with
//!    agent `i`'s block renormalized.
//!
//! Agents updated earlier in a round feed their new iterates into the average
//! seen by later agents of the same round. After the last round every agent
//! takes the argmax of its own block.
//!
//! # Module Structure
//!
//! - [`gradient`] - Monte-Carlo gradient oracle, sequential and parallel
//! - [`projection`] - Per-agent simplex renormalization
//! - [`neighbors`] - Consensus neighborhood policy

pub mod gradient;
pub mod neighbors;
pub mod projection;

#[cfg(test)]
mod tests;

use std::hash::Hash;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, trace};

use super::error::PlanningError;
use super::snapshot::Snapshot;
use super::{CoveragePlanner, Plan};
use crate::agent::CoverageAgent;
use crate::config::PlannerConfig;

pub use gradient::GradientOracle;
pub use neighbors::{AllToAll, NeighborPolicy};
pub use projection::project;

/// Decentralized Continuous Greedy planner.
#[derive(Debug)]
pub struct DcgPlanner {
    config: PlannerConfig,
    neighbors: Box<dyn NeighborPolicy>,
    rng: StdRng,
}

impl DcgPlanner {
    /// Creates a planner where every agent averages with the whole team.
    pub fn new(config: PlannerConfig) -> Self {
        Self::with_neighbor_policy(config, Box::new(AllToAll))
    }

    /// Creates a planner with a custom consensus neighborhood.
    pub fn with_neighbor_policy(config: PlannerConfig, neighbors: Box<dyn NeighborPolicy>) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            neighbors,
            rng,
        }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Runs `T` rounds of the continuous-greedy update.
    ///
    /// Returns every agent's final copy of the flattened probability vector.
    pub fn optimize<L, C>(
        &mut self,
        snapshot: &Snapshot<L, C>,
    ) -> Result<Vec<Vec<f64>>, PlanningError>
    where
        L: Clone + Sync,
        C: Clone + Eq + Hash + Sync,
    {
        self.config.validate()?;

        let n_agents = snapshot.n_agents();
        let n_actions = snapshot.n_actions();
        let dim = snapshot.dim();
        if n_agents == 0 {
            return Ok(Vec::new());
        }

        let oracle = GradientOracle::new(snapshot, self.config.batch_size);
        let mut y = vec![vec![1.0 / n_actions as f64; dim]; n_agents];

        for t in 1..=self.config.iterations {
            let step = 1.0 / t as f64;
            for i in 0..n_agents {
                let grad = if self.config.parallel {
                    oracle.estimate_parallel(&y[i], &mut self.rng)
                } else {
                    oracle.estimate(&y[i], &mut self.rng)
                };
                let direction = project(&grad, i, n_actions, true)?;

                let mut next = self.consensus(&y, i);
                for (v, d) in next.iter_mut().zip(&direction) {
                    *v += step * d;
                }
                y[i] = project(&next, i, n_actions, false)?;
            }
            trace!(iteration = t, "dcg iteration complete");
        }

        Ok(y)
    }

    /// Coordinate-wise mean of the iterates agent `agent` may see.
    fn consensus(&self, y: &[Vec<f64>], agent: usize) -> Vec<f64> {
        let peers = self.neighbors.neighbors(agent, y.len());
        if peers.is_empty() {
            return y[agent].clone();
        }
        let mut avg = vec![0.0; y[agent].len()];
        for &j in &peers {
            for (a, v) in avg.iter_mut().zip(&y[j]) {
                *a += v;
            }
        }
        let n = peers.len() as f64;
        avg.iter_mut().for_each(|a| *a /= n);
        avg
    }

    /// Rounds each agent's own block to its most likely action.
    ///
    /// Ties go to the earliest action in successor order.
    pub fn round<L, C>(snapshot: &Snapshot<L, C>, y: &[Vec<f64>]) -> Plan<L>
    where
        L: Clone,
        C: Clone + Eq + Hash,
    {
        let probabilities: Vec<Vec<f64>> = y
            .iter()
            .enumerate()
            .map(|(i, yi)| yi[snapshot.block(i)].to_vec())
            .collect();
        let indices = probabilities.iter().map(|row| argmax(row)).collect();
        Plan::from_choices(snapshot, indices, probabilities)
    }
}

fn argmax(row: &[f64]) -> usize {
    let mut best = 0;
    for (j, p) in row.iter().enumerate().skip(1) {
        if *p > row[best] {
            best = j;
        }
    }
    best
}

impl<A> CoveragePlanner<A> for DcgPlanner
where
    A: CoverageAgent,
    A::Action: Sync,
    A::Cell: Sync,
{
    fn plan(&mut self, agents: &mut [A]) -> Result<Plan<A::Action>, PlanningError> {
        self.config.validate()?;
        if agents.is_empty() {
            return Ok(Plan::empty());
        }

        let snapshot = Snapshot::capture(agents)?;
        let y = self.optimize(&snapshot)?;
        let plan = Self::round(&snapshot, &y);
        debug!(
            agents = plan.len(),
            iterations = self.config.iterations,
            batch_size = self.config.batch_size,
            coverage = plan.coverage,
            "dcg round planned"
        );
        plan.commit(agents);
        Ok(plan)
    }

    fn name(&self) -> &str {
        "dcg"
    }
}
