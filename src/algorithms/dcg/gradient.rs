//! Stochastic gradient of the multilinear extension of coverage.
//!
//! For the multilinear extension `F(x) = E[f(S)]`, with `S` containing each
//! coordinate `k` independently with probability `x_k`, the partial
//! derivative is `E[f(S + k) - f(S - k)]`. Each trial draws one `S` and
//! evaluates that difference for every coordinate.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::algorithms::snapshot::Snapshot;

/// Monte-Carlo gradient estimator over a planning snapshot.
///
/// Costs `batch_size * dim` coverage evaluations per estimate.
#[derive(Debug)]
pub struct GradientOracle<'s, L, C> {
    snapshot: &'s Snapshot<L, C>,
    batch_size: usize,
}

impl<'s, L, C> GradientOracle<'s, L, C>
where
    L: Clone,
    C: Clone + Eq + std::hash::Hash,
{
    pub fn new(snapshot: &'s Snapshot<L, C>, batch_size: usize) -> Self {
        Self {
            snapshot,
            batch_size,
        }
    }

    /// Averages `batch_size` single-sample estimates drawn from `rng`.
    pub fn estimate<R: Rng>(&self, x: &[f64], rng: &mut R) -> Vec<f64> {
        let mut grad = vec![0.0; x.len()];
        for _ in 0..self.batch_size {
            let g = self.trial(x, rng);
            accumulate(&mut grad, &g);
        }
        self.finish(grad)
    }

    /// Same estimator with trials spread over the rayon pool.
    ///
    /// Each trial gets its own RNG seeded from `rng`, so the estimate has the
    /// same distribution as [`estimate`](Self::estimate) but not the same bits.
    pub fn estimate_parallel<R: Rng>(&self, x: &[f64], rng: &mut R) -> Vec<f64>
    where
        L: Sync,
        C: Sync,
    {
        let seeds: Vec<u64> = (0..self.batch_size).map(|_| rng.gen()).collect();
        let grad = seeds
            .into_par_iter()
            .map(|seed| {
                let mut trial_rng = StdRng::seed_from_u64(seed);
                self.trial(x, &mut trial_rng)
            })
            .reduce(
                || vec![0.0; x.len()],
                |mut acc, g| {
                    accumulate(&mut acc, &g);
                    acc
                },
            );
        self.finish(grad)
    }

    /// One finite-difference estimate at a single Bernoulli sample of `x`.
    fn trial<R: Rng>(&self, x: &[f64], rng: &mut R) -> Vec<f64> {
        let mut sample: Vec<bool> = x.iter().map(|&p| rng.gen::<f64>() < p).collect();
        let mut g = vec![0.0; x.len()];
        for k in 0..sample.len() {
            let drawn = sample[k];
            sample[k] = true;
            let cost_plus = self.snapshot.check_cost(&sample);
            sample[k] = false;
            let cost_minus = self.snapshot.check_cost(&sample);
            sample[k] = drawn;
            g[k] = cost_plus as f64 - cost_minus as f64;
        }
        g
    }

    fn finish(&self, mut grad: Vec<f64>) -> Vec<f64> {
        let n = self.batch_size as f64;
        grad.iter_mut().for_each(|g| *g /= n);
        grad
    }
}

fn accumulate(acc: &mut [f64], g: &[f64]) {
    for (a, b) in acc.iter_mut().zip(g) {
        *a += b;
    }
}
