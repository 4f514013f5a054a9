//! ILS execution engine.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::config::IlsConfig;
use crate::local_search::{local_search, local_search_optimized};
use crate::neighborhood::Neighborhood;
use crate::perturbation::multi_swap;
use crate::tour::{DistanceMatrix, Tour};

/// Result of an ILS run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IlsResult {
    /// Best tour found.
    pub best: Tour,
    /// Cost of the best tour.
    pub best_cost: f64,
    /// Outer iterations executed.
    pub iterations: usize,
    /// Iteration at which the best tour was found (0 = the initial
    /// local search already produced it).
    pub best_iteration: usize,
    /// Best cost after each outer iteration. Non-increasing.
    pub cost_history: Vec<f64>,
}

/// Iterated Local Search runner.
pub struct IlsRunner;

impl IlsRunner {
    /// Executes ILS from the supplied initial tour.
    ///
    /// The initial tour is first driven to a 2-opt local optimum; each
    /// iteration then perturbs the best tour with `max(1, n/swap_divisor)`
    /// random exchanges and re-optimizes. Instances larger than
    /// `optimized_threshold` use the delta-evaluated local search after
    /// perturbation.
    ///
    /// # Panics
    ///
    /// Panics if `config` fails validation or the initial tour violates
    /// the tour invariants.
    pub fn run(dist: &DistanceMatrix, initial: Tour, config: &IlsConfig) -> IlsResult {
        config.validate().expect("invalid IlsConfig");
        let n = dist.num_cities();
        assert!(initial.is_valid(n), "initial tour violates tour invariants");

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut best = local_search_optimized(dist, &initial);
        let mut best_cost = best.cost(dist);
        let mut best_iteration = 0;

        let swaps = (n / config.swap_divisor).max(1);

        let mut cost_history = Vec::with_capacity(config.max_iterations);
        let mut no_improvement = 0;
        let mut iterations = 0;

        for iteration in 0..config.max_iterations {
            let perturbed = multi_swap(&best, swaps, &mut rng);

            let candidate = if n > config.optimized_threshold {
                local_search_optimized(dist, &perturbed)
            } else {
                local_search(dist, &perturbed, Neighborhood::TwoOptFull, &mut rng)
            };
            let candidate_cost = candidate.cost(dist);

            if candidate_cost < best_cost {
                best = candidate;
                best_cost = candidate_cost;
                best_iteration = iteration + 1;
                no_improvement = 0;
            } else {
                no_improvement += 1;
            }

            iterations += 1;
            cost_history.push(best_cost);

            if no_improvement >= config.max_no_improvement {
                break;
            }
        }

        IlsResult {
            best,
            best_cost,
            iterations,
            best_iteration,
            cost_history,
        }
    }
}
