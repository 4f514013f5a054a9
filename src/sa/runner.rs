//! SA execution loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::SaConfig;
use crate::construction::ConstructionHeuristic;
use crate::neighborhood::two_opt_single_neighbor;
use crate::tour::{DistanceMatrix, Tour};

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaResult {
    /// The best tour found.
    pub best: Tour,

    /// Cost of the best tour.
    pub best_cost: f64,

    /// Total number of micro-steps (neighbor evaluations).
    pub iterations: usize,

    /// Final temperature when the run stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,

    /// Whether cancelled externally.
    pub cancelled: bool,

    /// Best cost sampled once per temperature block.
    pub cost_history: Vec<f64>,
}

/// Executes the Simulated Annealing algorithm on a tour.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA from the supplied initial tour.
    ///
    /// # Panics
    ///
    /// Panics if `config` fails validation or the initial tour violates
    /// the tour invariants.
    pub fn run(dist: &DistanceMatrix, initial: Tour, config: &SaConfig) -> SaResult {
        Self::run_with_cancel(dist, initial, config, None)
    }

    /// Runs SA with an optional cancellation token.
    ///
    /// The flag is checked between temperature blocks, never mid-move, so
    /// a cancelled run still returns a valid best tour.
    pub fn run_with_cancel(
        dist: &DistanceMatrix,
        initial: Tour,
        config: &SaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> SaResult {
        config.validate().expect("invalid SaConfig");
        let n = dist.num_cities();
        assert!(initial.is_valid(n), "initial tour violates tour invariants");

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut current_cost = initial.cost(dist);
        let mut current = initial;
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut temperature = config.initial_temperature;
        let mut total_iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut cancelled = false;

        let mut cost_history = vec![best_cost];

        while temperature > config.min_temperature && total_iterations < config.max_iterations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            for _ in 0..config.iterations_per_temperature {
                if total_iterations >= config.max_iterations {
                    break;
                }
                total_iterations += 1;

                let neighbor = two_opt_single_neighbor(&current, &mut rng);
                let neighbor_cost = neighbor.cost(dist);
                let delta = neighbor_cost - current_cost;

                if delta < 0.0 {
                    improving_moves += 1;
                }
                if metropolis(delta, temperature, &mut rng) {
                    current = neighbor;
                    current_cost = neighbor_cost;
                    accepted_moves += 1;

                    if current_cost < best_cost {
                        best = current.clone();
                        best_cost = current_cost;
                    }
                }
            }

            cost_history.push(best_cost);
            temperature *= config.alpha;
        }

        SaResult {
            best,
            best_cost,
            iterations: total_iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            cancelled,
            cost_history,
        }
    }

    /// Runs SA end to end, owning initial-tour construction: nearest
    /// neighbor for instances up to 2000 cities, a random tour above that
    /// (greedy construction is O(n²) and would dominate very large runs).
    pub fn run_complete(dist: &DistanceMatrix, config: &SaConfig) -> SaResult {
        config.validate().expect("invalid SaConfig");

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let heuristic = if dist.num_cities() <= 2000 {
            ConstructionHeuristic::NearestNeighbor
        } else {
            ConstructionHeuristic::RandomTour
        };
        let initial = heuristic.build(dist, &mut rng);

        Self::run(dist, initial, config)
    }
}

/// Metropolis acceptance criterion: always accept improvements, accept a
/// worsening of `delta` with probability `exp(-delta / temperature)`.
fn metropolis<R: Rng>(delta: f64, temperature: f64, rng: &mut R) -> bool {
    if delta < 0.0 {
        return true;
    }
    if temperature <= 0.0 {
        return false;
    }
    rng.random_range(0.0..1.0) < (-delta / temperature).exp()
}
