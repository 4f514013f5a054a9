//! Hybrid driver execution.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::HybridConfig;
use crate::construction::ConstructionHeuristic;
use crate::perturbation::{perturbation, Phase};
use crate::sa::SaRunner;
use crate::tour::{DistanceMatrix, Tour};

/// Result of a hybrid ILS+SA run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HybridResult {
    /// Best tour found.
    pub best: Tour,
    /// Cost of the best tour.
    pub best_cost: f64,
    /// Outer iterations executed (the initial SA run not counted).
    pub iterations: usize,
    /// Outer iteration at which the best tour was found (0 = the initial
    /// SA run already produced it).
    pub best_iteration: usize,
    /// Whether cancelled externally.
    pub cancelled: bool,
    /// Best cost after the initial SA run and after each outer iteration.
    /// Non-increasing.
    pub cost_history: Vec<f64>,
}

/// Hybrid ILS+SA runner.
pub struct HybridRunner;

impl HybridRunner {
    /// Runs the hybrid driver end to end.
    ///
    /// Owns initial-tour construction: nearest neighbor for instances up
    /// to `construction_threshold` cities, a random tour above that. The
    /// embedded SA config's own seed is ignored; each inner annealing run
    /// gets a seed derived from the driver's RNG so the whole run is
    /// reproducible from `config.seed` alone.
    ///
    /// # Panics
    ///
    /// Panics if `config` fails validation, or on instances with fewer
    /// than 8 interior cities (the aggressive phase's double bridge
    /// requires them).
    pub fn run(dist: &DistanceMatrix, config: &HybridConfig) -> HybridResult {
        Self::run_with_cancel(dist, config, None)
    }

    /// Runs the hybrid driver with an optional cancellation token,
    /// checked between outer iterations and inside the inner annealer.
    pub fn run_with_cancel(
        dist: &DistanceMatrix,
        config: &HybridConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> HybridResult {
        config.validate().expect("invalid HybridConfig");

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let n = dist.num_cities();
        let heuristic = if n <= config.construction_threshold {
            ConstructionHeuristic::NearestNeighbor
        } else {
            ConstructionHeuristic::RandomTour
        };
        let initial = heuristic.build(dist, &mut rng);

        let sa_config = config.sa.clone().with_seed(rng.random());
        let first = SaRunner::run_with_cancel(dist, initial, &sa_config, cancel.clone());

        let mut best = first.best;
        let mut best_cost = first.best_cost;
        let mut best_iteration = 0;
        let mut cancelled = first.cancelled;

        let mut cost_history = vec![best_cost];
        let mut no_improvement = 0;
        let mut iterations = 0;

        for iteration in 0..config.iterations {
            if cancelled {
                break;
            }
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let progress = iteration as f64 / config.iterations as f64;
            let phase = Phase::from_progress(progress);
            let perturbed = perturbation(&best, phase, &mut rng);

            let sa_config = config.sa.clone().with_seed(rng.random());
            let annealed = SaRunner::run_with_cancel(dist, perturbed, &sa_config, cancel.clone());
            cancelled = annealed.cancelled;

            if annealed.best_cost < best_cost {
                best = annealed.best;
                best_cost = annealed.best_cost;
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

        HybridResult {
            best,
            best_cost,
            iterations,
            best_iteration,
            cancelled,
            cost_history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sa::SaConfig;

    fn random_points(n: usize, seed: u64) -> DistanceMatrix {
        let mut rng = StdRng::seed_from_u64(seed);
        let points: Vec<(f64, f64)> = (0..n)
            .map(|_| (rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)))
            .collect();
        DistanceMatrix::from_points(&points)
    }

    fn quick_config() -> HybridConfig {
        HybridConfig::default()
            .with_iterations(6)
            .with_sa(SaConfig::default().with_max_iterations(1500))
            .with_seed(42)
    }

    #[test]
    fn test_hybrid_returns_valid_tour_and_cost() {
        let dist = random_points(15, 42);
        let result = HybridRunner::run(&dist, &quick_config());

        assert!(result.best.is_valid(15));
        assert!((result.best.cost(&dist) - result.best_cost).abs() < 1e-9);
        assert!(result.iterations <= 6);
        assert!(result.best_iteration <= result.iterations);
    }

    #[test]
    fn test_hybrid_cost_history_non_increasing() {
        let dist = random_points(20, 7);
        let result = HybridRunner::run(&dist, &quick_config());

        for window in result.cost_history.windows(2) {
            assert!(
                window[1] <= window[0] + 1e-10,
                "best-cost history must be non-increasing: {} > {}",
                window[1],
                window[0]
            );
        }
    }

    #[test]
    fn test_hybrid_reproducible_with_seed() {
        let dist = random_points(12, 3);
        let config = quick_config();

        let a = HybridRunner::run(&dist, &config);
        let b = HybridRunner::run(&dist, &config);
        assert_eq!(a.best, b.best);
        assert_eq!(a.iterations, b.iterations);
    }

    #[test]
    fn test_hybrid_random_construction_above_threshold() {
        let dist = random_points(25, 9);
        let config = quick_config().with_construction_threshold(10);
        let result = HybridRunner::run(&dist, &config);
        assert!(result.best.is_valid(25));
    }

    #[test]
    fn test_hybrid_stagnation_stop() {
        let dist = random_points(12, 5);
        let config = quick_config()
            .with_iterations(1000)
            .with_max_no_improvement(3);
        let result = HybridRunner::run(&dist, &config);
        assert!(
            result.iterations < 1000,
            "expected stagnation stop, ran {} iterations",
            result.iterations
        );
    }

    #[test]
    fn test_hybrid_cancellation() {
        let dist = random_points(15, 1);
        let cancel = Arc::new(AtomicBool::new(true));
        let result = HybridRunner::run_with_cancel(&dist, &quick_config(), Some(cancel));
        assert!(result.cancelled);
        assert!(result.best.is_valid(15));
    }

    #[test]
    #[should_panic(expected = "invalid HybridConfig")]
    fn test_hybrid_rejects_bad_config() {
        let dist = random_points(10, 0);
        let config = HybridConfig::default().with_iterations(0);
        HybridRunner::run(&dist, &config);
    }
}
