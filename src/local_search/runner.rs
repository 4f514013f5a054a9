//! Local-search execution.

use rand::Rng;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::neighborhood::Neighborhood;
use crate::tour::{DistanceMatrix, Tour};

/// Improvement threshold: moves must beat the current cost by more than
/// this margin, so floating-point noise cannot make the scan cycle.
const EPS: f64 = 1e-10;

/// Hill-climbs `tour` to a local optimum of the given neighborhood.
///
/// Uses best-improvement selection: each round the full neighborhood is
/// enumerated, costs are evaluated, and the search moves to the lowest-cost
/// neighbor if it strictly improves on the current tour. Ties break toward
/// the first neighbor in enumeration order, so the result is deterministic
/// for the full neighborhoods (`Swap`, `TwoOptFull`).
///
/// With [`Neighborhood::TwoOptSingleRandom`] this degenerates to a
/// stochastic descent that stops at the first non-improving sample; the
/// full neighborhoods are the intended use.
pub fn local_search<R: Rng>(
    dist: &DistanceMatrix,
    tour: &Tour,
    neighborhood: Neighborhood,
    rng: &mut R,
) -> Tour {
    let mut current = tour.clone();
    let mut current_cost = current.cost(dist);

    loop {
        let mut neighbors = neighborhood.neighbors(&current, rng);
        if neighbors.is_empty() {
            break;
        }

        let costs = neighbor_costs(dist, &neighbors);
        let mut best_idx = 0;
        for (idx, &cost) in costs.iter().enumerate() {
            if cost < costs[best_idx] {
                best_idx = idx;
            }
        }

        if costs[best_idx] < current_cost - EPS {
            current_cost = costs[best_idx];
            current = neighbors.swap_remove(best_idx);
        } else {
            break;
        }
    }

    current
}

#[cfg(feature = "parallel")]
fn neighbor_costs(dist: &DistanceMatrix, neighbors: &[Tour]) -> Vec<f64> {
    neighbors.par_iter().map(|t| t.cost(dist)).collect()
}

#[cfg(not(feature = "parallel"))]
fn neighbor_costs(dist: &DistanceMatrix, neighbors: &[Tour]) -> Vec<f64> {
    neighbors.iter().map(|t| t.cost(dist)).collect()
}

/// 2-opt local search with O(1) delta evaluation.
///
/// Instead of materializing neighbor tours, the cost change of reversing
/// `[i..=j]` is computed from the four changed-edge endpoints
/// `a = t[i-1]`, `b = t[i]`, `c = t[j]`, `d = t[j+1]`:
///
/// ```text
/// delta = (d(a,c) + d(b,d)) - (d(a,b) + d(c,d))
/// ```
///
/// The scan covers `i` in `[1, n-1)`, `j` in `[i+2, n-1)`; on the first
/// improving pair the reversal is applied in place and the scan restarts
/// (first-improvement). The terminal tour satisfies the same
/// local-optimality criterion as [`local_search`] with
/// [`Neighborhood::TwoOptFull`]; only the traversal strategy differs.
pub fn local_search_optimized(dist: &DistanceMatrix, tour: &Tour) -> Tour {
    let n = tour.num_cities();
    if n < 5 {
        // Scan range is empty: nothing to improve.
        return tour.clone();
    }

    let mut seq = tour.as_slice().to_vec();

    'scan: loop {
        for i in 1..n - 1 {
            for j in (i + 2)..n - 1 {
                let a = seq[i - 1];
                let b = seq[i];
                let c = seq[j];
                let d = seq[j + 1];
                let delta =
                    (dist.get(a, c) + dist.get(b, d)) - (dist.get(a, b) + dist.get(c, d));
                if delta < -EPS {
                    seq[i..=j].reverse();
                    continue 'scan;
                }
            }
        }
        break;
    }

    Tour::from_cities(seq)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neighborhood::two_opt_neighborhood;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    fn random_instance(n: usize, seed: u64) -> (DistanceMatrix, Tour) {
        let mut rng = StdRng::seed_from_u64(seed);
        let points: Vec<(f64, f64)> = (0..n)
            .map(|_| (rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)))
            .collect();
        let dist = DistanceMatrix::from_points(&points);

        let mut interior: Vec<usize> = (1..n).collect();
        interior.shuffle(&mut rng);
        let mut seq = vec![0];
        seq.extend(interior);
        seq.push(0);
        (dist, Tour::from_cities(seq))
    }

    /// Regular pentagon in convex order: the identity tour is optimal.
    fn pentagon() -> DistanceMatrix {
        DistanceMatrix::from_points(&[
            (1.0, 0.0),
            (0.309017, 0.951057),
            (-0.809017, 0.587785),
            (-0.809017, -0.587785),
            (0.309017, -0.951057),
        ])
    }

    #[test]
    fn test_local_search_never_worsens() {
        let (dist, tour) = random_instance(15, 42);
        let mut rng = StdRng::seed_from_u64(0);
        let initial_cost = tour.cost(&dist);

        for neighborhood in [Neighborhood::Swap, Neighborhood::TwoOptFull] {
            let result = local_search(&dist, &tour, neighborhood, &mut rng);
            assert!(result.is_valid(15));
            assert!(
                result.cost(&dist) <= initial_cost + 1e-9,
                "local search worsened the tour under {neighborhood:?}"
            );
        }
    }

    #[test]
    fn test_local_search_reaches_two_opt_local_optimum() {
        let (dist, tour) = random_instance(12, 7);
        let mut rng = StdRng::seed_from_u64(0);
        let result = local_search(&dist, &tour, Neighborhood::TwoOptFull, &mut rng);
        let result_cost = result.cost(&dist);

        for neighbor in two_opt_neighborhood(&result) {
            assert!(
                neighbor.cost(&dist) >= result_cost - 1e-9,
                "found an improving 2-opt move after local search"
            );
        }
    }

    #[test]
    fn test_local_search_deterministic_for_full_neighborhoods() {
        let (dist, tour) = random_instance(14, 99);
        let mut rng_a = StdRng::seed_from_u64(1);
        let mut rng_b = StdRng::seed_from_u64(2);
        // Full neighborhoods never consult the RNG, so results agree
        // regardless of seed.
        let a = local_search(&dist, &tour, Neighborhood::TwoOptFull, &mut rng_a);
        let b = local_search(&dist, &tour, Neighborhood::TwoOptFull, &mut rng_b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_optimal_pentagon_tour_is_fixed_point() {
        let dist = pentagon();
        let tour = Tour::from_cities(vec![0, 1, 2, 3, 4, 0]);
        let cost = tour.cost(&dist);
        let mut rng = StdRng::seed_from_u64(0);

        let result = local_search(&dist, &tour, Neighborhood::TwoOptFull, &mut rng);
        assert_eq!(result, tour, "optimal tour must be returned unchanged");
        assert!((result.cost(&dist) - cost).abs() < 1e-12);

        let optimized = local_search_optimized(&dist, &tour);
        assert_eq!(optimized, tour);
    }

    #[test]
    fn test_optimized_reaches_delta_local_optimum() {
        let (dist, tour) = random_instance(30, 5);
        let result = local_search_optimized(&dist, &tour);
        assert!(result.is_valid(30));
        assert!(result.cost(&dist) <= tour.cost(&dist) + 1e-9);

        // Re-scan: no (i, j) pair in the optimized range may still improve.
        let seq = result.as_slice();
        let n = result.num_cities();
        for i in 1..n - 1 {
            for j in (i + 2)..n - 1 {
                let (a, b, c, d) = (seq[i - 1], seq[i], seq[j], seq[j + 1]);
                let delta =
                    (dist.get(a, c) + dist.get(b, d)) - (dist.get(a, b) + dist.get(c, d));
                assert!(
                    delta >= -EPS,
                    "improving move left after optimized search: i={i}, j={j}, delta={delta}"
                );
            }
        }
    }

    #[test]
    fn test_delta_formula_matches_recomputed_cost() {
        let mut rng = StdRng::seed_from_u64(2024);
        for trial in 0..100 {
            let n = rng.random_range(6..40);
            let (dist, tour) = random_instance(n, 1000 + trial);
            let base_cost = tour.cost(&dist);
            let seq = tour.as_slice();

            let i = rng.random_range(1..n - 3);
            let j = rng.random_range(i + 2..n - 1);

            let (a, b, c, d) = (seq[i - 1], seq[i], seq[j], seq[j + 1]);
            let delta = (dist.get(a, c) + dist.get(b, d)) - (dist.get(a, b) + dist.get(c, d));

            let mut reversed = seq.to_vec();
            reversed[i..=j].reverse();
            let recomputed = Tour::from_cities(reversed).cost(&dist) - base_cost;

            assert!(
                (delta - recomputed).abs() < 1e-6,
                "delta mismatch at trial {trial}: formula {delta} vs recomputed {recomputed}"
            );
        }
    }

    #[test]
    fn test_optimized_handles_tiny_tours() {
        let dist = DistanceMatrix::from_points(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
        let tour = Tour::from_cities(vec![0, 1, 2, 0]);
        assert_eq!(local_search_optimized(&dist, &tour), tour);
    }
}
