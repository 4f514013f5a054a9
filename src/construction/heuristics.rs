//! Greedy and random tour construction.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::tour::{DistanceMatrix, Tour};

/// The construction heuristics understood by the drivers, dispatched
/// through `match`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstructionHeuristic {
    /// Greedy nearest-unvisited-city construction from a random start.
    NearestNeighbor,
    /// Uniformly random closed tour.
    RandomTour,
}

impl ConstructionHeuristic {
    /// Builds an initial tour for the given instance.
    pub fn build<R: Rng>(&self, dist: &DistanceMatrix, rng: &mut R) -> Tour {
        match self {
            ConstructionHeuristic::NearestNeighbor => nearest_neighbor(dist, rng),
            ConstructionHeuristic::RandomTour => random_tour(dist.num_cities(), rng),
        }
    }
}

/// Nearest-neighbor construction: start at a random city, repeatedly visit
/// the nearest unvisited city, then return to the start. O(n²).
///
/// Visitation state lives in a buffer local to this call; city data is
/// never mutated.
///
/// # Panics
///
/// Panics on an empty instance.
pub fn nearest_neighbor<R: Rng>(dist: &DistanceMatrix, rng: &mut R) -> Tour {
    let n = dist.num_cities();
    assert!(n > 0, "cannot build a tour over 0 cities");

    let start = rng.random_range(0..n);
    let mut visited = vec![false; n];
    let mut sequence = Vec::with_capacity(n + 1);

    visited[start] = true;
    sequence.push(start);

    let mut current = start;
    for _ in 1..n {
        let mut nearest = None;
        let mut min_dist = f64::INFINITY;
        for city in 0..n {
            if !visited[city] && dist.get(current, city) < min_dist {
                min_dist = dist.get(current, city);
                nearest = Some(city);
            }
        }
        // Every unvisited city is reachable in a complete matrix.
        let next = match nearest {
            Some(city) => city,
            None => break,
        };
        visited[next] = true;
        sequence.push(next);
        current = next;
    }

    sequence.push(start);
    Tour::from_cities(sequence)
}

/// Uniformly random closed tour over `n` cities.
///
/// # Panics
///
/// Panics if `n` is 0.
pub fn random_tour<R: Rng>(n: usize, rng: &mut R) -> Tour {
    assert!(n > 0, "cannot build a tour over 0 cities");

    let mut sequence: Vec<usize> = (0..n).collect();
    sequence.shuffle(rng);
    sequence.push(sequence[0]);
    Tour::from_cities(sequence)
}
