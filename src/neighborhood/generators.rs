//! Swap and 2-opt move generators.
//!
//! All generators operate on interior positions only: position 0 and
//! position n (the fixed start/return city) are never touched, so every
//! generated tour stays closed.

use rand::Rng;

use crate::tour::Tour;

/// Generates the full swap neighborhood of a tour.
///
/// For every pair of interior positions `(i, j)` with `i < j`, the two
/// cities are exchanged. Produces `(n-1)(n-2)/2` neighbors for a tour of
/// `n` cities.
pub fn swap_neighborhood(tour: &Tour) -> Vec<Tour> {
    let seq = tour.as_slice();
    let n = tour.num_cities();
    let mut neighbors = Vec::new();
    for i in 1..n {
        for j in (i + 1)..n {
            let mut new_seq = seq.to_vec();
            new_seq.swap(i, j);
            neighbors.push(Tour::from_cities(new_seq));
        }
    }
    neighbors
}

/// Generates the full 2-opt neighborhood of a tour.
///
/// For every pair `(i, j)` with `i` in `[1, n-2]` and `j >= i + 3`, the
/// sub-sequence `[i..=j]` is reversed. Pairs closer than 3 apart are
/// excluded: they reduce to a no-op, an adjacent transposition, or a
/// one-gap swap rather than a true segment inversion.
pub fn two_opt_neighborhood(tour: &Tour) -> Vec<Tour> {
    let seq = tour.as_slice();
    let n = tour.num_cities();
    let mut neighbors = Vec::new();
    for i in 1..n.saturating_sub(1) {
        for j in (i + 3)..n {
            let mut new_seq = seq.to_vec();
            new_seq[i..=j].reverse();
            neighbors.push(Tour::from_cities(new_seq));
        }
    }
    neighbors
}

/// Generates one uniformly random 2-opt neighbor.
///
/// `i` is drawn from `[1, n-2]`, `j` from `[i+1, n-1]`, and `[i..=j]` is
/// reversed. Used inside the SA inner loop, where materializing the full
/// neighborhood would dominate the runtime.
///
/// # Panics
///
/// Panics if the tour has fewer than 3 cities.
pub fn two_opt_single_neighbor<R: Rng>(tour: &Tour, rng: &mut R) -> Tour {
    let n = tour.num_cities();
    assert!(n >= 3, "2-opt needs at least 3 cities, got {n}");

    let i = rng.random_range(1..n - 1);
    let j = rng.random_range(i + 1..n);

    let mut new_seq = tour.as_slice().to_vec();
    new_seq[i..=j].reverse();
    Tour::from_cities(new_seq)
}

/// Generates one random swap neighbor: two distinct interior positions
/// exchanged.
///
/// # Panics
///
/// Panics if the tour has fewer than 3 cities (no two distinct interior
/// positions to swap).
pub fn swap_single_neighbor<R: Rng>(tour: &Tour, rng: &mut R) -> Tour {
    let n = tour.num_cities();
    assert!(n >= 3, "swap needs at least 3 cities, got {n}");

    let i = rng.random_range(1..n);
    let j = loop {
        let j = rng.random_range(1..n);
        if j != i {
            break j;
        }
    };

    let mut new_seq = tour.as_slice().to_vec();
    new_seq.swap(i, j);
    Tour::from_cities(new_seq)
}
