//! Perturbation operators and phase dispatch.

use rand::seq::index;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::tour::Tour;

/// Retry budget for the validate-and-retry loops. The interior-only
/// sampling below cannot actually produce an invalid candidate, so hitting
/// this bound indicates a broken invariant upstream.
const MAX_ATTEMPTS: usize = 100;

/// Perturbation strength schedule for the hybrid driver.
///
/// Early iterations disrupt hard (double bridge), later ones progressively
/// less. The closed enum replaces the original string-keyed dispatch: an
/// unrecognized phase is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Double-bridge move.
    Aggressive,
    /// Multi-swap with `k = max(1, n/50)` exchanges.
    Medium,
    /// Partial shuffle over a window of `max(2, n/10)` cities.
    Soft,
}

impl Phase {
    /// Maps run progress in `[0, 1)` to a phase: `< 0.5` aggressive,
    /// `< 0.8` medium, otherwise soft.
    pub fn from_progress(progress: f64) -> Self {
        if progress < 0.5 {
            Phase::Aggressive
        } else if progress < 0.8 {
            Phase::Medium
        } else {
            Phase::Soft
        }
    }
}

/// Applies the phase-appropriate perturbation to `tour`.
///
/// # Panics
///
/// Panics if the phase's operator preconditions are not met (see
/// [`double_bridge_move`], [`multi_swap`], [`shuffle_partial`]).
pub fn perturbation<R: Rng>(tour: &Tour, phase: Phase, rng: &mut R) -> Tour {
    let n = tour.num_cities();
    match phase {
        Phase::Aggressive => double_bridge_move(tour, rng),
        Phase::Medium => multi_swap(tour, (n / 50).max(1), rng),
        Phase::Soft => shuffle_partial(tour, (n / 10).max(2), rng),
    }
}

/// Performs `k` random pairwise exchanges among interior positions.
///
/// Each round samples two distinct positions; positions may repeat across
/// rounds.
///
/// # Panics
///
/// Panics if the tour has fewer than 3 cities, or if no valid candidate
/// appears within the retry budget.
pub fn multi_swap<R: Rng>(tour: &Tour, k: usize, rng: &mut R) -> Tour {
    let n = tour.num_cities();
    assert!(n >= 3, "multi-swap needs at least 3 cities, got {n}");

    let mut attempts = 0;
    loop {
        let mut seq = tour.as_slice().to_vec();
        for _ in 0..k {
            let pair = index::sample(rng, n - 1, 2);
            seq.swap(pair.index(0) + 1, pair.index(1) + 1);
        }
        let candidate = Tour::from_cities(seq);
        if candidate.is_valid(n) {
            return candidate;
        }
        attempts += 1;
        assert!(
            attempts < MAX_ATTEMPTS,
            "multi-swap produced no valid tour in {MAX_ATTEMPTS} attempts"
        );
    }
}

/// Shuffles a random interior window of `len` cities in place.
///
/// # Panics
///
/// Panics unless `2 <= len <= n - 1` (a window of one city is a no-op, and
/// the window must fit inside the interior), or if no valid candidate
/// appears within the retry budget.
pub fn shuffle_partial<R: Rng>(tour: &Tour, len: usize, rng: &mut R) -> Tour {
    let n = tour.num_cities();
    assert!(
        len >= 2 && len <= n.saturating_sub(1),
        "shuffle window must be in [2, {}], got {len}",
        n.saturating_sub(1)
    );

    let mut attempts = 0;
    loop {
        let start = rng.random_range(1..=n - len);
        let mut seq = tour.as_slice().to_vec();
        seq[start..start + len].shuffle(rng);
        let candidate = Tour::from_cities(seq);
        if candidate.is_valid(n) {
            return candidate;
        }
        attempts += 1;
        assert!(
            attempts < MAX_ATTEMPTS,
            "partial shuffle produced no valid tour in {MAX_ATTEMPTS} attempts"
        );
    }
}

/// Reverses a random interior segment of fixed length `len`.
///
/// A randomized 2-opt used as a mild perturbation: unlike the neighborhood
/// generator, the segment length is chosen by the caller and only its
/// position is random.
///
/// # Panics
///
/// Same preconditions as [`shuffle_partial`].
pub fn two_opt_randomized<R: Rng>(tour: &Tour, len: usize, rng: &mut R) -> Tour {
    let n = tour.num_cities();
    assert!(
        len >= 2 && len <= n.saturating_sub(1),
        "reversal window must be in [2, {}], got {len}",
        n.saturating_sub(1)
    );

    let mut attempts = 0;
    loop {
        let start = rng.random_range(1..=n - len);
        let mut seq = tour.as_slice().to_vec();
        seq[start..start + len].reverse();
        let candidate = Tour::from_cities(seq);
        if candidate.is_valid(n) {
            return candidate;
        }
        attempts += 1;
        assert!(
            attempts < MAX_ATTEMPTS,
            "randomized 2-opt produced no valid tour in {MAX_ATTEMPTS} attempts"
        );
    }
}

/// Randomized 3-opt: cut the interior at three sorted points and
/// reconnect the two middle segments in one of 7 configurations.
///
/// The configurations are the order/reversal combinations of the middle
/// segments: identity, plain swap, and five reversal variants.
///
/// # Panics
///
/// Panics if the tour has fewer than 4 cities (three distinct interior cut
/// points are needed), or if no valid candidate appears within the retry
/// budget.
pub fn three_opt_randomized<R: Rng>(tour: &Tour, rng: &mut R) -> Tour {
    let n = tour.num_cities();
    assert!(n >= 4, "3-opt needs at least 4 cities, got {n}");

    let mut attempts = 0;
    loop {
        let mut cuts: Vec<usize> = index::sample(rng, n - 1, 3)
            .into_iter()
            .map(|p| p + 1)
            .collect();
        cuts.sort_unstable();
        let (a, b, c) = (cuts[0], cuts[1], cuts[2]);

        let seq = tour.as_slice();
        let s2 = &seq[a..b];
        let s3 = &seq[b..c];

        let mut mid: Vec<usize> = Vec::with_capacity(c - a);
        match rng.random_range(0..7) {
            0 => {
                mid.extend_from_slice(s2);
                mid.extend_from_slice(s3);
            }
            1 => {
                mid.extend_from_slice(s3);
                mid.extend_from_slice(s2);
            }
            2 => {
                mid.extend(s2.iter().rev());
                mid.extend_from_slice(s3);
            }
            3 => {
                mid.extend_from_slice(s3);
                mid.extend(s2.iter().rev());
            }
            4 => {
                mid.extend(s2.iter().rev());
                mid.extend(s3.iter().rev());
            }
            5 => {
                mid.extend(s3.iter().rev());
                mid.extend_from_slice(s2);
            }
            _ => {
                mid.extend(s3.iter().rev());
                mid.extend(s2.iter().rev());
            }
        }

        let mut new_seq = Vec::with_capacity(seq.len());
        new_seq.extend_from_slice(&seq[..a]);
        new_seq.extend_from_slice(&mid);
        new_seq.extend_from_slice(&seq[c..]);

        let candidate = Tour::from_cities(new_seq);
        if candidate.is_valid(n) {
            return candidate;
        }
        attempts += 1;
        assert!(
            attempts < MAX_ATTEMPTS,
            "randomized 3-opt produced no valid tour in {MAX_ATTEMPTS} attempts"
        );
    }
}

/// Double-bridge move: cut the interior at four sorted points `a<b<c<d`
/// and reconnect as `S1 + S3 + S2 + S4`.
///
/// This 4-opt reconnection cannot be produced (or undone) by any single
/// 2-opt reversal, which is exactly why it is the aggressive-phase escape
/// from 2-opt local optima.
///
/// # Panics
///
/// Panics if the tour has fewer than 8 interior cities, or if no valid
/// candidate appears within the retry budget.
pub fn double_bridge_move<R: Rng>(tour: &Tour, rng: &mut R) -> Tour {
    let n = tour.num_cities();
    assert!(
        n >= 9,
        "double bridge needs at least 8 interior cities, got {}",
        n.saturating_sub(1)
    );

    let mut attempts = 0;
    loop {
        let mut cuts: Vec<usize> = index::sample(rng, n - 1, 4)
            .into_iter()
            .map(|p| p + 1)
            .collect();
        cuts.sort_unstable();
        let (a, b, c, d) = (cuts[0], cuts[1], cuts[2], cuts[3]);

        let seq = tour.as_slice();
        let mut new_seq = Vec::with_capacity(seq.len());
        new_seq.extend_from_slice(&seq[..a]);
        new_seq.extend_from_slice(&seq[c..d]);
        new_seq.extend_from_slice(&seq[b..c]);
        new_seq.extend_from_slice(&seq[a..b]);
        new_seq.extend_from_slice(&seq[d..]);

        let candidate = Tour::from_cities(new_seq);
        if candidate.is_valid(n) {
            return candidate;
        }
        attempts += 1;
        assert!(
            attempts < MAX_ATTEMPTS,
            "double bridge produced no valid tour in {MAX_ATTEMPTS} attempts"
        );
    }
}
