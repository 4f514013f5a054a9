//! Closed-tour representation.

use super::distance::DistanceMatrix;

/// A closed tour over `n` cities.
///
/// The underlying sequence has length `n + 1`: the first and last entries
/// are the same start city, and the interior positions `1..n` hold the
/// remaining cities. Position `0` and position `n` are fixed: no
/// neighborhood or perturbation operator ever moves them.
///
/// # Examples
///
/// ```
/// use tsp_metaheur::tour::Tour;
///
/// let tour = Tour::from_cities(vec![0, 1, 2, 3, 4, 0]);
/// assert_eq!(tour.num_cities(), 5);
/// assert!(tour.is_valid(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    sequence: Vec<usize>,
}

impl Tour {
    /// Wraps a city sequence as a tour.
    ///
    /// The sequence is taken as-is; use [`Tour::is_valid`] to check the
    /// closed/complete/bounded invariants.
    pub fn from_cities(sequence: Vec<usize>) -> Self {
        Self { sequence }
    }

    /// The full sequence, including the repeated start city at the end.
    pub fn as_slice(&self) -> &[usize] {
        &self.sequence
    }

    /// Consumes the tour and returns the underlying sequence.
    pub fn into_vec(self) -> Vec<usize> {
        self.sequence
    }

    /// Number of distinct cities visited (sequence length minus the
    /// repeated endpoint).
    pub fn num_cities(&self) -> usize {
        self.sequence.len().saturating_sub(1)
    }

    /// Total tour length: the sum of the `n` edge weights, including the
    /// closing edge back to the start city. O(n).
    pub fn cost(&self, dist: &DistanceMatrix) -> f64 {
        self.sequence
            .windows(2)
            .map(|edge| dist.get(edge[0], edge[1]))
            .sum()
    }

    /// Checks the tour invariants against an instance of `n` cities:
    ///
    /// - **closed**: first element equals last element,
    /// - **complete**: every city in `0..n` appears exactly once among the
    ///   interior positions,
    /// - **bounded**: no index outside `0..n`.
    ///
    /// Runs in O(n) with a seen-buffer.
    pub fn is_valid(&self, n: usize) -> bool {
        if self.sequence.len() != n + 1 {
            return false;
        }
        if self.sequence[0] != self.sequence[n] {
            return false;
        }
        let mut seen = vec![false; n];
        for &city in &self.sequence[..n] {
            if city >= n || seen[city] {
                return false;
            }
            seen[city] = true;
        }
        true
    }
}
