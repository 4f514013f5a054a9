//! Closed set of neighborhood variants.

use rand::Rng;

use super::generators::{swap_neighborhood, two_opt_neighborhood, two_opt_single_neighbor};
use crate::tour::Tour;

/// The neighborhood structures understood by the local-search engine.
///
/// A small closed set dispatched through `match`, rather than
/// function-valued parameters: callers pick a variant, the engine decides
/// how to enumerate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Neighborhood {
    /// All pairwise exchanges of interior positions. O(n²) neighbors.
    Swap,
    /// All 2-opt reversals with `j >= i + 3`. O(n²) neighbors.
    TwoOptFull,
    /// One uniformly random 2-opt reversal per call.
    TwoOptSingleRandom,
}

impl Neighborhood {
    /// Generates the candidate set for this neighborhood.
    ///
    /// `Swap` and `TwoOptFull` enumerate the complete neighborhood in a
    /// fixed order and ignore `rng`; `TwoOptSingleRandom` returns a single
    /// randomly chosen neighbor.
    pub fn neighbors<R: Rng>(&self, tour: &Tour, rng: &mut R) -> Vec<Tour> {
        match self {
            Neighborhood::Swap => swap_neighborhood(tour),
            Neighborhood::TwoOptFull => two_opt_neighborhood(tour),
            Neighborhood::TwoOptSingleRandom => vec![two_opt_single_neighbor(tour, rng)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_dispatch_matches_generators() {
        let tour = Tour::from_cities(vec![0, 1, 2, 3, 4, 5, 6, 7, 0]);
        let mut rng = StdRng::seed_from_u64(7);

        let swap = Neighborhood::Swap.neighbors(&tour, &mut rng);
        assert_eq!(swap, swap_neighborhood(&tour));

        let two_opt = Neighborhood::TwoOptFull.neighbors(&tour, &mut rng);
        assert_eq!(two_opt, two_opt_neighborhood(&tour));

        let single = Neighborhood::TwoOptSingleRandom.neighbors(&tour, &mut rng);
        assert_eq!(single.len(), 1);
        assert!(single[0].is_valid(8));
    }
}
