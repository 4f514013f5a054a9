//! Initial-tour providers.
//!
//! The optimization core takes its starting tour from the caller; these
//! heuristics exist for the drivers that own construction themselves (the
//! hybrid runner and the complete-SA entry point). Nearest neighbor gives
//! a decent greedy start for moderate instances; for very large ones a
//! random tour avoids the O(n²) construction cost dominating the run.

mod heuristics;

pub use heuristics::{nearest_neighbor, random_tour, ConstructionHeuristic};
