//! Hill climbing to a local optimum.
//!
//! Two variants share the same local-optimality criterion:
//!
//! - [`local_search`] enumerates a full neighborhood each round and moves
//!   to the best improving neighbor (best-improvement).
//! - [`local_search_optimized`] is specialized to 2-opt: it evaluates each
//!   candidate reversal in O(1) from the four changed-edge endpoints and
//!   applies the first improving move it finds, so no neighbor tour is
//!   ever materialized.
//!
//! Both terminate because the tour cost is bounded below and strictly
//! decreases with every accepted move.

mod runner;

pub use runner::{local_search, local_search_optimized};
