//! Local-search and metaheuristic engine for the symmetric TSP.
//!
//! Provides the algorithmic core for heuristic tour optimization:
//!
//! - **Tour model**: closed cyclic permutation with a fixed start city,
//!   O(n) cost evaluation, and an O(n) validity predicate.
//! - **Neighborhood generators**: swap and 2-opt moves, as full
//!   neighborhoods or single random neighbors.
//! - **Local search**: hill climbing to a local optimum, with a
//!   delta-evaluated 2-opt variant that never materializes neighbor tours.
//! - **Perturbation operators**: multi-swap, partial shuffle, randomized
//!   segment reversal, randomized 3-opt, and the double-bridge move, with
//!   phase-based strength dispatch.
//! - **Simulated Annealing (SA)**: temperature-scheduled stochastic
//!   acceptance over single random 2-opt neighbors.
//! - **Iterated Local Search (ILS)**: perturb / re-optimize / accept-if-
//!   better, with stagnation-based early stopping.
//! - **Hybrid ILS+SA**: an outer ILS loop that re-anneals the perturbed
//!   tour instead of hill climbing it.
//!
//! # Architecture
//!
//! The crate consumes `(n, points, distances)` from the caller and returns
//! tours and costs. It contains no I/O: TSPLIB/CSV parsing, plotting, and
//! benchmark persistence belong to consumers. All randomness is injected
//! (seedable configs, `&mut impl Rng` parameters) so runs are reproducible.

pub mod construction;
pub mod hybrid;
pub mod ils;
pub mod local_search;
pub mod neighborhood;
pub mod perturbation;
pub mod sa;
pub mod tour;
