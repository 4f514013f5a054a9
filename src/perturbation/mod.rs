//! Structural perturbation operators.
//!
//! Perturbations disrupt a tour more than any single local-search move can,
//! which is what lets an outer metaheuristic escape a local optimum. Every
//! operator samples interior positions only, validates its candidate
//! against the tour invariants, and retries with fresh randomness if the
//! candidate fails (a bounded, defensive loop: the sampling rules
//! themselves cannot produce invalid tours).
//!
//! The double-bridge move is the classic 4-opt escape: its reconnection is
//! unreachable by any single 2-opt reversal, so a 2-opt local optimum
//! cannot trivially collapse back after it.
//!
//! # Reference
//!
//! Martin, Otto & Felten (1991), "Large-Step Markov Chains for the
//! Traveling Salesman Problem".

mod operators;

pub use operators::{
    double_bridge_move, multi_swap, perturbation, shuffle_partial, three_opt_randomized,
    two_opt_randomized, Phase,
};
