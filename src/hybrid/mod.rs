//! Hybrid ILS+SA driver.
//!
//! An outer iterated-local-search loop whose improvement step is a full
//! simulated-annealing run instead of hill climbing: construct an initial
//! tour, anneal it to convergence, then repeatedly perturb the best tour
//! (phase-scheduled strength: aggressive early, soft late) and re-anneal
//! the perturbed tour, keeping strict improvements only.

mod config;
mod runner;

pub use config::HybridConfig;
pub use runner::{HybridResult, HybridRunner};
