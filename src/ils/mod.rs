//! Iterated Local Search (ILS).
//!
//! # Algorithm
//!
//! 1. Apply local search to the initial tour
//! 2. While iterations and patience remain:
//!    a. **Perturb**: multi-swap the best tour
//!    b. **Re-optimize**: local search on the perturbed tour
//!    c. **Move or not**: keep the candidate only if strictly shorter
//! 3. Return the best tour found
//!
//! The best-so-far sequence is non-increasing by construction; a run
//! stops early after `max_no_improvement` consecutive rejections.
//!
//! # Reference
//!
//! Lourenço, Martin & Stützle (2003), "Iterated Local Search",
//! *Handbook of Metaheuristics*.

mod config;
mod runner;

pub use config::IlsConfig;
pub use runner::{IlsResult, IlsRunner};
