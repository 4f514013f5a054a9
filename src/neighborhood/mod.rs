//! Neighborhood generators for tour local search.
//!
//! A neighborhood move takes a valid tour and produces candidate tours one
//! move away. Two move kinds are provided:
//!
//! - **Swap**: exchange the cities at two interior positions.
//! - **2-opt**: reverse a contiguous interior sub-sequence, removing two
//!   edges and adding two others.
//!
//! Each kind is available as a full O(n²) enumeration or as a single
//! uniformly random neighbor; the closed set of variants is dispatched
//! through [`Neighborhood`].

mod generators;
mod types;

pub use generators::{
    swap_neighborhood, swap_single_neighbor, two_opt_neighborhood, two_opt_single_neighbor,
};
pub use types::Neighborhood;
