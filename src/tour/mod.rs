//! Tour representation and distance oracle.
//!
//! A tour is a closed Hamiltonian cycle: a sequence of n+1 city indices
//! whose first and last entries are the same city and whose interior is a
//! permutation of `0..n`. Every operator in this crate preserves those
//! invariants and leaves the endpoints untouched.

mod distance;
mod types;

pub use distance::DistanceMatrix;
pub use types::Tour;
