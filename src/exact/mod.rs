//! Exhaustive exact solvers.
//!
//! - [`BruteForce`]: enumerates every permutation, O(N!)
//! - [`HeldKarp`]: subset dynamic programming, O(N²·2ᴺ)
//!
//! Both return `None` when the graph has no Hamiltonian cycle through the
//! start vertex.

mod brute_force;
mod held_karp;

pub use brute_force::{next_permutation, BruteForce};
pub use held_karp::HeldKarp;
