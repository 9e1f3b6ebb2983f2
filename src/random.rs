//! Seeded random number generation shared by the stochastic solvers.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Creates a reproducible generator from `seed`.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator from `seed`, or from fresh entropy when `None`.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}

/// Shuffles `items` in place (Fisher-Yates).
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}

/// Returns a uniformly random permutation of `0..n`.
pub fn random_permutation<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    shuffle(&mut perm, rng);
    perm
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::is_valid_tour;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = create_rng(7);
        let mut b = create_rng(7);
        for _ in 0..10 {
            assert_eq!(a.random::<u64>(), b.random::<u64>());
        }
    }

    #[test]
    fn test_random_permutation_is_valid() {
        let mut rng = create_rng(42);
        for n in 0..20 {
            assert!(is_valid_tour(&random_permutation(n, &mut rng), n));
        }
    }
}
