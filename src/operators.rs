//! Tour moves and permutation crossover operators.
//!
//! Tours are permutations of `0..n`, so the same operators serve local
//! search (deterministic moves at given positions) and the genetic
//! algorithm (randomized variants).
//!
//! # Moves
//!
//! - [`reverse_segment`]: 2-opt style segment reversal
//! - [`swap_positions`]: exchange two vertices
//! - [`relocate`]: remove a vertex and reinsert it elsewhere
//!
//! # Crossover
//!
//! - [`order_crossover`] (OX): preserves relative order
//! - [`pmx_crossover`] (PMX): preserves absolute position
//!
//! # References
//!
//! - Croes (1958), "A Method for Solving Traveling-Salesman Problems"
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Goldberg & Lingle (1985), "Alleles, Loci, and the Traveling Salesman Problem"

use rand::Rng;

// ============================================================================
// Moves
// ============================================================================

/// Reverses `tour[i..=j]`, or the whole range between the two positions
/// when `i > j`.
pub fn reverse_segment(tour: &mut [usize], i: usize, j: usize) {
    let (lo, hi) = if i <= j { (i, j) } else { (j, i) };
    tour[lo..=hi].reverse();
}

/// Exchanges the vertices at positions `i` and `j`.
pub fn swap_positions(tour: &mut [usize], i: usize, j: usize) {
    tour.swap(i, j);
}

/// Moves the vertex at position `from` so that it ends up at position `to`.
pub fn relocate(tour: &mut [usize], from: usize, to: usize) {
    if from < to {
        tour[from..=to].rotate_left(1);
    } else if to < from {
        tour[to..=from].rotate_right(1);
    }
}

/// Picks two distinct positions in `0..n`, returned in ascending order.
///
/// # Panics
///
/// Panics if `n < 2`.
pub fn distinct_positions<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    assert!(n >= 2, "need at least two positions, got {n}");
    let a = rng.random_range(0..n);
    let mut b = rng.random_range(0..n - 1);
    if b >= a {
        b += 1;
    }
    (a.min(b), a.max(b))
}

/// Reverses a random segment spanning at least two positions.
///
/// Tours shorter than two vertices are left unchanged.
pub fn random_reversal<R: Rng>(tour: &mut [usize], rng: &mut R) {
    if tour.len() < 2 {
        return;
    }
    let (i, j) = distinct_positions(tour.len(), rng);
    reverse_segment(tour, i, j);
}

// ============================================================================
// Crossover
// ============================================================================

/// Order Crossover (OX).
///
/// 1. Select a random segment `[start, end]` with `start < end`
/// 2. Each child keeps one parent's segment in place
/// 3. The remaining positions, from `end + 1` cyclically, are filled with
///    the other parent's vertices in their cyclic order from `end + 1`,
///    skipping those already present
///
/// # Panics
///
/// Panics if the parents differ in length.
pub fn order_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> (Vec<usize>, Vec<usize>) {
    assert_eq!(parent1.len(), parent2.len(), "parents must have equal length");
    if parent1.len() < 2 {
        return (parent1.to_vec(), parent2.to_vec());
    }
    let (start, end) = distinct_positions(parent1.len(), rng);
    (
        ox_child(parent1, parent2, start, end),
        ox_child(parent2, parent1, start, end),
    )
}

fn ox_child(keep: &[usize], fill: &[usize], start: usize, end: usize) -> Vec<usize> {
    let n = keep.len();
    let mut child = keep.to_vec();
    let mut taken = vec![false; n];
    for &v in &keep[start..=end] {
        taken[v] = true;
    }

    let mut slot = (end + 1) % n;
    for offset in 1..=n {
        let v = fill[(end + offset) % n];
        if !taken[v] {
            child[slot] = v;
            slot = (slot + 1) % n;
        }
    }
    child
}

/// Partially Mapped Crossover (PMX).
///
/// Each child keeps one parent's segment in place. Vertices of the other
/// parent's segment that were displaced follow the segment mapping until
/// they reach a position outside the segment; every other position is
/// copied from the other parent.
///
/// # Panics
///
/// Panics if the parents differ in length.
pub fn pmx_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> (Vec<usize>, Vec<usize>) {
    assert_eq!(parent1.len(), parent2.len(), "parents must have equal length");
    if parent1.len() < 2 {
        return (parent1.to_vec(), parent2.to_vec());
    }
    let (start, end) = distinct_positions(parent1.len(), rng);
    (
        pmx_child(parent1, parent2, start, end),
        pmx_child(parent2, parent1, start, end),
    )
}

fn pmx_child(keep: &[usize], fill: &[usize], start: usize, end: usize) -> Vec<usize> {
    let n = keep.len();
    let mut position_in_fill = vec![0; n];
    for (pos, &v) in fill.iter().enumerate() {
        position_in_fill[v] = pos;
    }

    let mut child: Vec<Option<usize>> = vec![None; n];
    let mut placed = vec![false; n];
    for pos in start..=end {
        child[pos] = Some(keep[pos]);
        placed[keep[pos]] = true;
    }

    for pos in start..=end {
        let v = fill[pos];
        if placed[v] {
            continue;
        }
        let mut target = pos;
        while (start..=end).contains(&target) {
            target = position_in_fill[keep[target]];
        }
        child[target] = Some(v);
        placed[v] = true;
    }

    child
        .into_iter()
        .zip(fill)
        .map(|(slot, &v)| slot.unwrap_or(v))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
