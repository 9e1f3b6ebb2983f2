//! Dense weighted graph used by every solver.

use crate::error::{Result, TspError};

/// Edge weight and tour length unit.
pub type Cost = u64;

/// An immutable, dense N×N cost matrix stored in row-major order.
///
/// Every off-diagonal cell is either a finite non-negative cost or `None`
/// ("no edge"). The diagonal is always `None`; self-loops are never
/// traversed. Asymmetric weights are allowed.
///
/// # Examples
///
/// ```
/// use u_tsp::graph::CostGraph;
///
/// let graph = CostGraph::from_rows(&[
///     vec![-1, 10, 15, 20],
///     vec![10, -1, 35, 25],
///     vec![15, 35, -1, 30],
///     vec![20, 25, 30, -1],
/// ])
/// .unwrap();
///
/// assert_eq!(graph.size(), 4);
/// assert_eq!(graph.weight(0, 1), Some(10));
/// assert_eq!(graph.tour_cost(&[0, 1, 3, 2]), Some(80));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostGraph {
    size: usize,
    weights: Vec<Option<Cost>>,
    penalty: Cost,
}

impl CostGraph {
    /// Creates a graph from a row-major vector of `size * size` cells.
    ///
    /// Diagonal cells are forced to `None` regardless of their input value.
    pub fn new(size: usize, mut weights: Vec<Option<Cost>>) -> Result<Self> {
        if size == 0 {
            return Err(TspError::InvalidGraph(
                "graph must have at least one vertex".into(),
            ));
        }
        if weights.len() != size * size {
            return Err(TspError::InvalidGraph(format!(
                "expected {} cells for a {size}x{size} matrix, got {}",
                size * size,
                weights.len()
            )));
        }
        for v in 0..size {
            weights[v * size + v] = None;
        }

        let max_weight = weights.iter().flatten().copied().max().unwrap_or(0);
        let penalty = max_weight
            .saturating_add(1)
            .saturating_mul(size as Cost);

        Ok(Self {
            size,
            weights,
            penalty,
        })
    }

    /// Creates a graph by evaluating `f(from, to)` for every off-diagonal cell.
    pub fn from_fn<F>(size: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> Option<Cost>,
    {
        let mut weights = Vec::with_capacity(size * size);
        for from in 0..size {
            for to in 0..size {
                weights.push(if from == to { None } else { f(from, to) });
            }
        }
        Self::new(size, weights)
    }

    /// Creates a graph from signed rows, where any negative value means "no edge".
    ///
    /// This is the representation used by the plain and ATSP file formats.
    pub fn from_rows(rows: &[Vec<i64>]) -> Result<Self> {
        let size = rows.len();
        let mut weights = Vec::with_capacity(size * size);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(TspError::InvalidGraph(format!(
                    "row {i} has {} entries, expected {size}",
                    row.len()
                )));
            }
            weights.extend(row.iter().map(|&w| Cost::try_from(w).ok()));
        }
        Self::new(size, weights)
    }

    /// Returns the matrix as signed rows, with `-1` for missing edges.
    pub fn to_rows(&self) -> Vec<Vec<i64>> {
        self.weights
            .chunks(self.size)
            .map(|row| {
                row.iter()
                    .map(|w| w.map_or(-1, |c| i64::try_from(c).unwrap_or(i64::MAX)))
                    .collect()
            })
            .collect()
    }

    /// Number of vertices.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the cost of the edge `from -> to`, or `None` if there is no edge.
    ///
    /// # Panics
    ///
    /// Panics if `from == to` or either index is out of bounds.
    pub fn weight(&self, from: usize, to: usize) -> Option<Cost> {
        assert_ne!(from, to, "self-loop {from} -> {to} is never traversable");
        self.weights[from * self.size + to]
    }

    /// Returns `true` if the edge `from -> to` exists.
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        from != to && self.weights[from * self.size + to].is_some()
    }

    /// The raw row-major cells, diagonal included.
    pub(crate) fn cells(&self) -> &[Option<Cost>] {
        &self.weights
    }

    /// Cost of the closed tour, including the edge from the last vertex
    /// back to the first.
    ///
    /// Returns `None` if the tour uses a missing edge. Tours with fewer than
    /// two vertices cost zero.
    pub fn tour_cost(&self, tour: &[usize]) -> Option<Cost> {
        if tour.len() < 2 {
            return Some(0);
        }
        closing_pairs(tour).try_fold(0 as Cost, |acc, (from, to)| {
            Some(acc.saturating_add(self.weight(from, to)?))
        })
    }

    /// Cost of the closed tour where each missing edge is charged
    /// [`missing_edge_penalty`](Self::missing_edge_penalty).
    ///
    /// Any tour using a missing edge costs more than every feasible tour,
    /// so the metaheuristics can compare candidates without failing.
    pub fn penalized_cost(&self, tour: &[usize]) -> Cost {
        if tour.len() < 2 {
            return 0;
        }
        closing_pairs(tour).fold(0 as Cost, |acc, (from, to)| {
            acc.saturating_add(self.weight(from, to).unwrap_or(self.penalty))
        })
    }

    /// Penalty charged for a missing edge by [`penalized_cost`](Self::penalized_cost).
    pub fn missing_edge_penalty(&self) -> Cost {
        self.penalty
    }

    /// Returns `true` if `weight(i, j) == weight(j, i)` for every pair.
    pub fn is_symmetric(&self) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if self.weight(i, j) != self.weight(j, i) {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the candidate reachable from `from` with the cheapest edge.
    ///
    /// Candidates without an edge from `from` are ignored. Ties go to the
    /// candidate listed first. Returns `None` if no candidate is reachable.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        candidates
            .iter()
            .copied()
            .filter(|&c| c != from)
            .filter_map(|c| self.weight(from, c).map(|w| (c, w)))
            .min_by_key(|&(_, w)| w)
            .map(|(c, _)| c)
    }
}

/// Iterates `(tour[i], tour[i + 1])` pairs plus the closing pair.
fn closing_pairs(tour: &[usize]) -> impl Iterator<Item = (usize, usize)> + '_ {
    tour.iter()
        .copied()
        .zip(tour.iter().copied().cycle().skip(1))
}

/// Returns `true` if `tour` visits every vertex of `0..n` exactly once.
pub fn is_valid_tour(tour: &[usize], n: usize) -> bool {
    if tour.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &v in tour {
        if v >= n || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}
