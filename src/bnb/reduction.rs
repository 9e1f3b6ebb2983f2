//! Row/column matrix reduction.
//!
//! Subtracting the minimum of each row and then each column from a cost
//! matrix yields a matrix with a zero in every non-empty row and column.
//! The sum of the subtracted minima is a lower bound on the cost of any tour
//! that uses each remaining row and column exactly once.
//!
//! # Reference
//!
//! Little, Murty, Sweeney & Karel (1963), "An Algorithm for the Traveling
//! Salesman Problem"

use crate::graph::{Cost, CostGraph};

/// A square cost matrix whose cells may be removed during branching.
///
/// `None` marks a cell that can no longer be traversed, whether the edge was
/// absent from the graph or removed by a branching decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReducedMatrix {
    size: usize,
    cells: Vec<Option<Cost>>,
}

impl ReducedMatrix {
    /// Copies the unreduced weights of `graph`.
    pub fn from_graph(graph: &CostGraph) -> Self {
        Self {
            size: graph.size(),
            cells: graph.cells().to_vec(),
        }
    }

    /// Reduces the full weight matrix of `graph`.
    ///
    /// Returns the root lower bound and the reduced matrix.
    pub fn root(graph: &CostGraph) -> (Cost, Self) {
        let mut matrix = Self::from_graph(graph);
        let bound = matrix.reduce();
        (bound, matrix)
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Reduced cost of `row -> col`, `None` if removed.
    pub fn get(&self, row: usize, col: usize) -> Option<Cost> {
        self.cells[row * self.size + col]
    }

    /// Removes every cell of `row`.
    pub fn remove_row(&mut self, row: usize) {
        let start = row * self.size;
        self.cells[start..start + self.size].fill(None);
    }

    /// Removes every cell of `col`.
    pub fn remove_column(&mut self, col: usize) {
        for row in 0..self.size {
            self.cells[row * self.size + col] = None;
        }
    }

    /// Removes the single cell `row -> col`.
    pub fn remove_edge(&mut self, row: usize, col: usize) {
        self.cells[row * self.size + col] = None;
    }

    /// Builds the matrix of a child that commits to edge `from -> to`.
    ///
    /// The clone loses row `from`, column `to`, the reverse edge
    /// `to -> from` and the premature closing edge `to -> start`, and is then
    /// reduced. Returns the reduction increment and the child matrix.
    pub fn branch(&self, from: usize, to: usize, start: usize) -> (Cost, Self) {
        let mut child = self.clone();
        child.remove_row(from);
        child.remove_column(to);
        child.remove_edge(to, from);
        child.remove_edge(to, start);
        let increment = child.reduce();
        (increment, child)
    }

    /// Row-reduces then column-reduces in place and returns the total
    /// amount subtracted.
    ///
    /// Rows or columns with no remaining cells, or whose minimum is already
    /// zero, contribute nothing.
    pub fn reduce(&mut self) -> Cost {
        let rows: Cost = (0..self.size).map(|r| self.reduce_line(r, true)).sum();
        let cols: Cost = (0..self.size).map(|c| self.reduce_line(c, false)).sum();
        rows + cols
    }

    fn reduce_line(&mut self, line: usize, is_row: bool) -> Cost {
        let n = self.size;
        let index = |k: usize| if is_row { line * n + k } else { k * n + line };

        let min = (0..n).filter_map(|k| self.cells[index(k)]).min();
        match min {
            Some(min) if min > 0 => {
                for k in 0..n {
                    if let Some(cell) = self.cells[index(k)].as_mut() {
                        *cell -= min;
                    }
                }
                min
            }
            _ => 0,
        }
    }
}

/// Root lower bound of `graph`: the total of its full row/column reduction.
///
/// Never exceeds the cost of an optimal tour.
pub fn lower_bound(graph: &CostGraph) -> Cost {
    ReducedMatrix::root(graph).0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::tests::four_city_graph;

    #[test]
    fn test_root_reduction_of_four_city_graph() {
        // Row minima: 10, 10, 15, 20 = 55.
        // After rows: col 0 = [_, 0, 0, 0], col 1 = [0, _, 20, 5],
        // col 2 = [5, 25, _, 10], col 3 = [10, 15, 15, _].
        // Column minima: 0, 0, 5, 10 = 15.
        let (bound, matrix) = ReducedMatrix::root(&four_city_graph());
        assert_eq!(bound, 70);
        assert_eq!(matrix.get(0, 2), Some(0));
        assert_eq!(matrix.get(2, 3), Some(5));
        assert_eq!(matrix.get(1, 1), None);
    }

    #[test]
    fn test_every_nonempty_line_has_a_zero() {
        let (_, matrix) = ReducedMatrix::root(&four_city_graph());
        for r in 0..4 {
            assert!((0..4).any(|c| matrix.get(r, c) == Some(0)));
            assert!((0..4).any(|c| matrix.get(c, r) == Some(0)));
        }
    }

    #[test]
    fn test_empty_line_contributes_nothing() {
        let graph = CostGraph::from_rows(&[vec![-1, -1], vec![4, -1]]).unwrap();
        let (bound, matrix) = ReducedMatrix::root(&graph);
        assert_eq!(bound, 4);
        assert_eq!(matrix.get(1, 0), Some(0));
        assert_eq!(matrix.get(0, 1), None);
    }

    #[test]
    fn test_branch_invalidates_row_column_and_closures() {
        let (_, root) = ReducedMatrix::root(&four_city_graph());
        let (_, child) = root.branch(0, 2, 0);
        for k in 0..4 {
            assert_eq!(child.get(0, k), None);
            assert_eq!(child.get(k, 2), None);
        }
        assert_eq!(child.get(2, 0), None);
        assert!(child.get(2, 1).is_some());
    }

    #[test]
    fn test_branch_does_not_touch_parent() {
        let (_, root) = ReducedMatrix::root(&four_city_graph());
        let before = root.clone();
        let _ = root.branch(0, 1, 0);
        assert_eq!(root, before);
    }

    #[test]
    fn test_lower_bound_below_optimum() {
        assert!(lower_bound(&four_city_graph()) <= 80);
    }
}
