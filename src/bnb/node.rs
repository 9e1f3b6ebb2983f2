//! Search-tree nodes shared by both branch-and-bound traversals.

use super::reduction::ReducedMatrix;
use crate::graph::{Cost, CostGraph};

/// A partial tour in the branch-and-bound tree.
///
/// Each node owns its reduced matrix outright; children receive a fresh
/// clone, so nodes never share state.
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// Reduced matrix after committing to `path`.
    pub matrix: ReducedMatrix,
    /// Lower bound on any tour completing this partial path.
    pub cost: Cost,
    /// Vertex the partial path currently ends at.
    pub vertex: usize,
    /// Number of edges committed so far.
    pub level: usize,
    /// Committed edges, in order, starting at the start vertex.
    pub path: Vec<(usize, usize)>,
    /// Vertex this node was branched from (`None` for the root).
    pub parent: Option<usize>,
}

impl SearchNode {
    /// Root node: the fully reduced graph, positioned at `start`.
    pub fn root(graph: &CostGraph, start: usize) -> Self {
        let (cost, matrix) = ReducedMatrix::root(graph);
        Self {
            matrix,
            cost,
            vertex: start,
            level: 0,
            path: Vec::new(),
            parent: None,
        }
    }

    /// Expands this node into one child per remaining edge out of `vertex`,
    /// in ascending vertex order.
    pub fn children(&self, start: usize) -> Vec<SearchNode> {
        let from = self.vertex;
        (0..self.matrix.size())
            .filter_map(|to| {
                let edge = self.matrix.get(from, to)?;
                let (increment, matrix) = self.matrix.branch(from, to, start);
                let mut path = Vec::with_capacity(self.path.len() + 1);
                path.extend_from_slice(&self.path);
                path.push((from, to));
                Some(SearchNode {
                    matrix,
                    cost: self.cost + edge + increment,
                    vertex: to,
                    level: self.level + 1,
                    path,
                    parent: Some(from),
                })
            })
            .collect()
    }

    /// Returns `true` once every vertex has been placed on the path.
    pub fn is_leaf(&self, size: usize) -> bool {
        self.level + 1 == size
    }

    /// Returns `true` for a leaf whose closing edge back to `start` exists.
    pub fn closes_tour(&self, graph: &CostGraph, start: usize) -> bool {
        self.is_leaf(graph.size()) && graph.has_edge(self.vertex, start)
    }

    /// Vertex order of the committed path, beginning at `start`.
    pub fn tour(&self, start: usize) -> Vec<usize> {
        std::iter::once(start)
            .chain(self.path.iter().map(|&(_, to)| to))
            .collect()
    }
}
