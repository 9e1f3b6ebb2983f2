//! Nearest-neighbor tour construction.
//!
//! Starting from a given vertex, repeatedly move to the cheapest reachable
//! unvisited vertex. When no unvisited vertex is reachable from the current
//! one, the walk jumps to the lowest-numbered unvisited vertex so the result
//! is always a full permutation; the resulting tour is then infeasible and
//! the local-search solvers repair it under the missing-edge penalty.
//!
//! # Complexity
//!
//! O(n²)

use rand::Rng;

use crate::graph::CostGraph;

/// Builds a nearest-neighbor tour beginning at `start`.
///
/// # Panics
///
/// Panics if `start` is not a vertex of `graph`.
///
/// # Examples
///
/// ```
/// use u_tsp::construct::nearest_neighbor_tour;
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
/// assert_eq!(nearest_neighbor_tour(&graph, 0), vec![0, 1, 3, 2]);
/// ```
pub fn nearest_neighbor_tour(graph: &CostGraph, start: usize) -> Vec<usize> {
    let n = graph.size();
    assert!(start < n, "start vertex {start} out of range for {n} vertices");

    let mut tour = Vec::with_capacity(n);
    let mut unvisited: Vec<usize> = (0..n).filter(|&v| v != start).collect();
    let mut current = start;
    tour.push(start);

    while !unvisited.is_empty() {
        let next = graph
            .nearest_neighbor(current, &unvisited)
            .unwrap_or(unvisited[0]);
        unvisited.retain(|&v| v != next);
        tour.push(next);
        current = next;
    }

    tour
}

/// Builds a nearest-neighbor tour from a uniformly random start vertex.
pub fn random_nearest_neighbor_tour<R: Rng>(graph: &CostGraph, rng: &mut R) -> Vec<usize> {
    let start = rng.random_range(0..graph.size());
    nearest_neighbor_tour(graph, start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::is_valid_tour;
    use crate::graph::tests::four_city_graph;
    use crate::random::create_rng;

    #[test]
    fn test_greedy_order() {
        let graph = four_city_graph();
        // From 2: 0 (15), then 1 (10), then 3 (25).
        assert_eq!(nearest_neighbor_tour(&graph, 2), vec![2, 0, 1, 3]);
    }

    #[test]
    fn test_dead_end_falls_back_to_first_unvisited() {
        // 0 only reaches 3, and 3 reaches nothing unvisited.
        let graph = CostGraph::from_rows(&[
            vec![-1, -1, -1, 1],
            vec![1, -1, 1, 1],
            vec![1, 1, -1, 1],
            vec![1, -1, -1, -1],
        ])
        .unwrap();
        let tour = nearest_neighbor_tour(&graph, 0);
        assert_eq!(tour, vec![0, 3, 1, 2]);
        assert!(graph.tour_cost(&tour).is_none());
    }

    #[test]
    fn test_single_vertex() {
        let graph = CostGraph::from_rows(&[vec![-1]]).unwrap();
        assert_eq!(nearest_neighbor_tour(&graph, 0), vec![0]);
    }

    #[test]
    fn test_random_start_is_valid() {
        let graph = four_city_graph();
        let mut rng = create_rng(5);
        for _ in 0..20 {
            assert!(is_valid_tour(&random_nearest_neighbor_tour(&graph, &mut rng), 4));
        }
    }
}
