//! Geodesic-bounded vertex neighborhoods.
//!
//! Collects the set of vertices around a seed by breadth-first
//! expansion over the adjacency graph, admitting a vertex only if its
//! Euclidean distance to the seed is within a bound. The boundary of
//! the resulting set follows mesh connectivity rather than a Euclidean
//! sphere, so a kernel evaluated over it does not blend across folds
//! or creases of the surface.

use std::collections::VecDeque;

use nalgebra::Point3;

use crate::mesh::AdjacencyGraph;

/// Collect all vertices reachable from `seed` whose Euclidean distance
/// to `positions[seed]` is at most `max_distance`.
///
/// Every vertex is tested and marked visited exactly once, even when it
/// is reachable along multiple paths. Vertices outside the distance
/// bound are still expanded, so a vertex within the bound is found even
/// if every path to it passes through vertices outside it. The seed is
/// always the first element of the result.
///
/// The result order is deterministic: breadth-first, neighbors in
/// adjacency-list order.
///
/// # Example
///
/// ```
/// use sulcus::algo::points_within_distance;
/// use sulcus::mesh::{AdjacencyGraph, SurfaceMesh};
/// use nalgebra::Point3;
///
/// let vertices = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.5, 1.0, 0.0),
/// ];
/// let mesh = SurfaceMesh::new(vertices, vec![vec![0, 1, 2]]).unwrap();
/// let graph = AdjacencyGraph::build(&mesh).unwrap();
///
/// let ball = points_within_distance(&graph, mesh.vertices(), 0, 1.0);
/// assert_eq!(ball[0], 0);
/// assert!(ball.contains(&1));
/// ```
pub fn points_within_distance(
    graph: &AdjacencyGraph,
    positions: &[Point3<f64>],
    seed: usize,
    max_distance: f64,
) -> Vec<usize> {
    let seed_pos = positions[seed];

    let mut visited = vec![false; graph.num_vertices()];
    visited[seed] = true;

    let mut collected = vec![seed];
    let mut queue = VecDeque::from([seed]);

    while let Some(p) = queue.pop_front() {
        for &neigh in graph.neighbors(p) {
            if visited[neigh] {
                continue;
            }
            visited[neigh] = true;

            if (positions[neigh] - seed_pos).norm() <= max_distance {
                collected.push(neigh);
            }
            queue.push_back(neigh);
        }
    }

    collected
}
