//! Point-to-point adjacency derived from face topology.
//!
//! [`AdjacencyGraph`] stores, for every vertex, the ordered list of
//! vertices it shares a mesh edge with (its one-ring). The graph is
//! derived once per operation from the face list and discarded
//! afterwards; it is never persisted.

use crate::error::{MeshError, Result};
use crate::mesh::SurfaceMesh;

/// Safety bound on the size of a single vertex's one-ring.
///
/// A ring larger than this indicates degenerate or non-manifold input
/// and is rejected rather than silently truncated.
pub const MAX_NEIGHBORS: usize = 10_000;

/// Per-vertex one-ring neighbor lists.
///
/// Neighbor lists are deduplicated, contain no self-loops, and are
/// symmetric: `u` appears in the list of `v` exactly when `v` appears
/// in the list of `u`. List order is deterministic (faces are scanned
/// in order) but carries no further meaning.
///
/// # Example
///
/// ```
/// use sulcus::mesh::{AdjacencyGraph, SurfaceMesh};
/// use nalgebra::Point3;
///
/// let vertices = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.5, 1.0, 0.0),
/// ];
/// let mesh = SurfaceMesh::new(vertices, vec![vec![0, 1, 2]]).unwrap();
///
/// let graph = AdjacencyGraph::build(&mesh).unwrap();
/// assert_eq!(graph.neighbors(0), &[1, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct AdjacencyGraph {
    neighbors: Vec<Vec<usize>>,
}

impl AdjacencyGraph {
    /// Derive the one-ring of every vertex from the mesh's face list.
    ///
    /// Each polygon contributes an edge between every pair of
    /// consecutive vertices in its boundary, in both directions, so
    /// symmetry holds by construction.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::UnreferencedVertex`] if some vertex appears
    /// in no face, and [`MeshError::TooManyNeighbors`] if a ring would
    /// exceed [`MAX_NEIGHBORS`].
    pub fn build(mesh: &SurfaceMesh) -> Result<Self> {
        let n = mesh.num_vertices();
        let mut neighbors: Vec<Vec<usize>> = vec![Vec::new(); n];

        for face in mesh.faces() {
            let len = face.len();
            for i in 0..len {
                let v = face[i];
                let prev = face[(i + len - 1) % len];
                let next = face[(i + 1) % len];

                for u in [next, prev] {
                    if neighbors[v].contains(&u) {
                        continue;
                    }
                    if neighbors[v].len() == MAX_NEIGHBORS {
                        return Err(MeshError::TooManyNeighbors {
                            vertex: v,
                            limit: MAX_NEIGHBORS,
                        });
                    }
                    neighbors[v].push(u);
                }
            }
        }

        if let Some(vertex) = neighbors.iter().position(Vec::is_empty) {
            return Err(MeshError::UnreferencedVertex { vertex });
        }

        Ok(Self { neighbors })
    }

    /// Number of vertices in the graph.
    pub fn num_vertices(&self) -> usize {
        self.neighbors.len()
    }

    /// One-ring neighbors of vertex `v`.
    pub fn neighbors(&self, v: usize) -> &[usize] {
        &self.neighbors[v]
    }
}
