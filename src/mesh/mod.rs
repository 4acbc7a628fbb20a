//! Core mesh data structures.
//!
//! This module provides the face-vertex surface representation and the
//! point-to-point adjacency graph derived from it.
//!
//! # Overview
//!
//! The primary type is [`SurfaceMesh`], an indexed polygon mesh: vertex
//! positions plus faces given as lists of vertex indices. Algorithms in
//! [`crate::algo`] do not walk faces directly; they consume an
//! [`AdjacencyGraph`], the per-vertex one-ring neighbor lists built
//! once per operation from the face list.
//!
//! # Construction
//!
//! ```
//! use sulcus::mesh::{AdjacencyGraph, SurfaceMesh};
//! use nalgebra::Point3;
//!
//! let vertices = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.5, 1.0, 0.0),
//! ];
//! let faces = vec![vec![0, 1, 2]];
//!
//! let mesh = SurfaceMesh::new(vertices, faces).unwrap();
//! let graph = AdjacencyGraph::build(&mesh).unwrap();
//! assert_eq!(graph.neighbors(0).len(), 2);
//! ```

mod adjacency;
mod surface;

pub use adjacency::{AdjacencyGraph, MAX_NEIGHBORS};
pub use surface::SurfaceMesh;

use nalgebra::{Point3, Vector3};

/// Centroid of a set of points.
///
/// Returns the origin for an empty slice.
pub fn centroid(points: &[Point3<f64>]) -> Point3<f64> {
    if points.is_empty() {
        return Point3::origin();
    }
    let sum: Vector3<f64> = points.iter().map(|p| p.coords).sum();
    Point3::from(sum / points.len() as f64)
}
