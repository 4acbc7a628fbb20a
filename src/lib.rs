//! # Sulcus
//!
//! Surface mesh smoothing and flattening for cortical surface
//! processing pipelines.
//!
//! Sulcus provides the mesh adjacency construction and iterative
//! vertex-position update engines shared by surface blurring and
//! surface flattening tools: deriving a point-to-point neighbor graph
//! from face topology, bounding a diffusion neighborhood by geodesic
//! reach rather than Euclidean distance, evaluating a Gaussian kernel
//! over that neighborhood, and relaxing vertex positions while holding
//! the global mesh size constant.
//!
//! File I/O, coordinate transforms, and volume sampling are left to the
//! surrounding tooling: the library consumes vertex positions and
//! face/vertex topology and produces updated vertex positions.
//!
//! ## Quick Start
//!
//! ```
//! use sulcus::prelude::*;
//! use sulcus::algo::{gaussian_blur, BlurOptions};
//! use nalgebra::Point3;
//!
//! let vertices = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.5, 1.0, 0.0),
//!     Point3::new(0.5, 0.5, 1.0),
//! ];
//! let faces = vec![vec![0, 2, 1], vec![0, 1, 3], vec![1, 2, 3], vec![2, 0, 3]];
//!
//! let mesh = SurfaceMesh::new(vertices, faces).unwrap();
//! let graph = AdjacencyGraph::build(&mesh).unwrap();
//!
//! let smoothed = gaussian_blur(&mesh, &graph, &BlurOptions::default().with_fwhm(2.0));
//! assert_eq!(smoothed.len(), mesh.num_vertices());
//! ```
//!
//! ## Flattening
//!
//! ```
//! use sulcus::prelude::*;
//! use sulcus::algo::{flatten, FlattenOptions};
//! use nalgebra::Point3;
//!
//! # let vertices = vec![
//! #     Point3::new(0.0, 0.0, 0.0),
//! #     Point3::new(1.0, 0.0, 0.0),
//! #     Point3::new(0.5, 1.0, 0.0),
//! #     Point3::new(0.5, 0.5, 1.0),
//! # ];
//! # let faces = vec![vec![0, 2, 1], vec![0, 1, 3], vec![1, 2, 3], vec![2, 0, 3]];
//! let mut mesh = SurfaceMesh::new(vertices, faces).unwrap();
//! let graph = AdjacencyGraph::build(&mesh).unwrap();
//!
//! let options = FlattenOptions::default()
//!     .with_step_ratio(0.2)
//!     .with_iterations(300);
//! let checkpoints = flatten(&mut mesh, &graph, &options).unwrap();
//!
//! for c in &checkpoints {
//!     println!("iter {:4}: rms {}", c.iteration, c.rms_displacement);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod error;
pub mod mesh;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use sulcus::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{MeshError, Result};
    pub use crate::mesh::{AdjacencyGraph, SurfaceMesh};
}

// Re-export nalgebra types for convenience
pub use nalgebra;

#[cfg(test)]
mod tests {
    use super::algo::{flatten, gaussian_blur, BlurOptions, FlattenOptions};
    use super::prelude::*;
    use nalgebra::Point3;

    #[test]
    fn test_blur_then_flatten() {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.5, 1.0, 0.0),
            Point3::new(0.5, 0.5, 1.0),
        ];
        let faces = vec![
            vec![0, 2, 1],
            vec![0, 1, 3],
            vec![1, 2, 3],
            vec![2, 0, 3],
        ];

        let mut mesh = SurfaceMesh::new(vertices, faces).unwrap();
        let graph = AdjacencyGraph::build(&mesh).unwrap();

        let smoothed = gaussian_blur(&mesh, &graph, &BlurOptions::default().with_fwhm(1.0));
        mesh.vertices_mut().copy_from_slice(&smoothed);

        let checkpoints = flatten(
            &mut mesh,
            &graph,
            &FlattenOptions::default().with_iterations(60),
        )
        .unwrap();

        assert_eq!(checkpoints.len(), 2);
        for p in mesh.vertices() {
            assert!(p.x.is_finite() && p.y.is_finite() && p.z.is_finite());
        }
    }
}
