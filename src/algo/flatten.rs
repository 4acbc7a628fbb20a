//! Iterative surface flattening.
//!
//! Relaxes a mesh toward low curvature by repeatedly moving every
//! vertex part of the way toward the centroid of its one-ring
//! neighbors. Pure neighbor averaging shrinks a mesh toward a point
//! over many iterations, so the solver periodically renormalizes the
//! positions: it rescales about the live centroid until the summed
//! squared adjacency-edge length matches its initial value, and
//! recenters on the original centroid.
//!
//! The iteration count is fixed by the caller; the solver reports
//! per-checkpoint RMS displacement so the caller can observe the
//! convergence trend, but it never stops early.
//!
//! # Example
//!
//! ```
//! use sulcus::algo::{flatten, FlattenOptions};
//! use sulcus::mesh::{AdjacencyGraph, SurfaceMesh};
//! use nalgebra::Point3;
//!
//! let vertices = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.5, 1.0, 0.0),
//!     Point3::new(0.5, 0.5, 1.0),
//! ];
//! let faces = vec![vec![0, 2, 1], vec![0, 1, 3], vec![1, 2, 3], vec![2, 0, 3]];
//! let mut mesh = SurfaceMesh::new(vertices, faces).unwrap();
//! let graph = AdjacencyGraph::build(&mesh).unwrap();
//!
//! let options = FlattenOptions::default().with_iterations(100);
//! let checkpoints = flatten(&mut mesh, &graph, &options).unwrap();
//! assert_eq!(checkpoints.last().unwrap().iteration, 100);
//! ```

use nalgebra::{Point3, Vector3};
use rayon::prelude::*;

use crate::error::{MeshError, Result};
use crate::mesh::{centroid, AdjacencyGraph, SurfaceMesh};

use super::Progress;

/// Options for iterative flattening.
#[derive(Debug, Clone)]
pub struct FlattenOptions {
    /// Under-relaxation factor in `(0, 1)`: each step moves a vertex
    /// this fraction of the way toward its neighbor centroid. Values
    /// near 1 are aggressive and can oscillate; values near 0 are slow
    /// but stable.
    pub step_ratio: f64,

    /// Number of relaxation iterations to run.
    pub iterations: usize,

    /// Renormalize and record RMS displacement every this many
    /// iterations (and always on the final iteration). Treated as 1
    /// if set to 0.
    pub checkpoint_interval: usize,

    /// Whether to use parallel execution (default: true).
    pub parallel: bool,
}

impl Default for FlattenOptions {
    fn default() -> Self {
        Self {
            step_ratio: 0.2,
            iterations: 1000,
            checkpoint_interval: 30,
            parallel: true,
        }
    }
}

impl FlattenOptions {
    /// Set the under-relaxation factor.
    pub fn with_step_ratio(mut self, step_ratio: f64) -> Self {
        self.step_ratio = step_ratio;
        self
    }

    /// Set the number of iterations.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the checkpoint interval.
    pub fn with_checkpoint_interval(mut self, interval: usize) -> Self {
        self.checkpoint_interval = interval;
        self
    }

    /// Set whether to use parallel execution.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Create options for single-threaded execution.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

/// Diagnostics recorded at a renormalization checkpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckpointStats {
    /// Iteration count at this checkpoint (1-based).
    pub iteration: usize,

    /// Root-mean-square per-vertex displacement since the previous
    /// checkpoint (or since the initial positions for the first one).
    pub rms_displacement: f64,
}

/// Relax a mesh toward low curvature, mutating its positions in place.
///
/// Each iteration replaces every vertex with
/// `(1 - step_ratio) * position + step_ratio * neighbor_centroid`,
/// reading only the previous iteration's positions (a synchronous
/// Jacobi-style update, so the result does not depend on vertex
/// order). Every `checkpoint_interval` iterations, and on the final
/// one, positions are renormalized with the single similarity
/// transform `p <- reference_centroid + scale * (p - live_centroid)`
/// where `scale` restores the initial summed squared edge length.
///
/// Returns the per-checkpoint diagnostics. `step_ratio <= 0` or
/// `iterations == 0` is a no-op that leaves the mesh untouched and
/// returns no checkpoints.
///
/// The graph must have been built from this mesh.
///
/// # Errors
///
/// Returns [`MeshError::IsolatedVertex`] if some vertex has no
/// neighbors; the mesh is not modified in that case.
pub fn flatten(
    mesh: &mut SurfaceMesh,
    graph: &AdjacencyGraph,
    options: &FlattenOptions,
) -> Result<Vec<CheckpointStats>> {
    flatten_with_progress(mesh, graph, options, &Progress::none())
}

/// Flattening with per-iteration progress reporting.
///
/// See [`flatten`]; additionally reports every completed iteration to
/// `progress`.
pub fn flatten_with_progress(
    mesh: &mut SurfaceMesh,
    graph: &AdjacencyGraph,
    options: &FlattenOptions,
    progress: &Progress,
) -> Result<Vec<CheckpointStats>> {
    let n = mesh.num_vertices();
    for v in 0..n {
        if graph.neighbors(v).is_empty() {
            return Err(MeshError::IsolatedVertex { vertex: v });
        }
    }

    if options.iterations == 0 || options.step_ratio <= 0.0 {
        return Ok(Vec::new());
    }

    let interval = options.checkpoint_interval.max(1);
    let reference_centroid = mesh.centroid();
    let reference_size = edge_length_sq_sum(graph, mesh.vertices());

    let mut checkpoint = mesh.vertices().to_vec();
    let mut stats = Vec::new();

    for iter in 0..options.iterations {
        let new_positions: Vec<Point3<f64>> = {
            let positions = mesh.vertices();
            if options.parallel {
                (0..n)
                    .into_par_iter()
                    .map(|v| relax_point(graph, positions, v, options.step_ratio))
                    .collect()
            } else {
                (0..n)
                    .map(|v| relax_point(graph, positions, v, options.step_ratio))
                    .collect()
            }
        };
        mesh.vertices_mut().copy_from_slice(&new_positions);

        let last = iter + 1 == options.iterations;
        if (iter + 1) % interval == 0 || last {
            normalize_size(graph, mesh.vertices_mut(), reference_centroid, reference_size);

            let rms = rms_displacement(mesh.vertices(), &checkpoint);
            checkpoint.copy_from_slice(mesh.vertices());
            stats.push(CheckpointStats {
                iteration: iter + 1,
                rms_displacement: rms,
            });
        }

        progress.report(iter + 1, options.iterations, "Flattening");
    }

    Ok(stats)
}

/// One under-relaxation step for a single vertex.
fn relax_point(
    graph: &AdjacencyGraph,
    positions: &[Point3<f64>],
    v: usize,
    step_ratio: f64,
) -> Point3<f64> {
    let ring = graph.neighbors(v);

    let mut sum = Vector3::zeros();
    for &neigh in ring {
        sum += positions[neigh].coords;
    }
    let mean = sum / ring.len() as f64;

    Point3::from((1.0 - step_ratio) * positions[v].coords + step_ratio * mean)
}

/// Sum of squared edge lengths over all directed adjacency edges.
///
/// Counts each undirected edge once per direction; the renormalization
/// ratio is unaffected by the double count.
fn edge_length_sq_sum(graph: &AdjacencyGraph, positions: &[Point3<f64>]) -> f64 {
    let mut total = 0.0;
    for v in 0..graph.num_vertices() {
        for &neigh in graph.neighbors(v) {
            total += (positions[v] - positions[neigh]).norm_squared();
        }
    }
    total
}

/// Rescale about the live centroid so the summed squared edge length
/// returns to `reference_size`, recentering on `reference_centroid`.
fn normalize_size(
    graph: &AdjacencyGraph,
    positions: &mut [Point3<f64>],
    reference_centroid: Point3<f64>,
    reference_size: f64,
) {
    let current_size = edge_length_sq_sum(graph, positions);
    let scale = (reference_size / current_size).sqrt();
    let live_centroid = centroid(positions);

    for p in positions.iter_mut() {
        *p = reference_centroid + scale * (*p - live_centroid);
    }
}

/// Root-mean-square per-vertex displacement between two position sets.
fn rms_displacement(current: &[Point3<f64>], previous: &[Point3<f64>]) -> f64 {
    let sum: f64 = current
        .iter()
        .zip(previous)
        .map(|(c, p)| (c - p).norm_squared())
        .sum();
    (sum / current.len() as f64).sqrt()
}
