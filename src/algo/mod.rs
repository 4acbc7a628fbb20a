//! Surface processing algorithms.
//!
//! This module contains the vertex-position update engines:
//!
//! - **Blurring**: geodesic-bounded Gaussian smoothing of vertex
//!   positions ([`gaussian_blur`])
//! - **Flattening**: iterative neighbor-centroid relaxation with
//!   periodic size renormalization ([`flatten`])
//! - **Neighborhoods**: the bounded breadth-first collection the blur
//!   kernel is evaluated over ([`points_within_distance`])
//!
//! Both engines consume a [`crate::mesh::SurfaceMesh`] together with an
//! [`crate::mesh::AdjacencyGraph`] built from it, and accept an
//! optional [`Progress`] reporter.

pub mod blur;
pub mod flatten;
pub mod neighborhood;
pub mod progress;

pub use blur::{gaussian_blur, gaussian_blur_with_progress, BlurOptions};
pub use flatten::{flatten, flatten_with_progress, CheckpointStats, FlattenOptions};
pub use neighborhood::points_within_distance;
pub use progress::Progress;
