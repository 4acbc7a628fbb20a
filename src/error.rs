//! Error types for sulcus.
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Result type alias using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;

/// Errors that can occur during mesh operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// The mesh has no faces.
    #[error("mesh has no faces")]
    EmptyMesh,

    /// A face has fewer than three vertices.
    #[error("face {face} has only {count} vertices (minimum is 3)")]
    FaceTooSmall {
        /// The face index.
        face: usize,
        /// Number of vertices in the face.
        count: usize,
    },

    /// A face repeats a vertex index (degenerate polygon).
    #[error("face {face} is degenerate (has duplicate vertices)")]
    DegenerateFace {
        /// The face index.
        face: usize,
    },

    /// A face references an invalid vertex index.
    #[error("face {face} references invalid vertex index {vertex}")]
    InvalidVertexIndex {
        /// The face index.
        face: usize,
        /// The invalid vertex index.
        vertex: usize,
    },

    /// A vertex does not appear in any face, so its one-ring cannot
    /// be derived.
    #[error("vertex {vertex} is not referenced by any face")]
    UnreferencedVertex {
        /// The vertex index.
        vertex: usize,
    },

    /// A vertex has no adjacency neighbors but the requested operation
    /// needs at least one.
    #[error("vertex {vertex} has no neighbors")]
    IsolatedVertex {
        /// The vertex index.
        vertex: usize,
    },

    /// A vertex's one-ring exceeds the neighbor cap, indicating
    /// degenerate or non-manifold geometry.
    #[error("vertex {vertex} has more than {limit} neighbors")]
    TooManyNeighbors {
        /// The vertex index.
        vertex: usize,
        /// The configured neighbor cap.
        limit: usize,
    },
}
