//! Face-vertex surface mesh.
//!
//! [`SurfaceMesh`] is a plain indexed polygon mesh: an array of vertex
//! positions plus an array of faces, each face a list of vertex indices.
//! Faces may have any arity of three or more, so triangulated and mixed
//! polygon surfaces are both representable.

use nalgebra::Point3;

use crate::error::{MeshError, Result};

/// An indexed polygon surface mesh.
///
/// Vertex indices are stable for the lifetime of the mesh: algorithms
/// address vertices by position in the vertex array. The face list is
/// immutable after construction; vertex positions may be replaced or
/// mutated in place.
///
/// # Example
///
/// ```
/// use sulcus::mesh::SurfaceMesh;
/// use nalgebra::Point3;
///
/// let vertices = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.5, 1.0, 0.0),
/// ];
/// let faces = vec![vec![0, 1, 2]];
///
/// let mesh = SurfaceMesh::new(vertices, faces).unwrap();
/// assert_eq!(mesh.num_vertices(), 3);
/// assert_eq!(mesh.num_faces(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct SurfaceMesh {
    vertices: Vec<Point3<f64>>,
    faces: Vec<Vec<usize>>,
}

impl SurfaceMesh {
    /// Build a mesh from vertex positions and polygon faces.
    ///
    /// # Errors
    ///
    /// Returns an error if the face list is empty, a face has fewer
    /// than three vertices, a face repeats a vertex, or a face
    /// references a vertex index that is out of range.
    pub fn new(vertices: Vec<Point3<f64>>, faces: Vec<Vec<usize>>) -> Result<Self> {
        if faces.is_empty() {
            return Err(MeshError::EmptyMesh);
        }

        for (fi, face) in faces.iter().enumerate() {
            if face.len() < 3 {
                return Err(MeshError::FaceTooSmall {
                    face: fi,
                    count: face.len(),
                });
            }
            for (i, &vi) in face.iter().enumerate() {
                if vi >= vertices.len() {
                    return Err(MeshError::InvalidVertexIndex { face: fi, vertex: vi });
                }
                if face[..i].contains(&vi) {
                    return Err(MeshError::DegenerateFace { face: fi });
                }
            }
        }

        Ok(Self { vertices, faces })
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of faces.
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Vertex positions.
    pub fn vertices(&self) -> &[Point3<f64>] {
        &self.vertices
    }

    /// Mutable vertex positions.
    ///
    /// The slice has fixed length; positions can be moved but vertices
    /// cannot be added or removed, so the face list stays valid.
    pub fn vertices_mut(&mut self) -> &mut [Point3<f64>] {
        &mut self.vertices
    }

    /// Polygon faces, each a list of vertex indices.
    pub fn faces(&self) -> &[Vec<usize>] {
        &self.faces
    }

    /// Centroid of all vertex positions.
    pub fn centroid(&self) -> Point3<f64> {
        crate::mesh::centroid(&self.vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_triangle() {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.5, 1.0, 0.0),
        ];
        let faces = vec![vec![0, 1, 2]];

        let mesh = SurfaceMesh::new(vertices, faces).unwrap();
        assert_eq!(mesh.num_vertices(), 3);
        assert_eq!(mesh.num_faces(), 1);
    }

    #[test]
    fn test_mixed_arity_faces() {
        // A quad and a triangle sharing an edge.
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(2.0, 0.5, 0.0),
        ];
        let faces = vec![vec![0, 1, 2, 3], vec![1, 4, 2]];

        let mesh = SurfaceMesh::new(vertices, faces).unwrap();
        assert_eq!(mesh.num_faces(), 2);
    }

    #[test]
    fn test_empty_mesh_rejected() {
        let vertices = vec![Point3::new(0.0, 0.0, 0.0)];
        let result = SurfaceMesh::new(vertices, vec![]);
        assert_eq!(result.unwrap_err(), MeshError::EmptyMesh);
    }

    #[test]
    fn test_face_too_small_rejected() {
        let vertices = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)];
        let result = SurfaceMesh::new(vertices, vec![vec![0, 1]]);
        assert_eq!(
            result.unwrap_err(),
            MeshError::FaceTooSmall { face: 0, count: 2 }
        );
    }

    #[test]
    fn test_degenerate_face_rejected() {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.5, 1.0, 0.0),
        ];

        // Fully collapsed face.
        let result = SurfaceMesh::new(vertices.clone(), vec![vec![0, 0, 0]]);
        assert_eq!(result.unwrap_err(), MeshError::DegenerateFace { face: 0 });

        // Non-consecutive repeat in a quad.
        let result = SurfaceMesh::new(vertices, vec![vec![0, 1, 2, 1]]);
        assert_eq!(result.unwrap_err(), MeshError::DegenerateFace { face: 0 });
    }

    #[test]
    fn test_invalid_vertex_index_rejected() {
        let vertices = vec![Point3::new(0.0, 0.0, 0.0)];
        let result = SurfaceMesh::new(vertices, vec![vec![0, 1, 2]]);
        assert_eq!(
            result.unwrap_err(),
            MeshError::InvalidVertexIndex { face: 0, vertex: 1 }
        );
    }

    #[test]
    fn test_centroid() {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(1.0, 3.0, 0.0),
        ];
        let mesh = SurfaceMesh::new(vertices, vec![vec![0, 1, 2]]).unwrap();

        let c = mesh.centroid();
        assert!((c.x - 1.0).abs() < 1e-12);
        assert!((c.y - 1.0).abs() < 1e-12);
        assert!(c.z.abs() < 1e-12);
    }
}
