//! # Mesh Data Structure
//!
//! Core mesh representation with vertices, uvs, triangles, normals, and
//! wireframe edges.

use config::constants::UNIT_NORMAL_TOLERANCE;
use glam::{DVec2, DVec3};

use crate::error::MeshError;

/// An indexed triangle mesh in a canonical unit frame.
///
/// All geometry calculations use f64 internally. Conversion to f32 only
/// happens at the GPU boundary inside the render layer.
///
/// # Example
///
/// ```rust
/// use easel_geom::Mesh;
/// use glam::{DVec2, DVec3};
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0), DVec2::new(0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0), DVec2::new(1.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0), DVec2::new(0.0, 1.0));
/// mesh.add_triangle(0, 1, 2);
/// assert!(mesh.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Texture coordinates, index-aligned with `vertices`
    uvs: Vec<DVec2>,
    /// Triangle indices (3 indices per triangle)
    faces: Vec<[u32; 3]>,
    /// Wireframe edges as unordered index pairs
    edges: Vec<[u32; 2]>,
    /// Optional per-vertex normals, index-aligned with `vertices`
    vertex_normals: Option<Vec<DVec3>>,
    /// Optional per-face normals
    face_normals: Option<Vec<DVec3>>,
    /// Subdivision resolution the mesh was built with
    detail_x: u32,
    /// Subdivision resolution the mesh was built with
    detail_y: u32,
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::with_detail(0, 0)
    }

    /// Creates an empty mesh recording the subdivision resolution used to
    /// build it.
    pub fn with_detail(detail_x: u32, detail_y: u32) -> Self {
        Self {
            vertices: Vec::new(),
            uvs: Vec::new(),
            faces: Vec::new(),
            edges: Vec::new(),
            vertex_normals: None,
            face_normals: None,
            detail_x,
            detail_y,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns the number of wireframe edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the subdivision resolution along the first parametric axis.
    #[inline]
    pub fn detail_x(&self) -> u32 {
        self.detail_x
    }

    /// Returns the subdivision resolution along the second parametric axis.
    #[inline]
    pub fn detail_y(&self) -> u32 {
        self.detail_y
    }

    /// Adds a vertex with its texture coordinate and returns its index.
    pub fn add_vertex(&mut self, position: DVec3, uv: DVec2) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        self.uvs.push(uv);
        index
    }

    /// Adds a vertex carrying an analytic normal and returns its index.
    ///
    /// Builders with an exact surface normal (sphere, torus, cone body) use
    /// this instead of face-normal averaging.
    pub fn add_vertex_with_normal(&mut self, position: DVec3, uv: DVec2, normal: DVec3) -> u32 {
        let index = self.add_vertex(position, uv);
        self.vertex_normals
            .get_or_insert_with(Vec::new)
            .push(normal);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.faces.push([v0, v1, v2]);
    }

    /// Adds a wireframe edge by vertex indices.
    pub fn add_edge(&mut self, v0: u32, v1: u32) {
        self.edges.push([v0, v1]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the texture coordinates.
    #[inline]
    pub fn uvs(&self) -> &[DVec2] {
        &self.uvs
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn faces(&self) -> &[[u32; 3]] {
        &self.faces
    }

    /// Returns a reference to the wireframe edges.
    #[inline]
    pub fn edges(&self) -> &[[u32; 2]] {
        &self.edges
    }

    /// Returns the vertex normals, if set.
    pub fn vertex_normals(&self) -> Option<&[DVec3]> {
        self.vertex_normals.as_deref()
    }

    /// Returns the face normals, if set.
    pub fn face_normals(&self) -> Option<&[DVec3]> {
        self.face_normals.as_deref()
    }

    /// Replaces the vertex normals.
    pub fn set_vertex_normals(&mut self, normals: Vec<DVec3>) {
        self.vertex_normals = Some(normals);
    }

    /// Replaces the face normals.
    pub fn set_face_normals(&mut self, normals: Vec<DVec3>) {
        self.face_normals = Some(normals);
    }

    /// Replaces the wireframe edge list.
    pub fn set_edges(&mut self, edges: Vec<[u32; 2]>) {
        self.edges = edges;
    }

    /// Drops the wireframe edge list, keeping the fill geometry intact.
    ///
    /// Used when a mesh exceeds its stroke-detail ceiling.
    pub fn clear_edges(&mut self) {
        self.edges.clear();
    }

    /// Checks the structural invariants of the mesh.
    ///
    /// - every face and edge index is in bounds
    /// - uvs are index-aligned with vertices
    /// - vertex normals, when present, are index-aligned and unit length
    /// - face normals, when present, are one per face
    pub fn validate(&self) -> Result<(), MeshError> {
        let vertex_count = self.vertices.len();

        if self.uvs.len() != vertex_count {
            return Err(MeshError::MisalignedAttribute {
                attribute: "uvs",
                expected: vertex_count,
                actual: self.uvs.len(),
            });
        }

        for face in &self.faces {
            for &index in face {
                if index as usize >= vertex_count {
                    return Err(MeshError::IndexOutOfBounds {
                        index,
                        vertex_count,
                    });
                }
            }
        }

        for edge in &self.edges {
            for &index in edge {
                if index as usize >= vertex_count {
                    return Err(MeshError::IndexOutOfBounds {
                        index,
                        vertex_count,
                    });
                }
            }
        }

        if let Some(normals) = &self.vertex_normals {
            if normals.len() != vertex_count {
                return Err(MeshError::MisalignedAttribute {
                    attribute: "vertex normals",
                    expected: vertex_count,
                    actual: normals.len(),
                });
            }
            for (index, normal) in normals.iter().enumerate() {
                let length = normal.length();
                if (length - 1.0).abs() > UNIT_NORMAL_TOLERANCE {
                    return Err(MeshError::NonUnitNormal { index, length });
                }
            }
        }

        if let Some(normals) = &self.face_normals {
            if normals.len() != self.faces.len() {
                return Err(MeshError::MisalignedAttribute {
                    attribute: "face normals",
                    expected: self.faces.len(),
                    actual: normals.len(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_mesh_is_empty() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.face_count(), 0);
        assert_eq!(mesh.edge_count(), 0);
    }

    #[test]
    fn add_vertex_returns_sequential_indices() {
        let mut mesh = Mesh::new();
        let a = mesh.add_vertex(DVec3::ZERO, DVec2::ZERO);
        let b = mesh.add_vertex(DVec3::X, DVec2::X);
        assert_eq!(a, 0);
        assert_eq!(b, 1);
    }

    #[test]
    fn validate_rejects_out_of_bounds_face() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO, DVec2::ZERO);
        mesh.add_triangle(0, 1, 2);
        assert!(mesh.validate().is_err());
    }

    #[test]
    fn validate_rejects_non_unit_normal() {
        let mut mesh = Mesh::new();
        mesh.add_vertex_with_normal(DVec3::ZERO, DVec2::ZERO, DVec3::new(0.0, 2.0, 0.0));
        assert!(mesh.validate().is_err());
    }

    #[test]
    fn clear_edges_keeps_fill_geometry() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO, DVec2::ZERO);
        mesh.add_vertex(DVec3::X, DVec2::X);
        mesh.add_vertex(DVec3::Y, DVec2::Y);
        mesh.add_triangle(0, 1, 2);
        mesh.add_edge(0, 1);
        mesh.clear_edges();
        assert_eq!(mesh.edge_count(), 0);
        assert_eq!(mesh.face_count(), 1);
    }
}
