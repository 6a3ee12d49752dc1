//! # Box Primitive
//!
//! A unit cube built from six separate quads. Each face owns its four
//! vertices so shared corners can carry a different normal per face; the
//! wireframe is a fixed hand-authored 12-edge list so no triangulation
//! diagonals appear in stroke rendering.

use glam::{DVec2, DVec3};

use crate::mesh::Mesh;

/// One entry per cube face: outward normal and the four corner positions in
/// counter-clockwise order viewed from outside.
const FACES: [(DVec3, [DVec3; 4]); 6] = [
    // +Z front
    (
        DVec3::new(0.0, 0.0, 1.0),
        [
            DVec3::new(-0.5, -0.5, 0.5),
            DVec3::new(0.5, -0.5, 0.5),
            DVec3::new(0.5, 0.5, 0.5),
            DVec3::new(-0.5, 0.5, 0.5),
        ],
    ),
    // -Z back
    (
        DVec3::new(0.0, 0.0, -1.0),
        [
            DVec3::new(0.5, -0.5, -0.5),
            DVec3::new(-0.5, -0.5, -0.5),
            DVec3::new(-0.5, 0.5, -0.5),
            DVec3::new(0.5, 0.5, -0.5),
        ],
    ),
    // +X right
    (
        DVec3::new(1.0, 0.0, 0.0),
        [
            DVec3::new(0.5, -0.5, 0.5),
            DVec3::new(0.5, -0.5, -0.5),
            DVec3::new(0.5, 0.5, -0.5),
            DVec3::new(0.5, 0.5, 0.5),
        ],
    ),
    // -X left
    (
        DVec3::new(-1.0, 0.0, 0.0),
        [
            DVec3::new(-0.5, -0.5, -0.5),
            DVec3::new(-0.5, -0.5, 0.5),
            DVec3::new(-0.5, 0.5, 0.5),
            DVec3::new(-0.5, 0.5, -0.5),
        ],
    ),
    // +Y top
    (
        DVec3::new(0.0, 1.0, 0.0),
        [
            DVec3::new(-0.5, 0.5, 0.5),
            DVec3::new(0.5, 0.5, 0.5),
            DVec3::new(0.5, 0.5, -0.5),
            DVec3::new(-0.5, 0.5, -0.5),
        ],
    ),
    // -Y bottom
    (
        DVec3::new(0.0, -1.0, 0.0),
        [
            DVec3::new(-0.5, -0.5, -0.5),
            DVec3::new(0.5, -0.5, -0.5),
            DVec3::new(0.5, -0.5, 0.5),
            DVec3::new(-0.5, -0.5, 0.5),
        ],
    ),
];

/// The 12 cube edges: front perimeter, back perimeter, and the four
/// connecting edges, indexed into the 24-vertex layout above.
const EDGES: [[u32; 2]; 12] = [
    [0, 1],
    [1, 2],
    [2, 3],
    [3, 0],
    [4, 5],
    [5, 6],
    [6, 7],
    [7, 4],
    [0, 5],
    [1, 4],
    [2, 7],
    [3, 6],
];

/// Creates a unit cube centered on the origin.
///
/// Always 24 vertices, 12 faces, and 12 edges; the detail parameters of a
/// box request tune lighting defaults elsewhere, never the tessellation.
///
/// # Example
///
/// ```rust
/// use easel_geom::primitives::build_box;
///
/// let mesh = build_box();
/// assert_eq!(mesh.vertex_count(), 24);
/// assert_eq!(mesh.face_count(), 12);
/// assert_eq!(mesh.edge_count(), 12);
/// ```
pub fn build_box() -> Mesh {
    let mut mesh = Mesh::new();

    for (normal, corners) in FACES {
        let base = mesh.vertex_count() as u32;
        let uvs = [
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(0.0, 1.0),
        ];
        for (corner, uv) in corners.into_iter().zip(uvs) {
            mesh.add_vertex_with_normal(corner, uv, normal);
        }
        mesh.add_triangle(base, base + 1, base + 2);
        mesh.add_triangle(base, base + 2, base + 3);
    }

    for [a, b] in EDGES {
        mesh.add_edge(a, b);
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn box_counts_are_fixed() {
        let mesh = build_box();
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.face_count(), 12);
        assert_eq!(mesh.edge_count(), 12);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn normals_point_away_from_center() {
        let mesh = build_box();
        let normals = mesh.vertex_normals().unwrap();
        for (vertex, normal) in mesh.vertices().iter().zip(normals) {
            assert!(vertex.dot(*normal) > 0.0);
        }
    }

    #[test]
    fn faces_wind_counter_clockwise_from_outside() {
        let mesh = build_box();
        let normals = mesh.vertex_normals().unwrap();
        for &[a, b, c] in mesh.faces() {
            let va = mesh.vertices()[a as usize];
            let vb = mesh.vertices()[b as usize];
            let vc = mesh.vertices()[c as usize];
            let face_normal = (vb - va).cross(vc - va).normalize();
            assert_relative_eq!(face_normal.dot(normals[a as usize]), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn edges_connect_adjacent_corners_only() {
        let mesh = build_box();
        for &[a, b] in mesh.edges() {
            let delta = mesh.vertices()[a as usize] - mesh.vertices()[b as usize];
            // Cube edges have unit length; face or body diagonals are longer.
            assert_relative_eq!(delta.length(), 1.0, epsilon = 1e-12);
        }
    }
}
