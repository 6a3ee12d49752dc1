//! # Normal Derivation
//!
//! Derives per-face and per-vertex normals from a triangle list and
//! position list.
//!
//! Face normals come from the cross product of the two winding-order edge
//! vectors, so the builders' counter-clockwise convention yields outward
//! normals. Vertex normals are the equal-weighted average of incident face
//! normals. Shapes with an exact analytic normal (ellipsoid, torus,
//! truncated-cone body, icosphere) assign theirs in the builder and never
//! go through averaging.

use glam::DVec3;

use crate::mesh::Mesh;

/// Computes one outward normal per face.
///
/// Degenerate triangles (zero area) yield a zero vector rather than NaN.
pub fn face_normals(mesh: &Mesh) -> Vec<DVec3> {
    let vertices = mesh.vertices();
    mesh.faces()
        .iter()
        .map(|&[a, b, c]| {
            let va = vertices[a as usize];
            let vb = vertices[b as usize];
            let vc = vertices[c as usize];
            (vb - va).cross(vc - va).normalize_or_zero()
        })
        .collect()
}

/// Computes face normals and stores them on the mesh.
pub fn compute_face_normals(mesh: &mut Mesh) {
    let normals = face_normals(mesh);
    mesh.set_face_normals(normals);
}

/// Computes vertex normals by averaging incident face normals, storing both
/// face and vertex normals on the mesh.
///
/// The average is equal-weighted, not angle-weighted: every incident face
/// contributes its unit normal once.
pub fn compute_vertex_normals(mesh: &mut Mesh) {
    let per_face = face_normals(mesh);
    let mut accumulated = vec![DVec3::ZERO; mesh.vertex_count()];

    for (face, normal) in mesh.faces().iter().zip(&per_face) {
        for &index in face {
            accumulated[index as usize] += *normal;
        }
    }

    let vertex_normals = accumulated
        .into_iter()
        .map(DVec3::normalize_or_zero)
        .collect();

    mesh.set_vertex_normals(vertex_normals);
    mesh.set_face_normals(per_face);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::DVec2;

    fn unit_square() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0), DVec2::new(0.0, 0.0));
        mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0), DVec2::new(1.0, 0.0));
        mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0), DVec2::new(0.0, 1.0));
        mesh.add_vertex(DVec3::new(1.0, 1.0, 0.0), DVec2::new(1.0, 1.0));
        mesh.add_triangle(0, 1, 2);
        mesh.add_triangle(2, 1, 3);
        mesh
    }

    #[test]
    fn face_normals_point_out_of_ccw_winding() {
        let mesh = unit_square();
        for normal in face_normals(&mesh) {
            assert_relative_eq!(normal.z, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn vertex_normals_average_to_unit_length() {
        let mut mesh = unit_square();
        compute_vertex_normals(&mut mesh);
        let normals = mesh.vertex_normals().unwrap();
        assert_eq!(normals.len(), mesh.vertex_count());
        for normal in normals {
            assert_relative_eq!(normal.length(), 1.0, epsilon = 1e-9);
            assert_relative_eq!(normal.z, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn degenerate_face_yields_zero_normal() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO, DVec2::ZERO);
        mesh.add_vertex(DVec3::ZERO, DVec2::ZERO);
        mesh.add_vertex(DVec3::X, DVec2::X);
        mesh.add_triangle(0, 1, 2);
        assert_eq!(face_normals(&mesh)[0], DVec3::ZERO);
    }
}
