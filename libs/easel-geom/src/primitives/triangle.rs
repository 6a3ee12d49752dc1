//! # Triangle Primitive
//!
//! Every triangle is an affine image of the unit right triangle, so a
//! single canonical mesh is cached and arbitrary corner points are realized
//! at draw time by composing a basis-change matrix into the model matrix.

use glam::{DMat4, DVec2, DVec3, DVec4};

use crate::mesh::Mesh;

/// Creates the canonical unit right triangle `(0,0) (1,0) (0,1)` with one
/// face and its three perimeter strokes.
pub fn build_triangle() -> Mesh {
    let mut mesh = Mesh::new();
    mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0), DVec2::new(0.0, 0.0));
    mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0), DVec2::new(1.0, 0.0));
    mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0), DVec2::new(0.0, 1.0));
    mesh.add_triangle(0, 1, 2);
    mesh.add_edge(0, 1);
    mesh.add_edge(1, 2);
    mesh.add_edge(2, 0);
    mesh
}

/// Builds the affine transform mapping the canonical triangle onto the
/// given corner points.
///
/// The two edge vectors from the first point become the basis columns and
/// the first point the translation column, so canonical vertex `(1,0)`
/// lands on `b` and `(0,1)` on `c`.
pub fn triangle_basis(a: DVec2, b: DVec2, c: DVec2) -> DMat4 {
    DMat4::from_cols(
        DVec4::new(b.x - a.x, b.y - a.y, 0.0, 0.0),
        DVec4::new(c.x - a.x, c.y - a.y, 0.0, 0.0),
        DVec4::new(0.0, 0.0, 1.0, 0.0),
        DVec4::new(a.x, a.y, 0.0, 1.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn canonical_triangle_counts() {
        let mesh = build_triangle();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.edge_count(), 3);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn basis_maps_canonical_corners_onto_inputs() {
        let a = DVec2::new(2.0, 1.0);
        let b = DVec2::new(5.0, 2.0);
        let c = DVec2::new(3.0, 7.0);
        let basis = triangle_basis(a, b, c);

        let mapped_origin = basis.transform_point3(DVec3::ZERO);
        let mapped_x = basis.transform_point3(DVec3::new(1.0, 0.0, 0.0));
        let mapped_y = basis.transform_point3(DVec3::new(0.0, 1.0, 0.0));

        assert_relative_eq!(mapped_origin.x, a.x);
        assert_relative_eq!(mapped_origin.y, a.y);
        assert_relative_eq!(mapped_x.x, b.x);
        assert_relative_eq!(mapped_x.y, b.y);
        assert_relative_eq!(mapped_y.x, c.x);
        assert_relative_eq!(mapped_y.y, c.y);
    }
}
