//! # Quad Primitive
//!
//! A general quad is not an affine image of the unit square, so unlike the
//! triangle it cannot reuse one canonical mesh. The builder interpolates
//! the four literal corner points bilinearly; the cache key carries those
//! points verbatim.

use config::constants::QUAD_GRID_DETAIL;
use glam::{DVec2, DVec3};

use super::{push_grid_faces, push_grid_perimeter_edges};
use crate::mesh::Mesh;

/// Creates a quad from its four corner points, given in perimeter order.
///
/// The interior is a bilinear grid so the surface stays well tessellated
/// for lighting; the stroke is the four perimeter sides.
pub fn build_quad(points: [DVec2; 4]) -> Mesh {
    let detail = QUAD_GRID_DETAIL;
    let mut mesh = Mesh::with_detail(detail, detail);
    let [p0, p1, p2, p3] = points;

    for j in 0..=detail {
        let v = f64::from(j) / f64::from(detail);
        for i in 0..=detail {
            let u = f64::from(i) / f64::from(detail);
            let lower = p0.lerp(p1, u);
            let upper = p3.lerp(p2, u);
            let point = lower.lerp(upper, v);
            mesh.add_vertex(DVec3::new(point.x, point.y, 0.0), DVec2::new(u, v));
        }
    }

    push_grid_faces(&mut mesh, 0, detail, detail);
    push_grid_perimeter_edges(&mut mesh, 0, detail, detail);
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_square() -> [DVec2; 4] {
        [
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn grid_counts_follow_fixed_detail() {
        let mesh = build_quad(unit_square());
        let n = QUAD_GRID_DETAIL as usize;
        assert_eq!(mesh.vertex_count(), (n + 1) * (n + 1));
        assert_eq!(mesh.face_count(), 2 * n * n);
        assert_eq!(mesh.edge_count(), 4);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn corners_are_reproduced_exactly() {
        let points = [
            DVec2::new(-3.0, 1.0),
            DVec2::new(4.0, 0.0),
            DVec2::new(5.0, 6.0),
            DVec2::new(-2.0, 5.0),
        ];
        let mesh = build_quad(points);
        let n = QUAD_GRID_DETAIL;
        let row = n + 1;
        let corner_indices = [0, n, n * row + n, n * row];
        for (point, &index) in points.iter().zip(&corner_indices) {
            let vertex = mesh.vertices()[index as usize];
            assert_relative_eq!(vertex.x, point.x, epsilon = 1e-12);
            assert_relative_eq!(vertex.y, point.y, epsilon = 1e-12);
        }
    }

    #[test]
    fn interior_is_bilinear() {
        let points = [
            DVec2::new(0.0, 0.0),
            DVec2::new(2.0, 0.0),
            DVec2::new(2.0, 2.0),
            DVec2::new(0.0, 2.0),
        ];
        let mesh = build_quad(points);
        // Center of a parallelogram grid is the average of the corners.
        let center = mesh.vertices()[mesh.vertex_count() / 2];
        assert_relative_eq!(center.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(center.y, 1.0, epsilon = 1e-12);
    }
}
