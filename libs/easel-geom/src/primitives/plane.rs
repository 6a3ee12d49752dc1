//! # Plane and Rect Primitives
//!
//! Both are subdivided unit grids; the plane recenters to `[-0.5, 0.5]²`
//! while the rect keeps the `[0, 1]²` frame so the render layer can place
//! its corner with a translation.

use glam::{DVec2, DVec3};

use super::{push_grid_faces, push_grid_perimeter_edges};
use crate::mesh::Mesh;

/// Creates a unit plane centered on the origin in the z = 0 plane.
///
/// `(detail_x + 1) * (detail_y + 1)` vertices, `2 * detail_x * detail_y`
/// faces, and a four-segment perimeter stroke.
///
/// # Example
///
/// ```rust
/// use easel_geom::primitives::build_plane;
///
/// let mesh = build_plane(1, 1);
/// assert_eq!(mesh.vertex_count(), 4);
/// assert_eq!(mesh.face_count(), 2);
/// assert_eq!(mesh.edge_count(), 4);
/// ```
pub fn build_plane(detail_x: u32, detail_y: u32) -> Mesh {
    build_grid(detail_x, detail_y, DVec2::new(-0.5, -0.5))
}

/// Creates a unit rect over `[0, 1]²` in the z = 0 plane.
///
/// Same grid as [`build_plane`] without recentering. The perimeter stroke
/// is authored explicitly; extracting edges from the subdivided grid would
/// require filtering interior edges back out.
pub fn build_rect(detail_x: u32, detail_y: u32) -> Mesh {
    build_grid(detail_x, detail_y, DVec2::ZERO)
}

fn build_grid(detail_x: u32, detail_y: u32, offset: DVec2) -> Mesh {
    let detail_x = detail_x.max(1);
    let detail_y = detail_y.max(1);
    let mut mesh = Mesh::with_detail(detail_x, detail_y);

    for j in 0..=detail_y {
        let v = f64::from(j) / f64::from(detail_y);
        for i in 0..=detail_x {
            let u = f64::from(i) / f64::from(detail_x);
            mesh.add_vertex(
                DVec3::new(u + offset.x, v + offset.y, 0.0),
                DVec2::new(u, v),
            );
        }
    }

    push_grid_faces(&mut mesh, 0, detail_x, detail_y);
    push_grid_perimeter_edges(&mut mesh, 0, detail_x, detail_y);
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_plane_counts() {
        let mesh = build_plane(1, 1);
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.face_count(), 2);
        assert_eq!(mesh.edge_count(), 4);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn grid_counts_follow_detail() {
        let mesh = build_plane(3, 2);
        assert_eq!(mesh.vertex_count(), 4 * 3);
        assert_eq!(mesh.face_count(), 2 * 3 * 2);
    }

    #[test]
    fn plane_is_centered() {
        let mesh = build_plane(2, 2);
        for vertex in mesh.vertices() {
            assert!(vertex.x >= -0.5 && vertex.x <= 0.5);
            assert!(vertex.y >= -0.5 && vertex.y <= 0.5);
            assert_relative_eq!(vertex.z, 0.0);
        }
    }

    #[test]
    fn rect_spans_unit_square() {
        let mesh = build_rect(1, 1);
        assert_relative_eq!(mesh.vertices()[0].x, 0.0);
        assert_relative_eq!(mesh.vertices()[3].x, 1.0);
        assert_relative_eq!(mesh.vertices()[3].y, 1.0);
        assert_eq!(mesh.edge_count(), 4);
    }

    #[test]
    fn subdivided_rect_keeps_four_perimeter_edges() {
        let mesh = build_rect(4, 3);
        assert_eq!(mesh.edge_count(), 4);
        // Corner indices only.
        assert_eq!(mesh.edges()[0], [0, 4]);
    }

    #[test]
    fn zero_detail_is_clamped() {
        let mesh = build_plane(0, 0);
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.detail_x(), 1);
    }
}
