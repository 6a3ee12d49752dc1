//! # Ellipsoid Primitive
//!
//! Latitude/longitude tessellation of the unit sphere. A sphere is the same
//! mesh drawn with a uniform scale; an ellipsoid scales each axis
//! independently.

use std::f64::consts::PI;

use glam::{DVec2, DVec3};

use super::push_grid_faces;
use crate::mesh::Mesh;

/// Creates a unit sphere parameterized by latitude and longitude.
///
/// `phi = π·v − π/2` sweeps pole to pole and `theta = 2π·u` sweeps the
/// equator, giving position `(cos φ · sin θ, sin φ, cos φ · cos θ)`. The
/// normal is the position itself, so no averaging pass is needed and the
/// seam shades smoothly.
///
/// # Example
///
/// ```rust
/// use easel_geom::primitives::build_ellipsoid;
///
/// let mesh = build_ellipsoid(24, 16);
/// assert_eq!(mesh.vertex_count(), 25 * 17);
/// assert_eq!(mesh.face_count(), 2 * 24 * 16);
/// ```
pub fn build_ellipsoid(detail_x: u32, detail_y: u32) -> Mesh {
    let detail_x = detail_x.max(3);
    let detail_y = detail_y.max(2);
    let mut mesh = Mesh::with_detail(detail_x, detail_y);

    for j in 0..=detail_y {
        let v = f64::from(j) / f64::from(detail_y);
        let phi = PI * v - PI / 2.0;
        let (sin_phi, cos_phi) = phi.sin_cos();
        for i in 0..=detail_x {
            let u = f64::from(i) / f64::from(detail_x);
            let theta = 2.0 * PI * u;
            let (sin_theta, cos_theta) = theta.sin_cos();
            let position = DVec3::new(cos_phi * sin_theta, sin_phi, cos_phi * cos_theta);
            mesh.add_vertex_with_normal(position, DVec2::new(u, v), position);
        }
    }

    push_grid_faces(&mut mesh, 0, detail_x, detail_y);
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn grid_counts_follow_detail() {
        let mesh = build_ellipsoid(24, 16);
        assert_eq!(mesh.vertex_count(), 25 * 17);
        assert_eq!(mesh.face_count(), 2 * 24 * 16);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn vertices_lie_on_unit_sphere() {
        let mesh = build_ellipsoid(8, 6);
        for vertex in mesh.vertices() {
            assert_relative_eq!(vertex.length(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn normals_equal_positions() {
        let mesh = build_ellipsoid(8, 6);
        let normals = mesh.vertex_normals().unwrap();
        for (vertex, normal) in mesh.vertices().iter().zip(normals) {
            assert_relative_eq!((*vertex - *normal).length(), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn poles_sit_on_the_y_axis() {
        let mesh = build_ellipsoid(6, 4);
        assert_relative_eq!(mesh.vertices()[0].y, -1.0, epsilon = 1e-12);
        let last = mesh.vertices()[mesh.vertex_count() - 1];
        assert_relative_eq!(last.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn nondegenerate_faces_wind_outward() {
        let mesh = build_ellipsoid(8, 6);
        for &[a, b, c] in mesh.faces() {
            let va = mesh.vertices()[a as usize];
            let vb = mesh.vertices()[b as usize];
            let vc = mesh.vertices()[c as usize];
            let cross = (vb - va).cross(vc - va);
            if cross.length() > 1e-9 {
                let centroid = (va + vb + vc) / 3.0;
                assert!(cross.dot(centroid) > 0.0);
            }
        }
    }
}
