//! # Truncated Cone Primitive
//!
//! Shared ring-stacking generator behind cylinder and cone. Stacks
//! `detail_y + 1` body rings over a unit height centered on the y axis,
//! with optional cap discs below and above.
//!
//! Lateral normals use a single slant angle computed from the radius
//! difference, so they stay geometrically consistent as the ring radius
//! changes with height. Cap-ring normals point straight up or down.

use std::f64::consts::PI;

use config::constants::MIN_RING_DETAIL_X;
use glam::{DVec2, DVec3};

use crate::mesh::Mesh;

/// Creates a unit-height truncated cone with `y ∈ [-0.5, 0.5]`.
///
/// Clamps applied before generation: `bottom_radius ≤ 0 → 1`,
/// `top_radius < 0 → 0`, `detail_x < 3 → 3`, `detail_y < 1 → 1`.
///
/// Each cap contributes a duplicated ring (so the cap can carry its own
/// up/down normals) that degenerates to a single center vertex closed by a
/// triangle fan.
pub fn build_truncated_cone(
    bottom_radius: f64,
    top_radius: f64,
    detail_x: u32,
    detail_y: u32,
    bottom_cap: bool,
    top_cap: bool,
) -> Mesh {
    let bottom_radius = if bottom_radius <= 0.0 {
        1.0
    } else {
        bottom_radius
    };
    let top_radius = top_radius.max(0.0);
    let detail_x = detail_x.max(MIN_RING_DETAIL_X);
    let detail_y = detail_y.max(1);

    let mut mesh = Mesh::with_detail(detail_x, detail_y);
    let ring_width = detail_x + 1;

    // Constant slant over the whole body; the frame height is 1.
    let slant = (bottom_radius - top_radius).atan2(1.0);
    let (sin_slant, cos_slant) = slant.sin_cos();

    if bottom_cap {
        let center = mesh.add_vertex_with_normal(
            DVec3::new(0.0, -0.5, 0.0),
            DVec2::new(0.5, 0.0),
            DVec3::NEG_Y,
        );
        let ring = mesh.vertex_count() as u32;
        push_ring(&mut mesh, detail_x, bottom_radius, -0.5, 0.0, DVec3::NEG_Y);
        for i in 0..detail_x {
            mesh.add_triangle(center, ring + i + 1, ring + i);
        }
    }

    let body = mesh.vertex_count() as u32;
    for j in 0..=detail_y {
        let v = f64::from(j) / f64::from(detail_y);
        let radius = bottom_radius + (top_radius - bottom_radius) * v;
        for i in 0..=detail_x {
            let u = f64::from(i) / f64::from(detail_x);
            let theta = 2.0 * PI * u;
            let (sin_theta, cos_theta) = theta.sin_cos();
            mesh.add_vertex_with_normal(
                DVec3::new(sin_theta * radius, v - 0.5, cos_theta * radius),
                DVec2::new(u, v),
                DVec3::new(sin_theta * cos_slant, sin_slant, cos_theta * cos_slant),
            );
        }
    }
    let apex_band = top_radius == 0.0;
    for j in 0..detail_y {
        for i in 0..detail_x {
            let v0 = body + j * ring_width + i;
            mesh.add_triangle(v0, v0 + 1, v0 + ring_width);
            if !(apex_band && j == detail_y - 1) {
                mesh.add_triangle(v0 + ring_width, v0 + 1, v0 + ring_width + 1);
            }
        }
    }

    if top_cap {
        let ring = mesh.vertex_count() as u32;
        push_ring(&mut mesh, detail_x, top_radius, 0.5, 1.0, DVec3::Y);
        let center =
            mesh.add_vertex_with_normal(DVec3::new(0.0, 0.5, 0.0), DVec2::new(0.5, 1.0), DVec3::Y);
        for i in 0..detail_x {
            mesh.add_triangle(center, ring + i, ring + i + 1);
        }
    }

    mesh
}

/// Creates a unit cylinder: a truncated cone with equal radii.
///
/// # Example
///
/// ```rust
/// use easel_geom::primitives::build_cylinder;
///
/// let mesh = build_cylinder(24, 1, true, true);
/// // 2 body rings of 25, plus two caps of 25 + 1 center each.
/// assert_eq!(mesh.vertex_count(), 2 * 25 + 2 * 26);
/// ```
pub fn build_cylinder(detail_x: u32, detail_y: u32, bottom_cap: bool, top_cap: bool) -> Mesh {
    build_truncated_cone(1.0, 1.0, detail_x, detail_y, bottom_cap, top_cap)
}

/// Creates a unit cone: a truncated cone with zero top radius and no top
/// cap.
pub fn build_cone(detail_x: u32, detail_y: u32, cap: bool) -> Mesh {
    build_truncated_cone(1.0, 0.0, detail_x, detail_y, cap, false)
}

fn push_ring(mesh: &mut Mesh, detail_x: u32, radius: f64, y: f64, v: f64, normal: DVec3) {
    for i in 0..=detail_x {
        let u = f64::from(i) / f64::from(detail_x);
        let theta = 2.0 * PI * u;
        let (sin_theta, cos_theta) = theta.sin_cos();
        mesh.add_vertex_with_normal(
            DVec3::new(sin_theta * radius, y, cos_theta * radius),
            DVec2::new(u, v),
            normal,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ring_vertex_count(detail_x: u32, detail_y: u32, caps: u32) -> usize {
        ((detail_y + 1) * (detail_x + 1) + caps * (detail_x + 2)) as usize
    }

    #[test]
    fn cylinder_vertex_count_follows_ring_formula() {
        let mesh = build_cylinder(24, 1, true, true);
        assert_eq!(mesh.vertex_count(), ring_vertex_count(24, 1, 2));
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn uncapped_cylinder_is_body_rings_only() {
        let mesh = build_cylinder(8, 2, false, false);
        assert_eq!(mesh.vertex_count(), ring_vertex_count(8, 2, 0));
        assert_eq!(mesh.face_count(), 2 * 8 * 2);
    }

    #[test]
    fn cylinder_lateral_normals_are_horizontal() {
        let mesh = build_cylinder(12, 1, false, false);
        for normal in mesh.vertex_normals().unwrap() {
            assert_relative_eq!(normal.y, 0.0, epsilon = 1e-12);
            assert_relative_eq!(normal.length(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn cone_slant_normal_is_constant() {
        let mesh = build_cone(12, 3, false);
        let expected = 1.0_f64.atan2(1.0).sin();
        for normal in mesh.vertex_normals().unwrap() {
            assert_relative_eq!(normal.y, expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn cone_apex_band_uses_single_triangles() {
        let detail_x = 8;
        let mesh = build_cone(detail_x, 1, false);
        assert_eq!(mesh.face_count(), detail_x as usize);
    }

    #[test]
    fn clamps_replace_out_of_range_parameters() {
        // bottom_radius <= 0 becomes 1, detail_x < 3 becomes 3.
        let mesh = build_truncated_cone(-2.0, -1.0, 0, 0, false, false);
        assert_eq!(mesh.detail_x(), 3);
        assert_eq!(mesh.detail_y(), 1);
        let max_radius = mesh
            .vertices()
            .iter()
            .map(|v| DVec3::new(v.x, 0.0, v.z).length())
            .fold(0.0, f64::max);
        assert_relative_eq!(max_radius, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn cap_winding_faces_outward() {
        let mesh = build_cylinder(6, 1, true, true);
        for &[a, b, c] in mesh.faces() {
            let va = mesh.vertices()[a as usize];
            let vb = mesh.vertices()[b as usize];
            let vc = mesh.vertices()[c as usize];
            let cross = (vb - va).cross(vc - va);
            if cross.length() < 1e-12 {
                continue;
            }
            // Lateral crosses are radial and cap crosses are vertical, so
            // the centroid itself points outward in both cases.
            let centroid = (va + vb + vc) / 3.0;
            assert!(cross.dot(centroid) > 0.0);
        }
    }
}
