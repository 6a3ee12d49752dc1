//! # Torus Primitive
//!
//! Revolution of a tube circle around the z axis. Only the tube-to-radius
//! ratio shapes the unit frame; the overall radius is a uniform scale at
//! draw time, which is why the ratio (and not the absolute radii) appears
//! in the cache key.

use std::f64::consts::PI;

use glam::{DVec2, DVec3};

use super::push_grid_faces;
use crate::mesh::Mesh;

/// Creates a unit torus with ring radius 1 and tube radius `ratio`.
///
/// `phi = 2π·v` sweeps the tube circle and `theta = 2π·u` the revolution,
/// giving position `(r·cos θ, r·sin θ, ratio·sin φ)` with
/// `r = 1 + ratio·cos φ` and analytic normal
/// `(cos φ·cos θ, cos φ·sin θ, sin φ)`.
///
/// A non-positive ratio describes no surface and yields an empty mesh, not
/// an error.
pub fn build_torus(ratio: f64, detail_x: u32, detail_y: u32) -> Mesh {
    if ratio <= 0.0 {
        return Mesh::new();
    }
    let detail_x = detail_x.max(3);
    let detail_y = detail_y.max(3);
    let mut mesh = Mesh::with_detail(detail_x, detail_y);

    for j in 0..=detail_y {
        let v = f64::from(j) / f64::from(detail_y);
        let phi = 2.0 * PI * v;
        let (sin_phi, cos_phi) = phi.sin_cos();
        let ring_radius = 1.0 + ratio * cos_phi;
        for i in 0..=detail_x {
            let u = f64::from(i) / f64::from(detail_x);
            let theta = 2.0 * PI * u;
            let (sin_theta, cos_theta) = theta.sin_cos();
            mesh.add_vertex_with_normal(
                DVec3::new(
                    ring_radius * cos_theta,
                    ring_radius * sin_theta,
                    ratio * sin_phi,
                ),
                DVec2::new(u, v),
                DVec3::new(cos_phi * cos_theta, cos_phi * sin_theta, sin_phi),
            );
        }
    }

    push_grid_faces(&mut mesh, 0, detail_x, detail_y);
    mesh
}
