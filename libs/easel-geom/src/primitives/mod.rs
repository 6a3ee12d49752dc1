//! # Primitives
//!
//! Mesh generation for the drawable primitives (plane, rect, box,
//! ellipsoid, cylinder/cone, torus, icosphere, arc/ellipse, quad,
//! triangle).
//!
//! Each builder fills vertices/uvs/faces (and, where the shape has them,
//! analytic normals and hand-authored stroke edges) for one canonical
//! unit-frame shape. Continuous size parameters never reach a builder;
//! the render layer applies them as a per-axis scale at draw time.

pub mod arc;
pub mod cuboid;
pub mod ellipsoid;
pub mod frustum;
pub mod icosphere;
pub mod plane;
pub mod quad;
pub mod torus;
pub mod triangle;

pub use arc::{build_arc, build_ellipse};
pub use cuboid::build_box;
pub use ellipsoid::build_ellipsoid;
pub use frustum::{build_cone, build_cylinder, build_truncated_cone};
pub use icosphere::build_icosphere;
pub use plane::{build_plane, build_rect};
pub use quad::build_quad;
pub use torus::build_torus;
pub use triangle::build_triangle;

use crate::mesh::Mesh;

/// Emits the two triangles per grid cell shared by every grid-parameterized
/// builder.
///
/// For cell `(i, j)` with `row = detail_x + 1` and `v0 = j * row + i` the
/// triangles are `(v0, v0+1, v0+row)` and `(v0+row, v0+1, v0+row+1)`,
/// counter-clockwise when viewed from the outward side of the surface.
pub(crate) fn push_grid_faces(mesh: &mut Mesh, base: u32, detail_x: u32, detail_y: u32) {
    let row = detail_x + 1;
    for j in 0..detail_y {
        for i in 0..detail_x {
            let v0 = base + j * row + i;
            mesh.add_triangle(v0, v0 + 1, v0 + row);
            mesh.add_triangle(v0 + row, v0 + 1, v0 + row + 1);
        }
    }
}

/// Adds the four corner-to-corner perimeter edges of a grid.
///
/// Interior boundary vertices are collinear with the corners, so four
/// segments draw the same outline a full boundary walk would.
pub(crate) fn push_grid_perimeter_edges(mesh: &mut Mesh, base: u32, detail_x: u32, detail_y: u32) {
    let row = detail_x + 1;
    let c00 = base;
    let c10 = base + detail_x;
    let c01 = base + detail_y * row;
    let c11 = base + detail_y * row + detail_x;
    mesh.add_edge(c00, c10);
    mesh.add_edge(c10, c11);
    mesh.add_edge(c11, c01);
    mesh.add_edge(c01, c00);
}
