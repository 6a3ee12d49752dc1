//! # Icosphere Primitive
//!
//! Recursive 4-way subdivision over a base icosahedron. Midpoints are
//! shared through an order-independent edge map so neighboring triangles
//! reuse the same new vertex, and every vertex is reprojected onto the
//! unit sphere.
//!
//! Spherical unwrapping leaves two UV pathologies that are repaired after
//! subdivision: triangles wrapping around the `u = 0/1` seam, and pole
//! vertices whose longitude is undefined.

use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use config::constants::MAX_ICOSPHERE_DETAIL;
use glam::{DVec2, DVec3};

use crate::mesh::Mesh;

/// The 20 faces of a regular icosahedron, counter-clockwise from outside.
const BASE_FACES: [[u32; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// Creates a unit icosphere at the given subdivision depth.
///
/// Depth 0 is the bare icosahedron (12 vertices, 20 faces, plus whatever
/// seam/pole UV duplicates the repair passes add); each further level
/// multiplies the face count by four. Vertex normals are the unit
/// positions themselves.
pub fn build_icosphere(detail: u32) -> Mesh {
    let detail = detail.min(MAX_ICOSPHERE_DETAIL);
    let (mut positions, mut faces) = base_icosahedron();
    for _ in 0..detail {
        faces = subdivide(&mut positions, &faces);
    }

    let mut uvs: Vec<DVec2> = positions.iter().map(|&p| spherical_uv(p)).collect();
    repair_seam(&mut positions, &mut uvs, &mut faces);
    repair_poles(&mut positions, &mut uvs, &mut faces);

    let mut mesh = Mesh::with_detail(detail, detail);
    for (position, uv) in positions.iter().zip(&uvs) {
        mesh.add_vertex_with_normal(*position, *uv, *position);
    }
    for [a, b, c] in faces {
        mesh.add_triangle(a, b, c);
    }
    mesh
}

/// The 12 golden-ratio vertices `(±1, ±φ, 0)` and cyclic permutations,
/// normalized onto the unit sphere.
fn base_icosahedron() -> (Vec<DVec3>, Vec<[u32; 3]>) {
    let t = (1.0 + 5.0_f64.sqrt()) / 2.0;
    let positions = [
        DVec3::new(-1.0, t, 0.0),
        DVec3::new(1.0, t, 0.0),
        DVec3::new(-1.0, -t, 0.0),
        DVec3::new(1.0, -t, 0.0),
        DVec3::new(0.0, -1.0, t),
        DVec3::new(0.0, 1.0, t),
        DVec3::new(0.0, -1.0, -t),
        DVec3::new(0.0, 1.0, -t),
        DVec3::new(t, 0.0, -1.0),
        DVec3::new(t, 0.0, 1.0),
        DVec3::new(-t, 0.0, -1.0),
        DVec3::new(-t, 0.0, 1.0),
    ]
    .iter()
    .map(|p| p.normalize())
    .collect();
    (positions, BASE_FACES.to_vec())
}

/// Replaces each triangle with four, sharing midpoints across edges.
fn subdivide(positions: &mut Vec<DVec3>, faces: &[[u32; 3]]) -> Vec<[u32; 3]> {
    let mut midpoints: HashMap<(u32, u32), u32> = HashMap::new();
    let mut next = Vec::with_capacity(faces.len() * 4);

    for &[a, b, c] in faces {
        let ab = midpoint(positions, &mut midpoints, a, b);
        let bc = midpoint(positions, &mut midpoints, b, c);
        let ca = midpoint(positions, &mut midpoints, c, a);
        next.push([a, ab, ca]);
        next.push([b, bc, ab]);
        next.push([c, ca, bc]);
        next.push([ab, bc, ca]);
    }

    next
}

/// Looks up or creates the midpoint of edge `(a, b)`, projected back onto
/// the unit sphere. The key is order-independent so both incident
/// triangles resolve to the same vertex.
fn midpoint(positions: &mut Vec<DVec3>, cache: &mut HashMap<(u32, u32), u32>, a: u32, b: u32) -> u32 {
    let key = (a.min(b), a.max(b));
    if let Some(&index) = cache.get(&key) {
        return index;
    }
    let mid = (positions[a as usize] + positions[b as usize]).normalize();
    let index = positions.len() as u32;
    positions.push(mid);
    cache.insert(key, index);
    index
}

/// Equirectangular UV from the spherical angle of a unit position.
fn spherical_uv(position: DVec3) -> DVec2 {
    let u = ((position.x.atan2(position.z) / PI + 1.0) / 2.0) % 1.0;
    let v = (-position.y).acos() / PI;
    DVec2::new(u, v)
}

/// Duplicates seam-side vertices of triangles that straddle the `u = 0/1`
/// seam, giving the wrapped copy `u = 1` so the triangle no longer spans
/// the whole texture.
fn repair_seam(positions: &mut Vec<DVec3>, uvs: &mut Vec<DVec2>, faces: &mut [[u32; 3]]) {
    let mut wrapped: HashMap<u32, u32> = HashMap::new();

    for face in faces.iter_mut() {
        let mut min_u = f64::INFINITY;
        let mut max_u = f64::NEG_INFINITY;
        for &corner in face.iter() {
            let u = uvs[corner as usize].x;
            min_u = min_u.min(u);
            max_u = max_u.max(u);
        }
        if !(min_u < 0.25 && max_u > 0.75) {
            continue;
        }
        for corner in face.iter_mut() {
            let index = *corner as usize;
            if uvs[index].x != 0.0 {
                continue;
            }
            let position = positions[index];
            let v = uvs[index].y;
            let duplicate = *wrapped.entry(*corner).or_insert_with(|| {
                positions.push(position);
                uvs.push(DVec2::new(1.0, v));
                (positions.len() - 1) as u32
            });
            *corner = duplicate;
        }
    }
}

/// Gives each pole-adjacent triangle a locally consistent pole `u`: the
/// average of the triangle's other two longitudes. The first incident
/// triangle keeps the original vertex; later ones get duplicates.
fn repair_poles(positions: &mut Vec<DVec3>, uvs: &mut Vec<DVec2>, faces: &mut [[u32; 3]]) {
    let mut claimed: HashSet<u32> = HashSet::new();

    for face in faces.iter_mut() {
        for corner in 0..3 {
            let index = face[corner];
            let v = uvs[index as usize].y;
            if v != 0.0 && v != 1.0 {
                continue;
            }
            let u_a = uvs[face[(corner + 1) % 3] as usize].x;
            let u_b = uvs[face[(corner + 2) % 3] as usize].x;
            let u = (u_a + u_b) / 2.0;
            if claimed.insert(index) {
                uvs[index as usize].x = u;
            } else {
                let position = positions[index as usize];
                positions.push(position);
                uvs.push(DVec2::new(u, v));
                face[corner] = (positions.len() - 1) as u32;
            }
        }
    }
}
