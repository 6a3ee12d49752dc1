//! # Wireframe Edge Extraction
//!
//! Derives a deduplicated wireframe edge list from a triangle list. An edge
//! shared by two triangles appears once in the output, never twice.
//!
//! Shapes whose automatic extraction would be visually wrong (the box's
//! diagonal-free cube outline, the rect's clean perimeter, explicit stroke
//! lists for arc/quad/triangle) author their edge lists by hand in the
//! builder instead of calling into this module.

use std::collections::HashSet;

use crate::mesh::Mesh;

/// Collects the distinct undirected vertex-index pairs forming triangle
/// edges, in first-seen order.
///
/// # Example
///
/// ```rust
/// use easel_geom::edges::extract_edges;
///
/// // Two triangles sharing the edge (1, 2).
/// let edges = extract_edges(&[[0, 1, 2], [2, 1, 3]]);
/// assert_eq!(edges.len(), 5);
/// ```
pub fn extract_edges(faces: &[[u32; 3]]) -> Vec<[u32; 2]> {
    let mut seen = HashSet::with_capacity(faces.len() * 3);
    let mut edges = Vec::new();

    for &[a, b, c] in faces {
        for (start, end) in [(a, b), (b, c), (c, a)] {
            if start == end {
                // Degenerate pole/apex edges contribute no stroke.
                continue;
            }
            if seen.insert((start.min(end), start.max(end))) {
                edges.push([start, end]);
            }
        }
    }

    edges
}

/// Extracts edges from the mesh's own faces and stores them on the mesh.
pub fn apply_extracted_edges(mesh: &mut Mesh) {
    let edges = extract_edges(mesh.faces());
    mesh.set_edges(edges);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_edge_appears_once() {
        let edges = extract_edges(&[[0, 1, 2], [2, 1, 3]]);
        let shared = edges
            .iter()
            .filter(|e| e.contains(&1) && e.contains(&2))
            .count();
        assert_eq!(shared, 1);
        assert_eq!(edges.len(), 5);
    }

    #[test]
    fn single_triangle_has_three_edges() {
        assert_eq!(extract_edges(&[[0, 1, 2]]).len(), 3);
    }

    #[test]
    fn degenerate_edges_are_skipped() {
        // Apex triangle with a repeated index.
        assert_eq!(extract_edges(&[[0, 1, 1]]).len(), 2);
    }

    #[test]
    fn empty_faces_yield_no_edges() {
        assert!(extract_edges(&[]).is_empty());
    }
}
