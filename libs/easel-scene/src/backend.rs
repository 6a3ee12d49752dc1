//! # Render Backend Interface
//!
//! The boundary between the geometry engine and whatever uploads buffers
//! and issues draw calls. The backend is keyed by the stable string form
//! of a [`crate::key::ShapeKey`]: buffers are created once per key and
//! every subsequent draw of that key reuses them with a per-axis scale
//! and the current model matrix.

use easel_geom::Mesh;
use glam::{DMat4, DVec3};

/// GPU-facing collaborator consumed by the renderer.
///
/// Implementations hold a derived, possibly transient representation of
/// each mesh (vertex buffers, index buffers); the cache keeps the source
/// mesh alive for the process lifetime under the same key.
pub trait RenderBackend {
    /// Uploads a mesh's arrays under `key`. Called at most once per key.
    fn create_buffers(&mut self, key: &str, mesh: &Mesh);

    /// Draws the unit mesh stored under `key`, scaled per axis and
    /// transformed by the active model matrix.
    fn draw_buffers_scaled(&mut self, key: &str, scale: DVec3, model: &DMat4);

    /// Returns true if buffers already exist under `key`.
    fn geometry_in_hash(&self, key: &str) -> bool;
}
