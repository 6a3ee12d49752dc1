//! # Mesh Errors
//!
//! Error types for mesh validation.
//!
//! The builders themselves are permissive: out-of-range parameters are
//! clamped and degenerate requests produce empty meshes, never errors.
//! `MeshError` only surfaces from explicit validation of a finished mesh.

use thiserror::Error;

/// Errors reported by [`crate::Mesh::validate`].
#[derive(Debug, Error)]
pub enum MeshError {
    /// An attribute array is not index-aligned with the vertex array.
    #[error("misaligned {attribute}: expected {expected}, got {actual}")]
    MisalignedAttribute {
        /// Name of the offending attribute array.
        attribute: &'static str,
        /// Expected element count.
        expected: usize,
        /// Actual element count.
        actual: usize,
    },

    /// A face or edge references a vertex index past the end of the mesh.
    #[error("index {index} out of bounds for {vertex_count} vertices")]
    IndexOutOfBounds {
        /// The offending index.
        index: u32,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },

    /// A vertex normal does not have unit length.
    #[error("vertex normal {index} has length {length}")]
    NonUnitNormal {
        /// Index of the offending normal.
        index: usize,
        /// Measured length.
        length: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_names_the_attribute() {
        let err = MeshError::MisalignedAttribute {
            attribute: "uvs",
            expected: 4,
            actual: 3,
        };
        assert!(err.to_string().contains("uvs"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeshError>();
    }
}
