//! # Easel Geom
//!
//! Procedural mesh-generation kernel for the easel pipeline. Turns a
//! primitive-shape descriptor (kind + integer detail/cap parameters) into an
//! indexed triangle [`Mesh`] with uvs, normals, and wireframe edge lists.
//!
//! ## Architecture
//!
//! ```text
//! shape parameters → primitives::* → normals / edges → Mesh
//! ```
//!
//! Every builder produces geometry in a canonical unit frame; continuous
//! size parameters (radius, width, height) are applied later by the render
//! layer as a per-axis scale, so one mesh serves every size.
//!
//! ## Usage
//!
//! ```rust
//! use easel_geom::primitives::build_plane;
//!
//! let mesh = build_plane(1, 1);
//! assert_eq!(mesh.vertex_count(), 4);
//! assert_eq!(mesh.face_count(), 2);
//! ```

pub mod edges;
pub mod error;
pub mod mesh;
pub mod normals;
pub mod primitives;

pub use error::MeshError;
pub use mesh::Mesh;
