//! # Easel Scene
//!
//! Geometry memoization and the retained draw front-end over
//! [`easel_geom`]'s builders.
//!
//! ## Architecture
//!
//! ```text
//! shape params → ShapeKey → GeometryCache (get-or-build)
//!                               ↓
//!                    builder + normals + edges
//!                               ↓
//!              RenderBackend (upload once, draw scaled)
//! ```
//!
//! A draw request computes a key from its primitive kind and *discrete*
//! parameters only. Continuous size parameters never reach the cache; they
//! are applied per draw as a per-axis scale, so one cached unit mesh serves
//! every size.

pub mod backend;
pub mod cache;
pub mod key;
pub mod params;
pub mod renderer;
pub mod transform;

pub use backend::RenderBackend;
pub use cache::{CacheStats, GeometryCache};
pub use key::ShapeKey;
pub use renderer::Renderer;
pub use transform::MatrixStack;
