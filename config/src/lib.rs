//! # Config Crate
//!
//! Centralized configuration constants for the easel geometry pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON_TOLERANCE, DEFAULT_RADIUS};
//!
//! // Use EPSILON_TOLERANCE for floating-point comparisons
//! let span: f64 = 0.0000000001; // 1e-10, smaller than EPSILON_TOLERANCE (1e-9)
//! assert!(span.abs() < EPSILON_TOLERANCE);
//!
//! // Use DEFAULT_RADIUS when a caller leaves the radius unset
//! assert_eq!(DEFAULT_RADIUS, 50.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Permissive Defaults**: Unset parameters fall back to documented values
//!   instead of failing
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
