//! Centralized configuration values shared across the easel pipeline.
//!
//! Each public item in this module documents its purpose so that downstream
//! crates can remain declarative and avoid scattering literals.

/// Numerical tolerance used by the geometry kernels.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

/// Tolerance applied when asserting that a normal has unit length.
pub const UNIT_NORMAL_TOLERANCE: f64 = 1.0e-6;

/// Default radius, width, and height for primitives drawn without explicit
/// size parameters.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_RADIUS;
/// assert_eq!(DEFAULT_RADIUS, 50.0);
/// ```
pub const DEFAULT_RADIUS: f64 = 50.0;

/// Default tube radius for a torus drawn without one.
pub const DEFAULT_TUBE_RADIUS: f64 = 10.0;

/// Default angular subdivision for round shapes (sphere, cylinder, cone,
/// torus).
pub const DEFAULT_DETAIL_X: u32 = 24;

/// Default latitude subdivision for sphere/ellipsoid and torus.
pub const DEFAULT_DETAIL_Y: u32 = 16;

/// Default height subdivision for cylinder and cone bodies.
pub const DEFAULT_RING_DETAIL_Y: u32 = 1;

/// Default grid subdivision for plane and rect.
pub const DEFAULT_GRID_DETAIL: u32 = 1;

/// Default detail recorded for a box. Boxes always tessellate to 6 quads;
/// the detail only participates in cache keying and lighting defaults.
pub const DEFAULT_BOX_DETAIL: u32 = 4;

/// Grid subdivision used for quad interiors.
pub const QUAD_GRID_DETAIL: u32 = 2;

/// Default sample count along an arc or ellipse perimeter.
pub const DEFAULT_ARC_DETAIL: u32 = 25;

/// Default subdivision depth for an icosphere.
pub const DEFAULT_ICOSPHERE_DETAIL: u32 = 1;

/// Maximum subdivision depth for an icosphere. Each level quadruples the
/// face count, so depth is clamped rather than rejected.
pub const MAX_ICOSPHERE_DETAIL: u32 = 7;

/// Minimum angular subdivision for ring-stacked shapes. Fewer than three
/// segments cannot close a ring.
pub const MIN_RING_DETAIL_X: u32 = 3;

/// Significant digits kept of the tube-to-radius ratio when keying a torus.
pub const TUBE_RATIO_SIG_DIGITS: i32 = 4;

/// Stroke-detail ceiling for plane wireframes.
pub const STROKE_DETAIL_PLANE: (u32, u32) = (1, 1);

/// Stroke-detail ceiling for box wireframes.
pub const STROKE_DETAIL_BOX: (u32, u32) = (4, 4);

/// Stroke-detail ceiling for cylinder, cone, and torus wireframes.
pub const STROKE_DETAIL_RING: (u32, u32) = (24, 16);

/// Stroke-detail ceiling for ellipsoid wireframes.
pub const STROKE_DETAIL_ELLIPSOID: (u32, u32) = (24, 24);

/// Stroke-detail ceiling for arc and ellipse wireframes.
pub const STROKE_DETAIL_ARC: u32 = 50;

/// Stroke-detail ceiling for icosphere wireframes. Face count grows by a
/// factor of four per subdivision level.
pub const STROKE_DETAIL_ICOSPHERE: u32 = 3;
