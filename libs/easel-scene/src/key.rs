//! # Shape Keys
//!
//! Structured cache keys for generated geometry. The key is composed of
//! the primitive kind and its discrete shape parameters only: detail
//! levels, cap flags, the torus tube ratio rounded to fixed precision.
//! Continuous size parameters are excluded because the cached geometry is
//! a canonical unit frame scaled at draw time. Quad, triangle, and arc
//! are the exceptions: their literal defining parameters are part of the
//! key because those shapes are not scale-invariant the same way.
//!
//! The key is a plain Rust value internally; the documented string form
//! (`"cylinder|24|1|true|true"`) is produced by `Display` only at the
//! render-backend boundary, which avoids the key-collision bugs of ad-hoc
//! string concatenation.

use std::fmt;
use std::hash::{Hash, Hasher};

use config::constants::TUBE_RATIO_SIG_DIGITS;
use easel_geom::primitives::arc::ArcMode;

/// A continuous parameter embedded in a cache key.
///
/// Wraps an `f64` with bit-pattern equality and hashing so keys can live
/// in a `HashMap`. Negative zero is normalized on construction; NaN never
/// reaches a key because every keyed parameter is validated or clamped
/// first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyScalar(f64);

impl KeyScalar {
    /// Wraps a finite value.
    pub fn new(value: f64) -> Self {
        // Fold -0.0 into 0.0 so both spellings share a cache entry.
        Self(if value == 0.0 { 0.0 } else { value })
    }

    /// Returns the wrapped value.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Eq for KeyScalar {}

impl Hash for KeyScalar {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl fmt::Display for KeyScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rounds a value to the given number of significant digits.
pub(crate) fn round_signif(value: f64, digits: i32) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }
    let magnitude = value.abs().log10().floor() as i32;
    let factor = 10f64.powi(digits - 1 - magnitude);
    (value * factor).round() / factor
}

/// Identity of one cached unit mesh.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ShapeKey {
    /// Centered unit grid.
    Plane {
        /// Grid subdivision along x.
        detail_x: u32,
        /// Grid subdivision along y.
        detail_y: u32,
    },
    /// Corner-anchored unit grid.
    Rect {
        /// Grid subdivision along x.
        detail_x: u32,
        /// Grid subdivision along y.
        detail_y: u32,
    },
    /// Unit cube. Detail tunes lighting defaults, never tessellation.
    Cuboid {
        /// Recorded detail along x.
        detail_x: u32,
        /// Recorded detail along y.
        detail_y: u32,
    },
    /// Unit sphere; spheres and ellipsoids share this entry.
    Ellipsoid {
        /// Longitude subdivision.
        detail_x: u32,
        /// Latitude subdivision.
        detail_y: u32,
    },
    /// Unit cylinder.
    Cylinder {
        /// Ring subdivision.
        detail_x: u32,
        /// Height subdivision.
        detail_y: u32,
        /// Whether the bottom disc is closed.
        bottom_cap: bool,
        /// Whether the top disc is closed.
        top_cap: bool,
    },
    /// Unit cone.
    Cone {
        /// Ring subdivision.
        detail_x: u32,
        /// Height subdivision.
        detail_y: u32,
        /// Whether the base disc is closed.
        cap: bool,
    },
    /// Unit torus. The tube-to-radius ratio, not the absolute radii,
    /// determines the unit-frame shape.
    Torus {
        /// Tube ratio rounded to [`TUBE_RATIO_SIG_DIGITS`] significant
        /// digits.
        tube_ratio: KeyScalar,
        /// Revolution subdivision.
        detail_x: u32,
        /// Tube subdivision.
        detail_y: u32,
    },
    /// Unit icosphere.
    Icosphere {
        /// Subdivision depth.
        detail: u32,
    },
    /// Canonical unit right triangle.
    Triangle,
    /// Quad keyed by its literal corner points.
    Quad {
        /// The four corners as `x, y` pairs in perimeter order.
        points: [KeyScalar; 8],
    },
    /// Arc keyed by its literal span and closing mode.
    Arc {
        /// Start angle in radians.
        start: KeyScalar,
        /// Stop angle in radians.
        stop: KeyScalar,
        /// Closing behavior.
        mode: ArcMode,
        /// Perimeter sample count.
        detail: u32,
    },
    /// Filled unit ellipse.
    Ellipse {
        /// Perimeter sample count.
        detail: u32,
    },
}

impl ShapeKey {
    /// Builds a torus key, rounding the tube ratio to the documented
    /// precision. The rounded value also parameterizes the build, so the
    /// key and the geometry can never disagree.
    pub fn torus(tube_ratio: f64, detail_x: u32, detail_y: u32) -> Self {
        Self::Torus {
            tube_ratio: KeyScalar::new(round_signif(tube_ratio, TUBE_RATIO_SIG_DIGITS)),
            detail_x,
            detail_y,
        }
    }

    /// Builds a quad key from its corner points.
    pub fn quad(points: [glam::DVec2; 4]) -> Self {
        let [p0, p1, p2, p3] = points;
        Self::Quad {
            points: [
                KeyScalar::new(p0.x),
                KeyScalar::new(p0.y),
                KeyScalar::new(p1.x),
                KeyScalar::new(p1.y),
                KeyScalar::new(p2.x),
                KeyScalar::new(p2.y),
                KeyScalar::new(p3.x),
                KeyScalar::new(p3.y),
            ],
        }
    }
}

impl fmt::Display for ShapeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plane { detail_x, detail_y } => write!(f, "plane|{detail_x}|{detail_y}"),
            Self::Rect { detail_x, detail_y } => write!(f, "rect|{detail_x}|{detail_y}"),
            Self::Cuboid { detail_x, detail_y } => write!(f, "box|{detail_x}|{detail_y}"),
            Self::Ellipsoid { detail_x, detail_y } => {
                write!(f, "ellipsoid|{detail_x}|{detail_y}")
            }
            Self::Cylinder {
                detail_x,
                detail_y,
                bottom_cap,
                top_cap,
            } => write!(f, "cylinder|{detail_x}|{detail_y}|{bottom_cap}|{top_cap}"),
            Self::Cone {
                detail_x,
                detail_y,
                cap,
            } => write!(f, "cone|{detail_x}|{detail_y}|{cap}"),
            Self::Torus {
                tube_ratio,
                detail_x,
                detail_y,
            } => write!(f, "torus|{tube_ratio}|{detail_x}|{detail_y}"),
            Self::Icosphere { detail } => write!(f, "icosphere|{detail}"),
            Self::Triangle => write!(f, "triangle"),
            Self::Quad { points } => {
                write!(f, "quad")?;
                for point in points {
                    write!(f, "|{point}")?;
                }
                Ok(())
            }
            Self::Arc {
                start,
                stop,
                mode,
                detail,
            } => write!(f, "arc|{start}|{stop}|{mode}|{detail}"),
            Self::Ellipse { detail } => write!(f, "ellipse|{detail}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    #[test]
    fn string_forms_match_the_backend_contract() {
        assert_eq!(
            ShapeKey::Cuboid {
                detail_x: 4,
                detail_y: 4
            }
            .to_string(),
            "box|4|4"
        );
        assert_eq!(
            ShapeKey::Cylinder {
                detail_x: 24,
                detail_y: 1,
                bottom_cap: true,
                top_cap: true
            }
            .to_string(),
            "cylinder|24|1|true|true"
        );
        assert_eq!(ShapeKey::torus(0.2, 24, 16).to_string(), "torus|0.2|24|16");
        assert_eq!(ShapeKey::Icosphere { detail: 2 }.to_string(), "icosphere|2");
        assert_eq!(ShapeKey::Triangle.to_string(), "triangle");
    }

    #[test]
    fn quad_key_carries_literal_points() {
        let key = ShapeKey::quad([
            DVec2::new(0.0, 0.0),
            DVec2::new(10.0, 0.0),
            DVec2::new(10.0, 5.0),
            DVec2::new(0.0, 5.0),
        ]);
        assert_eq!(key.to_string(), "quad|0|0|10|0|10|5|0|5");
    }

    #[test]
    fn tube_ratio_rounds_to_four_significant_digits() {
        let a = ShapeKey::torus(0.123456, 24, 16);
        let b = ShapeKey::torus(0.123449, 24, 16);
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "torus|0.1235|24|16");

        let c = ShapeKey::torus(0.12, 24, 16);
        assert_ne!(a, c);
    }

    #[test]
    fn negative_zero_folds_into_zero() {
        assert_eq!(KeyScalar::new(-0.0), KeyScalar::new(0.0));
        assert_eq!(KeyScalar::new(-0.0).to_string(), "0");
    }

    #[test]
    fn round_signif_keeps_magnitude() {
        assert_eq!(round_signif(0.2, 4), 0.2);
        assert_eq!(round_signif(1234.5, 4), 1235.0);
        assert_eq!(round_signif(0.0001234549, 4), 0.0001235);
        assert_eq!(round_signif(0.0, 4), 0.0);
    }

    #[test]
    fn keys_with_different_discrete_params_differ() {
        let a = ShapeKey::Ellipsoid {
            detail_x: 24,
            detail_y: 16,
        };
        let b = ShapeKey::Ellipsoid {
            detail_x: 24,
            detail_y: 17,
        };
        assert_ne!(a, b);
    }
}
