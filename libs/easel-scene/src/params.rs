//! # Shape Parameters
//!
//! One explicit configuration struct per primitive, enumerating each
//! recognized option and its default. This replaces dynamic
//! argument-count overloading: a caller fills in what it cares about and
//! takes the documented defaults for the rest.
//!
//! ```rust
//! use easel_scene::params::SphereParams;
//!
//! let params = SphereParams {
//!     radius: 20.0,
//!     ..SphereParams::default()
//! };
//! assert_eq!(params.detail_x, 24);
//! ```

use config::constants::{
    DEFAULT_ARC_DETAIL, DEFAULT_BOX_DETAIL, DEFAULT_DETAIL_X, DEFAULT_DETAIL_Y,
    DEFAULT_GRID_DETAIL, DEFAULT_ICOSPHERE_DETAIL, DEFAULT_RADIUS, DEFAULT_RING_DETAIL_Y,
    DEFAULT_TUBE_RADIUS,
};
use glam::DVec2;
use serde::{Deserialize, Serialize};

pub use easel_geom::primitives::arc::ArcMode;

/// Options for a centered plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneParams {
    /// Width along x.
    pub width: f64,
    /// Height along y.
    pub height: f64,
    /// Grid subdivision along x.
    pub detail_x: u32,
    /// Grid subdivision along y.
    pub detail_y: u32,
}

impl Default for PlaneParams {
    fn default() -> Self {
        Self {
            width: DEFAULT_RADIUS,
            height: DEFAULT_RADIUS,
            detail_x: DEFAULT_GRID_DETAIL,
            detail_y: DEFAULT_GRID_DETAIL,
        }
    }
}

/// Options for a box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CuboidParams {
    /// Size along x.
    pub width: f64,
    /// Size along y.
    pub height: f64,
    /// Size along z.
    pub depth: f64,
    /// Recorded detail along x; tunes lighting defaults, not tessellation.
    pub detail_x: u32,
    /// Recorded detail along y.
    pub detail_y: u32,
}

impl Default for CuboidParams {
    fn default() -> Self {
        Self {
            width: DEFAULT_RADIUS,
            height: DEFAULT_RADIUS,
            depth: DEFAULT_RADIUS,
            detail_x: DEFAULT_BOX_DETAIL,
            detail_y: DEFAULT_BOX_DETAIL,
        }
    }
}

/// Options for a sphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphereParams {
    /// Sphere radius.
    pub radius: f64,
    /// Longitude subdivision.
    pub detail_x: u32,
    /// Latitude subdivision.
    pub detail_y: u32,
}

impl Default for SphereParams {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            detail_x: DEFAULT_DETAIL_X,
            detail_y: DEFAULT_DETAIL_Y,
        }
    }
}

/// Options for an ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EllipsoidParams {
    /// Radius along x.
    pub radius_x: f64,
    /// Radius along y.
    pub radius_y: f64,
    /// Radius along z.
    pub radius_z: f64,
    /// Longitude subdivision.
    pub detail_x: u32,
    /// Latitude subdivision.
    pub detail_y: u32,
}

impl Default for EllipsoidParams {
    fn default() -> Self {
        Self {
            radius_x: DEFAULT_RADIUS,
            radius_y: DEFAULT_RADIUS,
            radius_z: DEFAULT_RADIUS,
            detail_x: DEFAULT_DETAIL_X,
            detail_y: DEFAULT_DETAIL_Y,
        }
    }
}

/// Options for a cylinder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CylinderParams {
    /// Cylinder radius.
    pub radius: f64,
    /// Cylinder height.
    pub height: f64,
    /// Ring subdivision.
    pub detail_x: u32,
    /// Height subdivision.
    pub detail_y: u32,
    /// Close the bottom disc.
    pub bottom_cap: bool,
    /// Close the top disc.
    pub top_cap: bool,
}

impl Default for CylinderParams {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            height: DEFAULT_RADIUS,
            detail_x: DEFAULT_DETAIL_X,
            detail_y: DEFAULT_RING_DETAIL_Y,
            bottom_cap: true,
            top_cap: true,
        }
    }
}

/// Options for a cone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConeParams {
    /// Base radius.
    pub radius: f64,
    /// Cone height.
    pub height: f64,
    /// Ring subdivision.
    pub detail_x: u32,
    /// Height subdivision.
    pub detail_y: u32,
    /// Close the base disc.
    pub cap: bool,
}

impl Default for ConeParams {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            height: DEFAULT_RADIUS,
            detail_x: DEFAULT_DETAIL_X,
            detail_y: DEFAULT_RING_DETAIL_Y,
            cap: true,
        }
    }
}

/// Options for a torus.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TorusParams {
    /// Ring radius.
    pub radius: f64,
    /// Tube radius.
    pub tube_radius: f64,
    /// Revolution subdivision.
    pub detail_x: u32,
    /// Tube subdivision.
    pub detail_y: u32,
}

impl Default for TorusParams {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            tube_radius: DEFAULT_TUBE_RADIUS,
            detail_x: DEFAULT_DETAIL_X,
            detail_y: DEFAULT_DETAIL_Y,
        }
    }
}

/// Options for an icosphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IcosphereParams {
    /// Sphere radius.
    pub radius: f64,
    /// Subdivision depth.
    pub detail: u32,
}

impl Default for IcosphereParams {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            detail: DEFAULT_ICOSPHERE_DETAIL,
        }
    }
}

/// Options for a rect, anchored at its corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectParams {
    /// Corner x.
    pub x: f64,
    /// Corner y.
    pub y: f64,
    /// Width along x.
    pub width: f64,
    /// Height along y.
    pub height: f64,
    /// Grid subdivision along x.
    pub detail_x: u32,
    /// Grid subdivision along y.
    pub detail_y: u32,
}

impl Default for RectParams {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: DEFAULT_RADIUS,
            height: DEFAULT_RADIUS,
            detail_x: DEFAULT_GRID_DETAIL,
            detail_y: DEFAULT_GRID_DETAIL,
        }
    }
}

/// Options for an ellipse, centered on `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EllipseParams {
    /// Center x.
    pub x: f64,
    /// Center y.
    pub y: f64,
    /// Diameter along x.
    pub width: f64,
    /// Diameter along y.
    pub height: f64,
    /// Perimeter sample count.
    pub detail: u32,
}

impl Default for EllipseParams {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: DEFAULT_RADIUS,
            height: DEFAULT_RADIUS,
            detail: DEFAULT_ARC_DETAIL,
        }
    }
}

/// Options for an arc, centered on `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcParams {
    /// Center x.
    pub x: f64,
    /// Center y.
    pub y: f64,
    /// Diameter along x.
    pub width: f64,
    /// Diameter along y.
    pub height: f64,
    /// Start angle in radians.
    pub start: f64,
    /// Stop angle in radians.
    pub stop: f64,
    /// Closing behavior.
    pub mode: ArcMode,
    /// Perimeter sample count.
    pub detail: u32,
}

impl Default for ArcParams {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: DEFAULT_RADIUS,
            height: DEFAULT_RADIUS,
            start: 0.0,
            stop: std::f64::consts::PI,
            mode: ArcMode::Open,
            detail: DEFAULT_ARC_DETAIL,
        }
    }
}

/// Options for a quad: four corner points in perimeter order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadParams {
    /// The corners, traversed around the perimeter.
    pub points: [DVec2; 4],
}

impl Default for QuadParams {
    fn default() -> Self {
        Self {
            points: [
                DVec2::new(0.0, 0.0),
                DVec2::new(DEFAULT_RADIUS, 0.0),
                DVec2::new(DEFAULT_RADIUS, DEFAULT_RADIUS),
                DVec2::new(0.0, DEFAULT_RADIUS),
            ],
        }
    }
}

/// Options for a triangle: three corner points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriangleParams {
    /// First corner; becomes the transform's translation column.
    pub a: DVec2,
    /// Second corner.
    pub b: DVec2,
    /// Third corner.
    pub c: DVec2,
}

impl Default for TriangleParams {
    fn default() -> Self {
        Self {
            a: DVec2::new(0.0, 0.0),
            b: DVec2::new(DEFAULT_RADIUS, 0.0),
            c: DVec2::new(0.0, DEFAULT_RADIUS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_defaults() {
        let plane = PlaneParams::default();
        assert_eq!(plane.width, 50.0);
        assert_eq!((plane.detail_x, plane.detail_y), (1, 1));

        let sphere = SphereParams::default();
        assert_eq!((sphere.detail_x, sphere.detail_y), (24, 16));

        let cylinder = CylinderParams::default();
        assert!(cylinder.bottom_cap && cylinder.top_cap);
        assert_eq!(cylinder.detail_y, 1);

        let cone = ConeParams::default();
        assert!(cone.cap);

        let arc = ArcParams::default();
        assert_eq!(arc.mode, ArcMode::Open);
        assert_eq!(arc.detail, 25);
    }

    #[test]
    fn params_round_trip_through_serde() {
        let params = TorusParams {
            radius: 40.0,
            tube_radius: 8.0,
            ..TorusParams::default()
        };
        let json = serde_json::to_string(&params).unwrap();
        let back: TorusParams = serde_json::from_str(&json).unwrap();
        assert_eq!(params, back);
    }
}
