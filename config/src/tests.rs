//! Config crate tests.

use crate::constants::*;

#[test]
fn epsilon_is_small_and_positive() {
    assert!(EPSILON_TOLERANCE > 0.0);
    assert!(EPSILON_TOLERANCE < 1.0e-6);
}

#[test]
fn defaults_are_drawable() {
    assert!(DEFAULT_RADIUS > 0.0);
    assert!(DEFAULT_TUBE_RADIUS > 0.0);
    assert!(DEFAULT_DETAIL_X >= MIN_RING_DETAIL_X);
    assert!(DEFAULT_RING_DETAIL_Y >= 1);
    assert!(DEFAULT_ARC_DETAIL >= 3);
}

#[test]
fn stroke_ceilings_cover_defaults() {
    // Default-detail meshes must always receive wireframe edges.
    assert!(DEFAULT_GRID_DETAIL <= STROKE_DETAIL_PLANE.0);
    assert!(DEFAULT_BOX_DETAIL <= STROKE_DETAIL_BOX.0);
    assert!(DEFAULT_DETAIL_X <= STROKE_DETAIL_RING.0);
    assert!(DEFAULT_DETAIL_Y <= STROKE_DETAIL_RING.1);
    assert!(DEFAULT_DETAIL_X <= STROKE_DETAIL_ELLIPSOID.0);
    assert!(DEFAULT_ARC_DETAIL <= STROKE_DETAIL_ARC);
    assert!(DEFAULT_ICOSPHERE_DETAIL <= STROKE_DETAIL_ICOSPHERE);
}
