//! # Arc and Ellipse Primitives
//!
//! Circular sectors sampled on the unit circle and mapped into the
//! `[0, 1]²` frame (center `(0.5, 0.5)`, radius `0.5`). A span covering a
//! full turn is a filled ellipse; anything shorter is an arc whose closing
//! stroke depends on the mode.

use std::f64::consts::PI;

use config::constants::EPSILON_TOLERANCE;
use glam::{DVec2, DVec3};

use crate::mesh::Mesh;

/// How an arc shorter than a full turn is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub enum ArcMode {
    /// Stroke only the sampled arc segments.
    #[default]
    Open,
    /// Add a straight stroke between the two endpoints.
    Chord,
    /// Add a center vertex stroke: two radius edges.
    Pie,
}

impl std::fmt::Display for ArcMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArcMode::Open => write!(f, "open"),
            ArcMode::Chord => write!(f, "chord"),
            ArcMode::Pie => write!(f, "pie"),
        }
    }
}

/// Creates an arc spanning `[start, stop]` radians.
///
/// `detail + 1` points are sampled along the span and fanned against the
/// ellipse center. Coincident `start` and `stop` describe nothing and
/// yield an empty mesh; a span of a full turn or more falls through to
/// [`build_ellipse`].
pub fn build_arc(start: f64, stop: f64, mode: ArcMode, detail: u32) -> Mesh {
    let span = stop - start;
    if span.abs() < EPSILON_TOLERANCE {
        return Mesh::new();
    }
    if span.abs() >= 2.0 * PI - EPSILON_TOLERANCE {
        return build_ellipse(detail);
    }

    let detail = detail.max(1);
    let mut mesh = Mesh::with_detail(detail, 1);
    mesh.add_vertex(DVec3::new(0.5, 0.5, 0.0), DVec2::new(0.5, 0.5));

    for i in 0..=detail {
        let u = f64::from(i) / f64::from(detail);
        let theta = start + span * u;
        let x = 0.5 + theta.cos() / 2.0;
        let y = 0.5 + theta.sin() / 2.0;
        mesh.add_vertex(DVec3::new(x, y, 0.0), DVec2::new(x, y));
        if i < detail {
            mesh.add_triangle(0, i + 1, i + 2);
            mesh.add_edge(i + 1, i + 2);
        }
    }

    let last = detail + 1;
    match mode {
        ArcMode::Pie => {
            mesh.add_edge(0, 1);
            mesh.add_edge(0, last);
        }
        ArcMode::Chord => {
            mesh.add_edge(1, last);
        }
        ArcMode::Open => {}
    }

    mesh
}

/// Creates a filled unit ellipse: a center vertex fanned against `detail`
/// perimeter samples, stroked around the perimeter only.
pub fn build_ellipse(detail: u32) -> Mesh {
    let detail = detail.max(3);
    let mut mesh = Mesh::with_detail(detail, 1);
    mesh.add_vertex(DVec3::new(0.5, 0.5, 0.0), DVec2::new(0.5, 0.5));

    for i in 0..detail {
        let theta = 2.0 * PI * f64::from(i) / f64::from(detail);
        let x = 0.5 + theta.cos() / 2.0;
        let y = 0.5 + theta.sin() / 2.0;
        mesh.add_vertex(DVec3::new(x, y, 0.0), DVec2::new(x, y));
    }
    for i in 0..detail {
        let next = (i + 1) % detail;
        mesh.add_triangle(0, i + 1, next + 1);
        mesh.add_edge(i + 1, next + 1);
    }

    mesh
}
