//! # Retained Draw Front-End
//!
//! One draw routine per primitive. Each call computes a [`ShapeKey`] from
//! the request's discrete parameters, populates the geometry cache on the
//! first miss (builder, then normal computation, then edge extraction
//! under the stroke-detail ceiling), uploads buffers once per key, and
//! issues a scaled draw against the current model matrix.
//!
//! Generation runs to completion inside the call that triggered it, so a
//! mesh is always fully built before its first draw. Everything here is
//! single-threaded; the cache and matrix stack are plain owned state.

use config::constants::{
    EPSILON_TOLERANCE, MAX_ICOSPHERE_DETAIL, MIN_RING_DETAIL_X, STROKE_DETAIL_ARC,
    STROKE_DETAIL_BOX, STROKE_DETAIL_ELLIPSOID, STROKE_DETAIL_ICOSPHERE, STROKE_DETAIL_PLANE,
    STROKE_DETAIL_RING, TUBE_RATIO_SIG_DIGITS,
};
use easel_geom::edges::apply_extracted_edges;
use easel_geom::normals::compute_vertex_normals;
use easel_geom::primitives::{
    build_arc, build_box, build_cone, build_cylinder, build_ellipse, build_ellipsoid,
    build_icosphere, build_plane, build_quad, build_rect, build_torus, build_triangle,
    triangle::triangle_basis,
};
use easel_geom::Mesh;
use glam::{DMat4, DVec3};

use crate::backend::RenderBackend;
use crate::cache::GeometryCache;
use crate::key::{round_signif, KeyScalar, ShapeKey};
use crate::params::{
    ArcParams, ConeParams, CuboidParams, CylinderParams, EllipseParams, EllipsoidParams,
    IcosphereParams, PlaneParams, QuadParams, RectParams, SphereParams, TorusParams,
    TriangleParams,
};
use crate::transform::MatrixStack;

/// Retained renderer: geometry cache, model transform stack, and the
/// render backend that consumes the cached meshes.
#[derive(Debug)]
pub struct Renderer<B: RenderBackend> {
    backend: B,
    cache: GeometryCache,
    stack: MatrixStack,
}

impl<B: RenderBackend> Renderer<B> {
    /// Creates a renderer over the given backend with an empty cache and
    /// an identity model matrix.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            cache: GeometryCache::new(),
            stack: MatrixStack::new(),
        }
    }

    /// Returns the geometry cache.
    pub fn cache(&self) -> &GeometryCache {
        &self.cache
    }

    /// Returns the backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Returns the model transform stack.
    pub fn stack_mut(&mut self) -> &mut MatrixStack {
        &mut self.stack
    }

    /// Draws a centered plane.
    pub fn plane(&mut self, params: &PlaneParams) {
        let detail_x = params.detail_x.max(1);
        let detail_y = params.detail_y.max(1);
        let key = ShapeKey::Plane { detail_x, detail_y };
        let mesh = self.cache.get_or_build(key.clone(), || {
            let mut mesh = build_plane(detail_x, detail_y);
            compute_vertex_normals(&mut mesh);
            authored_strokes_under_ceiling(&mut mesh, "plane", STROKE_DETAIL_PLANE);
            mesh
        });
        self.submit(&key, &mesh, DVec3::new(params.width, params.height, 1.0));
    }

    /// Draws a box. The mesh is always 6 quads; detail only participates
    /// in keying.
    pub fn cuboid(&mut self, params: &CuboidParams) {
        let (detail_x, detail_y) = (params.detail_x, params.detail_y);
        let key = ShapeKey::Cuboid { detail_x, detail_y };
        let mesh = self.cache.get_or_build(key.clone(), || {
            // The box mesh never subdivides, so the ceiling is checked
            // against the requested detail rather than the mesh's own.
            let mut mesh = build_box();
            if detail_x > STROKE_DETAIL_BOX.0 || detail_y > STROKE_DETAIL_BOX.1 {
                log::warn!(
                    "box detail {detail_x}x{detail_y} exceeds the stroke ceiling {}x{}; \
                     drawing without wireframe edges",
                    STROKE_DETAIL_BOX.0,
                    STROKE_DETAIL_BOX.1,
                );
                mesh.clear_edges();
            }
            mesh
        });
        self.submit(
            &key,
            &mesh,
            DVec3::new(params.width, params.height, params.depth),
        );
    }

    /// Draws a sphere: an ellipsoid with equal radii, sharing its cache
    /// entry.
    pub fn sphere(&mut self, params: &SphereParams) {
        self.ellipsoid(&EllipsoidParams {
            radius_x: params.radius,
            radius_y: params.radius,
            radius_z: params.radius,
            detail_x: params.detail_x,
            detail_y: params.detail_y,
        });
    }

    /// Draws an ellipsoid.
    pub fn ellipsoid(&mut self, params: &EllipsoidParams) {
        let detail_x = params.detail_x.max(3);
        let detail_y = params.detail_y.max(2);
        let key = ShapeKey::Ellipsoid { detail_x, detail_y };
        let mesh = self.cache.get_or_build(key.clone(), || {
            let mut mesh = build_ellipsoid(detail_x, detail_y);
            derived_strokes_under_ceiling(&mut mesh, "ellipsoid", STROKE_DETAIL_ELLIPSOID);
            mesh
        });
        self.submit(
            &key,
            &mesh,
            DVec3::new(params.radius_x, params.radius_y, params.radius_z),
        );
    }

    /// Draws a cylinder.
    pub fn cylinder(&mut self, params: &CylinderParams) {
        let detail_x = params.detail_x.max(MIN_RING_DETAIL_X);
        let detail_y = params.detail_y.max(1);
        let key = ShapeKey::Cylinder {
            detail_x,
            detail_y,
            bottom_cap: params.bottom_cap,
            top_cap: params.top_cap,
        };
        let mesh = self.cache.get_or_build(key.clone(), || {
            let mut mesh = build_cylinder(detail_x, detail_y, params.bottom_cap, params.top_cap);
            derived_strokes_under_ceiling(&mut mesh, "cylinder", STROKE_DETAIL_RING);
            mesh
        });
        self.submit(
            &key,
            &mesh,
            DVec3::new(params.radius, params.height, params.radius),
        );
    }

    /// Draws a cone.
    pub fn cone(&mut self, params: &ConeParams) {
        let detail_x = params.detail_x.max(MIN_RING_DETAIL_X);
        let detail_y = params.detail_y.max(1);
        let key = ShapeKey::Cone {
            detail_x,
            detail_y,
            cap: params.cap,
        };
        let mesh = self.cache.get_or_build(key.clone(), || {
            let mut mesh = build_cone(detail_x, detail_y, params.cap);
            derived_strokes_under_ceiling(&mut mesh, "cone", STROKE_DETAIL_RING);
            mesh
        });
        self.submit(
            &key,
            &mesh,
            DVec3::new(params.radius, params.height, params.radius),
        );
    }

    /// Draws a torus.
    ///
    /// A zero ring radius or tube radius describes no surface: the call is
    /// a safe no-op that registers no cache entry.
    pub fn torus(&mut self, params: &TorusParams) {
        if params.radius <= 0.0 || params.tube_radius <= 0.0 {
            return;
        }
        let detail_x = params.detail_x.max(3);
        let detail_y = params.detail_y.max(3);
        // The rounded ratio both selects the cache entry and parameterizes
        // the build, so key and geometry cannot disagree.
        let ratio = round_signif(params.tube_radius / params.radius, TUBE_RATIO_SIG_DIGITS);
        let key = ShapeKey::Torus {
            tube_ratio: KeyScalar::new(ratio),
            detail_x,
            detail_y,
        };
        let mesh = self.cache.get_or_build(key.clone(), || {
            let mut mesh = build_torus(ratio, detail_x, detail_y);
            derived_strokes_under_ceiling(&mut mesh, "torus", STROKE_DETAIL_RING);
            mesh
        });
        self.submit(&key, &mesh, DVec3::splat(params.radius));
    }

    /// Draws an icosphere.
    pub fn icosphere(&mut self, params: &IcosphereParams) {
        let detail = params.detail.min(MAX_ICOSPHERE_DETAIL);
        let key = ShapeKey::Icosphere { detail };
        let mesh = self.cache.get_or_build(key.clone(), || {
            let mut mesh = build_icosphere(detail);
            derived_strokes_under_ceiling(
                &mut mesh,
                "icosphere",
                (STROKE_DETAIL_ICOSPHERE, STROKE_DETAIL_ICOSPHERE),
            );
            mesh
        });
        self.submit(&key, &mesh, DVec3::splat(params.radius));
    }

    /// Draws a rect anchored at `(x, y)`.
    pub fn rect(&mut self, params: &RectParams) {
        let detail_x = params.detail_x.max(1);
        let detail_y = params.detail_y.max(1);
        let key = ShapeKey::Rect { detail_x, detail_y };
        let mesh = self.cache.get_or_build(key.clone(), || {
            let mut mesh = build_rect(detail_x, detail_y);
            compute_vertex_normals(&mut mesh);
            mesh
        });
        self.draw_placed(
            &key,
            &mesh,
            DMat4::from_translation(DVec3::new(params.x, params.y, 0.0)),
            DVec3::new(params.width, params.height, 1.0),
        );
    }

    /// Draws a filled ellipse centered on `(x, y)`.
    pub fn ellipse(&mut self, params: &EllipseParams) {
        let detail = params.detail.max(3);
        let key = ShapeKey::Ellipse { detail };
        let mesh = self.cache.get_or_build(key.clone(), || {
            let mut mesh = build_ellipse(detail);
            compute_vertex_normals(&mut mesh);
            authored_strokes_under_ceiling(&mut mesh, "ellipse", (STROKE_DETAIL_ARC, 1));
            mesh
        });
        self.draw_placed(
            &key,
            &mesh,
            corner_translation(params.x, params.y, params.width, params.height),
            DVec3::new(params.width, params.height, 1.0),
        );
    }

    /// Draws an arc centered on `(x, y)`.
    ///
    /// Coincident start and stop angles are a safe no-op; a span covering
    /// a full turn is treated as a filled ellipse.
    pub fn arc(&mut self, params: &ArcParams) {
        let span = params.stop - params.start;
        if span.abs() < EPSILON_TOLERANCE {
            return;
        }
        if span.abs() >= std::f64::consts::TAU - EPSILON_TOLERANCE {
            self.ellipse(&EllipseParams {
                x: params.x,
                y: params.y,
                width: params.width,
                height: params.height,
                detail: params.detail,
            });
            return;
        }

        let detail = params.detail.max(1);
        let key = ShapeKey::Arc {
            start: KeyScalar::new(params.start),
            stop: KeyScalar::new(params.stop),
            mode: params.mode,
            detail,
        };
        let (start, stop, mode) = (params.start, params.stop, params.mode);
        let mesh = self.cache.get_or_build(key.clone(), || {
            let mut mesh = build_arc(start, stop, mode, detail);
            compute_vertex_normals(&mut mesh);
            authored_strokes_under_ceiling(&mut mesh, "arc", (STROKE_DETAIL_ARC, 1));
            mesh
        });
        self.draw_placed(
            &key,
            &mesh,
            corner_translation(params.x, params.y, params.width, params.height),
            DVec3::new(params.width, params.height, 1.0),
        );
    }

    /// Draws a quad through its four literal corner points.
    pub fn quad(&mut self, params: &QuadParams) {
        let key = ShapeKey::quad(params.points);
        let points = params.points;
        let mesh = self.cache.get_or_build(key.clone(), || {
            let mut mesh = build_quad(points);
            compute_vertex_normals(&mut mesh);
            mesh
        });
        self.draw_placed(&key, &mesh, DMat4::IDENTITY, DVec3::ONE);
    }

    /// Draws a triangle by transforming the canonical cached mesh.
    ///
    /// The corner points become an affine basis-change matrix composed
    /// into the model matrix for this draw only; the previous transform is
    /// restored on every exit path.
    pub fn triangle(&mut self, params: &TriangleParams) {
        let key = ShapeKey::Triangle;
        let mesh = self.cache.get_or_build(key.clone(), || {
            let mut mesh = build_triangle();
            compute_vertex_normals(&mut mesh);
            mesh
        });
        self.draw_placed(
            &key,
            &mesh,
            triangle_basis(params.a, params.b, params.c),
            DVec3::ONE,
        );
    }

    /// Uploads (once per key) and draws with the current model matrix.
    fn submit(&mut self, key: &ShapeKey, mesh: &Mesh, scale: DVec3) {
        if mesh.is_empty() {
            return;
        }
        let id = key.to_string();
        if !self.backend.geometry_in_hash(&id) {
            self.backend.create_buffers(&id, mesh);
        }
        self.backend
            .draw_buffers_scaled(&id, scale, self.stack.current());
    }

    /// Uploads and draws under a scoped transform that is restored when
    /// the draw finishes, unwinding included.
    fn draw_placed(&mut self, key: &ShapeKey, mesh: &Mesh, transform: DMat4, scale: DVec3) {
        if mesh.is_empty() {
            return;
        }
        let id = key.to_string();
        let Self { backend, stack, .. } = self;
        let mut guard = stack.save();
        guard.mult(transform);
        if !backend.geometry_in_hash(&id) {
            backend.create_buffers(&id, mesh);
        }
        backend.draw_buffers_scaled(&id, scale, guard.current());
    }
}

/// Keeps the builder-authored stroke list only under the documented
/// ceiling; above it the fill is kept and the mesh draws solid.
fn authored_strokes_under_ceiling(mesh: &mut Mesh, kind: &str, ceiling: (u32, u32)) {
    if mesh.detail_x() > ceiling.0 || mesh.detail_y() > ceiling.1 {
        log::warn!(
            "{kind} detail {}x{} exceeds the stroke ceiling {}x{}; drawing without wireframe edges",
            mesh.detail_x(),
            mesh.detail_y(),
            ceiling.0,
            ceiling.1,
        );
        mesh.clear_edges();
    }
}

/// Extracts wireframe edges from the faces when under the documented
/// ceiling; above it the mesh draws solid.
fn derived_strokes_under_ceiling(mesh: &mut Mesh, kind: &str, ceiling: (u32, u32)) {
    if mesh.detail_x() <= ceiling.0 && mesh.detail_y() <= ceiling.1 {
        apply_extracted_edges(mesh);
    } else {
        log::warn!(
            "{kind} detail {}x{} exceeds the stroke ceiling {}x{}; drawing without wireframe edges",
            mesh.detail_x(),
            mesh.detail_y(),
            ceiling.0,
            ceiling.1,
        );
    }
}

/// Places a unit-square-framed 2D shape so its center lands on `(x, y)`.
fn corner_translation(x: f64, y: f64, width: f64, height: f64) -> DMat4 {
    DMat4::from_translation(DVec3::new(x - width / 2.0, y - height / 2.0, 0.0))
}
