//! # Geometry Cache
//!
//! Maps a [`ShapeKey`] to a previously built mesh with get-or-build
//! semantics. The cache is initialized empty at startup, populated lazily,
//! and never cleared: entries live for the process lifetime, so repeated
//! requests for the same shape/detail combination reuse one generated
//! mesh no matter how many times or at what scale it is drawn.
//!
//! ## Example
//!
//! ```rust
//! use easel_scene::cache::GeometryCache;
//! use easel_scene::key::ShapeKey;
//! use easel_geom::primitives::build_box;
//! use std::sync::Arc;
//!
//! let mut cache = GeometryCache::new();
//! let key = ShapeKey::Cuboid { detail_x: 4, detail_y: 4 };
//!
//! let first = cache.get_or_build(key.clone(), build_box);
//! let second = cache.get_or_build(key, build_box);
//! assert!(Arc::ptr_eq(&first, &second));
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use easel_geom::Mesh;

use crate::key::ShapeKey;

/// Cache statistics for monitoring.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Number of cache hits.
    pub hits: u64,
    /// Number of cache misses (each one triggered a build).
    pub misses: u64,
}

impl CacheStats {
    /// Computes the hit rate (0.0 to 1.0), or 0.0 before any access.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Get-or-build mesh cache keyed by primitive kind and discrete
/// parameters.
///
/// There is deliberately no eviction and no update/removal operation: the
/// set of distinct keys is bounded by the distinct detail combinations a
/// sketch draws, and a mesh must stay identical for as long as the render
/// backend holds buffers under its key.
#[derive(Debug, Default)]
pub struct GeometryCache {
    entries: HashMap<ShapeKey, Arc<Mesh>>,
    stats: CacheStats,
}

impl GeometryCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached mesh for `key`, building and storing it on first
    /// request.
    ///
    /// Every call with the same key returns a clone of the same `Arc`, so
    /// callers observe reference-identical meshes.
    pub fn get_or_build<F>(&mut self, key: ShapeKey, build: F) -> Arc<Mesh>
    where
        F: FnOnce() -> Mesh,
    {
        if let Some(mesh) = self.entries.get(&key) {
            self.stats.hits += 1;
            return Arc::clone(mesh);
        }
        self.stats.misses += 1;
        let mesh = Arc::new(build());
        self.entries.insert(key, Arc::clone(&mesh));
        mesh
    }

    /// Returns the cached mesh for `key` without building.
    pub fn get(&self, key: &ShapeKey) -> Option<Arc<Mesh>> {
        self.entries.get(key).map(Arc::clone)
    }

    /// Returns true if a mesh is cached under `key`.
    pub fn contains(&self, key: &ShapeKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the number of cached meshes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns cache statistics.
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel_geom::primitives::{build_box, build_plane};

    #[test]
    fn get_or_build_is_idempotent() {
        let mut cache = GeometryCache::new();
        let key = ShapeKey::Plane {
            detail_x: 1,
            detail_y: 1,
        };

        let first = cache.get_or_build(key.clone(), || build_plane(1, 1));
        let second = cache.get_or_build(key.clone(), || build_plane(1, 1));
        assert!(Arc::ptr_eq(&first, &second));

        // Mutating unrelated keys leaves the entry untouched.
        cache.get_or_build(
            ShapeKey::Cuboid {
                detail_x: 4,
                detail_y: 4,
            },
            build_box,
        );
        let third = cache.get_or_build(key, || build_plane(1, 1));
        assert!(Arc::ptr_eq(&first, &third));
        assert_eq!(third.vertex_count(), 4);
    }

    #[test]
    fn build_runs_once_per_key() {
        let mut cache = GeometryCache::new();
        let key = ShapeKey::Triangle;
        let mut builds = 0;

        for _ in 0..3 {
            cache.get_or_build(key.clone(), || {
                builds += 1;
                build_plane(1, 1)
            });
        }
        assert_eq!(builds, 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn stats_track_hits_and_misses() {
        let mut cache = GeometryCache::new();
        let key = ShapeKey::Icosphere { detail: 0 };

        cache.get_or_build(key.clone(), || build_plane(1, 1));
        cache.get_or_build(key.clone(), || build_plane(1, 1));
        cache.get_or_build(key, || build_plane(1, 1));

        assert_eq!(cache.stats().misses, 1);
        assert_eq!(cache.stats().hits, 2);
        assert!((cache.stats().hit_rate() - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn distinct_keys_get_distinct_entries() {
        let mut cache = GeometryCache::new();
        cache.get_or_build(
            ShapeKey::Plane {
                detail_x: 1,
                detail_y: 1,
            },
            || build_plane(1, 1),
        );
        cache.get_or_build(
            ShapeKey::Plane {
                detail_x: 2,
                detail_y: 2,
            },
            || build_plane(2, 2),
        );
        assert_eq!(cache.len(), 2);
    }
}
