/// Culling strategies.
///
/// A Culler determines which RenderObjects are visible from a camera.
/// The strategy set is small and closed: a per-object clip-space test
/// (NdcCuller), a per-object plane test (PlaneCuller), a BVH-backed
/// hierarchical traversal (BvhCuller, own module), and a declared-only
/// GPU strategy that nothing implements yet.

use std::time::Instant;
use glam::{Mat4, Vec3};
use crate::scene::RenderObject;
use super::frustum::Frustum;

// ===== STATS =====

/// Per-call culling statistics.
#[derive(Debug, Clone, Copy, Default)]
pub struct CullStats {
    /// Objects handed to the last cull() call
    pub total_objects: u32,
    /// Objects reported visible
    pub visible_objects: u32,
    /// total - visible
    pub culled_objects: u32,
    /// Wall-clock time of the whole call, in milliseconds
    pub cull_time_ms: f32,
}

impl CullStats {
    /// Fill the record from one finished cull() call.
    pub(crate) fn record(&mut self, total: usize, visible: usize, started: Instant) {
        self.total_objects = total as u32;
        self.visible_objects = visible as u32;
        self.culled_objects = self.total_objects - self.visible_objects;
        self.cull_time_ms = started.elapsed().as_secs_f32() * 1000.0;
    }
}

// ===== GPU BUFFER HANDLE =====

/// Opaque backend buffer handle exposed by GPU-based cullers.
///
/// The value is backend-defined (e.g. a raw VkBuffer) and only meaningful
/// to the renderer that created the culler. CPU strategies never produce
/// one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpuBufferHandle(pub u64);

// ===== CULLER TRAIT =====

/// Strategy for determining visible objects from a view-projection matrix.
///
/// Called once per frame before drawing. Visible indices refer to
/// positions in the object slice passed to `cull`; their order is
/// traversal order, not necessarily input order.
///
/// `&mut self` allows stateful implementations (e.g. BVH rebuilds)
/// to maintain state across frames. A culler instance is not meant for
/// concurrent calls — the caller serializes access.
pub trait Culler: Send + Sync {
    /// Notify the culler that the object list changed.
    ///
    /// The effect is deferred: stateful cullers rebuild their structures
    /// at the start of the next cull() call, not here. Stateless cullers
    /// ignore it.
    fn on_scene_changed(&mut self, _objects: &[RenderObject]) {}

    /// Cull the scene and write the indices of visible objects.
    ///
    /// `visible_indices` is cleared first; previous contents are lost.
    fn cull(
        &mut self,
        objects: &[RenderObject],
        view_projection: &Mat4,
        visible_indices: &mut Vec<u32>,
    );

    /// Whether this strategy culls on the GPU.
    fn is_gpu_based(&self) -> bool {
        false
    }

    /// Indirect draw buffer of a GPU-based culler (None for CPU strategies).
    fn indirect_buffer(&self) -> Option<GpuBufferHandle> {
        None
    }

    /// Draw count buffer of a GPU-based culler (None for CPU strategies).
    fn count_buffer(&self) -> Option<GpuBufferHandle> {
        None
    }

    /// Statistics from the most recent cull() call.
    fn stats(&self) -> &CullStats;
}

// ===== NDC CULLER =====

/// No-structure culler testing each object's projected box in clip space.
///
/// Transforms the 8 local bounding-box corners by
/// `view_projection * transform`, perspective-divides, and rejects the
/// object only when the projected box lies entirely beyond one clip
/// bound ([-1, 1] in x/y, [0, 1] in z). O(objects), recomputed from
/// scratch every call, no persistent state.
pub struct NdcCuller {
    stats: CullStats,
}

impl NdcCuller {
    pub fn new() -> Self {
        Self {
            stats: CullStats::default(),
        }
    }

    /// Clip-space visibility test for a single object.
    fn is_visible_ndc(object: &RenderObject, view_projection: &Mat4) -> bool {
        const CORNERS: [Vec3; 8] = [
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(1.0, 1.0, -1.0),
            Vec3::new(1.0, -1.0, 1.0),
            Vec3::new(1.0, -1.0, -1.0),
            Vec3::new(-1.0, 1.0, 1.0),
            Vec3::new(-1.0, 1.0, -1.0),
            Vec3::new(-1.0, -1.0, 1.0),
            Vec3::new(-1.0, -1.0, -1.0),
        ];

        let matrix = *view_projection * object.transform;

        // Seed min/max with a 0.5 overshoot so a box that barely clips a
        // bound still counts as visible
        let mut min = Vec3::splat(1.5);
        let mut max = Vec3::splat(-1.5);

        for corner in CORNERS {
            let local = object.bounds.origin + corner * object.bounds.extents;
            let v = matrix * local.extend(1.0);
            let ndc = Vec3::new(v.x / v.w, v.y / v.w, v.z / v.w);
            min = min.min(ndc);
            max = max.max(ndc);
        }

        !(min.z > 1.0
            || max.z < 0.0
            || min.x > 1.0
            || max.x < -1.0
            || min.y > 1.0
            || max.y < -1.0)
    }
}

impl Culler for NdcCuller {
    fn cull(
        &mut self,
        objects: &[RenderObject],
        view_projection: &Mat4,
        visible_indices: &mut Vec<u32>,
    ) {
        let started = Instant::now();

        visible_indices.clear();
        visible_indices.reserve(objects.len());

        for (index, object) in objects.iter().enumerate() {
            if Self::is_visible_ndc(object, view_projection) {
                visible_indices.push(index as u32);
            }
        }

        self.stats.record(objects.len(), visible_indices.len(), started);
    }

    fn stats(&self) -> &CullStats {
        &self.stats
    }
}

// ===== PLANE CULLER =====

/// No-structure culler testing each object's world bounding sphere
/// against the frustum planes.
///
/// Shares the Frustum component with BvhCuller but tests every object
/// directly without any hierarchy. O(objects).
pub struct PlaneCuller {
    frustum: Frustum,
    stats: CullStats,
}

impl PlaneCuller {
    pub fn new() -> Self {
        Self {
            frustum: Frustum::new(),
            stats: CullStats::default(),
        }
    }
}

impl Culler for PlaneCuller {
    fn cull(
        &mut self,
        objects: &[RenderObject],
        view_projection: &Mat4,
        visible_indices: &mut Vec<u32>,
    ) {
        let started = Instant::now();

        self.frustum = Frustum::from_view_projection(view_projection);

        visible_indices.clear();
        visible_indices.reserve(objects.len());

        for (index, object) in objects.iter().enumerate() {
            let (center, radius) = object.world_sphere();
            if self.frustum.test_sphere(center, radius) {
                visible_indices.push(index as u32);
            }
        }

        self.stats.record(objects.len(), visible_indices.len(), started);
    }

    fn stats(&self) -> &CullStats {
        &self.stats
    }
}

#[cfg(test)]
#[path = "culler_tests.rs"]
mod tests;
