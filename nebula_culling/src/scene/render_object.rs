/// Scene object types for the culling system.
///
/// A RenderObject is the per-frame snapshot a caller hands to a Culler:
/// a world transform plus a local-space bounding volume. The culling core
/// never owns or mutates these; it reads them for the duration of one call.

use glam::{Mat4, Vec3};

// ===== AABB =====

/// Axis-Aligned Bounding Box
#[derive(Debug, Clone, Copy)]
pub struct AABB {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
}

impl AABB {
    /// Union seed: min at +MAX, max at -MAX, so the first merge
    /// replaces both corners.
    pub const EMPTY: AABB = AABB {
        min: Vec3::splat(f32::MAX),
        max: Vec3::splat(f32::MIN),
    };

    /// Compute the center point of this AABB.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Smallest AABB containing both `self` and `other`.
    pub fn union(&self, other: &AABB) -> AABB {
        AABB {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Test if this AABB fully contains another AABB.
    ///
    /// Returns `true` if `other` is entirely within `self`.
    pub fn contains(&self, other: &AABB) -> bool {
        self.min.x <= other.min.x && self.max.x >= other.max.x
        && self.min.y <= other.min.y && self.max.y >= other.max.y
        && self.min.z <= other.min.z && self.max.z >= other.max.z
    }
}

// ===== BOUNDS =====

/// Local-space bounding volume of a render object.
///
/// `origin` is the bound center offset in local space, `extents` are
/// half-extents. The box and the sphere describe the same geometry;
/// cullers pick whichever is cheaper for the test at hand.
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    /// Bound center offset in local space
    pub origin: Vec3,
    /// Half-extents along each local axis (non-negative)
    pub extents: Vec3,
    /// Bounding-sphere radius in local space (non-negative)
    pub sphere_radius: f32,
}

// ===== RENDER OBJECT =====

/// Read-only per-frame snapshot of a renderable entity.
///
/// The transform may contain rotation, non-uniform scale, and translation.
#[derive(Debug, Clone, Copy)]
pub struct RenderObject {
    /// World transform matrix
    pub transform: Mat4,
    /// Bounding volume in local space
    pub bounds: Bounds,
}

impl RenderObject {
    pub fn new(transform: Mat4, bounds: Bounds) -> Self {
        Self { transform, bounds }
    }

    /// Bound center in world space.
    pub fn world_center(&self) -> Vec3 {
        self.transform.transform_point3(self.bounds.origin)
    }

    /// Conservative world scale factor: the largest basis-vector length
    /// of the transform.
    ///
    /// A single scalar, not a true non-uniform scale. It never shrinks
    /// the real bounds, but over-estimates them as scale anisotropy
    /// (or shear) increases.
    pub fn max_scale(&self) -> f32 {
        let sx = self.transform.x_axis.truncate().length();
        let sy = self.transform.y_axis.truncate().length();
        let sz = self.transform.z_axis.truncate().length();
        sx.max(sy).max(sz)
    }

    /// Approximate world-space AABB: world center ± scaled half-extents.
    pub fn world_aabb(&self) -> AABB {
        let center = self.world_center();
        let extents = self.bounds.extents * self.max_scale();
        AABB {
            min: center - extents,
            max: center + extents,
        }
    }

    /// Approximate world-space bounding sphere as (center, radius).
    pub fn world_sphere(&self) -> (Vec3, f32) {
        (self.world_center(), self.bounds.sphere_radius * self.max_scale())
    }
}

#[cfg(test)]
#[path = "render_object_tests.rs"]
mod tests;
