/// Frustum — six clipping planes for visibility culling.
///
/// Each plane is represented as a Vec4 (A, B, C, D) where:
/// - (A, B, C) is the inward-pointing normal
/// - D is the signed distance
/// - A point P is inside the frustum if dot(normal, P) + D >= 0 for all planes
///
/// Plane extraction assumes the clip-space convention this renderer runs
/// with: flipped Y (the projection's y_axis is negated for Vulkan) and
/// reversed depth (near plane at z = 1, far plane at z = 0). Matrices
/// built for the GL-style convention will come out with the vertical
/// planes swapped and the depth pair inverted — pick the projection to
/// match, not the extractor.

use glam::{Mat4, Vec3, Vec4};
use crate::scene::AABB;

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// Tolerance applied to plane-distance tests. Keeps objects grazing a
/// plane visible instead of popping from floating-point error.
const EPSILON: f32 = 0.001;

/// Below this normal length the plane is left un-normalized
/// (degenerate view-projection matrix).
const MIN_NORMAL_LENGTH: f32 = 1e-6;

/// Six frustum planes for culling.
///
/// Each plane is (A, B, C, D) where Ax + By + Cz + D = 0.
/// Normal (A, B, C) points inward (toward the visible volume).
/// Works with both perspective and orthographic projections.
#[derive(Debug, Clone, Copy)]
pub struct Frustum {
    /// Frustum planes: left, right, bottom, top, near, far
    pub planes: [Vec4; 6],
}

impl Frustum {
    /// All-zero planes. Every test passes until planes are extracted.
    pub fn new() -> Self {
        Self { planes: [Vec4::ZERO; 6] }
    }

    /// Extract frustum planes from a view-projection matrix.
    ///
    /// Row combinations follow Gribb & Hartmann, adjusted for this
    /// pipeline's clip space:
    /// - the Y flip swaps the vertical pair (top = row3 + row1,
    ///   bottom = row3 - row1)
    /// - reversed depth swaps the depth pair (near = row3 - row2,
    ///   far = row2 alone, since far sits at z = 0)
    pub fn from_view_projection(vp: &Mat4) -> Self {
        let m = vp.to_cols_array_2d();

        let mut planes = [
            // Left:   row3 + row0
            Vec4::new(m[0][3] + m[0][0], m[1][3] + m[1][0], m[2][3] + m[2][0], m[3][3] + m[3][0]),
            // Right:  row3 - row0
            Vec4::new(m[0][3] - m[0][0], m[1][3] - m[1][0], m[2][3] - m[2][0], m[3][3] - m[3][0]),
            // Bottom (Y flip): row3 - row1
            Vec4::new(m[0][3] - m[0][1], m[1][3] - m[1][1], m[2][3] - m[2][1], m[3][3] - m[3][1]),
            // Top (Y flip):    row3 + row1
            Vec4::new(m[0][3] + m[0][1], m[1][3] + m[1][1], m[2][3] + m[2][1], m[3][3] + m[3][1]),
            // Near (reversed depth, z <= w): row3 - row2
            Vec4::new(m[0][3] - m[0][2], m[1][3] - m[1][2], m[2][3] - m[2][2], m[3][3] - m[3][2]),
            // Far (reversed depth, z >= 0): row2
            Vec4::new(m[0][2], m[1][2], m[2][2], m[3][2]),
        ];

        // Normalize each plane unless the normal is degenerate
        for plane in &mut planes {
            let normal_len = Vec3::new(plane.x, plane.y, plane.z).length();
            if normal_len > MIN_NORMAL_LENGTH {
                *plane /= normal_len;
            }
        }

        Self { planes }
    }

    /// Test a bounding sphere against all 6 planes.
    ///
    /// Visible iff the signed distance from the center to every plane is
    /// >= -(radius + epsilon). Conservative: a sphere grazing the frustum
    /// boundary stays visible, one inside is never culled.
    pub fn test_sphere(&self, center: Vec3, radius: f32) -> bool {
        for plane in &self.planes {
            let dist = Vec3::new(plane.x, plane.y, plane.z).dot(center) + plane.w;
            if dist < -(radius + EPSILON) {
                return false;
            }
        }
        true
    }

    /// Test an AABB against all 6 planes.
    ///
    /// Uses the "positive vertex" test: for each plane, take the corner
    /// most in the direction of the plane normal. If that corner is
    /// outside a plane, the whole box is outside.
    ///
    /// Returns `true` if the AABB is (potentially) inside or intersecting.
    /// May return false positives (conservative), never false negatives
    /// for boxes fully inside.
    pub fn test_aabb(&self, aabb: &AABB) -> bool {
        for plane in &self.planes {
            let normal = Vec3::new(plane.x, plane.y, plane.z);

            // Positive vertex: corner most aligned with the normal
            let p_vertex = Vec3::new(
                if plane.x > 0.0 { aabb.max.x } else { aabb.min.x },
                if plane.y > 0.0 { aabb.max.y } else { aabb.min.y },
                if plane.z > 0.0 { aabb.max.z } else { aabb.min.z },
            );

            if normal.dot(p_vertex) + plane.w < -EPSILON {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
