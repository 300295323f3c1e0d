/// Hierarchical BVH culler.
///
/// Owns a static BVH over the scene plus a Frustum, and culls by pruning
/// whole subtrees with one box test before testing leaf objects
/// individually. The BVH is rebuilt lazily: on_scene_changed() only
/// marks it dirty, the rebuild happens at the start of the next cull().

use std::time::Instant;
use glam::Mat4;
use crate::cull_debug;
use crate::scene::RenderObject;
use super::bvh::{Bvh, BvhNodeKind};
use super::culler::{Culler, CullStats};
use super::frustum::Frustum;

/// BVH-backed hierarchical culling strategy.
pub struct BvhCuller {
    leaf_size: u32,
    bvh: Bvh,
    frustum: Frustum,
    needs_rebuild: bool,
    stats: CullStats,
}

impl BvhCuller {
    /// Create a culler with the given maximum leaf size (must be >= 1).
    pub fn new(leaf_size: u32) -> Self {
        Self {
            leaf_size,
            bvh: Bvh::new(),
            frustum: Frustum::new(),
            needs_rebuild: true,
            stats: CullStats::default(),
        }
    }

    /// Whether the next cull() call will rebuild the BVH first.
    pub fn needs_rebuild(&self) -> bool {
        self.needs_rebuild
    }

    /// The current tree (empty until the first cull()).
    pub fn bvh(&self) -> &Bvh {
        &self.bvh
    }

    /// Depth-first traversal from `node_index`, appending visible
    /// original object indices.
    fn cull_recursive(
        &self,
        node_index: u32,
        objects: &[RenderObject],
        visible_indices: &mut Vec<u32>,
    ) {
        let node = &self.bvh.nodes()[node_index as usize];

        // One box test rejects the whole subtree
        if !self.frustum.test_aabb(&node.aabb) {
            return;
        }

        match node.kind {
            BvhNodeKind::Leaf { first, count } => {
                // Node AABBs get looser as more objects share a leaf;
                // re-test each object's own sphere before emitting it
                let range = first as usize..(first + count) as usize;
                for &obj_index in &self.bvh.object_indices()[range] {
                    let object = &objects[obj_index as usize];
                    let (center, radius) = object.world_sphere();
                    if self.frustum.test_sphere(center, radius) {
                        visible_indices.push(obj_index);
                    }
                }
            }
            BvhNodeKind::Internal { left, right } => {
                self.cull_recursive(left, objects, visible_indices);
                self.cull_recursive(right, objects, visible_indices);
            }
        }
    }
}

impl Culler for BvhCuller {
    fn on_scene_changed(&mut self, _objects: &[RenderObject]) {
        // Deferred: the rebuild happens on the next cull()
        self.needs_rebuild = true;
    }

    fn cull(
        &mut self,
        objects: &[RenderObject],
        view_projection: &Mat4,
        visible_indices: &mut Vec<u32>,
    ) {
        let started = Instant::now();

        if self.needs_rebuild || self.bvh.is_empty() {
            self.bvh.build(objects, self.leaf_size);
            self.needs_rebuild = false;
            cull_debug!(
                "nebula3d::BvhCuller",
                "BVH rebuilt: {} nodes over {} objects (leaf size {})",
                self.bvh.nodes().len(),
                objects.len(),
                self.leaf_size
            );
        }

        self.frustum = Frustum::from_view_projection(view_projection);

        visible_indices.clear();
        visible_indices.reserve(objects.len());

        if !self.bvh.is_empty() {
            self.cull_recursive(0, objects, visible_indices);
        }

        self.stats.record(objects.len(), visible_indices.len(), started);
    }

    fn stats(&self) -> &CullStats {
        &self.stats
    }
}

#[cfg(test)]
#[path = "bvh_culler_tests.rs"]
mod tests;
