/// Static bounding-volume hierarchy over render object indices.
///
/// Array-backed binary tree: every node lives in one flat Vec, node 0 is
/// the root, children are referenced by index only — no pointers, no
/// ownership cycles. Built top-down by recursive median splits over a
/// permutation of the object indices, so each leaf owns a contiguous
/// range of that permutation.
///
/// The tree is fully static: build() discards everything and rebuilds
/// from scratch. There are no incremental updates.

use crate::scene::{RenderObject, AABB};

/// Default maximum object count per leaf.
pub const DEFAULT_LEAF_SIZE: u32 = 4;

/// Node variant: an internal node with two children, or a leaf covering
/// a contiguous range of the object index permutation.
///
/// The discriminant is the enum tag itself — a leaf is a leaf because it
/// says so, not because a count field happens to be nonzero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BvhNodeKind {
    /// Two children, referenced by node index into the flat node array
    Internal { left: u32, right: u32 },
    /// `count` object indices starting at `first` in the permutation
    Leaf { first: u32, count: u32 },
}

/// A single BVH node: world-space AABB plus the leaf/internal variant.
#[derive(Debug, Clone, Copy)]
pub struct BvhNode {
    /// World-space AABB enclosing every object under this node
    pub aabb: AABB,
    pub kind: BvhNodeKind,
}

impl BvhNode {
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, BvhNodeKind::Leaf { .. })
    }
}

/// Static array-backed BVH.
pub struct Bvh {
    /// Flat node storage; node 0 is the root
    nodes: Vec<BvhNode>,
    /// Permutation of [0, N); each leaf owns a contiguous range
    object_indices: Vec<u32>,
    /// Maximum objects per leaf for the current build
    leaf_size: u32,
}

impl Bvh {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            object_indices: Vec::new(),
            leaf_size: DEFAULT_LEAF_SIZE,
        }
    }

    /// Rebuild the tree over `objects`.
    ///
    /// Discards any previous tree. An empty object list yields an empty
    /// tree. `leaf_size` must be >= 1: a leaf is emitted once a range
    /// holds at most `leaf_size` objects, so 0 would force splitting
    /// single-object ranges forever.
    pub fn build(&mut self, objects: &[RenderObject], leaf_size: u32) {
        self.clear();
        if objects.is_empty() {
            return;
        }

        self.leaf_size = leaf_size;

        // Identity permutation; the builder partitions it in place
        self.object_indices = (0..objects.len() as u32).collect();

        // Worst case 2N - 1 nodes (every object in its own leaf)
        self.nodes.reserve(2 * objects.len() - 1);

        self.build_recursive(objects, 0, objects.len() as u32);
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.object_indices.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Flat node array; node 0 is the root.
    pub fn nodes(&self) -> &[BvhNode] {
        &self.nodes
    }

    /// Permutation of the original object indices; leaves index into this.
    pub fn object_indices(&self) -> &[u32] {
        &self.object_indices
    }

    /// Build the subtree over the permutation range [start, end).
    /// Returns the index of the created node.
    fn build_recursive(&mut self, objects: &[RenderObject], start: u32, end: u32) -> u32 {
        let node_index = self.nodes.len() as u32;

        // Node AABB: union of the (approximate) world bounds in range
        let mut aabb = AABB::EMPTY;
        for &obj_index in &self.object_indices[start as usize..end as usize] {
            aabb = aabb.union(&objects[obj_index as usize].world_aabb());
        }

        let count = end - start;

        if count <= self.leaf_size {
            self.nodes.push(BvhNode {
                aabb,
                kind: BvhNodeKind::Leaf { first: start, count },
            });
            return node_index;
        }

        // Split axis: largest AABB extent; y beats x on ties, z beats both
        let extent = aabb.max - aabb.min;
        let mut axis = 0;
        if extent.y >= extent.x {
            axis = 1;
        }
        if extent.z >= extent[axis] {
            axis = 2;
        }

        // Median split: order-statistic partition on the world-space center
        // coordinate. Balanced leaf counts regardless of spatial
        // distribution, at some cost to culling tightness for skewed scenes.
        let mid = (start + end) / 2;
        let range = &mut self.object_indices[start as usize..end as usize];
        range.select_nth_unstable_by((mid - start) as usize, |&a, &b| {
            let center_a = objects[a as usize].world_center()[axis];
            let center_b = objects[b as usize].world_center()[axis];
            center_a.total_cmp(&center_b)
        });

        // Reserve this node's slot so the children allocate after it;
        // the child indices are patched in below
        self.nodes.push(BvhNode {
            aabb,
            kind: BvhNodeKind::Internal { left: 0, right: 0 },
        });

        let left = self.build_recursive(objects, start, mid);
        let right = self.build_recursive(objects, mid, end);
        self.nodes[node_index as usize].kind = BvhNodeKind::Internal { left, right };

        node_index
    }
}

#[cfg(test)]
#[path = "bvh_tests.rs"]
mod tests;
