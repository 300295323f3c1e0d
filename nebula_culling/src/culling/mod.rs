//! Visibility culling module
//!
//! Frustum plane extraction and tests, the static BVH, the culler
//! strategy set (NDC, plane, BVH), and configuration-driven strategy
//! selection.

mod frustum;
mod bvh;
mod culler;
mod bvh_culler;
mod config;
mod factory;

pub use frustum::{
    Frustum,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
pub use bvh::{Bvh, BvhNode, BvhNodeKind, DEFAULT_LEAF_SIZE};
pub use culler::{Culler, CullStats, GpuBufferHandle, NdcCuller, PlaneCuller};
pub use bvh_culler::BvhCuller;
pub use config::{CullingConfig, CullingMode};
pub use factory::create_culler;
