/// Culler factory — maps a CullingConfig to a strategy instance.
///
/// The strategy set is closed; callers hold the result as a boxed
/// trait object and never branch on the concrete type.

use crate::{cull_info, cull_warn};
use super::bvh_culler::BvhCuller;
use super::config::{CullingConfig, CullingMode};
use super::culler::{Culler, NdcCuller, PlaneCuller};

/// Instantiate the culling strategy selected by `config`.
///
/// `GpuPlane` is accepted but has no implementation yet; it constructs
/// the BVH strategy instead and logs a warning.
pub fn create_culler(config: &CullingConfig) -> Box<dyn Culler> {
    match config.mode {
        CullingMode::CpuNone => {
            cull_info!(
                "nebula3d::factory",
                "Created NDC culler (no spatial structure)"
            );
            Box::new(NdcCuller::new())
        }
        CullingMode::CpuPlane => {
            cull_info!(
                "nebula3d::factory",
                "Created plane culler (no spatial structure)"
            );
            Box::new(PlaneCuller::new())
        }
        CullingMode::CpuBvh => {
            cull_info!(
                "nebula3d::factory",
                "Created BVH culler (leaf size {})",
                config.bvh_leaf_size
            );
            Box::new(BvhCuller::new(config.bvh_leaf_size))
        }
        CullingMode::GpuPlane => {
            cull_warn!(
                "nebula3d::factory",
                "GPU culling not yet implemented, falling back to BVH"
            );
            Box::new(BvhCuller::new(config.bvh_leaf_size))
        }
    }
}

#[cfg(test)]
#[path = "factory_tests.rs"]
mod tests;
