/*!
# Nebula Culling

CPU visibility-culling subsystem for the Nebula3D renderer.

Determines, once per frame, which objects in a 3D scene are potentially
visible from a camera so the renderer can skip drawing everything else.

## Architecture

- **Frustum**: extracts 6 clip planes from a view-projection matrix and
  tests spheres/AABBs against them
- **Bvh**: static, array-backed binary tree over object indices, rebuilt
  from scratch whenever the scene changes
- **Culler**: strategy trait shared by all culling implementations
- **NdcCuller / PlaneCuller / BvhCuller**: the three CPU strategies
- **CullingConfig / create_culler**: configuration-driven strategy selection

All visibility tests are conservative: an invisible object may be reported
visible, a visible one is never reported invisible (modulo the epsilon
tolerances in the plane tests).
*/

// Internal modules
mod error;
pub mod log;
pub mod scene;
pub mod culling;

// Main nebula3d namespace module
pub mod nebula3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{
            Logger, LogEntry, LogSeverity, DefaultLogger,
            set_logger, reset_logger,
        };
        // Note: cull_* macros are exported at the crate root
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }

    // Culling sub-module
    pub mod culling {
        pub use crate::culling::*;
    }
}

// Re-export math library at crate root
pub use glam;
