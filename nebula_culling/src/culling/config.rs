/// Culling configuration.
///
/// Loaded from a small JSON file so the culling strategy can be switched
/// without recompiling:
///
/// ```json
/// { "culling_mode": "cpu_bvh", "bvh_leaf_size": 8 }
/// ```
///
/// Loading is tolerant: a missing or unreadable file, malformed JSON,
/// unknown mode string, or missing key falls back to defaults with a
/// warning — configuration problems must never take the renderer down.

use std::fs;
use std::path::Path;
use serde::Deserialize;
use crate::cull_warn;
use crate::error::{Error, Result};
use super::bvh::DEFAULT_LEAF_SIZE;

/// Which culling strategy to instantiate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CullingMode {
    /// Per-object NDC clip test, no spatial structure
    CpuNone,
    /// Per-object sphere-vs-plane test, no spatial structure
    CpuPlane,
    /// Hierarchical BVH traversal
    CpuBvh,
    /// GPU indirect-draw culling — declared but not implemented;
    /// selecting it constructs the BVH strategy instead
    GpuPlane,
}

/// Raw on-disk shape; both keys optional, unknown keys ignored.
#[derive(Deserialize)]
struct RawConfig {
    culling_mode: Option<String>,
    bvh_leaf_size: Option<u32>,
}

/// Culling subsystem configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CullingConfig {
    pub mode: CullingMode,
    /// Maximum objects per BVH leaf (>= 1)
    pub bvh_leaf_size: u32,
}

impl Default for CullingConfig {
    fn default() -> Self {
        Self {
            mode: CullingMode::CpuNone,
            bvh_leaf_size: DEFAULT_LEAF_SIZE,
        }
    }
}

impl CullingConfig {
    /// Parse a configuration from a JSON string.
    ///
    /// Missing keys take their defaults. An unrecognized mode string
    /// warns and keeps the default mode. A leaf size of 0 is clamped to
    /// 1 — the BVH builder requires at least one object per leaf.
    ///
    /// # Errors
    ///
    /// Returns `Error::Parse` if the text is not valid JSON.
    pub fn parse(json: &str) -> Result<Self> {
        let raw: RawConfig =
            serde_json::from_str(json).map_err(|e| Error::Parse(e.to_string()))?;

        let mut config = Self::default();

        if let Some(mode) = raw.culling_mode.as_deref() {
            match mode {
                "cpu_none" => config.mode = CullingMode::CpuNone,
                "cpu_plane" => config.mode = CullingMode::CpuPlane,
                "cpu_bvh" => config.mode = CullingMode::CpuBvh,
                "gpu_plane" => config.mode = CullingMode::GpuPlane,
                other => {
                    cull_warn!(
                        "nebula3d::CullingConfig",
                        "Unknown culling_mode '{}', using default",
                        other
                    );
                }
            }
        }

        if let Some(leaf_size) = raw.bvh_leaf_size {
            if leaf_size == 0 {
                cull_warn!(
                    "nebula3d::CullingConfig",
                    "bvh_leaf_size 0 is invalid, clamping to 1"
                );
            }
            config.bvh_leaf_size = leaf_size.max(1);
        }

        Ok(config)
    }

    /// Load a configuration file, falling back to defaults on any failure.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        match Self::try_load(path.as_ref()) {
            Ok(config) => config,
            Err(e) => {
                cull_warn!(
                    "nebula3d::CullingConfig",
                    "Could not load culling config ({}), using defaults",
                    e
                );
                Self::default()
            }
        }
    }

    fn try_load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| Error::Io(format!("{}: {}", path.display(), e)))?;
        Self::parse(&text)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
