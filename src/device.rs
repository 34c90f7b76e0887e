//! Accelerator descriptors
//!
//! Describes the hardware a training run executed on. Only the two
//! accelerator classes the benchmarks target are modelled; the framework
//! that actually drives them is an external collaborator.

use crate::power::PowerProfile;
use serde::{Deserialize, Serialize};

/// GPU information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpuInfo {
    /// GPU name/model
    pub name: String,
    /// Video RAM in bytes
    pub vram_bytes: u64,
    /// CUDA compute capability (major, minor) if NVIDIA
    pub compute_capability: Option<(u32, u32)>,
    /// GPU index (for multi-GPU systems)
    pub index: u32,
}

impl GpuInfo {
    /// Create new GPU info
    pub fn new(name: impl Into<String>, vram_bytes: u64) -> Self {
        Self { name: name.into(), vram_bytes, compute_capability: None, index: 0 }
    }

    /// Set CUDA compute capability
    pub fn with_compute_capability(mut self, major: u32, minor: u32) -> Self {
        self.compute_capability = Some((major, minor));
        self
    }

    /// Set GPU index
    pub fn with_index(mut self, index: u32) -> Self {
        self.index = index;
        self
    }

    /// Get VRAM in GB
    pub fn vram_gb(&self) -> f64 {
        self.vram_bytes as f64 / (1024.0 * 1024.0 * 1024.0)
    }
}

/// TPU information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TpuInfo {
    /// TPU version (e.g., "v4", "v5e")
    pub version: String,
    /// Number of TPU cores
    pub cores: u32,
    /// High bandwidth memory in bytes
    pub hbm_bytes: u64,
}

impl TpuInfo {
    /// Create new TPU info
    pub fn new(version: impl Into<String>, cores: u32, hbm_bytes: u64) -> Self {
        Self { version: version.into(), cores, hbm_bytes }
    }

    /// Get HBM in GB
    pub fn hbm_gb(&self) -> f64 {
        self.hbm_bytes as f64 / (1024.0 * 1024.0 * 1024.0)
    }
}

/// An accelerator a training run executed on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Accelerator {
    /// GPU device
    Gpu(GpuInfo),
    /// TPU device (Google)
    Tpu(TpuInfo),
}

impl Accelerator {
    /// Check if this is a GPU device
    pub fn is_gpu(&self) -> bool {
        matches!(self, Self::Gpu(_))
    }

    /// Check if this is a TPU device
    pub fn is_tpu(&self) -> bool {
        matches!(self, Self::Tpu(_))
    }

    /// Get device name
    pub fn name(&self) -> &str {
        match self {
            Self::Gpu(info) => &info.name,
            Self::Tpu(info) => &info.version,
        }
    }

    /// Get available memory in bytes
    pub fn memory_bytes(&self) -> u64 {
        match self {
            Self::Gpu(info) => info.vram_bytes,
            Self::Tpu(info) => info.hbm_bytes,
        }
    }

    /// The static power assumption for this accelerator's class.
    pub fn default_power_profile(&self) -> PowerProfile {
        match self {
            Self::Gpu(_) => PowerProfile::datacenter_gpu(),
            Self::Tpu(_) => PowerProfile::cloud_tpu(),
        }
    }
}

impl std::fmt::Display for Accelerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gpu(info) => {
                write!(f, "GPU: {} ({:.1} GB VRAM", info.name, info.vram_gb())?;
                if let Some((major, minor)) = info.compute_capability {
                    write!(f, ", SM {major}.{minor}")?;
                }
                write!(f, ")")
            }
            Self::Tpu(info) => {
                write!(f, "TPU: {} ({} cores, {:.1} GB HBM)", info.version, info.cores, info.hbm_gb())
            }
        }
    }
}
