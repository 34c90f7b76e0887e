//! Accelerator power profiles (MDR-002)
//!
//! Static board-power assumptions per accelerator class. These are operator
//! inputs, not measured telemetry; the presets carry the nominal draw of the
//! class, and `custom` accepts anything the operator knows better.

use serde::{Deserialize, Serialize};

/// Nominal board power for a datacenter training GPU (Watts).
const DATACENTER_GPU_WATTS: f64 = 400.0;
/// Nominal board power for a cloud TPU slice (Watts).
const CLOUD_TPU_WATTS: f64 = 250.0;

/// Static power-draw assumption for one accelerator class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerProfile {
    /// Accelerator class name
    pub name: String,
    /// Assumed board power draw in Watts
    pub watts: f64,
}

impl PowerProfile {
    /// Datacenter training GPU profile (400 W nominal).
    pub fn datacenter_gpu() -> Self {
        Self { name: "Datacenter GPU".to_string(), watts: DATACENTER_GPU_WATTS }
    }

    /// Cloud TPU profile (250 W nominal).
    pub fn cloud_tpu() -> Self {
        Self { name: "Cloud TPU".to_string(), watts: CLOUD_TPU_WATTS }
    }

    /// Custom profile for hardware the presets do not cover.
    pub fn custom(name: impl Into<String>, watts: f64) -> Self {
        Self { name: name.into(), watts }
    }
}

impl std::fmt::Display for PowerProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:.0} W)", self.name, self.watts)
    }
}
