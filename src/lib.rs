//! medir: accelerator training-efficiency estimation.
//!
//! Converts the outputs of an external training process (wall-clock
//! duration, sample count) and a static power assumption into energy,
//! throughput, and compute-utilization reports. The training loop, model,
//! and dataset are framework-owned collaborators; this crate owns only the
//! arithmetic that turns their measurements into hardware-efficiency
//! figures.
//!
//! # Components
//!
//! - [`run`] - Training-run measurements and the wall-clock timer
//! - [`power`] - Static power-draw profiles per accelerator class
//! - [`estimator`] - Energy, throughput, and compute-efficiency estimation
//! - [`ops`] - Operation counting for sequential classifier stacks
//! - [`device`] - GPU/TPU accelerator descriptors
//! - [`report`] - Run records, JSON persistence, and table rendering
//!
//! # Example
//!
//! ```
//! use medir::{estimator::EfficiencyReport, TrainingRun};
//!
//! let run = TrainingRun::new(120.0, 12_000_000, 400.0);
//! let report = EfficiencyReport::from_run(&run)?;
//!
//! assert!((report.energy.total_energy_joules - 48_000.0).abs() < 1e-9);
//! assert!((report.throughput_samples_per_second - 100_000.0).abs() < 1e-9);
//! # Ok::<(), medir::MedirError>(())
//! ```

pub mod device;
pub mod estimator;
pub mod ops;
pub mod power;
pub mod report;
pub mod run;

pub use device::{Accelerator, GpuInfo, TpuInfo};
pub use estimator::{
    estimate_compute_efficiency, estimate_energy, estimate_throughput, ComputeEfficiency,
    EfficiencyReport, EnergyEstimate,
};
pub use ops::{LayerOps, OpsModel};
pub use power::PowerProfile;
pub use report::RunRecord;
pub use run::{TrainingRun, TrainingTimer};

pub use medir_common::{MedirError, Result};
