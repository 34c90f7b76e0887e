//! Training-run measurements (MDR-001)
//!
//! A [`TrainingRun`] is the immutable record of one completed training
//! process: how long it ran, how many samples it consumed, and what the
//! device was assumed to draw. The training loop itself is an external
//! collaborator; it is treated as a black box that eventually returns an
//! elapsed duration and a sample count.

use crate::power::PowerProfile;
use medir_common::{MedirError, Result};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Measurements from one completed training run.
///
/// Constructed by the caller and passed by value into the estimator;
/// there is no process-wide timing state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingRun {
    /// Wall-clock duration of the training call in seconds
    pub elapsed_seconds: f64,
    /// Total samples processed across all epochs
    pub samples_processed: u64,
    /// Assumed device power draw in Watts
    pub device_power_watts: f64,
    /// Total arithmetic operations performed, when the caller knows them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_operations: Option<u64>,
}

impl TrainingRun {
    /// Create a run record from raw measurements.
    pub fn new(elapsed_seconds: f64, samples_processed: u64, device_power_watts: f64) -> Self {
        Self { elapsed_seconds, samples_processed, device_power_watts, total_operations: None }
    }

    /// Attach an operation count (enables compute-efficiency estimation).
    pub fn with_operations(mut self, total_operations: u64) -> Self {
        self.total_operations = Some(total_operations);
        self
    }

    /// Check the input invariants the derived rates depend on.
    ///
    /// Every divisor must be positive and finite; otherwise the estimator
    /// would produce `inf`/`NaN` instead of a defined report.
    pub fn validate(&self) -> Result<()> {
        if !self.elapsed_seconds.is_finite() || self.elapsed_seconds <= 0.0 {
            return Err(MedirError::invalid_measurement(
                "elapsed_seconds",
                format!("got {} s; need a positive, finite duration", self.elapsed_seconds),
            ));
        }
        if self.samples_processed == 0 {
            return Err(MedirError::invalid_measurement(
                "samples_processed",
                "got 0 samples; per-sample rates are undefined",
            ));
        }
        if !self.device_power_watts.is_finite() || self.device_power_watts <= 0.0 {
            return Err(MedirError::invalid_measurement(
                "device_power_watts",
                format!("got {} W; need a positive, finite power draw", self.device_power_watts),
            ));
        }
        Ok(())
    }
}

/// Wall-clock timer wrapped around an external training call.
///
/// Captures the start instant, lets the framework-owned `fit` run, and
/// turns the result into a [`TrainingRun`]:
///
/// ```
/// use medir::{PowerProfile, TrainingTimer};
///
/// let timer = TrainingTimer::start(PowerProfile::datacenter_gpu());
/// // ... external framework trains here ...
/// let run = timer.finish(60_000);
/// assert_eq!(run.samples_processed, 60_000);
/// ```
#[derive(Debug)]
pub struct TrainingTimer {
    profile: PowerProfile,
    started: Instant,
}

impl TrainingTimer {
    /// Start timing under the given power assumption.
    #[must_use]
    pub fn start(profile: PowerProfile) -> Self {
        Self { profile, started: Instant::now() }
    }

    /// Stop timing and build the run record.
    pub fn finish(self, samples_processed: u64) -> TrainingRun {
        TrainingRun::new(
            self.started.elapsed().as_secs_f64(),
            samples_processed,
            self.profile.watts,
        )
    }

    /// Stop timing and build the run record with an operation count.
    pub fn finish_with_operations(self, samples_processed: u64, total_operations: u64) -> TrainingRun {
        self.finish(samples_processed).with_operations(total_operations)
    }
}
