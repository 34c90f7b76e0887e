//! Efficiency estimation (MDR-003)
//!
//! Converts a completed [`TrainingRun`] into energy, throughput, and
//! compute-efficiency figures. Pure, deterministic arithmetic over scalar
//! inputs: no retries, no concurrency, no side effects. All figures are
//! `f64`; rounding happens only at display time.

use crate::run::TrainingRun;
use medir_common::{MedirError, Result};
use serde::{Deserialize, Serialize};

/// Joules per kilowatt-hour.
const JOULES_PER_KWH: f64 = 3_600_000.0;

/// Energy consumed by one training run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyEstimate {
    /// Total energy consumed in Joules
    pub total_energy_joules: f64,
    /// Total energy consumed in kilowatt-hours
    pub total_energy_kwh: f64,
    /// Energy consumed per training sample in Joules
    pub energy_per_sample_joules: f64,
}

impl EnergyEstimate {
    /// Total energy in watt-hours.
    pub fn wh(&self) -> f64 {
        self.total_energy_joules / 3_600.0
    }

    /// Estimated electricity cost at the given rate.
    pub fn estimated_cost_usd(&self, usd_per_kwh: f64) -> f64 {
        self.total_energy_kwh * usd_per_kwh
    }

    /// Estimated carbon emissions at the given grid intensity.
    ///
    /// Typical intensities (kg CO2 per kWh): US average ~0.4, EU average
    /// ~0.3, France (nuclear) ~0.05, coal-heavy grids ~0.8.
    pub fn carbon_kg(&self, kg_co2_per_kwh: f64) -> f64 {
        self.total_energy_kwh * kg_co2_per_kwh
    }
}

/// Arithmetic-throughput figures, available when the run carries an
/// operation count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputeEfficiency {
    /// Operations executed per second
    pub ops_per_second: f64,
    /// Operations executed per Joule of energy consumed
    pub ops_per_joule: f64,
}

/// The full efficiency report for one training run.
///
/// Derived deterministically from a [`TrainingRun`]; immutable once
/// computed. The compute section is present only when the run recorded an
/// operation count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EfficiencyReport {
    /// Samples processed per second
    pub throughput_samples_per_second: f64,
    /// Energy figures
    pub energy: EnergyEstimate,
    /// Compute-throughput figures, when an operation count was recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compute: Option<ComputeEfficiency>,
}

impl EfficiencyReport {
    /// Derive the full report from a run record.
    pub fn from_run(run: &TrainingRun) -> Result<Self> {
        let energy = estimate_energy(run)?;
        let throughput = estimate_throughput(run)?;
        let compute = match run.total_operations {
            Some(_) => Some(estimate_compute_efficiency(run)?),
            None => None,
        };

        Ok(Self { throughput_samples_per_second: throughput, energy, compute })
    }
}

/// Estimate the energy consumed by a run.
///
/// `total_energy_joules = device_power_watts * elapsed_seconds`, then
/// converted to kWh and normalized per sample.
pub fn estimate_energy(run: &TrainingRun) -> Result<EnergyEstimate> {
    run.validate()?;

    let total_energy_joules = run.device_power_watts * run.elapsed_seconds;
    Ok(EnergyEstimate {
        total_energy_joules,
        total_energy_kwh: total_energy_joules / JOULES_PER_KWH,
        energy_per_sample_joules: total_energy_joules / run.samples_processed as f64,
    })
}

/// Estimate sample throughput: `samples_processed / elapsed_seconds`.
pub fn estimate_throughput(run: &TrainingRun) -> Result<f64> {
    run.validate()?;
    Ok(run.samples_processed as f64 / run.elapsed_seconds)
}

/// Estimate compute throughput and compute-per-watt efficiency.
///
/// Only defined when the run carries an operation count; fails with an
/// invalid-measurement error otherwise.
pub fn estimate_compute_efficiency(run: &TrainingRun) -> Result<ComputeEfficiency> {
    run.validate()?;

    let Some(total_operations) = run.total_operations else {
        return Err(MedirError::invalid_measurement(
            "total_operations",
            "no operation count was recorded for this run",
        ));
    };

    let ops_per_second = total_operations as f64 / run.elapsed_seconds;
    Ok(ComputeEfficiency {
        ops_per_second,
        ops_per_joule: ops_per_second / run.device_power_watts,
    })
}
