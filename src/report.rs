//! Run records and terminal rendering
//!
//! Turns an [`EfficiencyReport`] into the two outputs the benchmarks emit:
//! a human-readable table and a timestamped JSON record.

use crate::estimator::EfficiencyReport;
use crate::run::TrainingRun;
use chrono::Utc;
use medir_common::{MedirError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// A labelled, timestamped run plus its derived report.
///
/// This is the machine-readable artifact a benchmark leaves behind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    /// ISO-8601 timestamp of when the record was created
    pub timestamp: String,
    /// Operator-chosen label (usually the accelerator class)
    pub label: String,
    /// The raw measurements
    pub run: TrainingRun,
    /// The derived report
    pub report: EfficiencyReport,
}

impl RunRecord {
    /// Create a record stamped with the current UTC time.
    pub fn new(label: impl Into<String>, run: TrainingRun, report: EfficiencyReport) -> Self {
        Self { timestamp: Utc::now().to_rfc3339(), label: label.into(), run, report }
    }

    /// Write the record as pretty JSON under `dir`, returning the path.
    ///
    /// The filename is derived from the label so repeated runs of the same
    /// benchmark overwrite their previous record.
    pub fn save_json(&self, dir: impl AsRef<Path>) -> Result<String> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)
            .map_err(|e| MedirError::io(format!("creating {}", dir.display()), e))?;

        let slug: String = self
            .label
            .to_lowercase()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        let path = dir.join(format!("medir_{slug}.json"));

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| MedirError::Serialization { message: e.to_string() })?;
        std::fs::write(&path, json)
            .map_err(|e| MedirError::io(format!("writing {}", path.display()), e))?;

        Ok(path.display().to_string())
    }
}

/// Format a quantity with an engineering prefix, e.g. `2.50e7` → "25.00 Mop".
pub fn format_quantity(value: f64, unit: &str) -> String {
    let (scaled, prefix) = scale(value);
    format!("{scaled:.2} {prefix}{unit}")
}

fn scale(value: f64) -> (f64, &'static str) {
    let magnitude = value.abs();
    if magnitude >= 1e12 {
        (value / 1e12, "T")
    } else if magnitude >= 1e9 {
        (value / 1e9, "G")
    } else if magnitude >= 1e6 {
        (value / 1e6, "M")
    } else if magnitude >= 1e3 {
        (value / 1e3, "k")
    } else if magnitude >= 1.0 || magnitude == 0.0 {
        (value, "")
    } else {
        (value * 1e3, "m")
    }
}

impl EfficiencyReport {
    /// Format as ASCII table.
    pub fn to_table(&self, label: &str) -> String {
        let mut output = format!("Efficiency Report: {label}\n");
        output.push_str("┌──────────────────────────┬──────────────────────┐\n");
        output.push_str("│ Metric                   │ Value                │\n");
        output.push_str("├──────────────────────────┼──────────────────────┤\n");

        let mut row = |metric: &str, value: String| {
            output.push_str(&format!("│ {metric:24} │ {value:>20} │\n"));
        };

        row(
            "Throughput",
            format_quantity(self.throughput_samples_per_second, "samples/s"),
        );
        row("Total energy", format_quantity(self.energy.total_energy_joules, "J"));
        row("Total energy", format!("{:.4} kWh", self.energy.total_energy_kwh));
        row(
            "Energy per sample",
            format_quantity(self.energy.energy_per_sample_joules, "J"),
        );

        if let Some(compute) = &self.compute {
            row("Compute throughput", format_quantity(compute.ops_per_second, "op/s"));
            row("Compute efficiency", format_quantity(compute.ops_per_joule, "op/J"));
        }

        output.push_str("└──────────────────────────┴──────────────────────┘\n");
        output
    }
}

impl fmt::Display for EfficiencyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} ({:.4} kWh), {} per sample",
            format_quantity(self.throughput_samples_per_second, "samples/s"),
            format_quantity(self.energy.total_energy_joules, "J"),
            self.energy.total_energy_kwh,
            format_quantity(self.energy.energy_per_sample_joules, "J"),
        )?;
        if let Some(compute) = &self.compute {
            write!(
                f,
                ", {}, {}",
                format_quantity(compute.ops_per_second, "op/s"),
                format_quantity(compute.ops_per_joule, "op/J"),
            )?;
        }
        Ok(())
    }
}
