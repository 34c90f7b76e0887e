//! Accelerator run comparison.

use medir::{EfficiencyReport, OpsModel, TrainingRun};
use medir_common::{MedirError, Result};
use serde::{Deserialize, Serialize};

/// A labelled training run to compare.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedRun {
    /// Label shown in the comparison (usually the accelerator class)
    pub label: String,
    /// The measurements
    pub run: TrainingRun,
}

impl NamedRun {
    /// Create a labelled run.
    pub fn new(label: impl Into<String>, run: TrainingRun) -> Self {
        Self { label: label.into(), run }
    }
}

/// Derived figures for one run within a comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunResult {
    /// Run label
    pub label: String,
    /// The derived efficiency report
    pub report: EfficiencyReport,
    /// Throughput relative to the first (baseline) run
    pub speedup: f64,
    /// Energy per sample relative to the first (baseline) run
    pub energy_ratio: f64,
}

/// Result of comparing runs across accelerators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunComparison {
    /// Results per run, in input order (first run is the baseline)
    pub results: Vec<RunResult>,
    /// Label of the run with the highest throughput
    pub best_by_throughput: Option<String>,
    /// Label of the run with the lowest energy per sample
    pub best_by_energy: Option<String>,
}

/// Compare runs against the first one as baseline.
///
/// `speedup > 1` means faster than the baseline; `energy_ratio < 1` means
/// less energy per sample than the baseline.
pub fn compare(runs: &[NamedRun]) -> Result<RunComparison> {
    let Some(baseline) = runs.first() else {
        return Err(MedirError::ConfigValue {
            field: "runs".into(),
            message: "no runs to compare".into(),
            suggestion: "Provide at least one labelled run".into(),
        });
    };

    let baseline_report = EfficiencyReport::from_run(&baseline.run)?;
    let baseline_throughput = baseline_report.throughput_samples_per_second;
    let baseline_energy = baseline_report.energy.energy_per_sample_joules;

    let mut results = Vec::with_capacity(runs.len());
    for named in runs {
        let report = EfficiencyReport::from_run(&named.run)?;
        results.push(RunResult {
            label: named.label.clone(),
            speedup: report.throughput_samples_per_second / baseline_throughput,
            energy_ratio: report.energy.energy_per_sample_joules / baseline_energy,
            report,
        });
    }

    let best_by_throughput = results
        .iter()
        .max_by(|a, b| {
            a.report
                .throughput_samples_per_second
                .partial_cmp(&b.report.throughput_samples_per_second)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|r| r.label.clone());

    let best_by_energy = results
        .iter()
        .min_by(|a, b| {
            a.report
                .energy
                .energy_per_sample_joules
                .partial_cmp(&b.report.energy.energy_per_sample_joules)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|r| r.label.clone());

    Ok(RunComparison { results, best_by_throughput, best_by_energy })
}

impl RunComparison {
    /// Format as ASCII table.
    pub fn to_table(&self) -> String {
        let mut output = String::from("Accelerator Comparison\n");
        output.push_str(
            "┌──────────────────────┬──────────────┬───────────────┬─────────┬──────────────┐\n",
        );
        output.push_str(
            "│ Run                  │ Samples/s    │ Energy/sample │ Speedup │ Energy ratio │\n",
        );
        output.push_str(
            "├──────────────────────┼──────────────┼───────────────┼─────────┼──────────────┤\n",
        );

        for result in &self.results {
            let throughput_marker =
                if self.best_by_throughput.as_ref() == Some(&result.label) { " ★" } else { "" };
            let energy_marker =
                if self.best_by_energy.as_ref() == Some(&result.label) { " ★" } else { "" };

            output.push_str(&format!(
                "│ {:20} │ {:>10.0}{:2} │ {:>11.4} J{:2} │ {:>6.2}x │ {:>12.2} │\n",
                truncate(&result.label, 20),
                result.report.throughput_samples_per_second,
                throughput_marker,
                result.report.energy.energy_per_sample_joules,
                energy_marker,
                result.speedup,
                result.energy_ratio,
            ));
        }

        output.push_str(
            "└──────────────────────┴──────────────┴───────────────┴─────────┴──────────────┘\n",
        );
        output.push_str("\n★ = best throughput / lowest energy per sample\n");
        output
    }
}

/// Truncate string to max length
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{s:max_len$}")
    } else {
        let cut: String = s.chars().take(max_len - 3).collect();
        format!("{cut}...")
    }
}

/// Built-in sample runs for demonstration when no results file is given.
///
/// One run per accelerator class the original benchmarks targeted, with
/// the GPU run carrying an operation count derived from the digit
/// classifier stack.
pub fn sample_runs() -> Vec<NamedRun> {
    let samples = 12_000_000;
    let ops = OpsModel::digit_classifier().total_operations(samples);

    vec![
        NamedRun::new(
            "Datacenter GPU",
            TrainingRun::new(120.0, samples, 400.0).with_operations(ops),
        ),
        NamedRun::new("Cloud TPU", TrainingRun::new(96.0, samples, 250.0)),
        NamedRun::new(
            "Datacenter GPU (fp16)",
            TrainingRun::new(75.0, samples, 400.0).with_operations(ops),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_empty_is_error() {
        let err = compare(&[]).unwrap_err();
        assert!(err.to_string().contains("runs"));
    }

    #[test]
    fn test_baseline_ratios_are_unity() {
        let runs = sample_runs();
        let comparison = compare(&runs).unwrap();

        let baseline = &comparison.results[0];
        assert!((baseline.speedup - 1.0).abs() < 1e-12);
        assert!((baseline.energy_ratio - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_sample_runs_cover_both_classes() {
        let runs = sample_runs();
        assert!(runs.iter().any(|r| r.label.contains("GPU")));
        assert!(runs.iter().any(|r| r.label.contains("TPU")));
    }

    #[test]
    fn test_tpu_sample_beats_gpu_baseline() {
        // 96 s at 250 W vs 120 s at 400 W over the same samples: faster
        // and cheaper per sample.
        let comparison = compare(&sample_runs()).unwrap();
        let tpu = comparison.results.iter().find(|r| r.label == "Cloud TPU").unwrap();

        assert!(tpu.speedup > 1.0);
        assert!(tpu.energy_ratio < 1.0);
    }

    #[test]
    fn test_best_by_throughput_is_fastest_run() {
        let comparison = compare(&sample_runs()).unwrap();
        assert_eq!(comparison.best_by_throughput.as_deref(), Some("Datacenter GPU (fp16)"));
    }

    #[test]
    fn test_best_by_energy_is_cheapest_run() {
        // TPU: 250*96/12e6 = 2 mJ per sample; fp16 GPU: 400*75/12e6 = 2.5 mJ
        let comparison = compare(&sample_runs()).unwrap();
        assert_eq!(comparison.best_by_energy.as_deref(), Some("Cloud TPU"));
    }

    #[test]
    fn test_comparison_table_contains_labels_and_markers() {
        let comparison = compare(&sample_runs()).unwrap();
        let table = comparison.to_table();

        assert!(table.contains("Datacenter GPU"));
        assert!(table.contains("Cloud TPU"));
        assert!(table.contains('★'));
    }

    #[test]
    fn test_invalid_run_propagates_error() {
        let runs = vec![NamedRun::new("bad", TrainingRun::new(0.0, 1000, 400.0))];
        assert!(compare(&runs).is_err());
    }

    #[test]
    fn test_named_run_serde_round_trip() {
        let runs = sample_runs();
        let json = serde_json::to_string(&runs).expect("JSON serialization should succeed");
        let parsed: Vec<NamedRun> =
            serde_json::from_str(&json).expect("JSON deserialization should succeed");
        assert_eq!(runs, parsed);
    }

    #[test]
    fn test_truncate_long_labels() {
        let long = "a".repeat(40);
        let cut = truncate(&long, 20);
        assert_eq!(cut.chars().count(), 20);
        assert!(cut.ends_with("..."));
    }
}
