//! Integration tests for the efficiency estimator (MDR-001 through MDR-004)

use medir::{
    estimate_compute_efficiency, estimate_energy, estimate_throughput, EfficiencyReport, OpsModel,
    PowerProfile, RunRecord, TrainingRun, TrainingTimer,
};

// =============================================================================
// MDR-001: TrainingRun construction and validation
// =============================================================================

#[test]
fn test_run_built_from_timer_is_valid() {
    let timer = TrainingTimer::start(PowerProfile::datacenter_gpu());
    std::thread::sleep(std::time::Duration::from_millis(5));
    let run = timer.finish(60_000);

    assert!(run.validate().is_ok());
    assert!(run.elapsed_seconds > 0.0);
    assert!((run.device_power_watts - 400.0).abs() < f64::EPSILON);
}

#[test]
fn test_invalid_runs_are_rejected_consistently() {
    let zero_elapsed = TrainingRun::new(0.0, 1000, 400.0);
    let zero_samples = TrainingRun::new(120.0, 0, 400.0);
    let zero_watts = TrainingRun::new(120.0, 1000, 0.0);

    for run in [&zero_elapsed, &zero_samples, &zero_watts] {
        assert!(estimate_energy(run).is_err());
        assert!(estimate_throughput(run).is_err());
        assert!(EfficiencyReport::from_run(run).is_err());
    }
}

// =============================================================================
// MDR-003: End-to-end estimation with the class presets
// =============================================================================

#[test]
fn test_gpu_class_report_end_to_end() {
    // 400 W, 120 s, 12M samples: the canonical GPU benchmark figures
    let profile = PowerProfile::datacenter_gpu();
    let ops = OpsModel::digit_classifier().total_operations(12_000_000);
    let run = TrainingRun::new(120.0, 12_000_000, profile.watts).with_operations(ops);

    let report = EfficiencyReport::from_run(&run).unwrap();

    assert!((report.energy.total_energy_joules - 48_000.0).abs() < 1e-9);
    assert!((report.energy.total_energy_kwh - 0.013_333).abs() < 1e-5);
    assert!((report.throughput_samples_per_second - 100_000.0).abs() < 1e-9);

    let compute = report.compute.expect("GPU run carries an operation count");
    assert!((compute.ops_per_second - ops as f64 / 120.0).abs() < 1.0);
    assert!((compute.ops_per_joule - compute.ops_per_second / 400.0).abs() < 1.0);
}

#[test]
fn test_tpu_class_report_has_no_compute_section() {
    let profile = PowerProfile::cloud_tpu();
    let run = TrainingRun::new(96.0, 12_000_000, profile.watts);

    let report = EfficiencyReport::from_run(&run).unwrap();

    assert!((report.energy.total_energy_joules - 24_000.0).abs() < 1e-9);
    assert!(report.compute.is_none());
    assert!(estimate_compute_efficiency(&run).is_err());
}

#[test]
fn test_energy_per_sample_reconstructs_total() {
    let run = TrainingRun::new(96.0, 12_000_000, 250.0);
    let report = EfficiencyReport::from_run(&run).unwrap();

    let reconstructed = report.energy.energy_per_sample_joules * run.samples_processed as f64;
    assert!((reconstructed - report.energy.total_energy_joules).abs() < 1e-6);
}

// =============================================================================
// MDR-004: Operation counting feeds compute efficiency
// =============================================================================

#[test]
fn test_model_derived_operations_flow_into_report() {
    let model = OpsModel::digit_classifier();
    let samples = 1_000_000u64;
    let run =
        TrainingRun::new(100.0, samples, 400.0).with_operations(model.total_operations(samples));

    let compute = estimate_compute_efficiency(&run).unwrap();

    let expected_rate = model.total_operations(samples) as f64 / 100.0;
    assert!((compute.ops_per_second - expected_rate).abs() < 1.0);
    assert!(compute.ops_per_joule > 0.0);
}

// =============================================================================
// Reporting: serialization round-trips and rendering
// =============================================================================

#[test]
fn test_run_record_json_round_trip() {
    let run = TrainingRun::new(120.0, 12_000_000, 400.0);
    let report = EfficiencyReport::from_run(&run).unwrap();
    let record = RunRecord::new("Datacenter GPU", run, report);

    let json = serde_json::to_string(&record).unwrap();
    let restored: RunRecord = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, record);
    assert_eq!(restored.label, "Datacenter GPU");
}

#[test]
fn test_run_record_save_and_reload() {
    let run = TrainingRun::new(96.0, 12_000_000, 250.0);
    let report = EfficiencyReport::from_run(&run).unwrap();
    let record = RunRecord::new("Cloud TPU", run, report);

    let dir = tempfile::tempdir().unwrap();
    let path = record.save_json(dir.path()).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let loaded: RunRecord = serde_json::from_str(&contents).unwrap();
    assert_eq!(loaded, record);
}

#[test]
fn test_table_rendering_covers_report_fields() {
    let run = TrainingRun::new(120.0, 12_000_000, 400.0).with_operations(1_000_000_000_000);
    let report = EfficiencyReport::from_run(&run).unwrap();
    let table = report.to_table("Datacenter GPU");

    assert!(table.contains("Datacenter GPU"));
    assert!(table.contains("Throughput"));
    assert!(table.contains("kWh"));
    assert!(table.contains("Compute efficiency"));
}

#[test]
fn test_reports_are_deterministic() {
    let run = TrainingRun::new(120.0, 12_000_000, 400.0).with_operations(1_000_000_000_000);

    let first = EfficiencyReport::from_run(&run).unwrap();
    let second = EfficiencyReport::from_run(&run).unwrap();
    assert_eq!(first, second);
}
