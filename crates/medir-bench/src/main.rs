//! medir-bench CLI entry point.

use clap::{Parser, Subcommand};
use medir::{EfficiencyReport, OpsModel, PowerProfile, RunRecord, TrainingRun};
use medir_bench::{compare, sample_runs, NamedRun};
use medir_common::cli::{styles, CommonArgs};
use medir_common::{MedirError, OutputFormat};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "medir-bench")]
#[command(about = "Accelerator training-efficiency benchmarking tool")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Report efficiency for a GPU-class training run
    Gpu {
        /// Wall-clock training duration in seconds
        #[arg(long)]
        elapsed: f64,

        /// Total samples processed across all epochs
        #[arg(long)]
        samples: u64,

        /// Assumed board power draw in Watts
        #[arg(long, default_value_t = 400.0)]
        watts: f64,

        /// Total arithmetic operations performed
        #[arg(long, conflicts_with = "model_ops")]
        ops: Option<u64>,

        /// Derive the operation count from the digit-classifier stack
        #[arg(long)]
        model_ops: bool,

        /// Directory to write the JSON run record into
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Report efficiency for a TPU-class training run
    Tpu {
        /// Wall-clock training duration in seconds
        #[arg(long)]
        elapsed: f64,

        /// Total samples processed across all epochs
        #[arg(long)]
        samples: u64,

        /// Assumed board power draw in Watts
        #[arg(long, default_value_t = 250.0)]
        watts: f64,

        /// Directory to write the JSON run record into
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Report efficiency for custom hardware
    Custom {
        /// Accelerator name for the report label
        #[arg(long)]
        name: String,

        /// Assumed board power draw in Watts
        #[arg(long)]
        watts: f64,

        /// Wall-clock training duration in seconds
        #[arg(long)]
        elapsed: f64,

        /// Total samples processed across all epochs
        #[arg(long)]
        samples: u64,

        /// Total arithmetic operations performed
        #[arg(long)]
        ops: Option<u64>,

        /// Directory to write the JSON run record into
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Compare labelled runs across accelerators
    Compare {
        /// Path to a JSON file with labelled runs
        #[arg(long)]
        results: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    let config = cli.common.to_cli();

    let result = match cli.command {
        Commands::Gpu { elapsed, samples, watts, ops, model_ops, out } => {
            let ops = if model_ops {
                Some(OpsModel::digit_classifier().total_operations(samples))
            } else {
                ops
            };
            let profile = PowerProfile::custom(PowerProfile::datacenter_gpu().name, watts);
            report_command(&profile, elapsed, samples, ops, out.as_deref(), &config)
        }
        Commands::Tpu { elapsed, samples, watts, out } => {
            let profile = PowerProfile::custom(PowerProfile::cloud_tpu().name, watts);
            report_command(&profile, elapsed, samples, None, out.as_deref(), &config)
        }
        Commands::Custom { name, watts, elapsed, samples, ops, out } => {
            let profile = PowerProfile::custom(name, watts);
            report_command(&profile, elapsed, samples, ops, out.as_deref(), &config)
        }
        Commands::Compare { results } => compare_command(results.as_deref(), &config),
    };

    if let Err(e) = result {
        if !config.is_quiet() {
            eprintln!("{}", styles::error(&e.to_string()));
        }
        std::process::exit(1);
    }
}

fn report_command(
    profile: &PowerProfile,
    elapsed: f64,
    samples: u64,
    ops: Option<u64>,
    out: Option<&Path>,
    cli: &medir_common::Cli,
) -> medir_common::Result<()> {
    let mut run = TrainingRun::new(elapsed, samples, profile.watts);
    if let Some(ops) = ops {
        run = run.with_operations(ops);
    }
    let report = EfficiencyReport::from_run(&run)?;
    let record = RunRecord::new(&profile.name, run, report);

    if cli.format == OutputFormat::Json {
        let json = serde_json::to_string_pretty(&record)
            .map_err(|e| MedirError::Serialization { message: e.to_string() })?;
        println!("{json}");
    } else {
        if !cli.is_quiet() {
            println!("{}", styles::header(&profile.to_string()));
        }
        println!("{}", record.report.to_table(&record.label));

        if cli.is_verbose() {
            println!("Energy: {:.2} Wh", record.report.energy.wh());
        }
    }

    if let Some(dir) = out {
        let path = record.save_json(dir)?;
        if !cli.is_quiet() {
            println!("{}", styles::success(&format!("Run record written to {path}")));
        }
    }

    Ok(())
}

fn compare_command(results: Option<&Path>, cli: &medir_common::Cli) -> medir_common::Result<()> {
    let runs = match results {
        Some(path) => load_runs(path)?,
        None => {
            if !cli.is_quiet() {
                println!(
                    "{}",
                    styles::warning("No results file given; showing built-in sample runs")
                );
            }
            sample_runs()
        }
    };

    let comparison = compare(&runs)?;

    if cli.format == OutputFormat::Json {
        let json = serde_json::json!({
            "results": comparison.results,
            "best_by_throughput": comparison.best_by_throughput,
            "best_by_energy": comparison.best_by_energy,
        });
        if let Ok(json_str) = serde_json::to_string_pretty(&json) {
            println!("{json_str}");
        }
    } else {
        if !cli.is_quiet() {
            println!("{}", styles::header("Accelerator Comparison"));
        }
        println!("{}", comparison.to_table());

        if let Some(best) = &comparison.best_by_energy {
            println!(
                "{}",
                styles::success(&format!("Recommendation: {best} for lowest energy per sample"))
            );
        }
    }

    Ok(())
}

fn load_runs(path: &Path) -> medir_common::Result<Vec<NamedRun>> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| MedirError::io(format!("reading {}", path.display()), e))?;
    serde_json::from_str(&contents).map_err(|e| MedirError::ConfigValue {
        field: "results".into(),
        message: format!("{e}"),
        suggestion: "Expect a JSON array of {label, run} objects".into(),
    })
}
