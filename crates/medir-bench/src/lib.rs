//! Accelerator benchmarking CLI for medir.
//!
//! This crate provides the command-line surface over the estimator:
//! - Per-class efficiency reports (GPU, TPU, custom hardware)
//! - Side-by-side comparison of runs across accelerators
//! - Table and JSON output
//!
//! # Toyota Way Principles
//!
//! - **Genchi Genbutsu**: Report what was measured, not what was promised
//! - **Visual Control**: Clear tabular presentation of efficiency figures
//! - **Muda Elimination**: Surface the energy wasted per sample

pub mod compare;

pub use compare::{compare, sample_runs, NamedRun, RunComparison, RunResult};
