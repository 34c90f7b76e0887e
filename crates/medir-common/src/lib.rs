//! Shared infrastructure for medir CLI tools.
//!
//! This crate provides common utilities used across all medir sub-crates:
//! - CLI argument handling and output formatting
//! - Error handling with actionable diagnostics
//! - Consistent terminal styling
//!
//! # Toyota Way Principles
//!
//! - **Jidoka**: Rich error messages with actionable diagnostics
//! - **Andon**: Visual problem indication through consistent styling
//! - **Muda Elimination**: Single source of truth for shared code

pub mod cli;
pub mod error;

pub use cli::{Cli, CommonArgs, OutputFormat};
pub use error::{MedirError, Result};
