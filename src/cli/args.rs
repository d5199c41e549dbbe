// file: src/cli/args.rs
// version: 1.0.0
// guid: 84e27155-3c91-4672-80cf-e0efc6001d0e

//! Command line argument definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::analysis::EstimatorKind;
use crate::report::ReportFormat;

#[derive(Parser, Debug)]
#[command(name = "cracktime")]
#[command(about = "Password strength audit with crack-time estimates and JSON/CSV reports")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[arg(short, long, global = true, help = "Path to a YAML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Emit logs as JSON on stderr")]
    pub log_json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze one or more passwords
    Analyze(AnalyzeArgs),

    /// List attacker speed presets
    Presets {
        #[arg(long)]
        json: bool,
    },

    /// Open the interactive terminal GUI
    Gui {
        #[arg(short, long, help = "Report prefix used by the export action")]
        output_prefix: Option<String>,
    },
}

#[derive(Args, Debug, Default)]
pub struct AnalyzeArgs {
    /// Password(s) to analyze (quote if special chars present)
    #[arg(required_unless_present = "stdin")]
    pub passwords: Vec<String>,

    #[arg(short, long, help = "Attacker speed preset for the crack-time estimate")]
    pub preset: Option<String>,

    #[arg(long, help = "Custom guesses/sec (overrides preset)")]
    pub custom_speed: Option<f64>,

    #[arg(
        short,
        long,
        help = "Prefix for JSON/CSV output files. If not provided, no files are written"
    )]
    pub output_prefix: Option<String>,

    #[arg(short, long, value_enum, help = "Report formats to write")]
    pub format: Option<ReportFormat>,

    #[arg(long, help = "Print machine-readable results to stdout")]
    pub json: bool,

    #[arg(long, help = "Read additional passwords from stdin, one per line")]
    pub stdin: bool,

    #[arg(
        short = 'u',
        long = "user-input",
        help = "Word the estimator should treat as known to the attacker (repeatable)"
    )]
    pub user_inputs: Vec<String>,

    #[arg(long, value_enum, help = "Override the configured estimator")]
    pub estimator: Option<EstimatorKind>,
}
