// file: src/cli/commands.rs
// version: 1.0.0
// guid: e70ae2f3-dc8b-4d89-8535-8a287f239b96

//! Command implementations for the CLI

use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use super::args::AnalyzeArgs;
use super::output::{render_assessment, render_presets};
use crate::audit::{Assessment, Auditor, SpeedSelection};
use crate::config::AnalyzerConfig;
use crate::crack_time::AttackerPreset;
use crate::error::{AnalyzerError, Result};
use crate::logging::with_operation_span;
use crate::report::{write_reports, ReportMeta, ReportPaths, WrittenReports};

/// Analyze passwords, print results and optionally write reports
pub async fn analyze_command(config: &AnalyzerConfig, args: AnalyzeArgs) -> Result<()> {
    let mut passwords = args.passwords;
    if args.stdin {
        passwords.extend(read_stdin_passwords().await?);
    }

    if passwords.is_empty() {
        return Err(AnalyzerError::validation("no passwords to analyze"));
    }

    let auditor = build_auditor(config, &args.user_inputs, args.estimator)?;
    let preset = args
        .preset
        .unwrap_or_else(|| auditor.catalog().default_preset().name.clone());
    // a custom speed replaces the preset but never excuses a bad name
    auditor.catalog().get(&preset)?;
    let selection = SpeedSelection::from_args(preset, args.custom_speed);

    if let Some(speed) = args.custom_speed.filter(|s| *s <= 0.0) {
        debug!("Ignoring non-positive custom speed {}", speed);
    }

    let results = with_operation_span("analyze", || auditor.assess_all(&passwords, &selection))?;
    let meta = ReportMeta::now();

    if args.json {
        println!("{}", crate::report::json_report::render_json(&meta, &results)?);
    } else {
        for (i, r) in results.iter().enumerate() {
            println!("{}", render_assessment(i + 1, r));
        }
    }

    if let Some(prefix) = args.output_prefix {
        let format = args.format.unwrap_or(config.report_format);
        let written = export_reports(config, &prefix, &meta, &results, format).await?;
        let saved: Vec<String> = written
            .paths()
            .iter()
            .map(|p| p.display().to_string())
            .collect();

        if args.json {
            info!("Reports saved: {}", saved.join(", "));
        } else {
            println!("Reports saved: {}", saved.join(", "));
        }
    }

    Ok(())
}

/// Auditor from config plus command line overrides
pub fn build_auditor(
    config: &AnalyzerConfig,
    extra_user_inputs: &[String],
    estimator: Option<crate::analysis::EstimatorKind>,
) -> Result<Auditor> {
    let mut config = config.clone();
    config.user_inputs.extend(extra_user_inputs.iter().cloned());
    if let Some(kind) = estimator {
        config.estimator = kind;
    }

    let auditor = config.auditor()?;
    debug!(
        "Using estimator {} with {} preset(s)",
        auditor.analyzer().estimator_name(),
        auditor.catalog().len()
    );
    Ok(auditor)
}

/// Write reports for `results` under the resolved `prefix`
pub async fn export_reports(
    config: &AnalyzerConfig,
    prefix: &str,
    meta: &ReportMeta,
    results: &[Assessment],
    format: crate::report::ReportFormat,
) -> Result<WrittenReports> {
    let prefix = ReportPaths::resolve_prefix(prefix, config.output_dir.as_deref())?;
    let paths = ReportPaths::for_prefix(&prefix, meta.generated_at);
    write_reports(meta, results, &paths, format).await
}

/// Non-empty lines from stdin, trailing `\r` removed
async fn read_stdin_passwords() -> Result<Vec<String>> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut passwords = Vec::new();
    let mut skipped = 0usize;

    while let Some(line) = lines.next_line().await? {
        let line = line.strip_suffix('\r').unwrap_or(&line).to_string();
        if line.is_empty() {
            skipped += 1;
            continue;
        }
        passwords.push(line);
    }

    debug!(
        "Read {} password(s) from stdin, skipped {} blank line(s)",
        passwords.len(),
        skipped
    );
    Ok(passwords)
}

#[derive(Serialize)]
struct PresetListing<'a> {
    default: &'a str,
    presets: Vec<&'a AttackerPreset>,
}

/// List the attacker presets
pub async fn presets_command(config: &AnalyzerConfig, json: bool) -> Result<()> {
    let catalog = config.catalog()?;

    if json {
        let listing = PresetListing {
            default: &catalog.default_preset().name,
            presets: catalog.iter().collect(),
        };
        println!("{}", serde_json::to_string_pretty(&listing)?);
    } else {
        print!("{}", render_presets(&catalog));
    }

    Ok(())
}

/// Run the terminal GUI on a blocking thread
pub async fn gui_command(config: AnalyzerConfig, output_prefix: Option<String>) -> Result<()> {
    let mut config = config;
    if let Some(prefix) = output_prefix {
        config.gui.output_prefix = prefix;
    }

    tokio::task::spawn_blocking(move || crate::gui::run_gui(config))
        .await
        .map_err(|e| AnalyzerError::tui(format!("GUI task failed: {}", e)))?
}
