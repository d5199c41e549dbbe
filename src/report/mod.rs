// file: src/report/mod.rs
// version: 1.0.0
// guid: 2f0a0fb5-4828-4142-b119-e58f7efca0b8

//! JSON and CSV report export
//!
//! Reports carry only the masked password. The JSON report is the full
//! [`Assessment`] list under a `meta` header; the CSV report is one flat row
//! per password.

pub mod csv_report;
pub mod json_report;

pub use csv_report::{save_csv_report, CSV_BASE_COLUMNS};
pub use json_report::{load_json_report, save_json_report, JsonReport};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::audit::Assessment;
use crate::error::{AnalyzerError, Result};

pub const TOOL_NAME: &str = "CrackTime Analyzer";

/// Header written at the top of every JSON report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMeta {
    pub tool: String,
    pub version: String,
    pub generated_at: DateTime<Utc>,
}

impl ReportMeta {
    pub fn now() -> Self {
        Self::at(Utc::now())
    }

    pub fn at(generated_at: DateTime<Utc>) -> Self {
        Self {
            tool: TOOL_NAME.to_string(),
            version: crate::VERSION.to_string(),
            generated_at,
        }
    }
}

/// Which report files to write
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    Json,
    Csv,
    #[default]
    Both,
}

impl ReportFormat {
    pub fn includes_json(&self) -> bool {
        matches!(self, ReportFormat::Json | ReportFormat::Both)
    }

    pub fn includes_csv(&self) -> bool {
        matches!(self, ReportFormat::Csv | ReportFormat::Both)
    }
}

/// Target files for one export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub json: PathBuf,
    pub csv: PathBuf,
}

impl ReportPaths {
    /// `{prefix}_{YYYYmmdd_HHMMSS}.json` / `.csv`
    pub fn for_prefix(prefix: &str, now: DateTime<Utc>) -> Self {
        let stamp = now.format("%Y%m%d_%H%M%S");
        Self {
            json: PathBuf::from(format!("{}_{}.json", prefix, stamp)),
            csv: PathBuf::from(format!("{}_{}.csv", prefix, stamp)),
        }
    }

    /// Resolve `~` in the prefix and place relative prefixes under `output_dir`
    pub fn resolve_prefix(prefix: &str, output_dir: Option<&Path>) -> Result<String> {
        if prefix.trim().is_empty() {
            return Err(AnalyzerError::invalid_argument("output prefix must not be empty"));
        }

        let expanded = shellexpand::tilde(prefix).into_owned();
        let resolved = match output_dir {
            Some(dir) if Path::new(&expanded).is_relative() => {
                dir.join(&expanded).to_string_lossy().into_owned()
            }
            _ => expanded,
        };
        Ok(resolved)
    }
}

/// Files actually written by [`write_reports`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WrittenReports {
    pub json: Option<PathBuf>,
    pub csv: Option<PathBuf>,
}

impl WrittenReports {
    pub fn paths(&self) -> Vec<&Path> {
        self.json.iter().chain(self.csv.iter()).map(PathBuf::as_path).collect()
    }
}

/// Write the requested report formats
pub async fn write_reports(
    meta: &ReportMeta,
    results: &[Assessment],
    paths: &ReportPaths,
    format: ReportFormat,
) -> Result<WrittenReports> {
    let mut written = WrittenReports::default();

    if format.includes_json() {
        save_json_report(meta, results, &paths.json).await?;
        written.json = Some(paths.json.clone());
    }

    if format.includes_csv() {
        save_csv_report(results, &paths.csv).await?;
        written.csv = Some(paths.csv.clone());
    }

    info!(
        "Reports written: {}",
        written
            .paths()
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );
    Ok(written)
}

/// Write `contents` to `path`, creating parent directories
pub(crate) async fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| AnalyzerError::report(path, e))?;
    }

    tokio::fs::write(path, contents)
        .await
        .map_err(|e| AnalyzerError::report(path, e))
}
