// file: src/report/json_report.rs
// version: 1.0.0
// guid: d70320d0-fa9e-4f67-8ad8-4bd3c1516d5e

//! JSON report: `{ "meta": ..., "results": [...] }`

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{write_file, ReportMeta};
use crate::audit::Assessment;
use crate::error::Result;

/// On-disk shape of a JSON report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonReport {
    pub meta: ReportMeta,
    pub results: Vec<Assessment>,
}

#[derive(Serialize)]
struct JsonReportRef<'a> {
    meta: &'a ReportMeta,
    results: &'a [Assessment],
}

/// Pretty-printed JSON for `results`
pub fn render_json(meta: &ReportMeta, results: &[Assessment]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&JsonReportRef { meta, results })?)
}

pub async fn save_json_report(meta: &ReportMeta, results: &[Assessment], path: &Path) -> Result<()> {
    let body = render_json(meta, results)?;
    write_file(path, body.as_bytes()).await
}

/// Read a report written by [`save_json_report`]
pub async fn load_json_report(path: &Path) -> Result<JsonReport> {
    let content = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&content)?)
}
