// file: src/report/csv_report.rs
// version: 1.0.0
// guid: 6b3b1c2c-f1a9-4583-b6fe-8cc51c1d7111

//! Flat CSV report, one row per password
//!
//! After the fixed columns there is one `crack_time_<preset>_seconds` column
//! per preset, taken from the first result. An empty result set writes the
//! fixed header only.

use std::path::Path;

use super::write_file;
use crate::audit::Assessment;
use crate::error::{AnalyzerError, Result};

pub const CSV_BASE_COLUMNS: [&str; 14] = [
    "password_id",
    "password_masked",
    "length",
    "entropy_bits",
    "guesses",
    "score",
    "strength",
    "preset",
    "guesses_per_second",
    "crack_time_seconds",
    "crack_time_human",
    "warning",
    "suggestions",
    "notes",
];

const LIST_SEPARATOR: &str = " | ";

fn preset_column(preset: &str) -> String {
    format!("crack_time_{}_seconds", preset)
}

/// Render `results` as CSV text
pub fn render_csv(results: &[Assessment]) -> Result<String> {
    let presets: Vec<&str> = results
        .first()
        .map(|r| r.crack_times.iter().map(|c| c.preset.as_str()).collect())
        .unwrap_or_default();

    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header: Vec<String> = CSV_BASE_COLUMNS.iter().map(|c| c.to_string()).collect();
    header.extend(presets.iter().map(|p| preset_column(p)));
    writer.write_record(&header)?;

    for (i, r) in results.iter().enumerate() {
        let a = &r.analysis;
        let mut row = vec![
            format!("p{}", i + 1),
            a.password_masked.clone(),
            a.length.to_string(),
            a.entropy_bits.to_string(),
            a.guesses.to_string(),
            a.score.to_string(),
            a.strength.clone(),
            r.assumptions.preset.clone(),
            r.assumptions.guesses_per_second.to_string(),
            r.crack_time_seconds.to_string(),
            r.crack_time_human.clone(),
            a.feedback.warning.clone().unwrap_or_default(),
            a.feedback.suggestions.join(LIST_SEPARATOR),
            a.notes.join(LIST_SEPARATOR),
        ];

        for preset in &presets {
            let seconds = r
                .crack_time_for(preset)
                .map(|c| c.seconds.to_string())
                .unwrap_or_default();
            row.push(seconds);
        }

        writer.write_record(&row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AnalyzerError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| AnalyzerError::validation(format!("CSV is not UTF-8: {}", e)))
}

pub async fn save_csv_report(results: &[Assessment], path: &Path) -> Result<()> {
    let body = render_csv(results)?;
    write_file(path, body.as_bytes()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::{Auditor, SpeedSelection};
    use tempfile::TempDir;

    fn parse(body: &str) -> (csv::StringRecord, Vec<csv::StringRecord>) {
        let mut reader = csv::Reader::from_reader(body.as_bytes());
        let header = reader.headers().unwrap().clone();
        let rows = reader.records().map(|r| r.unwrap()).collect();
        (header, rows)
    }

    #[test]
    fn test_empty_results_write_header_only() {
        let body = render_csv(&[]).unwrap();
        let (header, rows) = parse(&body);
        assert_eq!(header.len(), CSV_BASE_COLUMNS.len());
        assert!(rows.is_empty());
    }

    #[test]
    fn test_csv_matches_displayed_values() {
        let auditor = Auditor::default();
        let results = auditor
            .assess_all(&["letmein", "x7#Kq!v2Lp"], &SpeedSelection::Preset("fast_gpu".into()))
            .unwrap();

        let (header, rows) = parse(&render_csv(&results).unwrap());
        assert_eq!(header.len(), CSV_BASE_COLUMNS.len() + 3);
        assert_eq!(&header[14], "crack_time_conservative_cpu_seconds");
        assert_eq!(rows.len(), 2);

        for (row, shown) in rows.iter().zip(&results) {
            assert_eq!(row[5].parse::<u8>().unwrap(), shown.analysis.score.value());
            assert_eq!(&row[7], "fast_gpu");
            assert_eq!(row[9].parse::<f64>().unwrap(), shown.crack_time_seconds);
            assert_eq!(&row[10], shown.crack_time_human.as_str());
        }
        assert_eq!(&rows[0][0], "p1");
        assert_eq!(&rows[1][0], "p2");
    }

    #[test]
    fn test_lists_joined_with_pipe() {
        let auditor = Auditor::default();
        let results = auditor
            .assess_all(&["password"], &SpeedSelection::Preset("mid_gpu".into()))
            .unwrap();
        let suggestions = &results[0].analysis.feedback.suggestions;

        let (_, rows) = parse(&render_csv(&results).unwrap());
        assert_eq!(&rows[0][12], suggestions.join(" | ").as_str());
    }

    #[tokio::test]
    async fn test_save_csv_report() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("r.csv");
        save_csv_report(&[], &path).await.unwrap();
        let body = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(body.starts_with("password_id,password_masked"));
    }
}
