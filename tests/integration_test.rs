// file: tests/integration_test.rs
// version: 1.0.0
// guid: 09628fdf-2644-49bd-b6db-9667e60bc054

//! Integration tests for CrackTime Analyzer

use cracktime_analyzer::{
    analysis::EstimatorKind,
    audit::SpeedSelection,
    config::ConfigLoader,
    report::{load_json_report, write_reports, ReportFormat, ReportMeta, ReportPaths},
    Result,
};
use tempfile::TempDir;

#[tokio::test]
async fn test_config_to_report_workflow() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();

    let config_content = r#"
default_preset: conservative_cpu
estimator: shannon
output_dir: ${TEST_REPORT_DIR}
presets:
  - name: conservative_cpu
    guesses_per_second: 100
"#;
    let config_path = temp_dir.path().join("config.yaml");
    tokio::fs::write(&config_path, config_content).await?;

    let mut loader = ConfigLoader::isolated();
    loader.set_env_var("TEST_REPORT_DIR", temp_dir.path().to_string_lossy());
    let config = loader.load(&config_path)?;

    assert_eq!(config.estimator, EstimatorKind::Shannon);
    assert_eq!(config.output_dir.as_deref(), Some(temp_dir.path()));

    let auditor = config.auditor()?;
    let default = auditor.catalog().default_preset().name.clone();
    let results = auditor.assess_all(&["abcd"], &SpeedSelection::Preset(default))?;

    // 256 guesses at 100/sec
    assert_eq!(results[0].crack_time_human, "2.56 seconds");

    let prefix = ReportPaths::resolve_prefix("run", config.output_dir.as_deref())?;
    let meta = ReportMeta::now();
    let paths = ReportPaths::for_prefix(&prefix, meta.generated_at);
    let written = write_reports(&meta, &results, &paths, ReportFormat::Both).await?;

    let json_path = written.json.expect("json report");
    assert!(json_path.starts_with(temp_dir.path()));
    let report = load_json_report(&json_path).await?;
    assert_eq!(report.results[0].analysis.password_masked, "a**d");
    assert_eq!(report.results[0].crack_time_human, "2.56 seconds");

    Ok(())
}

#[tokio::test]
async fn test_missing_environment_variable() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.yaml");
    tokio::fs::write(&config_path, "output_dir: ${MISSING_VARIABLE}\n")
        .await
        .unwrap();

    let result = ConfigLoader::isolated().load(&config_path);

    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Missing environment variables"));
}

#[test]
fn test_every_nonempty_input_scores_in_range() {
    let auditor = cracktime_analyzer::Auditor::default();
    let selection = SpeedSelection::Preset("mid_gpu".to_string());

    let inputs = [
        " ",
        "a",
        "🔐🔐🔐",
        "password1",
        "ThisIsALongerPassphraseWithNoDigits",
        "w8#Lk!92@Zq^vN3$",
        "1111111111111111",
    ];

    for pw in inputs {
        let result = auditor.assess(pw, &selection).unwrap();
        assert!(result.analysis.score.value() <= 4, "score out of range for {:?}", pw);
        assert!(result.analysis.guesses >= 1);
        assert!(result.crack_time_seconds >= 0.0);
    }
}

#[test]
fn test_empty_input_is_rejected() {
    let err = cracktime_analyzer::analyze_password("").unwrap_err();
    assert!(err.is_user_error());
}
