// file: src/audit/mod.rs
// version: 1.0.0
// guid: 59f5810b-b377-48f4-a601-401339da073e

//! Password audit: analysis plus crack-time estimates for every preset
//!
//! An [`Assessment`] is the record shown on screen and written to reports,
//! so the CLI, the GUI and the exporters all read the same numbers.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::analysis::{Analyzer, PasswordAnalysis};
use crate::crack_time::{
    estimate_crack_time, CrackTimeEstimate, CrackTimeVerdict, PresetCatalog, CUSTOM_PRESET,
};
use crate::error::{AnalyzerError, Result};

/// Which attacker speed drives the headline crack time
#[derive(Debug, Clone, PartialEq)]
pub enum SpeedSelection {
    /// Named preset from the catalog
    Preset(String),
    /// Explicit guesses per second
    Custom(f64),
}

impl SpeedSelection {
    /// Custom speed wins when it is positive, otherwise the named preset
    pub fn from_args(preset: impl Into<String>, custom_speed: Option<f64>) -> Self {
        match custom_speed {
            Some(speed) if speed > 0.0 => SpeedSelection::Custom(speed),
            _ => SpeedSelection::Preset(preset.into()),
        }
    }
}

/// Speed assumption behind the headline crack time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assumptions {
    pub preset: String,
    pub guesses_per_second: f64,
}

/// Crack time under one catalog preset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetCrackTime {
    pub preset: String,
    pub guesses_per_second: f64,
    pub seconds: f64,
    pub human_readable: String,
}

/// Full audit result for one password
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    #[serde(flatten)]
    pub analysis: PasswordAnalysis,
    pub crack_time_seconds: f64,
    pub crack_time_human: String,
    pub verdict: CrackTimeVerdict,
    pub assumptions: Assumptions,
    pub crack_times: Vec<PresetCrackTime>,
}

impl Assessment {
    /// Crack time for a named preset, if it was part of the catalog
    pub fn crack_time_for(&self, preset: &str) -> Option<&PresetCrackTime> {
        self.crack_times.iter().find(|c| c.preset == preset)
    }
}

/// Combines an [`Analyzer`] with a [`PresetCatalog`]
pub struct Auditor {
    analyzer: Analyzer,
    catalog: PresetCatalog,
}

impl Auditor {
    pub fn new(analyzer: Analyzer, catalog: PresetCatalog) -> Self {
        Self { analyzer, catalog }
    }

    pub fn catalog(&self) -> &PresetCatalog {
        &self.catalog
    }

    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    /// Resolve a speed selection to `(preset name, guesses per second)`
    pub fn resolve_speed(&self, selection: &SpeedSelection) -> Result<(String, f64)> {
        match selection {
            SpeedSelection::Custom(speed) => {
                if !speed.is_finite() || *speed <= 0.0 {
                    return Err(AnalyzerError::invalid_argument(format!(
                        "custom speed must be a positive number, got {}",
                        speed
                    )));
                }
                Ok((CUSTOM_PRESET.to_string(), *speed))
            }
            SpeedSelection::Preset(name) => {
                let preset = self.catalog.get(name)?;
                Ok((preset.name.clone(), preset.guesses_per_second))
            }
        }
    }

    /// Analyze one password and estimate crack times
    pub fn assess(&self, password: &str, selection: &SpeedSelection) -> Result<Assessment> {
        let (preset, speed) = self.resolve_speed(selection)?;
        let analysis = self.analyzer.analyze(password)?;
        let guesses = analysis.guesses as f64;

        let CrackTimeEstimate {
            seconds,
            human_readable,
            guesses_per_second,
        } = estimate_crack_time(guesses, speed)?;

        let crack_times = self
            .catalog
            .iter()
            .map(|p| {
                estimate_crack_time(guesses, p.guesses_per_second).map(|est| PresetCrackTime {
                    preset: p.name.clone(),
                    guesses_per_second: est.guesses_per_second,
                    seconds: est.seconds,
                    human_readable: est.human_readable,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "Assessed {}: {} at {} guesses/sec",
            analysis.password_masked, human_readable, guesses_per_second
        );

        Ok(Assessment {
            analysis,
            crack_time_seconds: seconds,
            crack_time_human: human_readable,
            verdict: CrackTimeVerdict::from_seconds(seconds),
            assumptions: Assumptions {
                preset,
                guesses_per_second,
            },
            crack_times,
        })
    }

    /// Assess every password; stops at the first invalid one
    pub fn assess_all<S: AsRef<str>>(
        &self,
        passwords: &[S],
        selection: &SpeedSelection,
    ) -> Result<Vec<Assessment>> {
        let results = passwords
            .iter()
            .enumerate()
            .map(|(i, pw)| {
                self.assess(pw.as_ref(), selection).map_err(|e| match e {
                    AnalyzerError::Validation(msg) => {
                        AnalyzerError::validation(format!("password #{}: {}", i + 1, msg))
                    }
                    other => other,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        info!("Assessed {} password(s)", results.len());
        Ok(results)
    }
}

impl Default for Auditor {
    fn default() -> Self {
        Self::new(Analyzer::default(), PresetCatalog::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::EstimatorKind;

    fn shannon_auditor() -> Auditor {
        Auditor::new(Analyzer::new(EstimatorKind::Shannon), PresetCatalog::builtin())
    }

    #[test]
    fn test_speed_selection_from_args() {
        assert_eq!(
            SpeedSelection::from_args("mid_gpu", None),
            SpeedSelection::Preset("mid_gpu".to_string())
        );
        assert_eq!(
            SpeedSelection::from_args("mid_gpu", Some(0.0)),
            SpeedSelection::Preset("mid_gpu".to_string())
        );
        assert_eq!(
            SpeedSelection::from_args("mid_gpu", Some(42.0)),
            SpeedSelection::Custom(42.0)
        );
    }

    #[test]
    fn test_assess_with_preset() {
        let auditor = shannon_auditor();
        // 4 distinct chars -> 8 bits -> 256 guesses
        let result = auditor
            .assess("abcd", &SpeedSelection::Preset("conservative_cpu".into()))
            .unwrap();

        assert_eq!(result.analysis.guesses, 256);
        assert!((result.crack_time_seconds - 0.256).abs() < 1e-12);
        assert_eq!(result.crack_time_human, "0.256 seconds");
        assert_eq!(result.assumptions.preset, "conservative_cpu");
        assert_eq!(result.verdict, CrackTimeVerdict::UnderAMinute);
        assert_eq!(result.crack_times.len(), 3);
    }

    #[test]
    fn test_assess_with_custom_speed() {
        let auditor = shannon_auditor();
        let result = auditor.assess("abcd", &SpeedSelection::Custom(1.0)).unwrap();
        assert_eq!(result.assumptions.preset, CUSTOM_PRESET);
        assert_eq!(result.crack_time_seconds, 256.0);
        assert_eq!(result.crack_time_human, "4.27 minutes");
        // per-preset estimates still cover the catalog
        assert!(result.crack_time_for("fast_gpu").is_some());
    }

    #[test]
    fn test_selected_preset_matches_catalog_entry() {
        let auditor = Auditor::default();
        let result = auditor
            .assess("Tr0ub4dor&3", &SpeedSelection::Preset("fast_gpu".into()))
            .unwrap();
        let entry = result.crack_time_for("fast_gpu").unwrap();
        assert_eq!(entry.seconds, result.crack_time_seconds);
        assert_eq!(entry.human_readable, result.crack_time_human);
    }

    #[test]
    fn test_assess_errors() {
        let auditor = shannon_auditor();
        assert!(matches!(
            auditor.assess("abc", &SpeedSelection::Preset("nope".into())),
            Err(AnalyzerError::UnknownPreset(_))
        ));
        assert!(matches!(
            auditor.assess("abc", &SpeedSelection::Custom(-3.0)),
            Err(AnalyzerError::InvalidArgument(_))
        ));
        assert!(matches!(
            auditor.assess("", &SpeedSelection::Preset("mid_gpu".into())),
            Err(AnalyzerError::Validation(_))
        ));
    }

    #[test]
    fn test_assess_all_reports_index_of_empty_password() {
        let auditor = shannon_auditor();
        let err = auditor
            .assess_all(&["fine", ""], &SpeedSelection::Preset("mid_gpu".into()))
            .unwrap_err();
        assert!(err.to_string().contains("password #2"));
    }

    #[test]
    fn test_assessment_json_round_trip() {
        let auditor = Auditor::default();
        let result = auditor
            .assess("P@ssw0rd!", &SpeedSelection::Preset("mid_gpu".into()))
            .unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let back: Assessment = serde_json::from_str(&json).unwrap();
        assert_eq!(back.analysis.score, result.analysis.score);
        assert_eq!(back.crack_time_human, result.crack_time_human);
        let rel = (back.crack_time_seconds - result.crack_time_seconds).abs()
            / result.crack_time_seconds.max(f64::MIN_POSITIVE);
        assert!(rel < 1e-12);
        assert_eq!(back.crack_times.len(), result.crack_times.len());
    }
}
