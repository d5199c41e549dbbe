// file: src/config/mod.rs
// version: 1.0.0
// guid: 538e5015-0c39-4388-b9c6-998c34fca705

//! Configuration module for CrackTime Analyzer
//!
//! Handles loading and validation of the optional YAML configuration file:
//! extra attacker presets, the default preset, report defaults and the
//! estimator to use.

pub mod loader;

pub use loader::ConfigLoader;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use validator::Validate;

use crate::analysis::{Analyzer, EstimatorKind};
use crate::audit::Auditor;
use crate::crack_time::{AttackerPreset, PresetCatalog, DEFAULT_PRESET};
use crate::error::{AnalyzerError, Result};
use crate::report::ReportFormat;

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Preset used when `--preset` is not given
    #[validate(length(min = 1))]
    pub default_preset: String,

    /// Extra presets; a built-in name replaces the built-in speed
    pub presets: Vec<AttackerPreset>,

    /// Directory that relative report prefixes are placed under
    pub output_dir: Option<PathBuf>,

    /// Formats written when a prefix is given
    pub report_format: ReportFormat,

    /// Extra dictionary words (names, site, e-mail) passed to zxcvbn
    #[validate(length(max = 256))]
    pub user_inputs: Vec<String>,

    /// Estimator backend
    pub estimator: EstimatorKind,

    /// Terminal GUI defaults
    #[validate(nested)]
    pub gui: GuiConfig,
}

/// Terminal GUI defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GuiConfig {
    /// Report prefix pre-filled in the export field
    #[validate(length(min = 1))]
    pub output_prefix: String,

    /// Show the password in clear text by default
    pub reveal_password: bool,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            output_prefix: "gui_report".to_string(),
            reveal_password: false,
        }
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            default_preset: DEFAULT_PRESET.to_string(),
            presets: Vec::new(),
            output_dir: None,
            report_format: ReportFormat::default(),
            user_inputs: Vec::new(),
            estimator: EstimatorKind::default(),
            gui: GuiConfig::default(),
        }
    }
}

impl AnalyzerConfig {
    /// Validate the configuration, including every preset and the default name
    pub fn check(&self) -> Result<()> {
        self.validate()
            .map_err(|e| AnalyzerError::config(e.to_string()))?;
        self.catalog().map(|_| ())
    }

    /// Built-in presets merged with the configured ones
    pub fn catalog(&self) -> Result<PresetCatalog> {
        let mut catalog = PresetCatalog::builtin();
        for preset in &self.presets {
            catalog.upsert(preset.clone())?;
        }

        catalog.set_default(&self.default_preset).map_err(|_| {
            AnalyzerError::config(format!(
                "default_preset '{}' is not a known preset (known: {})",
                self.default_preset,
                catalog.names().join(", ")
            ))
        })?;

        Ok(catalog)
    }

    /// Analyzer configured with the selected estimator and user inputs
    pub fn analyzer(&self) -> Analyzer {
        Analyzer::new(self.estimator).with_user_inputs(self.user_inputs.clone())
    }

    /// Auditor for this configuration
    pub fn auditor(&self) -> Result<Auditor> {
        Ok(Auditor::new(self.analyzer(), self.catalog()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AnalyzerConfig::default();
        assert!(config.check().is_ok());
        assert_eq!(config.catalog().unwrap().default_preset().name, "mid_gpu");
    }

    #[test]
    fn test_custom_presets_merge() {
        let mut config = AnalyzerConfig::default();
        config.presets.push(AttackerPreset::new("botnet", 1e12, "rented botnet"));
        config.default_preset = "botnet".to_string();

        let catalog = config.catalog().unwrap();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.default_preset().guesses_per_second, 1e12);
    }

    #[test]
    fn test_unknown_default_preset() {
        let config = AnalyzerConfig {
            default_preset: "abacus".to_string(),
            ..Default::default()
        };
        let err = config.check().unwrap_err();
        assert!(err.to_string().contains("abacus"));
    }

    #[test]
    fn test_invalid_preset_speed() {
        let mut config = AnalyzerConfig::default();
        config.presets.push(AttackerPreset::new("broken", 0.0, ""));
        assert!(config.check().is_err());
    }

    #[test]
    fn test_empty_gui_prefix_rejected() {
        let mut config = AnalyzerConfig::default();
        config.gui.output_prefix.clear();
        assert!(config.check().is_err());
    }
}
