// file: src/crack_time/presets.rs
// version: 1.0.0
// guid: f332d96f-e370-42e4-9d14-bfb802228bfc

//! Attacker speed presets

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AnalyzerError, Result};

/// Preset name recorded when a custom speed overrides the selected preset
pub const CUSTOM_PRESET: &str = "custom";

/// Name of the preset used when nothing else is configured
pub const DEFAULT_PRESET: &str = "mid_gpu";

/// Named guesses-per-second assumption
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct AttackerPreset {
    /// Identifier used on the command line and in reports
    #[validate(length(min = 1, max = 64))]
    pub name: String,

    /// Guesses per second
    #[validate(range(exclusive_min = 0.0))]
    pub guesses_per_second: f64,

    /// Free-form description
    #[serde(default)]
    pub description: String,
}

impl AttackerPreset {
    pub fn new(name: impl Into<String>, guesses_per_second: f64, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            guesses_per_second,
            description: description.into(),
        }
    }

    /// Built-in presets: slow CPU, common GPU rig, large cluster
    pub fn builtin() -> Vec<AttackerPreset> {
        vec![
            Self::new("conservative_cpu", 1e3, "Slow CPU, 1k guesses/sec"),
            Self::new(DEFAULT_PRESET, 1e9, "Common GPU cluster, 1 billion guesses/sec"),
            Self::new("fast_gpu", 1e10, "Large cluster, 10 billion guesses/sec"),
        ]
    }

    /// Validate name and speed
    pub fn check(&self) -> Result<()> {
        self.validate()
            .map_err(|e| AnalyzerError::config(format!("invalid preset '{}': {}", self.name, e)))?;

        if !self.guesses_per_second.is_finite() {
            return Err(AnalyzerError::config(format!(
                "invalid preset '{}': guesses_per_second must be finite",
                self.name
            )));
        }

        if self.name == CUSTOM_PRESET {
            return Err(AnalyzerError::config(format!(
                "preset name '{}' is reserved for --custom-speed",
                CUSTOM_PRESET
            )));
        }

        Ok(())
    }
}

/// Ordered set of presets with a default
#[derive(Debug, Clone, PartialEq)]
pub struct PresetCatalog {
    presets: Vec<AttackerPreset>,
    default_name: String,
}

impl PresetCatalog {
    /// Catalog of the built-in presets
    pub fn builtin() -> Self {
        Self {
            presets: AttackerPreset::builtin(),
            default_name: DEFAULT_PRESET.to_string(),
        }
    }

    /// Add or replace a preset; replacing keeps the original position
    pub fn upsert(&mut self, preset: AttackerPreset) -> Result<()> {
        preset.check()?;

        match self.presets.iter_mut().find(|p| p.name == preset.name) {
            Some(existing) => *existing = preset,
            None => self.presets.push(preset),
        }
        Ok(())
    }

    /// Change the default preset
    pub fn set_default(&mut self, name: &str) -> Result<()> {
        self.get(name)?;
        self.default_name = name.to_string();
        Ok(())
    }

    /// Look up a preset by name
    pub fn get(&self, name: &str) -> Result<&AttackerPreset> {
        self.presets
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| AnalyzerError::UnknownPreset(format!("{} (known: {})", name, self.names().join(", "))))
    }

    pub fn default_preset(&self) -> &AttackerPreset {
        // set_default only accepts existing names and presets are never removed
        self.presets
            .iter()
            .find(|p| p.name == self.default_name)
            .unwrap_or(&self.presets[0])
    }

    pub fn names(&self) -> Vec<&str> {
        self.presets.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttackerPreset> {
        self.presets.iter()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Position of `name` in the catalog
    pub fn position(&self, name: &str) -> Option<usize> {
        self.presets.iter().position(|p| p.name == name)
    }

    /// Preset at `index`, wrapping around
    pub fn nth_wrapping(&self, index: usize) -> &AttackerPreset {
        &self.presets[index % self.presets.len()]
    }
}

impl Default for PresetCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
