// file: src/config/loader.rs
// version: 1.0.0
// guid: 748613b5-48a6-4572-9af7-66a750fc47d1

//! Configuration file loading and environment variable substitution

use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::AnalyzerConfig;
use crate::error::{AnalyzerError, Result};

/// Environment variable that points at an alternative config file
pub const CONFIG_ENV_VAR: &str = "CRACKTIME_CONFIG";

/// Configuration loader with environment variable substitution
pub struct ConfigLoader {
    env_vars: HashMap<String, String>,
}

impl ConfigLoader {
    /// Create a new config loader
    pub fn new() -> Self {
        Self {
            env_vars: std::env::vars().collect(),
        }
    }

    /// `<config dir>/cracktime/config.yaml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cracktime").join("config.yaml"))
    }

    /// Load from an explicit path, `$CRACKTIME_CONFIG`, or the default
    /// location; missing default files yield the built-in configuration
    pub fn load_or_default(&self, explicit: Option<&Path>) -> Result<AnalyzerConfig> {
        if let Some(path) = explicit {
            return self.load(path);
        }

        if let Some(path) = self.env_vars.get(CONFIG_ENV_VAR) {
            return self.load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => self.load(&path),
            _ => {
                debug!("No configuration file found, using defaults");
                Ok(AnalyzerConfig::default())
            }
        }
    }

    /// Load configuration from a YAML file
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<AnalyzerConfig> {
        let content = fs::read_to_string(&path).map_err(|e| {
            AnalyzerError::config(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let config = self.parse(&content)?;
        info!("Loaded configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// Parse and validate YAML content
    pub fn parse(&self, content: &str) -> Result<AnalyzerConfig> {
        let expanded = self.expand_env_vars(content)?;

        // an empty file means "all defaults"
        let config: AnalyzerConfig = if expanded.trim().is_empty() {
            AnalyzerConfig::default()
        } else {
            serde_yaml::from_str(&expanded)?
        };

        config.check()?;
        Ok(config)
    }

    /// Expand `${VAR}` references in configuration content
    fn expand_env_vars(&self, content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| AnalyzerError::config(format!("Invalid regex pattern: {}", e)))?;

        let mut missing_vars = Vec::new();
        let result = re.replace_all(content, |caps: &regex::Captures| {
            match self.env_vars.get(&caps[1]) {
                Some(value) => value.clone(),
                None => {
                    missing_vars.push(caps[1].to_string());
                    String::new()
                }
            }
        });

        if !missing_vars.is_empty() {
            return Err(AnalyzerError::config(format!(
                "Missing environment variables: {}",
                missing_vars.join(", ")
            )));
        }

        Ok(result.into_owned())
    }

    /// Set environment variable for substitution
    pub fn set_env_var(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.env_vars.insert(key.into(), value.into());
    }

    /// Loader that ignores the process environment
    pub fn isolated() -> Self {
        Self {
            env_vars: HashMap::new(),
        }
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
