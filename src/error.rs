// file: src/error.rs
// version: 1.0.0
// guid: 60e11711-c6a3-4367-9f20-af1e97eaec9b

//! Error types shared by the analyzer library, the CLI and the GUI

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, AnalyzerError>;

/// Error types for CrackTime Analyzer
#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown attacker preset: {0}")]
    UnknownPreset(String),

    #[error("Failed to write report {path}: {source}")]
    Report {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Terminal UI error: {0}")]
    Tui(String),
}

impl AnalyzerError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a new invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a report write error for `path`
    pub fn report(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Report {
            path: path.into(),
            source,
        }
    }

    /// Create a new terminal UI error
    pub fn tui(msg: impl Into<String>) -> Self {
        Self::Tui(msg.into())
    }

    /// Whether this error was caused by bad user input rather than the environment
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::InvalidArgument(_) | Self::UnknownPreset(_)
        )
    }
}
