// file: src/lib.rs
// version: 1.0.0
// guid: c691697a-8638-4a2a-b191-99a1a5aa4121

//! # CrackTime Analyzer
//!
//! Password strength auditing on top of the `zxcvbn` estimator: a score
//! from 0 to 4, crack-time estimates for a set of attacker speed presets,
//! and JSON/CSV reports. Exposed as the `cracktime` command line tool and an
//! interactive terminal GUI.
//!
//! ```no_run
//! use cracktime_analyzer::audit::{Auditor, SpeedSelection};
//!
//! let auditor = Auditor::default();
//! let result = auditor
//!     .assess("P@ssw0rd!", &SpeedSelection::Preset("mid_gpu".into()))
//!     .unwrap();
//! println!("{} -> {}", result.analysis.score, result.crack_time_human);
//! ```

pub mod analysis;
pub mod audit;
pub mod cli;
pub mod config;
pub mod crack_time;
pub mod error;
pub mod gui;
pub mod logging;
pub mod report;

pub use analysis::{analyze_password, PasswordAnalysis, StrengthScore};
pub use audit::{Assessment, Auditor, SpeedSelection};
pub use crack_time::estimate_crack_time;
pub use error::{AnalyzerError, Result};

/// Version information for the tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
