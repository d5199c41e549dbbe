// file: src/crack_time/mod.rs
// version: 1.0.0
// guid: 30732d99-045c-4be7-a83a-ec49d258b56c

//! Crack-time estimation from a guess count and an attacker speed

pub mod presets;

pub use presets::{AttackerPreset, PresetCatalog, CUSTOM_PRESET, DEFAULT_PRESET};

use serde::{Deserialize, Serialize};

use crate::error::{AnalyzerError, Result};

pub const MINUTE: f64 = 60.0;
pub const HOUR: f64 = 60.0 * MINUTE;
pub const DAY: f64 = 24.0 * HOUR;
pub const YEAR: f64 = 365.25 * DAY;

/// Time for an attacker at a fixed rate to exhaust the guess estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrackTimeEstimate {
    pub seconds: f64,
    pub human_readable: String,
    pub guesses_per_second: f64,
}

/// Convert `guesses` at `guesses_per_second` into a crack-time estimate
pub fn estimate_crack_time(guesses: f64, guesses_per_second: f64) -> Result<CrackTimeEstimate> {
    if !guesses_per_second.is_finite() || guesses_per_second <= 0.0 {
        return Err(AnalyzerError::invalid_argument(format!(
            "guesses_per_second must be > 0, got {}",
            guesses_per_second
        )));
    }

    let seconds = guesses / guesses_per_second;
    Ok(CrackTimeEstimate {
        seconds,
        human_readable: human_readable_seconds(seconds),
        guesses_per_second,
    })
}

/// Approximate duration in the largest fitting unit
pub fn human_readable_seconds(seconds: f64) -> String {
    if seconds < 1.0 {
        return format!("{:.3} seconds", seconds);
    }

    if seconds < MINUTE {
        format!("{:.2} seconds", seconds)
    } else if seconds < HOUR {
        format!("{:.2} minutes", seconds / MINUTE)
    } else if seconds < DAY {
        format!("{:.2} hours", seconds / HOUR)
    } else if seconds < YEAR {
        format!("{:.2} days", seconds / DAY)
    } else {
        format!("{:.2} years", seconds / YEAR)
    }
}

/// Coarse bucket for a crack time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrackTimeVerdict {
    UnderAMinute,
    WithinAnHour,
    WithinADay,
    WithinAYear,
    OverAYear,
}

impl CrackTimeVerdict {
    pub fn from_seconds(seconds: f64) -> Self {
        if seconds < MINUTE {
            CrackTimeVerdict::UnderAMinute
        } else if seconds < HOUR {
            CrackTimeVerdict::WithinAnHour
        } else if seconds < DAY {
            CrackTimeVerdict::WithinADay
        } else if seconds < YEAR {
            CrackTimeVerdict::WithinAYear
        } else {
            CrackTimeVerdict::OverAYear
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            CrackTimeVerdict::UnderAMinute => "Easily crackable in under a minute.",
            CrackTimeVerdict::WithinAnHour => "Crackable within an hour.",
            CrackTimeVerdict::WithinADay => "Crackable within a day.",
            CrackTimeVerdict::WithinAYear => "Resistant for months to a year.",
            CrackTimeVerdict::OverAYear => "Very strong: estimated > 1 year to crack.",
        }
    }

    /// Whether the crack time is long enough to be considered acceptable
    pub fn is_resistant(&self) -> bool {
        matches!(self, CrackTimeVerdict::WithinAYear | CrackTimeVerdict::OverAYear)
    }
}

/// Position on a log scale where one year fills the gauge
pub fn log_scale_progress(seconds: f64) -> f64 {
    if seconds.is_nan() || seconds <= 0.0 {
        return 0.0;
    }
    ((seconds + 1.0).log10() / (YEAR + 1.0).log10()).min(1.0)
}
