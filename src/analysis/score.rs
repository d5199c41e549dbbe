// file: src/analysis/score.rs
// version: 1.0.0
// guid: 2f29da57-5add-453f-9022-143c45a20384

//! Bounded 0-4 strength score

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::AnalyzerError;

/// Strength score on the zxcvbn scale (0 = very weak, 4 = very strong)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct StrengthScore(u8);

impl StrengthScore {
    pub const MIN: StrengthScore = StrengthScore(0);
    pub const MAX: StrengthScore = StrengthScore(4);

    const LABELS: [&'static str; 5] = ["Very Weak", "Weak", "Fair", "Strong", "Very Strong"];

    /// Build a score, clamping anything above 4
    pub fn saturating(value: u8) -> Self {
        Self(value.min(Self::MAX.0))
    }

    /// Numeric value in 0..=4
    pub fn value(self) -> u8 {
        self.0
    }

    /// Human label for the score
    pub fn label(self) -> &'static str {
        Self::LABELS[self.0 as usize]
    }

    /// Meter fill percentage, `(score + 1) * 20`
    pub fn meter_percent(self) -> u16 {
        (u16::from(self.0) + 1) * 20
    }
}

impl TryFrom<u8> for StrengthScore {
    type Error = AnalyzerError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > Self::MAX.0 {
            return Err(AnalyzerError::validation(format!(
                "score must be between 0 and 4, got {}",
                value
            )));
        }
        Ok(Self(value))
    }
}

impl From<StrengthScore> for u8 {
    fn from(score: StrengthScore) -> Self {
        score.0
    }
}

impl fmt::Display for StrengthScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
