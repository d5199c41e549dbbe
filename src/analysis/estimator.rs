// file: src/analysis/estimator.rs
// version: 1.0.0
// guid: 0db812cd-4621-4ebf-b4bf-d26126210f3f

//! Strength estimators
//!
//! The real work is done by the `zxcvbn` crate. A Shannon entropy estimator
//! with a heuristic score is kept as a dependency-free alternative that can be
//! selected from the configuration file.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::f64::consts::LOG2_10;
use tracing::debug;

use super::score::StrengthScore;

/// Library feedback attached to an estimate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    /// Main warning, e.g. "This is a top-10 common password."
    pub warning: Option<String>,
    /// Suggestions for a stronger password
    pub suggestions: Vec<String>,
}

impl Feedback {
    pub fn is_empty(&self) -> bool {
        self.warning.is_none() && self.suggestions.is_empty()
    }
}

/// Raw estimate produced by a [`StrengthEstimator`]
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    pub guesses: u64,
    pub entropy_bits: f64,
    pub score: StrengthScore,
    pub feedback: Feedback,
    pub notes: Vec<String>,
}

/// Something that turns a password into a guess estimate
pub trait StrengthEstimator: Send + Sync {
    /// Stable identifier written into reports
    fn name(&self) -> &'static str;

    /// Estimate the strength of `password`; `user_inputs` are extra
    /// dictionary words such as the account name or site
    fn estimate(&self, password: &str, user_inputs: &[&str]) -> Estimate;
}

/// Estimator selection as it appears in configuration files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum EstimatorKind {
    #[default]
    Zxcvbn,
    Shannon,
}

impl EstimatorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EstimatorKind::Zxcvbn => "zxcvbn",
            EstimatorKind::Shannon => "shannon",
        }
    }

    /// Instantiate the estimator
    pub fn build(self) -> Box<dyn StrengthEstimator> {
        match self {
            EstimatorKind::Zxcvbn => Box::new(ZxcvbnEstimator),
            EstimatorKind::Shannon => Box::new(ShannonEstimator),
        }
    }
}

/// Estimator backed by the `zxcvbn` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct ZxcvbnEstimator;

impl StrengthEstimator for ZxcvbnEstimator {
    fn name(&self) -> &'static str {
        "zxcvbn"
    }

    fn estimate(&self, password: &str, user_inputs: &[&str]) -> Estimate {
        let entropy = zxcvbn::zxcvbn(password, user_inputs);

        let feedback = entropy
            .feedback()
            .as_ref()
            .map(|fb| Feedback {
                warning: fb.warning().map(|w| w.to_string()),
                suggestions: fb.suggestions().iter().map(|s| s.to_string()).collect(),
            })
            .unwrap_or_default();

        let estimate = Estimate {
            guesses: entropy.guesses().max(1),
            entropy_bits: entropy.guesses_log10() * LOG2_10,
            score: StrengthScore::saturating(u8::from(entropy.score())),
            feedback,
            notes: Vec::new(),
        };

        debug!(
            "zxcvbn estimate: score={} guesses_log10={:.3}",
            estimate.score,
            entropy.guesses_log10()
        );
        estimate
    }
}

/// Character-frequency entropy with a threshold score
#[derive(Debug, Clone, Copy, Default)]
pub struct ShannonEstimator;

impl StrengthEstimator for ShannonEstimator {
    fn name(&self) -> &'static str {
        "shannon"
    }

    fn estimate(&self, password: &str, _user_inputs: &[&str]) -> Estimate {
        let bits = shannon_entropy_bits(password);
        let length = password.chars().count();

        Estimate {
            guesses: guesses_from_bits(bits),
            entropy_bits: bits,
            score: heuristic_score(bits, length),
            feedback: Feedback::default(),
            notes: vec!["zxcvbn not used; Shannon entropy and heuristic score applied".to_string()],
        }
    }
}

/// Shannon entropy of the character distribution, multiplied by length
pub fn shannon_entropy_bits(password: &str) -> f64 {
    if password.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<char, usize> = HashMap::new();
    let mut length = 0usize;
    for ch in password.chars() {
        *freq.entry(ch).or_insert(0) += 1;
        length += 1;
    }

    let n = length as f64;
    let per_char: f64 = freq
        .values()
        .map(|&count| {
            let p = count as f64 / n;
            -p * p.log2()
        })
        .sum();

    per_char * n
}

/// `2^bits`, at least 1; float-to-int `as` saturates at `u64::MAX`
pub fn guesses_from_bits(bits: f64) -> u64 {
    2f64.powf(bits).max(1.0) as u64
}

/// Map entropy to a 0-4 score in the spirit of zxcvbn
pub fn heuristic_score(entropy_bits: f64, length: usize) -> StrengthScore {
    if length == 0 {
        return StrengthScore::MIN;
    }

    let value = match entropy_bits {
        b if b < 28.0 => 0,
        b if b < 36.0 => 1,
        b if b < 60.0 => 2,
        b if b < 80.0 => 3,
        _ => 4,
    };
    StrengthScore::saturating(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shannon_entropy_identical_chars() {
        assert!(shannon_entropy_bits("aaaa").abs() < 1e-9);
        assert_eq!(shannon_entropy_bits(""), 0.0);
    }

    #[test]
    fn test_shannon_entropy_distinct_chars() {
        // four distinct symbols: 2 bits each
        assert!((shannon_entropy_bits("abcd") - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_heuristic_score_thresholds() {
        assert_eq!(heuristic_score(10.0, 0).value(), 0);
        assert_eq!(heuristic_score(27.9, 8).value(), 0);
        assert_eq!(heuristic_score(28.0, 8).value(), 1);
        assert_eq!(heuristic_score(36.0, 8).value(), 2);
        assert_eq!(heuristic_score(60.0, 8).value(), 3);
        assert_eq!(heuristic_score(80.0, 8).value(), 4);
    }

    #[test]
    fn test_guesses_from_bits_bounds() {
        assert_eq!(guesses_from_bits(0.0), 1);
        assert_eq!(guesses_from_bits(10.0), 1024);
        assert_eq!(guesses_from_bits(10_000.0), u64::MAX);
    }

    #[test]
    fn test_shannon_estimator_notes_fallback() {
        let estimate = ShannonEstimator.estimate("abcd", &[]);
        assert_eq!(estimate.guesses, 256);
        assert_eq!(estimate.notes.len(), 1);
        assert!(estimate.feedback.is_empty());
    }

    #[test]
    fn test_zxcvbn_common_password_is_weak() {
        let estimate = ZxcvbnEstimator.estimate("password", &[]);
        assert_eq!(estimate.score.value(), 0);
        assert!(estimate.guesses >= 1);
        assert!(estimate.feedback.warning.is_some());
    }

    #[test]
    fn test_zxcvbn_long_passphrase_is_strong() {
        let estimate = ZxcvbnEstimator.estimate("correct-horse-battery-staple-Quartz91!", &[]);
        assert!(estimate.score.value() >= 3);
        assert!(estimate.entropy_bits > 40.0);
    }

    #[test]
    fn test_zxcvbn_user_inputs_lower_score() {
        let without = ZxcvbnEstimator.estimate("jdfalkserver", &[]);
        let with = ZxcvbnEstimator.estimate("jdfalkserver", &["jdfalkserver"]);
        assert!(with.guesses <= without.guesses);
    }
}
