// file: src/analysis/mod.rs
// version: 1.0.0
// guid: 8088b633-14c5-476c-85c3-d12f60c65b60

//! Password analysis
//!
//! This module handles:
//! - Character class detection and charset size estimation
//! - Delegating guess/score estimation to a [`StrengthEstimator`]
//! - Masking the password before it leaves this module

pub mod estimator;
pub mod score;

pub use estimator::{
    EstimatorKind, Estimate, Feedback, ShannonEstimator, StrengthEstimator, ZxcvbnEstimator,
};
pub use score::StrengthScore;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AnalyzerError, Result};

/// Character classes present in a password
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterClasses {
    pub has_upper: bool,
    pub has_lower: bool,
    pub has_digit: bool,
    pub has_symbol: bool,
    /// Heuristic alphabet size implied by the classes above
    pub charset_size_est: u32,
}

impl CharacterClasses {
    pub fn detect(password: &str) -> Self {
        let has_upper = password.chars().any(char::is_uppercase);
        let has_lower = password.chars().any(char::is_lowercase);
        let has_digit = password.chars().any(|c| c.is_ascii_digit());
        let has_symbol = password.chars().any(is_printable_symbol);

        let mut charset_size_est = 0;
        if has_lower {
            charset_size_est += 26;
        }
        if has_upper {
            charset_size_est += 26;
        }
        if has_digit {
            charset_size_est += 10;
        }
        if has_symbol {
            charset_size_est += 32;
        }

        Self {
            has_upper,
            has_lower,
            has_digit,
            has_symbol,
            charset_size_est,
        }
    }
}

/// Printable ASCII that is neither a letter nor a digit, whitespace included
fn is_printable_symbol(c: char) -> bool {
    c.is_ascii_punctuation() || c.is_ascii_whitespace() || c == '\x0b'
}

/// Result of analyzing a single password
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PasswordAnalysis {
    pub password_masked: String,
    pub length: usize,
    #[serde(flatten)]
    pub classes: CharacterClasses,
    pub entropy_bits: f64,
    pub guesses: u64,
    pub score: StrengthScore,
    pub strength: String,
    pub feedback: Feedback,
    pub estimator: String,
    pub notes: Vec<String>,
}

/// Runs an estimator against passwords
pub struct Analyzer {
    estimator: Box<dyn StrengthEstimator>,
    user_inputs: Vec<String>,
}

impl Analyzer {
    /// Analyzer using the given estimator kind
    pub fn new(kind: EstimatorKind) -> Self {
        Self::with_estimator(kind.build())
    }

    pub fn with_estimator(estimator: Box<dyn StrengthEstimator>) -> Self {
        Self {
            estimator,
            user_inputs: Vec::new(),
        }
    }

    /// Extra dictionary words passed to the estimator
    pub fn with_user_inputs(mut self, user_inputs: Vec<String>) -> Self {
        self.user_inputs = user_inputs;
        self
    }

    pub fn estimator_name(&self) -> &'static str {
        self.estimator.name()
    }

    /// Analyze `password`, rejecting empty input
    pub fn analyze(&self, password: &str) -> Result<PasswordAnalysis> {
        if password.is_empty() {
            return Err(AnalyzerError::validation("password must not be empty"));
        }

        let inputs: Vec<&str> = self.user_inputs.iter().map(String::as_str).collect();
        let estimate = self.estimator.estimate(password, &inputs);
        let masked = mask_password(password);

        debug!(
            "Analyzed {} with {}: score={}",
            masked,
            self.estimator.name(),
            estimate.score
        );

        Ok(PasswordAnalysis {
            password_masked: masked,
            length: password.chars().count(),
            classes: CharacterClasses::detect(password),
            entropy_bits: round_to(estimate.entropy_bits, 3),
            guesses: estimate.guesses,
            score: estimate.score,
            strength: estimate.score.label().to_string(),
            feedback: estimate.feedback,
            estimator: self.estimator.name().to_string(),
            notes: estimate.notes,
        })
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(EstimatorKind::default())
    }
}

/// Analyze a password with the default (zxcvbn) estimator
pub fn analyze_password(password: &str) -> Result<PasswordAnalysis> {
    Analyzer::default().analyze(password)
}

/// Keep first and last character, star out the rest; short passwords are fully starred
pub fn mask_password(password: &str) -> String {
    let chars: Vec<char> = password.chars().collect();
    match chars.len() {
        0 => String::new(),
        n if n <= 2 => "*".repeat(n),
        n => {
            let mut masked = String::with_capacity(password.len());
            masked.push(chars[0]);
            masked.push_str(&"*".repeat(n - 2));
            masked.push(chars[n - 1]);
            masked
        }
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_password() {
        assert_eq!(mask_password(""), "");
        assert_eq!(mask_password("a"), "*");
        assert_eq!(mask_password("ab"), "**");
        assert_eq!(mask_password("abc"), "a*c");
        assert_eq!(mask_password("P@ssw0rd!"), "P*******!");
    }

    #[test]
    fn test_mask_password_multibyte() {
        let masked = mask_password("héllø");
        assert_eq!(masked, "h***ø");
        assert_eq!(masked.chars().count(), 5);
    }

    #[test]
    fn test_character_classes() {
        let classes = CharacterClasses::detect("P@ssw0rd!");
        assert!(classes.has_upper && classes.has_lower && classes.has_digit && classes.has_symbol);
        assert_eq!(classes.charset_size_est, 94);

        let lower = CharacterClasses::detect("abc");
        assert_eq!(lower.charset_size_est, 26);
        assert!(!lower.has_symbol);

        assert!(CharacterClasses::detect("two words").has_symbol);
    }

    #[test]
    fn test_numeric_fractions_are_not_digits() {
        let classes = CharacterClasses::detect("half½");
        assert!(!classes.has_digit);
        assert_eq!(classes.charset_size_est, 26);
        assert!(!CharacterClasses::detect("Ⅻ").has_digit);
        assert!(CharacterClasses::detect("r2d2").has_digit);
    }

    #[test]
    fn test_analyze_password_basic() {
        let result = analyze_password("P@ssw0rd!").unwrap();
        assert_eq!(result.length, 9);
        assert_eq!(result.password_masked, "P*******!");
        assert!(result.score.value() <= 4);
        assert!(result.guesses >= 1);
        assert_eq!(result.estimator, "zxcvbn");
        assert_eq!(result.strength, result.score.label());
    }

    #[test]
    fn test_analyze_rejects_empty() {
        let err = analyze_password("").unwrap_err();
        assert!(matches!(err, AnalyzerError::Validation(_)));
    }

    #[test]
    fn test_analyze_with_shannon_rounds_entropy() {
        let analyzer = Analyzer::new(EstimatorKind::Shannon);
        let result = analyzer.analyze("abc").unwrap();
        // log2(3) * 3 = 4.754887...
        assert_eq!(result.entropy_bits, 4.755);
        assert_eq!(result.estimator, "shannon");
        assert!(!result.notes.is_empty());
    }

    #[test]
    fn test_analysis_json_has_flat_classes() {
        let result = Analyzer::new(EstimatorKind::Shannon).analyze("Ab1!").unwrap();
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["has_upper"], true);
        assert_eq!(value["charset_size_est"], 94);
        assert!(value.get("classes").is_none());
    }

    #[test]
    fn test_every_score_in_range() {
        for pw in ["a", "123456", "Tr0ub4dor&3", "zQ8#vLp!2mWx@9rT", "aaaaaaaaaaaaaaaa"] {
            for kind in [EstimatorKind::Zxcvbn, EstimatorKind::Shannon] {
                let result = Analyzer::new(kind).analyze(pw).unwrap();
                assert!(result.score.value() <= 4, "{} via {:?}", pw, kind);
            }
        }
    }
}
