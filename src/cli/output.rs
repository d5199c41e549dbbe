// file: src/cli/output.rs
// version: 1.0.0
// guid: c8a3ef0a-fe4b-47d0-aff6-0ee1eed26285

//! Terminal rendering of assessments and presets

use colored::{ColoredString, Colorize};
use std::fmt::Write;

use crate::analysis::StrengthScore;
use crate::audit::Assessment;
use crate::crack_time::PresetCatalog;

/// `1234567` -> `1,234,567`
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Guess rates are usually whole numbers; fall back to scientific notation
pub fn format_speed(guesses_per_second: f64) -> String {
    if guesses_per_second.fract() == 0.0 && guesses_per_second < 1e18 {
        format_thousands(guesses_per_second as u64)
    } else {
        format!("{:e}", guesses_per_second)
    }
}

fn colored_score(score: StrengthScore) -> ColoredString {
    let text = format!("{} ({})", score, score.label());
    match score.value() {
        0 => text.red().bold(),
        1 => text.red(),
        2 => text.yellow(),
        3 => text.green(),
        _ => text.blue().bold(),
    }
}

/// Multi-line description of one assessment
pub fn render_assessment(index: usize, r: &Assessment) -> String {
    let a = &r.analysis;
    let mut out = String::new();

    // writing to a String cannot fail
    let _ = writeln!(out, "{}", format!("--- Password #{} ---", index).bold());
    let _ = writeln!(out, "Masked: {}", a.password_masked);
    let _ = writeln!(out, "Length: {}", a.length);
    let _ = writeln!(out, "Entropy (bits): {}", a.entropy_bits);
    let _ = writeln!(out, "Estimated guesses: {}", format_thousands(a.guesses));
    let _ = writeln!(out, "Score (0-4): {}", colored_score(a.score));
    let _ = writeln!(
        out,
        "Estimated crack time ({} @ {} guesses/sec): {}",
        r.assumptions.preset,
        format_speed(r.assumptions.guesses_per_second),
        r.crack_time_human.bold()
    );

    if !r.crack_times.is_empty() {
        let _ = writeln!(out, "Crack time by preset:");
        for c in &r.crack_times {
            let _ = writeln!(
                out,
                "  {:<18} {:>22} guesses/sec  {}",
                c.preset,
                format_speed(c.guesses_per_second),
                c.human_readable
            );
        }
    }

    if let Some(warning) = &a.feedback.warning {
        let _ = writeln!(out, "Warning: {}", warning.yellow());
    }
    if !a.feedback.suggestions.is_empty() {
        let _ = writeln!(out, "Suggestions: {}", a.feedback.suggestions.join(" | "));
    }
    if !a.notes.is_empty() {
        let _ = writeln!(out, "Notes: {}", a.notes.join(" | "));
    }

    out
}

/// Table of presets, default marked with `*`
pub fn render_presets(catalog: &PresetCatalog) -> String {
    let default = catalog.default_preset().name.clone();
    let mut out = String::new();

    let _ = writeln!(out, "{:<2}{:<20} {:>22}  {}", "", "Preset", "Guesses/sec", "Description");
    let _ = writeln!(out, "{:-<80}", "");
    for p in catalog.iter() {
        let marker = if p.name == default { "*" } else { "" };
        let _ = writeln!(
            out,
            "{:<2}{:<20} {:>22}  {}",
            marker,
            p.name,
            format_speed(p.guesses_per_second),
            p.description
        );
    }
    out
}
