// file: src/gui/ui.rs
// version: 1.0.0
// guid: 393cdf25-4779-4544-819a-b23ed5bb1ac8

//! Rendering of the GUI form, meters and details

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};

use super::app::{App, Field, StatusKind};
use crate::analysis::StrengthScore;
use crate::audit::Assessment;
use crate::cli::output::{format_speed, format_thousands};
use crate::crack_time::{log_scale_progress, CrackTimeVerdict};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(6), // Form
            Constraint::Length(3), // Strength meter
            Constraint::Length(3), // Crack-time meter
            Constraint::Min(0),    // Details
            Constraint::Length(3), // Status/Help
        ])
        .split(frame.area());

    draw_title(frame, chunks[0]);
    draw_form(frame, chunks[1], app);

    match &app.result {
        Some(result) => {
            draw_strength_meter(frame, chunks[2], result.analysis.score);
            draw_crack_time_meter(frame, chunks[3], result);
            draw_details(frame, chunks[4], result);
        }
        None => {
            let hint = Paragraph::new(" Enter a password and press Enter to analyze. Do not use real passwords.")
                .style(Style::default().fg(Color::DarkGray))
                .wrap(Wrap { trim: false });
            frame.render_widget(hint, chunks[4]);
        }
    }

    draw_status(frame, chunks[5], app);
}

fn draw_title(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));

    let title = Paragraph::new(" CrackTime Analyzer ")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(block);

    frame.render_widget(title, area);
}

fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let preset = app.auditor().catalog().nth_wrapping(app.preset_index);
    let preset_text = format!(
        "◀ {} ({} guesses/sec) ▶",
        preset.name,
        format_speed(preset.guesses_per_second)
    );

    let rows = [
        (Field::Password, app.password_display()),
        (Field::Preset, preset_text),
        (Field::CustomSpeed, app.custom_speed.clone()),
        (Field::OutputPrefix, app.output_prefix.clone()),
    ];

    let lines: Vec<Line> = rows
        .into_iter()
        .map(|(field, value)| {
            let focused = field == app.focus;
            let marker = if focused { "▶ " } else { "  " };
            let label_style = if focused {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let cursor = if focused && field != Field::Preset { "_" } else { "" };

            Line::from(vec![
                Span::styled(format!("{}{:<20}", marker, field.label()), label_style),
                Span::raw(format!("{}{}", value, cursor)),
            ])
        })
        .collect();

    let form = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Input "),
    );
    frame.render_widget(form, area);
}

/// Gauge colour for a score
pub fn score_color(score: StrengthScore) -> Color {
    match score.value() {
        0 => Color::Red,
        1 => Color::LightRed,
        2 => Color::Yellow,
        3 => Color::Green,
        _ => Color::Blue,
    }
}

fn draw_strength_meter(frame: &mut Frame, area: Rect, score: StrengthScore) {
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Password Strength "))
        .gauge_style(Style::default().fg(score_color(score)))
        .percent(score.meter_percent())
        .label(format!("{} (score {}/4)", score.label(), score));
    frame.render_widget(gauge, area);
}

fn verdict_color(verdict: CrackTimeVerdict) -> Color {
    if verdict.is_resistant() {
        Color::Green
    } else if verdict == CrackTimeVerdict::UnderAMinute {
        Color::Red
    } else {
        Color::Yellow
    }
}

fn draw_crack_time_meter(frame: &mut Frame, area: Rect, result: &Assessment) {
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Estimated Crack Time "),
        )
        .gauge_style(Style::default().fg(verdict_color(result.verdict)))
        .ratio(log_scale_progress(result.crack_time_seconds))
        .label(format!(
            "{} ({})",
            result.crack_time_human,
            result.verdict.message()
        ));
    frame.render_widget(gauge, area);
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

fn draw_details(frame: &mut Frame, area: Rect, result: &Assessment) {
    let a = &result.analysis;
    let mut lines = vec![
        Line::from(format!(
            "Masked: {}   Length: {}   Entropy: {} bits   Guesses: {}",
            a.password_masked,
            a.length,
            a.entropy_bits,
            format_thousands(a.guesses)
        )),
        Line::from(format!(
            "Upper: {}  Lower: {}  Digit: {}  Symbol: {}  Charset: ~{}",
            yes_no(a.classes.has_upper),
            yes_no(a.classes.has_lower),
            yes_no(a.classes.has_digit),
            yes_no(a.classes.has_symbol),
            a.classes.charset_size_est
        )),
        Line::from(format!(
            "Assumed attacker: {} @ {} guesses/sec",
            result.assumptions.preset,
            format_speed(result.assumptions.guesses_per_second)
        )),
    ];

    for c in &result.crack_times {
        lines.push(Line::from(format!(
            "  {:<18} {}",
            c.preset, c.human_readable
        )));
    }

    if let Some(warning) = &a.feedback.warning {
        lines.push(Line::styled(
            format!("Warning: {}", warning),
            Style::default().fg(Color::Yellow),
        ));
    }
    for suggestion in &a.feedback.suggestions {
        lines.push(Line::from(format!("• {}", suggestion)));
    }
    for note in &a.notes {
        lines.push(Line::styled(
            format!("Note: {}", note),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let details = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Detailed Analysis "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(details, area);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let (text, style) = match &app.status {
        Some((msg, kind)) => {
            let color = match kind {
                StatusKind::Info => Color::Gray,
                StatusKind::Success => Color::Green,
                StatusKind::Warning => Color::Yellow,
                StatusKind::Error => Color::Red,
            };
            (msg.clone(), Style::default().fg(color))
        }
        None => (
            "Enter: Analyze | Tab: Next field | ←→: Preset | Ctrl+E: Export | Ctrl+R: Reveal | Esc: Quit"
                .to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    };

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));

    let status = Paragraph::new(format!(" {} ", text))
        .style(style)
        .block(block);

    frame.render_widget(status, area);
}
