// file: src/gui/app.rs
// version: 1.0.0
// guid: 8871ec3b-4db4-4e0a-9226-42fc40ce8ca5

//! GUI application state and actions

use tracing::{debug, warn};

use crate::audit::{Assessment, Auditor, SpeedSelection};
use crate::config::AnalyzerConfig;
use crate::error::{AnalyzerError, Result};
use crate::report::{ReportFormat, ReportMeta, WrittenReports};

/// Form field with keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Password,
    Preset,
    CustomSpeed,
    OutputPrefix,
}

impl Field {
    const ORDER: [Field; 4] = [
        Field::Password,
        Field::Preset,
        Field::CustomSpeed,
        Field::OutputPrefix,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Password => "Password",
            Field::Preset => "Attacker preset",
            Field::CustomSpeed => "Custom guesses/sec",
            Field::OutputPrefix => "Report prefix",
        }
    }

    fn index(&self) -> usize {
        Self::ORDER.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Field {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(&self) -> Field {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Status bar severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Warning,
    Error,
}

/// Result of handling one input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppResult {
    Continue,
    Quit,
}

/// GUI state
pub struct App {
    auditor: Auditor,
    output_dir: Option<std::path::PathBuf>,
    pub password: String,
    pub reveal_password: bool,
    pub preset_index: usize,
    pub custom_speed: String,
    pub output_prefix: String,
    pub focus: Field,
    pub result: Option<Assessment>,
    pub status: Option<(String, StatusKind)>,
}

impl App {
    pub fn new(config: &AnalyzerConfig) -> Result<Self> {
        let auditor = config.auditor()?;
        let preset_index = auditor
            .catalog()
            .position(&auditor.catalog().default_preset().name)
            .unwrap_or(0);

        Ok(Self {
            auditor,
            output_dir: config.output_dir.clone(),
            password: String::new(),
            reveal_password: config.gui.reveal_password,
            preset_index,
            custom_speed: String::new(),
            output_prefix: config.gui.output_prefix.clone(),
            focus: Field::Password,
            result: None,
            status: None,
        })
    }

    pub fn auditor(&self) -> &Auditor {
        &self.auditor
    }

    pub fn selected_preset_name(&self) -> &str {
        &self.auditor.catalog().nth_wrapping(self.preset_index).name
    }

    pub fn set_status(&mut self, msg: impl Into<String>, kind: StatusKind) {
        self.status = Some((msg.into(), kind));
    }

    /// Password as drawn in the form
    pub fn password_display(&self) -> String {
        if self.reveal_password {
            self.password.clone()
        } else {
            "•".repeat(self.password.chars().count())
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn toggle_reveal(&mut self) {
        self.reveal_password = !self.reveal_password;
    }

    /// Move the preset selector one step, wrapping at either end
    pub fn cycle_preset(&mut self, forward: bool) {
        let len = self.auditor.catalog().len();
        self.preset_index = if forward {
            (self.preset_index + 1) % len
        } else {
            (self.preset_index + len - 1) % len
        };
        self.invalidate();
    }

    /// Type a character into the focused text field
    pub fn push_char(&mut self, c: char) {
        match self.focus {
            Field::Password => self.password.push(c),
            Field::CustomSpeed => {
                if c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-') {
                    self.custom_speed.push(c);
                }
            }
            Field::OutputPrefix => self.output_prefix.push(c),
            Field::Preset => return,
        }
        self.invalidate();
    }

    pub fn backspace(&mut self) {
        match self.focus {
            Field::Password => {
                self.password.pop();
            }
            Field::CustomSpeed => {
                self.custom_speed.pop();
            }
            Field::OutputPrefix => {
                self.output_prefix.pop();
            }
            Field::Preset => return,
        }
        self.invalidate();
    }

    /// Inputs changed: the shown result no longer matches the form
    fn invalidate(&mut self) {
        if self.result.take().is_some() {
            self.set_status("Inputs changed, press Enter to analyze again", StatusKind::Info);
        }
    }

    /// Current speed selection from the preset and custom speed fields
    pub fn speed_selection(&self) -> Result<SpeedSelection> {
        let raw = self.custom_speed.trim();
        let custom = if raw.is_empty() {
            None
        } else {
            Some(raw.parse::<f64>().map_err(|_| {
                AnalyzerError::invalid_argument(format!("'{}' is not a number", raw))
            })?)
        };

        Ok(SpeedSelection::from_args(
            self.selected_preset_name().to_string(),
            custom,
        ))
    }

    /// Analyze the password in the form
    pub fn analyze(&mut self) {
        if self.password.is_empty() {
            self.result = None;
            self.set_status("Please enter a password.", StatusKind::Warning);
            return;
        }

        let outcome = self
            .speed_selection()
            .and_then(|selection| self.auditor.assess(&self.password, &selection));

        match outcome {
            Ok(assessment) => {
                debug!("GUI analyzed {}", assessment.analysis.password_masked);
                self.result = Some(assessment);
                self.set_status("Analysis complete.", StatusKind::Success);
            }
            Err(e) => {
                self.result = None;
                self.set_status(e.to_string(), StatusKind::Error);
            }
        }
    }

    /// Write JSON and CSV reports for the shown result
    pub fn export(&mut self) -> Option<WrittenReports> {
        let Some(result) = self.result.clone() else {
            self.set_status("Analyze a password before exporting.", StatusKind::Warning);
            return None;
        };

        match self.write_reports(&[result]) {
            Ok(written) => {
                let paths: Vec<String> = written
                    .paths()
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect();
                self.set_status(format!("Reports saved: {}", paths.join(", ")), StatusKind::Success);
                Some(written)
            }
            Err(e) => {
                warn!("GUI export failed: {}", e);
                self.set_status(e.to_string(), StatusKind::Error);
                None
            }
        }
    }

    fn write_reports(&self, results: &[Assessment]) -> Result<WrittenReports> {
        let prefix = crate::report::ReportPaths::resolve_prefix(&self.output_prefix, self.output_dir.as_deref())?;
        let meta = ReportMeta::now();
        let paths = crate::report::ReportPaths::for_prefix(&prefix, meta.generated_at);
        let future = crate::report::write_reports(&meta, results, &paths, ReportFormat::Both);

        // the GUI runs on a blocking thread of the CLI runtime; tests have none
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle.block_on(future),
            Err(_) => tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?
                .block_on(future),
        }
    }
}
