// file: src/gui/mod.rs
// version: 1.0.0
// guid: a2e1d879-afd9-456e-aae5-174543b498b9

//! Interactive terminal GUI
//!
//! A single form: masked password field, preset selector, custom speed and
//! report prefix, with strength and crack-time meters underneath. Uses
//! ratatui for rendering and crossterm for input handling.

pub mod app;
pub mod input;
pub mod ui;

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing::info;

use crate::config::AnalyzerConfig;
use crate::error::{AnalyzerError, Result};
use app::{App, AppResult};

/// Run the GUI until the user quits
pub fn run_gui(config: AnalyzerConfig) -> Result<()> {
    let mut app = App::new(&config)?;

    // Setup terminal
    let guard = RawModeGuard::enable()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    guard.restore()?;
    terminal.show_cursor()?;

    info!("GUI closed");
    result
}

/// Leaves raw mode and the alternate screen when dropped, so early returns
/// during setup do not strand the terminal
struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    fn enable() -> Result<Self> {
        enable_raw_mode()?;
        Ok(Self { active: true })
    }

    fn restore(mut self) -> Result<()> {
        self.active = false;
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        Ok(())
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if self.active {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
        }
    }
}

/// Main application loop
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .map_err(|e| AnalyzerError::tui(e.to_string()))?;

        if input::handle_input(app)? == AppResult::Quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_drop_outside_raw_mode_is_harmless() {
        // setup failed after raw mode: dropping must restore without panicking
        drop(RawModeGuard { active: true });
        drop(RawModeGuard { active: false });
    }
}
