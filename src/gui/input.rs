// file: src/gui/input.rs
// version: 1.0.0
// guid: 2e5e44bb-9856-477b-ba8b-66187ee3251d

//! Keyboard handling for the GUI

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use super::app::{App, AppResult, Field};
use crate::error::Result;

/// Poll for one event and apply it
pub fn handle_input(app: &mut App) -> Result<AppResult> {
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            return Ok(handle_key(app, key));
        }
    }
    Ok(AppResult::Continue)
}

/// Apply a key press to the app
pub fn handle_key(app: &mut App, key: KeyEvent) -> AppResult {
    // Only handle key press events (not release)
    if key.kind != KeyEventKind::Press {
        return AppResult::Continue;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('q') if ctrl => return AppResult::Quit,
        KeyCode::Esc => return AppResult::Quit,

        KeyCode::Char('e') if ctrl => {
            app.export();
        }
        KeyCode::F(2) => {
            app.export();
        }
        KeyCode::Char('r') if ctrl => app.toggle_reveal(),
        KeyCode::F(3) => app.toggle_reveal(),

        KeyCode::Enter => app.analyze(),
        KeyCode::Tab | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_prev(),

        KeyCode::Left if app.focus == Field::Preset => app.cycle_preset(false),
        KeyCode::Right | KeyCode::Char(' ') if app.focus == Field::Preset => {
            app.cycle_preset(true)
        }

        KeyCode::Backspace => app.backspace(),
        KeyCode::Char(c) if !ctrl => app.push_char(c),
        _ => {}
    }

    AppResult::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalyzerConfig;

    fn press(app: &mut App, code: KeyCode) -> AppResult {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(app: &mut App, c: char) -> AppResult {
        handle_key(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    #[test]
    fn test_typing_and_analyze() {
        let mut app = App::new(&AnalyzerConfig::default()).unwrap();
        for c in "hunter2".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.password, "hunter");

        assert_eq!(press(&mut app, KeyCode::Enter), AppResult::Continue);
        assert!(app.result.is_some());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(&AnalyzerConfig::default()).unwrap();
        assert_eq!(press(&mut app, KeyCode::Esc), AppResult::Quit);
        assert_eq!(ctrl(&mut app, 'c'), AppResult::Quit);
        // plain 'q' is part of a password
        assert_eq!(press(&mut app, KeyCode::Char('q')), AppResult::Continue);
        assert_eq!(app.password, "q");
    }

    #[test]
    fn test_preset_navigation() {
        let mut app = App::new(&AnalyzerConfig::default()).unwrap();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Field::Preset);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.selected_preset_name(), "fast_gpu");
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.selected_preset_name(), "conservative_cpu");
    }

    #[test]
    fn test_ctrl_shortcuts() {
        let mut app = App::new(&AnalyzerConfig::default()).unwrap();
        assert!(!app.reveal_password);
        ctrl(&mut app, 'r');
        assert!(app.reveal_password);
        assert!(app.password.is_empty());

        ctrl(&mut app, 'e');
        assert!(app.status.as_ref().unwrap().0.contains("before exporting"));
    }

    #[test]
    fn test_release_events_ignored() {
        let mut app = App::new(&AnalyzerConfig::default()).unwrap();
        let mut key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert!(app.password.is_empty());
    }
}
