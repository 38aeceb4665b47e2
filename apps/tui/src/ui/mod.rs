//! Terminal UI — raw-mode event loop over the form state.
//!
//! Single-threaded and event-driven: every key event mutates the form through
//! `FormState`, then the whole screen (form + preview + status bar) is
//! redrawn. PDF export runs synchronously on this loop, guarded by the
//! `exporting` flag against a re-entrant double-press.

pub mod view;

use std::io::{self, Write};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{cursor, execute, terminal};
use tracing::{error, info};

use crate::errors::AppError;
use crate::render::export_pdf;
use crate::state::{App, Mode};

/// Runs the UI until the user quits. The terminal is restored on every exit
/// path, including errors out of the event loop.
pub fn run(app: &mut App) -> Result<(), AppError> {
    terminal::enable_raw_mode()?;
    let mut out = io::stdout();
    execute!(out, terminal::EnterAlternateScreen, cursor::Hide)?;

    let result = event_loop(app, &mut out);

    let _ = execute!(out, cursor::Show, terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
    result
}

fn event_loop(app: &mut App, out: &mut impl Write) -> Result<(), AppError> {
    while !app.should_quit {
        view::draw(app, out)?;
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, out, key),
            // Resize is handled implicitly: the next iteration redraws.
            _ => {}
        }
    }
    Ok(())
}

fn handle_key(app: &mut App, out: &mut impl Write, key: KeyEvent) {
    match &app.mode {
        // A notice blocks until acknowledged by any key.
        Mode::Notice(_) => {
            app.mode = Mode::Edit;
            return;
        }
        Mode::ConfirmReset => {
            if matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y')) {
                app.form.reset();
                info!("Form reset to empty");
            }
            app.mode = Mode::Edit;
            return;
        }
        Mode::Edit => {}
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => app.should_quit = true,
            KeyCode::Char('e') => export(app, out),
            KeyCode::Char('r') => app.mode = Mode::ConfirmReset,
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc => app.should_quit = true,
        KeyCode::Tab | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_prev(),
        KeyCode::Backspace => edit_focused(app, |value| {
            value.pop();
        }),
        KeyCode::Enter => {
            if app.focused_field().is_multiline() {
                edit_focused(app, |value| value.push('\n'));
            } else {
                app.focus_next();
            }
        }
        KeyCode::Char(c) => edit_focused(app, |value| value.push(c)),
        _ => {}
    }
}

/// Applies an edit to the focused field's value and runs it through
/// `update_field` (validate + persist).
fn edit_focused(app: &mut App, edit: impl FnOnce(&mut String)) {
    let field = app.focused_field();
    let mut value = app.form.value(field).to_string();
    edit(&mut value);
    app.form.update_field(field, value);
}

fn export(app: &mut App, out: &mut impl Write) {
    if app.exporting {
        return;
    }
    if !app.form.is_valid() {
        app.mode = Mode::Notice(
            "Cannot export: fill in name and email, and fix any field errors".to_string(),
        );
        return;
    }

    app.exporting = true;
    // Show the in-progress state before the synchronous export; a draw
    // failure here is not worth aborting the export over.
    let _ = view::draw(app, out);

    let result = export_pdf(app.form.profile(), &app.page_config, &app.config.export_dir);
    // Cleared unconditionally, success or failure.
    app.exporting = false;

    match result {
        Ok(path) => {
            app.mode = Mode::Notice(format!("Saved {}", path.display()));
        }
        Err(e) => {
            error!("PDF export failed: {e}");
            app.mode = Mode::Notice(format!("Failed to generate PDF: {e}"));
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::profile::{Field, FormState, ProfileStore};

    fn make_app(dir: &tempfile::TempDir) -> App {
        let config = Config {
            data_dir: dir.path().to_path_buf(),
            export_dir: dir.path().join("exports"),
            rust_log: "info".to_string(),
        };
        let form = FormState::load(ProfileStore::new(config.cache_path()));
        App::new(config, form)
    }

    fn press(app: &mut App, code: KeyCode) {
        press_with(app, code, KeyModifiers::NONE);
    }

    fn press_with(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
        let mut sink = Vec::new();
        handle_key(app, &mut sink, KeyEvent::new(code, modifiers));
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_typing_edits_the_focused_field() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = make_app(&dir);
        type_str(&mut app, "Jane Doe");
        assert_eq!(app.form.value(Field::Name), "Jane Doe");

        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "Engineer");
        assert_eq!(app.form.value(Field::Role), "Engineer");
        assert_eq!(app.form.value(Field::Name), "Jane Doe");
    }

    #[test]
    fn test_backspace_removes_last_char() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = make_app(&dir);
        type_str(&mut app, "Jane");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.form.value(Field::Name), "Jan");
    }

    #[test]
    fn test_tab_moves_focus_and_enter_inserts_newline_in_multiline() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = make_app(&dir);

        // Enter on a single-line field advances focus instead of editing.
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.focused_field(), Field::Role);

        while app.focused_field() != Field::Summary {
            press(&mut app, KeyCode::Tab);
        }
        type_str(&mut app, "line one");
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "line two");
        assert_eq!(app.form.value(Field::Summary), "line one\nline two");
    }

    #[test]
    fn test_export_refused_while_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = make_app(&dir);
        press_with(&mut app, KeyCode::Char('e'), KeyModifiers::CONTROL);
        assert!(matches!(app.mode, Mode::Notice(_)));
        assert!(!app.exporting);
        assert!(!dir.path().join("exports").exists(), "no file may be written");
    }

    #[test]
    fn test_export_writes_pdf_and_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = make_app(&dir);
        type_str(&mut app, "Jane Doe");
        press(&mut app, KeyCode::Enter); // -> Role
        press(&mut app, KeyCode::Enter); // -> Email
        type_str(&mut app, "jane@x.com");
        assert!(app.form.is_valid());

        press_with(&mut app, KeyCode::Char('e'), KeyModifiers::CONTROL);
        assert!(!app.exporting, "flag must be cleared after export");
        match &app.mode {
            Mode::Notice(msg) => assert!(msg.starts_with("Saved "), "got: {msg}"),
            other => panic!("expected notice, got {other:?}"),
        }
        assert!(dir.path().join("exports/Jane Doe.pdf").exists());
    }

    #[test]
    fn test_reset_requires_confirmation() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = make_app(&dir);
        type_str(&mut app, "Jane");

        press_with(&mut app, KeyCode::Char('r'), KeyModifiers::CONTROL);
        assert_eq!(app.mode, Mode::ConfirmReset);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.form.value(Field::Name), "Jane", "n must cancel");

        press_with(&mut app, KeyCode::Char('r'), KeyModifiers::CONTROL);
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.form.value(Field::Name), "");
    }

    #[test]
    fn test_any_key_dismisses_notice() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = make_app(&dir);
        app.mode = Mode::Notice("hello".to_string());
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.mode, Mode::Edit);
        // The dismissing key must not leak into the form.
        assert_eq!(app.form.value(Field::Name), "");
    }

    #[test]
    fn test_esc_and_ctrl_c_quit() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = make_app(&dir);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = make_app(&dir);
        press_with(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }
}
