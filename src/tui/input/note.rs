use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;
use crate::util::unicode;

pub(super) fn handle_note_editing(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => app.close(),
        (_, KeyCode::Enter) => app.save(),
        (m, KeyCode::Char('s')) if m.contains(KeyModifiers::CONTROL) => app.save(),
        (m, KeyCode::Char('b')) if m.contains(KeyModifiers::CONTROL) => app.back(),
        (_, KeyCode::BackTab) => app.back(),

        (_, KeyCode::Home) => app.note_cursor = 0,
        (_, KeyCode::End) => app.note_cursor = draft_len(app),
        // Word movement (Alt+arrow, or readline Alt+B / Alt+F)
        (m, KeyCode::Left | KeyCode::Char('b')) if m.contains(KeyModifiers::ALT) => {
            if let Some(pos) = app
                .draft_note()
                .map(|n| unicode::word_boundary_left(n, app.note_cursor))
            {
                app.note_cursor = pos;
            }
        }
        (m, KeyCode::Right | KeyCode::Char('f')) if m.contains(KeyModifiers::ALT) => {
            if let Some(pos) = app
                .draft_note()
                .map(|n| unicode::word_boundary_right(n, app.note_cursor))
            {
                app.note_cursor = pos;
            }
        }
        (_, KeyCode::Left) => {
            if let Some(prev) = app
                .draft_note()
                .and_then(|n| unicode::prev_grapheme_boundary(n, app.note_cursor))
            {
                app.note_cursor = prev;
            }
        }
        (_, KeyCode::Right) => {
            if let Some(next) = app
                .draft_note()
                .and_then(|n| unicode::next_grapheme_boundary(n, app.note_cursor))
            {
                app.note_cursor = next;
            }
        }

        // Word backspace (Alt or Ctrl, and Ctrl-W)
        (m, KeyCode::Backspace)
            if m.contains(KeyModifiers::ALT) || m.contains(KeyModifiers::CONTROL) =>
        {
            delete_word_left(app)
        }
        (m, KeyCode::Char('w')) if m.contains(KeyModifiers::CONTROL) => delete_word_left(app),
        (_, KeyCode::Backspace) => {
            let cursor = app.note_cursor;
            let Some(note) = app.editor.note_mut() else {
                return;
            };
            if let Some(prev) = unicode::prev_grapheme_boundary(note, cursor) {
                note.drain(prev..cursor);
                app.note_cursor = prev;
            }
        }
        (_, KeyCode::Delete) => {
            let cursor = app.note_cursor;
            let Some(note) = app.editor.note_mut() else {
                return;
            };
            if let Some(next) = unicode::next_grapheme_boundary(note, cursor) {
                note.drain(cursor..next);
            }
        }

        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            let mut buf = [0u8; 4];
            insert_text(app, c.encode_utf8(&mut buf));
        }
        _ => {}
    }
}

/// Insert text at the note cursor and move the cursor past it
pub(super) fn insert_text(app: &mut App, text: &str) {
    let Some(note) = app.editor.note_mut() else {
        return;
    };
    let cursor = app.note_cursor.min(note.len());
    note.insert_str(cursor, text);
    app.note_cursor = cursor + text.len();
}

fn delete_word_left(app: &mut App) {
    let cursor = app.note_cursor;
    let Some(note) = app.editor.note_mut() else {
        return;
    };
    let start = unicode::word_boundary_left(note, cursor);
    note.drain(start..cursor);
    app.note_cursor = start;
}

fn draft_len(app: &App) -> usize {
    app.draft_note().map_or(0, str::len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Today;
    use crate::model::{AppConfig, DayCell, MoodKind, Month};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn editing_app(note: &str) -> App {
        let mut app = App::new(
            AppConfig::default(),
            Some(Today(DayCell::new(Month::Jun, 1))),
            StdRng::seed_from_u64(3),
        );
        app.press_cell(DayCell::new(Month::Jun, 1));
        app.choose_mood(MoodKind::Okay);
        insert_text(&mut app, note);
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn backspace_removes_whole_grapheme() {
        let mut app = editing_app("ok 👍🏽");
        handle_note_editing(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.draft_note(), Some("ok "));
        assert_eq!(app.note_cursor, 3);
    }

    #[test]
    fn cursor_stops_at_edges() {
        let mut app = editing_app("ab");
        handle_note_editing(&mut app, key(KeyCode::Right));
        assert_eq!(app.note_cursor, 2);
        handle_note_editing(&mut app, key(KeyCode::Home));
        handle_note_editing(&mut app, key(KeyCode::Left));
        handle_note_editing(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.note_cursor, 0);
        assert_eq!(app.draft_note(), Some("ab"));
        handle_note_editing(&mut app, key(KeyCode::End));
        handle_note_editing(&mut app, key(KeyCode::Delete));
        assert_eq!(app.draft_note(), Some("ab"));
    }

    #[test]
    fn shift_chars_insert_uppercase() {
        let mut app = editing_app("");
        handle_note_editing(&mut app, KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT));
        assert_eq!(app.draft_note(), Some("A"));
    }

    #[test]
    fn ctrl_s_saves() {
        let mut app = editing_app("done");
        handle_note_editing(&mut app, KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        assert!(app.editor.state().is_closed());
        assert_eq!(app.store.len(), 1);
    }
}
