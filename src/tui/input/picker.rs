use crossterm::event::{KeyCode, KeyEvent};

use crate::model::MoodKind;
use crate::tui::app::App;

pub(super) fn handle_mood_picking(app: &mut App, key: KeyEvent) {
    let Some(current) = app.editor.state().highlighted_mood() else {
        return;
    };
    match key.code {
        KeyCode::Esc => app.close(),
        KeyCode::Char('r') => app.reset(),
        KeyCode::Char(c @ '1'..='5') => {
            if let Some(mood) = MoodKind::from_shortcut(c) {
                app.choose_mood(mood);
            }
        }
        KeyCode::Left | KeyCode::Char('h') => {
            let idx = current.index().saturating_sub(1);
            app.editor.highlight_mood(MoodKind::ALL[idx]);
        }
        KeyCode::Right | KeyCode::Char('l') => {
            let idx = (current.index() + 1).min(MoodKind::ALL.len() - 1);
            app.editor.highlight_mood(MoodKind::ALL[idx]);
        }
        KeyCode::Enter | KeyCode::Char(' ') => app.choose_mood(current),
        _ => {}
    }
}
