use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::GRID_DAYS;
use crate::tui::app::App;

pub(super) fn handle_grid(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Char('q')) => app.should_quit = true,
        (_, KeyCode::Char('?')) => app.show_help = true,

        (KeyModifiers::NONE, KeyCode::Left | KeyCode::Char('h')) => app.move_cursor(0, -1),
        (KeyModifiers::NONE, KeyCode::Right | KeyCode::Char('l')) => app.move_cursor(0, 1),
        (KeyModifiers::NONE, KeyCode::Up | KeyCode::Char('k')) => app.move_cursor(-1, 0),
        (KeyModifiers::NONE, KeyCode::Down | KeyCode::Char('j')) => app.move_cursor(1, 0),
        (_, KeyCode::Home | KeyCode::Char('0')) => app.move_cursor(0, -(GRID_DAYS as i32)),
        (_, KeyCode::End | KeyCode::Char('$')) => app.move_cursor(0, GRID_DAYS as i32),
        (_, KeyCode::Char('t')) => app.jump_to_today(),

        (_, KeyCode::Enter | KeyCode::Char(' ')) => {
            let cell = app.cursor;
            app.press_cell(cell);
        }
        _ => {}
    }
}
