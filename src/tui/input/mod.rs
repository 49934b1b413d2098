mod grid;
mod note;
mod picker;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::editor::EditorState;

use super::app::App;
use super::render::grid_view::cell_at;

use grid::handle_grid;
use note::{handle_note_editing, insert_text};
use picker::handle_mood_picking;

/// Handle a key event for whatever currently has focus
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    app.status_message = None;

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // Help overlay intercepts all input
    if app.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return;
    }

    match app.editor.state() {
        EditorState::Closed => handle_grid(app, key),
        EditorState::MoodPicking { .. } => handle_mood_picking(app, key),
        EditorState::NoteEditing { .. } => handle_note_editing(app, key),
    }
}

/// Left click on a day cell presses it; the sheet is modal, so clicks are
/// ignored while it is open.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) || app.show_help {
        return;
    }
    if app.editor.is_open() {
        return;
    }
    // A sheet still sliding out covers the cells beneath it
    let pos = Position::new(mouse.column, mouse.row);
    if app.sheet_area.is_some_and(|sheet| sheet.contains(pos)) {
        return;
    }
    let Some(area) = app.grid_cells_area else {
        return;
    };
    if let Some(cell) = cell_at(area, mouse.column, mouse.row) {
        app.status_message = None;
        app.cursor = cell;
        app.press_cell(cell);
    }
}

/// Handle a bracketed paste event. Only the note field accepts text;
/// newlines are flattened to spaces.
pub fn handle_paste(app: &mut App, text: &str) {
    if text.is_empty() || !app.editor.state().is_note_editing() {
        return;
    }
    let clean = text.replace(['\r', '\n'], " ");
    insert_text(app, &clean);
}
