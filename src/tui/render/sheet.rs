use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::editor::EditorState;
use crate::model::MoodKind;
use crate::tui::app::App;
use crate::util::unicode;

/// Rows the sheet occupies when fully shown (borders included)
pub const SHEET_HEIGHT: u16 = 5;

/// Where the sheet lands inside `area` given its animated offset. The
/// offset is measured downward from the resting position at the bottom of
/// `area`; negative offsets lift it. Returns `None` when fully off screen.
pub fn sheet_rect(area: Rect, offset: f32) -> Option<Rect> {
    let height = SHEET_HEIGHT.min(area.height);
    let rest_top = (area.y + area.height - height) as i32;
    let top = rest_top + offset.round() as i32;
    let top = top.max(area.y as i32);
    let bottom = (top + height as i32).min((area.y + area.height) as i32);
    if top >= bottom {
        return None;
    }
    Some(Rect {
        x: area.x,
        y: top as u16,
        width: area.width,
        height: (bottom - top) as u16,
    })
}

/// Render the editor sheet over the bottom of `area`
pub fn render_sheet(frame: &mut Frame, app: &mut App, area: Rect) {
    let offset = app.animator.sheet_offset(SHEET_HEIGHT as f32);
    app.sheet_area = app
        .editor
        .sheet_state()
        .and_then(|_| sheet_rect(area, offset));
    let Some(rect) = app.sheet_area else {
        return;
    };
    let app = &*app;
    let Some(state) = app.editor.sheet_state() else {
        return;
    };
    let Some(session) = state.session() else {
        return;
    };

    let bg = app.theme.background;
    let title = match state {
        EditorState::NoteEditing { mood, .. } => {
            format!(" {} \u{00B7} {} ", session.cell, mood.label())
        }
        _ => format!(" {} ", session.cell),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.selection_border).bg(bg))
        .title(Span::styled(
            title,
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(bg));

    let inner_width = rect.width.saturating_sub(2) as usize;
    let mut lines = match state {
        EditorState::NoteEditing { session, prompt, .. } => {
            vec![note_line(app, &session.note, prompt, inner_width)]
        }
        _ => vec![picker_line(app, state.highlighted_mood())],
    };
    if app.config.ui.show_key_hints {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            hint_text(state),
            Style::default().fg(app.theme.dim).bg(bg),
        )));
    }

    frame.render_widget(Clear, rect);
    frame.render_widget(Paragraph::new(lines).block(block), rect);
}

fn picker_line(app: &App, highlighted: Option<MoodKind>) -> Line<'static> {
    let bg = app.theme.background;
    let mut spans = Vec::new();
    for (i, mood) in MoodKind::ALL.into_iter().enumerate() {
        let mut style = Style::default().fg(app.theme.mood_color(mood)).bg(bg);
        if highlighted == Some(mood) {
            style = style
                .bg(app.theme.selection_bg)
                .add_modifier(Modifier::BOLD);
        }
        spans.push(Span::styled(
            format!(" {} {} {} ", i + 1, mood.emoji(), mood.label()),
            style,
        ));
        spans.push(Span::styled(" ", Style::default().bg(bg)));
    }
    Line::from(spans)
}

/// Single-line note field with a block cursor. An empty note shows the
/// prompt as a placeholder.
fn note_line(app: &App, note: &str, prompt: &str, width: usize) -> Line<'static> {
    let bg = app.theme.background;
    let text_style = Style::default().fg(app.theme.text_bright).bg(bg);
    let cursor_style = Style::default()
        .fg(app.theme.background)
        .bg(app.theme.highlight);

    if note.is_empty() {
        let placeholder = unicode::truncate_to_width(prompt, width.saturating_sub(1));
        return Line::from(vec![
            Span::styled(" ", cursor_style),
            Span::styled(
                placeholder,
                Style::default()
                    .fg(app.theme.dim)
                    .bg(bg)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]);
    }

    let cursor = app.note_cursor.min(note.len());
    let (start, end) = unicode::visible_window(note, cursor, width);
    let mut spans = vec![Span::styled(note[start..cursor].to_string(), text_style)];
    match unicode::next_grapheme_boundary(note, cursor) {
        Some(next) if next <= end => {
            spans.push(Span::styled(note[cursor..next].to_string(), cursor_style));
            spans.push(Span::styled(note[next..end].to_string(), text_style));
        }
        _ => spans.push(Span::styled(" ", cursor_style)),
    }
    Line::from(spans)
}

fn hint_text(state: &EditorState) -> &'static str {
    match state {
        EditorState::NoteEditing { .. } => "Enter save  Ctrl-B back  Esc discard",
        _ => "1-5/\u{2190}\u{2192} choose  Enter pick  r reset  Esc close",
    }
}
