use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

use super::helpers::{cell_summary, spans_width};

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans = match &app.status_message {
        Some(msg) => vec![Span::styled(
            msg.clone(),
            Style::default().fg(app.theme.highlight).bg(bg),
        )],
        None => vec![Span::styled(
            cell_summary(app, app.cursor),
            Style::default().fg(app.theme.text).bg(bg),
        )],
    };

    // Editor state and help hint on the right, when they fit
    if app.config.ui.show_key_hints {
        let hint = if app.editor.is_open() {
            app.editor.state().name().to_string()
        } else {
            "? help".to_string()
        };
        let used = spans_width(&spans);
        let hint_width = hint.chars().count();
        if used + hint_width < width {
            spans.push(Span::styled(
                " ".repeat(width - used - hint_width),
                Style::default().bg(bg),
            ));
            spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
