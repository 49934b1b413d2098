pub mod grid_view;
pub mod help_overlay;
pub mod helpers;
pub mod sheet;
pub mod status_row;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use super::app::App;

/// Main render function, dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: title (1 row) | gap | grid + sheet | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_title(frame, app, chunks[0]);

    let content = chunks[2];
    let grid_area = Rect {
        x: content.x + 1,
        width: content.width.saturating_sub(1),
        ..content
    };
    grid_view::render_grid(frame, app, grid_area);

    // The sheet slides over the grid from the bottom of the content area
    sheet::render_sheet(frame, app, content);

    status_row::render_status_row(frame, app, chunks[3]);

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, frame.area());
    }
}

/// App name on the left, mood tally on the right
fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let mut spans = vec![Span::styled(
        " moodgrid",
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )];

    let mut tally = vec![Span::styled(
        format!("{} logged  ", app.store.len()),
        Style::default().fg(app.theme.dim).bg(bg),
    )];
    for (mood, count) in app.store.count_by_mood() {
        tally.push(Span::styled(
            format!("{} {}  ", mood.emoji(), count),
            Style::default().fg(app.theme.mood_color(mood)).bg(bg),
        ));
    }

    let used = helpers::spans_width(&spans);
    let tally_width = helpers::spans_width(&tally);
    if used + tally_width < area.width as usize {
        spans.push(Span::styled(
            " ".repeat(area.width as usize - used - tally_width),
            Style::default().bg(bg),
        ));
        spans.extend(tally);
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}
