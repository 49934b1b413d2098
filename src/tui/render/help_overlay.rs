use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let overlay_area = centered_rect(70, 90, area);
    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(" Grid", header_style)));
    add_binding(
        &mut lines,
        " \u{2190}\u{2192}\u{2191}\u{2193}/hjkl",
        "Move cursor",
        key_style,
        desc_style,
    );
    add_binding(
        &mut lines,
        " Home/End",
        "First/last day",
        key_style,
        desc_style,
    );
    add_binding(
        &mut lines,
        " t",
        "Jump to today",
        key_style,
        desc_style,
    );
    add_binding(
        &mut lines,
        " Enter/click",
        "Open day",
        key_style,
        desc_style,
    );
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Mood picker", header_style)));
    add_binding(
        &mut lines,
        " 1-5",
        "Choose mood",
        key_style,
        desc_style,
    );
    add_binding(
        &mut lines,
        " \u{2190}\u{2192} Enter",
        "Highlight and choose",
        key_style,
        desc_style,
    );
    add_binding(
        &mut lines,
        " r",
        "Reset day",
        key_style,
        desc_style,
    );
    add_binding(
        &mut lines,
        " Esc",
        "Close",
        key_style,
        desc_style,
    );
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Note", header_style)));
    add_binding(
        &mut lines,
        " Enter/Ctrl+S",
        "Save",
        key_style,
        desc_style,
    );
    add_binding(
        &mut lines,
        " Ctrl+B/S-Tab",
        "Back to moods",
        key_style,
        desc_style,
    );
    add_binding(
        &mut lines,
        " Alt+\u{2190}\u{2192}",
        "Move by word",
        key_style,
        desc_style,
    );
    add_binding(
        &mut lines,
        " Ctrl+W",
        "Delete word",
        key_style,
        desc_style,
    );
    add_binding(
        &mut lines,
        " Esc",
        "Discard and close",
        key_style,
        desc_style,
    );
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Global", header_style)));
    add_binding(
        &mut lines,
        " ?",
        "Toggle this help",
        key_style,
        desc_style,
    );
    add_binding(
        &mut lines,
        " q/Ctrl+C",
        "Quit",
        key_style,
        desc_style,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(" Key Bindings ", header_style))
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));

    frame.render_widget(paragraph, overlay_area);
}

fn add_binding<'a>(
    lines: &mut Vec<Line<'a>>,
    key: &'a str,
    desc: &'a str,
    key_style: Style,
    desc_style: Style,
) {
    let key_width = 16;
    let padded_key = format!("{:<width$}", key, width = key_width);
    lines.push(Line::from(vec![
        Span::styled(padded_key, key_style),
        Span::styled(desc, desc_style),
    ]));
}

/// Create a centered rectangle of the given percentage of the parent
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
