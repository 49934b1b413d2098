use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::grid::CellView;
use crate::model::{DayCell, GRID_DAYS, Month};
use crate::tui::app::App;

/// Columns per day cell
pub const CELL_WIDTH: u16 = 2;
/// Month label column ("Jan ") plus a gap
pub const LABEL_WIDTH: u16 = 5;

const PLACEHOLDER_GLYPH: &str = "\u{00B7}\u{00B7}"; // ··
const EMPTY_GLYPH: &str = "\u{00B7} "; // ·
const FILLED_GLYPH: &str = "\u{25A0} "; // ■
const NOTE_GLYPH: &str = "\u{25C6} "; // ◆

/// Size of the drawn grid: label column + 31 cells, header row + 12 months
pub fn grid_size() -> (u16, u16) {
    (
        LABEL_WIDTH + GRID_DAYS as u16 * CELL_WIDTH,
        1 + Month::ALL.len() as u16,
    )
}

/// Grid coordinate under a terminal position inside `cells`, the area the
/// day cells occupy. Placeholder coordinates are returned too.
pub fn cell_at(cells: Rect, col: u16, row: u16) -> Option<DayCell> {
    if col < cells.x || row < cells.y {
        return None;
    }
    let month = Month::from_index((row - cells.y) as usize)?;
    let day = (col - cells.x) / CELL_WIDTH + 1;
    if day > GRID_DAYS as u16 {
        return None;
    }
    Some(DayCell::new(month, day as u8))
}

/// Render the month-by-day grid and remember where the cells landed
pub fn render_grid(frame: &mut Frame, app: &mut App, area: Rect) {
    let (w, h) = grid_size();
    let grid_area = Rect {
        x: area.x,
        y: area.y,
        width: w.min(area.width),
        height: h.min(area.height),
    };
    if grid_area.height == 0 {
        app.grid_cells_area = None;
        return;
    }

    let bg = app.theme.background;
    let mut lines: Vec<Line> = Vec::with_capacity(h as usize);
    lines.push(header_line(app));

    for month in Month::ALL {
        let cursor_row = app.cursor.month == month;
        let label_style = if cursor_row {
            Style::default().fg(app.theme.text_bright).bg(bg)
        } else {
            Style::default().fg(app.theme.dim).bg(bg)
        };
        let mut spans = vec![Span::styled(
            format!("{:<width$}", month.label(), width = LABEL_WIDTH as usize),
            label_style,
        )];
        for day in 1..=GRID_DAYS {
            let cell = DayCell::new(month, day);
            let view = app.cell_view(cell);
            spans.push(cell_span(app, &view, cell == app.cursor));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(bg)),
        grid_area,
    );

    app.grid_cells_area = Some(Rect {
        x: grid_area.x + LABEL_WIDTH,
        y: grid_area.y + 1,
        width: grid_area.width.saturating_sub(LABEL_WIDTH),
        height: grid_area.height.saturating_sub(1),
    });
}

/// Day numbers every fifth column
fn header_line(app: &App) -> Line<'static> {
    let style = Style::default().fg(app.theme.dim).bg(app.theme.background);
    let mut header = " ".repeat(LABEL_WIDTH as usize);
    for day in 1..=GRID_DAYS {
        if day == 1 || day % 5 == 0 {
            header.push_str(&format!("{:<2}", day));
        } else {
            header.push_str("  ");
        }
    }
    Line::from(Span::styled(header, style))
}

fn cell_span(app: &App, view: &CellView, is_cursor: bool) -> Span<'static> {
    let theme = &app.theme;
    let bg = if is_cursor {
        theme.selection_bg
    } else {
        theme.background
    };

    if !view.is_valid {
        return Span::styled(PLACEHOLDER_GLYPH, Style::default().fg(theme.placeholder).bg(bg));
    }

    if let Some(frame) = view.burst {
        let mut style = Style::default().bg(bg);
        if frame.scale < 1.5 {
            style = style.add_modifier(Modifier::BOLD);
        }
        if frame.opacity < 0.5 {
            style = style.add_modifier(Modifier::DIM);
        }
        return Span::styled(frame.glyph, style);
    }

    let (glyph, fg) = match view.fill {
        Some(mood) if view.has_note => (NOTE_GLYPH, theme.mood_color(mood)),
        Some(mood) => (FILLED_GLYPH, theme.mood_color(mood)),
        None if view.is_today => (EMPTY_GLYPH, theme.today),
        None => (EMPTY_GLYPH, theme.empty_cell),
    };
    let mut style = Style::default().fg(fg).bg(bg);
    if view.is_today {
        style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    }
    Span::styled(glyph, style)
}
