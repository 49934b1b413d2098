use ratatui::text::Span;

use crate::model::DayCell;
use crate::tui::app::App;
use crate::util::unicode;

/// One-line description of a grid cell for the status row, e.g.
/// "Mar 15 · Good · lunch with friends"
pub(super) fn cell_summary(app: &App, cell: DayCell) -> String {
    let Some(key) = cell.key() else {
        return format!("{} \u{00B7} not a day", cell);
    };
    let today = if app.today.is_some_and(|t| t.0 == cell) {
        " (today)"
    } else {
        ""
    };
    match app.store.get(key) {
        Some(entry) if entry.has_note() => format!(
            "{}{} \u{00B7} {} \u{00B7} {}",
            cell,
            today,
            entry.mood.label(),
            entry.note.trim()
        ),
        Some(entry) => format!("{}{} \u{00B7} {}", cell, today, entry.mood.label()),
        None => format!("{}{} \u{00B7} no entry", cell, today),
    }
}

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum()
}
