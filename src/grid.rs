//! Per-cell visual descriptor handed to the renderer.

use chrono::Datelike;

use crate::anim::{Animator, BurstFrame};
use crate::model::{DayCell, EntryStore, GRID_DAYS, MoodKind, Month};

/// Everything the renderer needs to draw one grid cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellView {
    pub is_valid: bool,
    pub is_today: bool,
    pub fill: Option<MoodKind>,
    /// Cell carries a non-blank note (drawn with a heavier mark)
    pub has_note: bool,
    pub burst: Option<BurstFrame>,
}

impl CellView {
    pub const PLACEHOLDER: CellView = CellView {
        is_valid: false,
        is_today: false,
        fill: None,
        has_note: false,
        burst: None,
    };
}

/// Today's position on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Today(pub DayCell);

impl Today {
    pub fn from_date(date: impl Datelike) -> Option<Today> {
        let month = Month::from_number(date.month() as u8)?;
        Some(Today(DayCell::new(month, date.day() as u8)))
    }

    /// Local wall-clock date
    pub fn now() -> Option<Today> {
        Today::from_date(chrono::Local::now().date_naive())
    }
}

/// Derive the visual state of `cell`
pub fn describe_cell(
    cell: DayCell,
    store: &EntryStore,
    today: Option<Today>,
    animator: &Animator,
    now_ms: u64,
) -> CellView {
    let Some(key) = cell.key() else {
        return CellView::PLACEHOLDER;
    };
    let entry = store.get(key);
    CellView {
        is_valid: true,
        is_today: today.is_some_and(|t| t.0 == cell),
        fill: entry.map(|e| e.mood),
        has_note: entry.is_some_and(|e| e.has_note()),
        burst: animator.burst_at(key, now_ms),
    }
}

/// All grid coordinates, row by row (month) then column by column (day)
pub fn all_cells() -> impl Iterator<Item = DayCell> {
    Month::ALL
        .into_iter()
        .flat_map(|m| (1..=GRID_DAYS).map(move |d| DayCell::new(m, d)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::Effect;
    use crate::model::{AnimationConfig, Entry};
    use chrono::NaiveDate;

    fn animator() -> Animator {
        Animator::new(&AnimationConfig::default())
    }

    #[test]
    fn placeholder_cells_describe_as_invalid() {
        let store = EntryStore::new();
        let view = describe_cell(DayCell::new(Month::Feb, 30), &store, None, &animator(), 0);
        assert_eq!(view, CellView::PLACEHOLDER);
    }

    #[test]
    fn filled_cell_with_note() {
        let mut store = EntryStore::new();
        let cell = DayCell::new(Month::Mar, 15);
        store.upsert(cell.key().unwrap(), Entry::new(MoodKind::Good, "lunch"));
        let view = describe_cell(cell, &store, None, &animator(), 0);
        assert!(view.is_valid);
        assert_eq!(view.fill, Some(MoodKind::Good));
        assert!(view.has_note);
        assert!(!view.is_today);
    }

    #[test]
    fn blank_note_is_not_marked() {
        let mut store = EntryStore::new();
        let cell = DayCell::new(Month::Mar, 15);
        store.upsert(cell.key().unwrap(), Entry::new(MoodKind::Bad, "   "));
        let view = describe_cell(cell, &store, None, &animator(), 0);
        assert_eq!(view.fill, Some(MoodKind::Bad));
        assert!(!view.has_note);
    }

    #[test]
    fn today_is_highlighted() {
        let store = EntryStore::new();
        let today = Today::from_date(NaiveDate::from_ymd_opt(2026, 10, 15).unwrap());
        assert_eq!(today, Some(Today(DayCell::new(Month::Oct, 15))));
        let view = describe_cell(DayCell::new(Month::Oct, 15), &store, today, &animator(), 0);
        assert!(view.is_today);
        let other = describe_cell(DayCell::new(Month::Oct, 16), &store, today, &animator(), 0);
        assert!(!other.is_today);
    }

    #[test]
    fn leap_day_highlights_nothing() {
        let store = EntryStore::new();
        let today = Today::from_date(NaiveDate::from_ymd_opt(2028, 2, 29).unwrap());
        let view = describe_cell(DayCell::new(Month::Feb, 29), &store, today, &animator(), 0);
        assert!(!view.is_today);
        assert!(!view.is_valid);
    }

    #[test]
    fn bursting_cell_reports_frame() {
        let store = EntryStore::new();
        let cell = DayCell::new(Month::Mar, 15);
        let mut anim = animator();
        anim.apply(
            Effect::Burst {
                cell: cell.key().unwrap(),
                glyph: MoodKind::Great.emoji(),
            },
            0,
        );
        let view = describe_cell(cell, &store, None, &anim, 500);
        assert_eq!(view.burst.unwrap().glyph, MoodKind::Great.emoji());
        let later = describe_cell(cell, &store, None, &anim, 1000);
        assert!(later.burst.is_none());
    }

    #[test]
    fn grid_has_372_cells_365_valid() {
        assert_eq!(all_cells().count(), 372);
        assert_eq!(all_cells().filter(|c| c.is_valid()).count(), 365);
    }
}
