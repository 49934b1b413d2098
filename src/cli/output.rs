use serde::Serialize;

use crate::model::{GRID_DAYS, MoodKind, Month};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct MoodJson {
    pub key: &'static str,
    pub label: &'static str,
    pub emoji: &'static str,
    pub color: &'static str,
    pub shortcut: char,
    pub prompts: &'static [&'static str],
}

#[derive(Serialize)]
pub struct MonthJson {
    pub month: Month,
    pub number: u8,
    pub days: u8,
    /// Grid columns past the month's last day
    pub placeholders: u8,
}

#[derive(Serialize)]
pub struct CalendarJson {
    pub columns: u8,
    pub valid_days: u32,
    pub months: Vec<MonthJson>,
}

pub fn mood_json(mood: MoodKind) -> MoodJson {
    MoodJson {
        key: mood.key(),
        label: mood.label(),
        emoji: mood.emoji(),
        color: mood.default_color(),
        shortcut: char::from(b'1' + mood.index() as u8),
        prompts: mood.prompts(),
    }
}

pub fn calendar_json() -> CalendarJson {
    let months: Vec<MonthJson> = Month::ALL
        .into_iter()
        .map(|month| MonthJson {
            month,
            number: month.number(),
            days: month.day_limit(),
            placeholders: GRID_DAYS - month.day_limit(),
        })
        .collect();
    CalendarJson {
        columns: GRID_DAYS,
        valid_days: months.iter().map(|m| m.days as u32).sum(),
        months,
    }
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

/// One block per mood: header line then indented prompts
pub fn format_moods() -> String {
    let mut out = String::new();
    for mood in MoodKind::ALL {
        let m = mood_json(mood);
        out.push_str(&format!(
            "{} {} {:<6} {}\n",
            m.shortcut, m.emoji, m.label, m.color
        ));
        for prompt in m.prompts {
            out.push_str(&format!("    {}\n", prompt));
        }
    }
    out
}

/// Days-per-month table, placeholders drawn as dots
pub fn format_calendar() -> String {
    let cal = calendar_json();
    let mut out = String::new();
    for m in &cal.months {
        out.push_str(&format!(
            "{} {:>2} {}{}\n",
            m.month.label(),
            m.days,
            "#".repeat(m.days as usize),
            ".".repeat(m.placeholders as usize)
        ));
    }
    out.push_str(&format!("{} days\n", cal.valid_days));
    out
}
