use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of day columns the grid lays out for every month
pub const GRID_DAYS: u8 = 31;

/// Calendar month, in year order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// Maximum valid day number (non-leap year)
    pub fn day_limit(self) -> u8 {
        match self {
            Month::Feb => 28,
            Month::Apr | Month::Jun | Month::Sep | Month::Nov => 30,
            _ => 31,
        }
    }

    /// 1-based month number
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    /// 0-based position in the year (row index in the grid)
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_number(n: u8) -> Option<Month> {
        match n {
            1..=12 => Some(Month::ALL[n as usize - 1]),
            _ => None,
        }
    }

    pub fn from_index(i: usize) -> Option<Month> {
        Month::ALL.get(i).copied()
    }

    /// Three-letter label ("Jan")
    pub fn label(self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Feb => "Feb",
            Month::Mar => "Mar",
            Month::Apr => "Apr",
            Month::May => "May",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Aug => "Aug",
            Month::Sep => "Sep",
            Month::Oct => "Oct",
            Month::Nov => "Nov",
            Month::Dec => "Dec",
        }
    }

    /// Next month, wrapping Dec -> Jan
    pub fn next(self) -> Month {
        Month::ALL[(self.index() + 1) % 12]
    }

    /// Previous month, wrapping Jan -> Dec
    pub fn prev(self) -> Month {
        Month::ALL[(self.index() + 11) % 12]
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether (month, day) names a real day of the (non-leap) year
pub fn is_valid(month: Month, day: u8) -> bool {
    day >= 1 && day <= month.day_limit()
}

/// A grid coordinate. May be a placeholder (e.g. Feb 30) that exists only
/// for layout; use [`DayCell::key`] before touching entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayCell {
    pub month: Month,
    pub day: u8,
}

impl DayCell {
    pub fn new(month: Month, day: u8) -> Self {
        DayCell { month, day }
    }

    pub fn is_valid(self) -> bool {
        is_valid(self.month, self.day)
    }

    /// Key for a valid cell, `None` for placeholders
    pub fn key(self) -> Option<CellKey> {
        if self.is_valid() {
            Some(CellKey {
                month: self.month,
                day: self.day,
            })
        } else {
            None
        }
    }
}

impl fmt::Display for DayCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month, self.day)
    }
}

/// A day cell known to be valid. Only constructed through [`DayCell::key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellKey {
    month: Month,
    day: u8,
}

impl CellKey {
    pub fn month(self) -> Month {
        self.month
    }

    pub fn day(self) -> u8 {
        self.day
    }

    pub fn cell(self) -> DayCell {
        DayCell::new(self.month, self.day)
    }
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.cell().fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_limits_match_non_leap_year() {
        let limits: Vec<u8> = Month::ALL.iter().map(|m| m.day_limit()).collect();
        assert_eq!(limits, vec![31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]);
        let total: u32 = limits.iter().map(|&d| d as u32).sum();
        assert_eq!(total, 365);
    }

    #[test]
    fn valid_days_within_limit() {
        for month in Month::ALL {
            for day in 1..=month.day_limit() {
                assert!(is_valid(month, day), "{} {} should be valid", month, day);
            }
        }
    }

    #[test]
    fn days_past_limit_are_invalid() {
        for month in Month::ALL {
            for day in (month.day_limit() + 1)..=GRID_DAYS + 1 {
                assert!(!is_valid(month, day), "{} {} should be invalid", month, day);
                assert!(DayCell::new(month, day).key().is_none());
            }
            assert!(!is_valid(month, 0));
        }
    }

    #[test]
    fn feb_29_and_30_rejected() {
        assert!(!is_valid(Month::Feb, 29));
        assert!(!is_valid(Month::Feb, 30));
        assert!(is_valid(Month::Feb, 28));
    }

    #[test]
    fn key_round_trips_coordinates() {
        let key = DayCell::new(Month::Mar, 15).key().unwrap();
        assert_eq!(key.month(), Month::Mar);
        assert_eq!(key.day(), 15);
        assert_eq!(key.cell(), DayCell::new(Month::Mar, 15));
        assert_eq!(key.to_string(), "Mar 15");
    }

    #[test]
    fn month_numbering_and_wrapping() {
        assert_eq!(Month::from_number(1), Some(Month::Jan));
        assert_eq!(Month::from_number(12), Some(Month::Dec));
        assert_eq!(Month::from_number(0), None);
        assert_eq!(Month::from_number(13), None);
        assert_eq!(Month::Oct.number(), 10);
        assert_eq!(Month::Dec.next(), Month::Jan);
        assert_eq!(Month::Jan.prev(), Month::Dec);
        assert_eq!(Month::from_index(11), Some(Month::Dec));
        assert_eq!(Month::from_index(12), None);
    }
}
