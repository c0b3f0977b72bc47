//! Month-grid projection for the mood calendar.
//!
//! Pure date math over an owner's mood records: which weekday column day 1
//! lands in, how many cells the grid needs, and which mood tags each day.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::models::mood::{color_token, MoodCategory, MoodRecord};

/// A (year, month) pair with month in 1..=12. Constructed only through
/// [`MonthCursor::new`] / [`MonthCursor::current`], so navigation and date
/// construction can rely on the month being valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthCursor {
    year: i32,
    month: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn current(today: NaiveDate) -> Self {
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// January rolls back to December of the previous year.
    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// December rolls forward to January of the next year.
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("month is validated")
    }

    pub fn days_in_month(&self) -> u32 {
        (self.next().first_day() - chrono::Duration::days(1)).day()
    }

    /// Weekday column of day 1, Sunday = 0. Equals the number of blank
    /// placeholder cells the grid emits before day 1.
    pub fn leading_blanks(&self) -> u32 {
        self.first_day().weekday().num_days_from_sunday()
    }

    pub fn day(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }
}

#[derive(Debug, Serialize)]
pub struct CalendarCell {
    /// `None` for the leading blank placeholders.
    pub day: Option<u32>,
    pub category: Option<MoodCategory>,
    pub color: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub leading_blanks: u32,
    pub days_in_month: u32,
    pub cells: Vec<CalendarCell>,
}

/// Project a month grid from the owner's full record set. Filtering by month
/// happens here; a month with no matching records is simply a fully untagged
/// grid.
pub fn project_month(records: &[MoodRecord], cursor: MonthCursor) -> MonthGrid {
    let leading_blanks = cursor.leading_blanks();
    let days_in_month = cursor.days_in_month();

    let mut cells = Vec::with_capacity((leading_blanks + days_in_month) as usize);
    for _ in 0..leading_blanks {
        cells.push(CalendarCell {
            day: None,
            category: None,
            color: None,
        });
    }
    for day in 1..=days_in_month {
        let category = mood_on_day(records, cursor, day).map(|r| r.category);
        cells.push(CalendarCell {
            day: Some(day),
            category,
            color: Some(color_token(category)),
        });
    }

    MonthGrid {
        year: cursor.year(),
        month: cursor.month(),
        leading_blanks,
        days_in_month,
        cells,
    }
}

/// Day-level detail lookup: the first record in input order whose local day
/// matches. Callers order records by `occurred_at` ascending, so the earliest
/// mood logged that day wins.
pub fn mood_on_day(records: &[MoodRecord], cursor: MonthCursor, day: u32) -> Option<&MoodRecord> {
    let date = cursor.day(day)?;
    records.iter().find(|r| r.local_day() == date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::mood::FALLBACK_COLOR;
    use uuid::Uuid;

    fn record(owner: &str, category: MoodCategory, occurred_at: &str) -> MoodRecord {
        MoodRecord {
            id: Uuid::new_v4(),
            owner_id: owner.into(),
            category,
            notes: None,
            occurred_at: occurred_at.parse().unwrap(),
        }
    }

    #[test]
    fn cursor_wraps_backward_from_january() {
        let jan = MonthCursor::new(2025, 1).unwrap();
        assert_eq!(jan.prev(), MonthCursor::new(2024, 12).unwrap());
    }

    #[test]
    fn cursor_wraps_forward_from_december() {
        let dec = MonthCursor::new(2024, 12).unwrap();
        assert_eq!(dec.next(), MonthCursor::new(2025, 1).unwrap());
    }

    #[test]
    fn cursor_steps_within_a_year() {
        let jun = MonthCursor::new(2025, 6).unwrap();
        assert_eq!(jun.prev(), MonthCursor::new(2025, 5).unwrap());
        assert_eq!(jun.next(), MonthCursor::new(2025, 7).unwrap());
    }

    #[test]
    fn cursor_rejects_out_of_range_months() {
        assert!(MonthCursor::new(2025, 0).is_none());
        assert!(MonthCursor::new(2025, 13).is_none());
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(MonthCursor::new(2024, 2).unwrap().days_in_month(), 29);
        assert_eq!(MonthCursor::new(2025, 2).unwrap().days_in_month(), 28);
        assert_eq!(MonthCursor::new(2025, 4).unwrap().days_in_month(), 30);
        assert_eq!(MonthCursor::new(2025, 12).unwrap().days_in_month(), 31);
    }

    #[test]
    fn leading_blanks_is_weekday_of_day_one() {
        // 2025-06-01 is a Sunday, 2024-01-01 a Monday, 2024-09-01 a Sunday.
        assert_eq!(MonthCursor::new(2025, 6).unwrap().leading_blanks(), 0);
        assert_eq!(MonthCursor::new(2024, 1).unwrap().leading_blanks(), 1);
        assert_eq!(MonthCursor::new(2024, 9).unwrap().leading_blanks(), 0);
    }

    #[test]
    fn grid_cell_count_is_blanks_plus_days() {
        for (year, month) in [(2024, 2), (2025, 1), (2025, 6), (2025, 12)] {
            let cursor = MonthCursor::new(year, month).unwrap();
            let grid = project_month(&[], cursor);
            assert_eq!(
                grid.cells.len() as u32,
                cursor.leading_blanks() + cursor.days_in_month()
            );
        }
    }

    #[test]
    fn empty_month_renders_fully_untagged() {
        let cursor = MonthCursor::new(2025, 3).unwrap();
        let grid = project_month(&[], cursor);
        assert!(grid.cells.iter().all(|c| c.category.is_none()));
        assert!(grid
            .cells
            .iter()
            .filter(|c| c.day.is_some())
            .all(|c| c.color == Some(FALLBACK_COLOR)));
    }

    #[test]
    fn day_cells_tag_matching_records() {
        let records = vec![
            record("alice", MoodCategory::Happy, "2025-03-05T10:00:00Z"),
            record("alice", MoodCategory::Sad, "2025-03-20T08:30:00Z"),
            // Different month, must not leak into March.
            record("alice", MoodCategory::Angry, "2025-04-05T10:00:00Z"),
        ];
        let cursor = MonthCursor::new(2025, 3).unwrap();
        let grid = project_month(&records, cursor);

        let cell_for = |day: u32| grid.cells.iter().find(|c| c.day == Some(day)).unwrap();
        assert_eq!(cell_for(5).category, Some(MoodCategory::Happy));
        assert_eq!(cell_for(20).category, Some(MoodCategory::Sad));
        assert_eq!(cell_for(6).category, None);
    }

    #[test]
    fn first_record_in_input_order_wins_on_a_shared_day() {
        let records = vec![
            record("alice", MoodCategory::Relaxed, "2025-03-05T08:00:00Z"),
            record("alice", MoodCategory::Angry, "2025-03-05T19:00:00Z"),
        ];
        let cursor = MonthCursor::new(2025, 3).unwrap();
        let found = mood_on_day(&records, cursor, 5).unwrap();
        assert_eq!(found.category, MoodCategory::Relaxed);
    }

    #[test]
    fn day_lookup_clears_when_nothing_matches() {
        let records = vec![record("alice", MoodCategory::Happy, "2025-03-05T10:00:00Z")];
        let cursor = MonthCursor::new(2025, 3).unwrap();
        assert!(mood_on_day(&records, cursor, 6).is_none());
        // Day outside the month is a clean miss, not a panic.
        assert!(mood_on_day(&records, cursor, 32).is_none());
    }
}
