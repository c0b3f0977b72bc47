//! Monthly mood statistics: one entry per calendar day of the current month.

use chrono::NaiveDate;

use crate::models::mood::{MoodCategory, MoodRecord};
use crate::services::calendar::MonthCursor;

/// Label rendered for days without a matching record.
pub const NO_MOOD_LABEL: &str = "No mood recorded";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyMood {
    pub date: NaiveDate,
    pub category: Option<MoodCategory>,
}

/// Project one entry per day of `today`'s month. Only records belonging to
/// `owner_id` are considered, even if the caller passes a wider set; a day
/// with several matching records resolves to the first in input order.
pub fn monthly_summary(records: &[MoodRecord], owner_id: &str, today: NaiveDate) -> Vec<DailyMood> {
    let cursor = MonthCursor::current(today);
    let first = cursor.first_day();

    (0..cursor.days_in_month())
        .map(|offset| {
            let date = first + chrono::Duration::days(offset as i64);
            let category = records
                .iter()
                .find(|r| r.owner_id == owner_id && r.local_day() == date)
                .map(|r| r.category);
            DailyMood { date, category }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
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

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn one_entry_per_day_of_the_current_month() {
        let summary = monthly_summary(&[], "alice", day(2024, 2, 15));
        assert_eq!(summary.len(), 29);
        assert_eq!(summary.first().unwrap().date, day(2024, 2, 1));
        assert_eq!(summary.last().unwrap().date, day(2024, 2, 29));
    }

    #[test]
    fn days_without_records_report_no_mood() {
        let records = vec![record("alice", MoodCategory::Excited, "2025-06-10T12:00:00Z")];
        let summary = monthly_summary(&records, "alice", day(2025, 6, 20));

        for entry in &summary {
            if entry.date == day(2025, 6, 10) {
                assert_eq!(entry.category, Some(MoodCategory::Excited));
            } else {
                assert_eq!(entry.category, None);
            }
        }
    }

    #[test]
    fn other_owners_records_never_leak() {
        let records = vec![
            record("alice", MoodCategory::Happy, "2025-06-10T09:00:00Z"),
            record("bob", MoodCategory::Angry, "2025-06-10T09:30:00Z"),
            record("bob", MoodCategory::Sad, "2025-06-11T09:30:00Z"),
        ];
        let summary = monthly_summary(&records, "alice", day(2025, 6, 20));

        let on = |d: u32| {
            summary
                .iter()
                .find(|e| e.date == day(2025, 6, d))
                .unwrap()
                .category
        };
        assert_eq!(on(10), Some(MoodCategory::Happy));
        assert_eq!(on(11), None);
    }

    #[test]
    fn shared_day_resolves_to_first_in_input_order() {
        let records = vec![
            record("alice", MoodCategory::Neutral, "2025-06-10T08:00:00Z"),
            record("alice", MoodCategory::Excited, "2025-06-10T21:00:00Z"),
        ];
        let summary = monthly_summary(&records, "alice", day(2025, 6, 1));
        let entry = summary.iter().find(|e| e.date == day(2025, 6, 10)).unwrap();
        assert_eq!(entry.category, Some(MoodCategory::Neutral));
    }

    #[test]
    fn records_outside_the_month_are_ignored() {
        let records = vec![record("alice", MoodCategory::Happy, "2025-05-31T23:00:00Z")];
        let summary = monthly_summary(&records, "alice", day(2025, 6, 1));
        assert!(summary.iter().all(|e| e.category.is_none()));
    }
}
