use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Owner attribution for moods logged without a session.
pub const GUEST_OWNER: &str = "guest";

/// The fixed set of mood categories. A mood record always carries exactly one
/// of these; anything else is rejected before it reaches storage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "mood_category", rename_all = "lowercase")]
pub enum MoodCategory {
    Happy,
    Sad,
    Neutral,
    Excited,
    Angry,
    Relaxed,
}

impl MoodCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Happy => "Happy",
            Self::Sad => "Sad",
            Self::Neutral => "Neutral",
            Self::Excited => "Excited",
            Self::Angry => "Angry",
            Self::Relaxed => "Relaxed",
        }
    }
}

/// Token shown for days with no mood, and for any value outside the fixed set.
pub const FALLBACK_COLOR: &str = "#e5e7eb";

/// Presentation color for a calendar cell. Total: `None` (no mood that day)
/// maps to the fallback token.
pub fn color_token(category: Option<MoodCategory>) -> &'static str {
    match category {
        Some(MoodCategory::Happy) => "#facc15",
        Some(MoodCategory::Sad) => "#60a5fa",
        Some(MoodCategory::Neutral) => "#9ca3af",
        Some(MoodCategory::Excited) => "#4ade80",
        Some(MoodCategory::Angry) => "#f87171",
        Some(MoodCategory::Relaxed) => "#c084fc",
        None => FALLBACK_COLOR,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MoodRecord {
    pub id: Uuid,
    pub owner_id: String,
    pub category: MoodCategory,
    pub notes: Option<String>,
    pub occurred_at: DateTime<Utc>,
}

impl MoodRecord {
    /// Calendar-day bucket, timezone-naive by design.
    pub fn local_day(&self) -> NaiveDate {
        self.occurred_at.date_naive()
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateMoodRequest {
    pub category: Option<MoodCategory>,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_token_covers_every_category() {
        let all = [
            MoodCategory::Happy,
            MoodCategory::Sad,
            MoodCategory::Neutral,
            MoodCategory::Excited,
            MoodCategory::Angry,
            MoodCategory::Relaxed,
        ];
        for category in all {
            assert_ne!(color_token(Some(category)), FALLBACK_COLOR);
        }
    }

    #[test]
    fn color_token_falls_back_without_category() {
        assert_eq!(color_token(None), FALLBACK_COLOR);
    }

    #[test]
    fn local_day_buckets_by_naive_date() {
        let record = MoodRecord {
            id: Uuid::new_v4(),
            owner_id: GUEST_OWNER.into(),
            category: MoodCategory::Happy,
            notes: None,
            occurred_at: "2025-03-09T23:45:00Z".parse().unwrap(),
        };
        assert_eq!(
            record.local_day(),
            NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()
        );
    }
}
