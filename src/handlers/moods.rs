use axum::{
    extract::{Query, State},
    Extension, Json,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::middleware::MoodOwner;
use crate::error::{AppError, AppResult};
use crate::models::mood::{CreateMoodRequest, MoodRecord};
use crate::services::calendar::{self, MonthCursor, MonthGrid};
use crate::services::stats::{self, NO_MOOD_LABEL};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct DayQuery {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

#[derive(Debug, Serialize)]
pub struct CalendarResponse {
    #[serde(flatten)]
    pub grid: MonthGrid,
    /// Cursor for backward navigation; January wraps to the previous December.
    pub prev: MonthCursor,
    /// Cursor for forward navigation; December wraps to the next January.
    pub next: MonthCursor,
}

#[derive(Debug, Serialize)]
pub struct DailyMoodEntry {
    pub date: NaiveDate,
    pub mood: String,
}

/// All of an owner's records, oldest first. The ascending order is what makes
/// the projections' first-match-per-day rule mean "earliest logged that day."
async fn owner_moods(db: &sqlx::PgPool, owner_id: &str) -> AppResult<Vec<MoodRecord>> {
    let records = sqlx::query_as::<_, MoodRecord>(
        "SELECT * FROM moods WHERE owner_id = $1 ORDER BY occurred_at ASC",
    )
    .bind(owner_id)
    .fetch_all(db)
    .await?;
    Ok(records)
}

fn cursor_from_query(query: &CalendarQuery) -> AppResult<MonthCursor> {
    let today = Utc::now().date_naive();
    let current = MonthCursor::current(today);
    let year = query.year.unwrap_or_else(|| current.year());
    let month = query.month.unwrap_or_else(|| current.month());
    MonthCursor::new(year, month)
        .ok_or_else(|| AppError::Validation("Month must be between 1 and 12".into()))
}

pub async fn create_mood(
    State(state): State<AppState>,
    Extension(owner): Extension<MoodOwner>,
    Json(body): Json<CreateMoodRequest>,
) -> AppResult<Json<MoodRecord>> {
    // A record without a category never reaches storage.
    let category = body
        .category
        .ok_or_else(|| AppError::Validation("Please select a mood.".into()))?;

    let record = sqlx::query_as::<_, MoodRecord>(
        r#"
        INSERT INTO moods (id, owner_id, category, notes, occurred_at)
        VALUES ($1, $2, $3, $4, NOW())
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&owner.0)
    .bind(category)
    .bind(&body.notes)
    .fetch_one(&state.db)
    .await?;

    tracing::debug!(owner = %owner.0, category = record.category.label(), "Mood saved");

    Ok(Json(record))
}

pub async fn list_moods(
    State(state): State<AppState>,
    Extension(owner): Extension<MoodOwner>,
) -> AppResult<Json<Vec<MoodRecord>>> {
    let records = owner_moods(&state.db, &owner.0).await?;
    Ok(Json(records))
}

pub async fn calendar(
    State(state): State<AppState>,
    Extension(owner): Extension<MoodOwner>,
    Query(query): Query<CalendarQuery>,
) -> AppResult<Json<CalendarResponse>> {
    let cursor = cursor_from_query(&query)?;
    let records = owner_moods(&state.db, &owner.0).await?;

    Ok(Json(CalendarResponse {
        grid: calendar::project_month(&records, cursor),
        prev: cursor.prev(),
        next: cursor.next(),
    }))
}

/// Detail for one calendar day: the full record (category + notes) when the
/// day is tagged, `null` when it is not.
pub async fn day_detail(
    State(state): State<AppState>,
    Extension(owner): Extension<MoodOwner>,
    Query(query): Query<DayQuery>,
) -> AppResult<Json<Option<MoodRecord>>> {
    let cursor = MonthCursor::new(query.year, query.month)
        .ok_or_else(|| AppError::Validation("Month must be between 1 and 12".into()))?;
    let records = owner_moods(&state.db, &owner.0).await?;

    let detail = calendar::mood_on_day(&records, cursor, query.day).cloned();
    Ok(Json(detail))
}

pub async fn monthly_stats(
    State(state): State<AppState>,
    Extension(owner): Extension<MoodOwner>,
) -> AppResult<Json<Vec<DailyMoodEntry>>> {
    let records = owner_moods(&state.db, &owner.0).await?;
    let today = Utc::now().date_naive();

    let entries = stats::monthly_summary(&records, &owner.0, today)
        .into_iter()
        .map(|daily| DailyMoodEntry {
            date: daily.date,
            mood: daily
                .category
                .map(|c| c.label().to_string())
                .unwrap_or_else(|| NO_MOOD_LABEL.to_string()),
        })
        .collect();

    Ok(Json(entries))
}
