use axum::{
    extract::{Path, State},
    Extension, Json,
};
use uuid::Uuid;

use crate::auth::middleware::AuthUser;
use crate::error::{AppError, AppResult};
use crate::models::journal::{CreateEntryRequest, EntryWithTone, JournalEntry};
use crate::services::sentiment;
use crate::AppState;

/// Titles are stored capitalized word by word, matching how they are shown.
fn capitalize_title(title: &str) -> String {
    title
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub async fn create_entry(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<CreateEntryRequest>,
) -> AppResult<Json<JournalEntry>> {
    if body.title.trim().is_empty() || body.content.trim().is_empty() {
        return Err(AppError::Validation(
            "Title and content are both required".into(),
        ));
    }

    let entry = sqlx::query_as::<_, JournalEntry>(
        r#"
        INSERT INTO journal_entries (id, user_id, title, content, created_at)
        VALUES ($1, $2, $3, $4, NOW())
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(auth_user.id)
    .bind(capitalize_title(&body.title))
    .bind(&body.content)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(entry))
}

pub async fn list_entries(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<Vec<EntryWithTone>>> {
    let entries = sqlx::query_as::<_, JournalEntry>(
        r#"
        SELECT * FROM journal_entries
        WHERE user_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(auth_user.id)
    .fetch_all(&state.db)
    .await?;

    let entries = entries
        .into_iter()
        .map(|entry| {
            let tone = sentiment::tone(&entry.content).label();
            EntryWithTone { entry, tone }
        })
        .collect();

    Ok(Json(entries))
}

pub async fn delete_entry(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(entry_id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    let result = sqlx::query("DELETE FROM journal_entries WHERE id = $1 AND user_id = $2")
        .bind(entry_id)
        .bind(auth_user.id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Journal entry not found".into()));
    }

    Ok(Json(serde_json::json!({ "deleted": true })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_each_word() {
        assert_eq!(capitalize_title("a good day"), "A Good Day");
        assert_eq!(capitalize_title("MONDAY blues"), "Monday Blues");
    }

    #[test]
    fn single_words_and_empty_titles_survive() {
        assert_eq!(capitalize_title("gratitude"), "Gratitude");
        assert_eq!(capitalize_title(""), "");
    }

    #[test]
    fn extra_spaces_are_preserved() {
        assert_eq!(capitalize_title("two  spaces"), "Two  Spaces");
    }
}
