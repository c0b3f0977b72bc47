use axum::{extract::State, Extension, Json};
use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::auth::middleware::AuthUser;
use crate::error::{AppError, AppResult};
use crate::models::user::{User, UserProfile};
use crate::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct SetUsernameRequest {
    #[validate(length(min = 1, max = 50, message = "Nickname must be 1-50 characters"))]
    pub nickname: String,
    #[validate(length(min = 1, max = 30, message = "Username must be 1-30 characters"))]
    pub username: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub nickname: Option<String>,
    pub birthdate: Option<NaiveDate>,
    pub gender: Option<String>,
}

pub async fn set_username(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<SetUsernameRequest>,
) -> AppResult<Json<UserProfile>> {
    if body.nickname.trim().is_empty() || body.username.trim().is_empty() {
        return Err(AppError::Validation("Both fields are required.".into()));
    }
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let taken = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM users WHERE username = $1 AND id <> $2",
    )
    .bind(&body.username)
    .bind(auth_user.id)
    .fetch_one(&state.db)
    .await?;

    if taken > 0 {
        return Err(AppError::Conflict(
            "Username is already taken. Please choose another one.".into(),
        ));
    }

    let user = sqlx::query_as::<_, User>(
        r#"
        UPDATE users SET nickname = $2, username = $3, updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(auth_user.id)
    .bind(&body.nickname)
    .bind(&body.username)
    .fetch_optional(&state.db)
    .await?
    .ok_or(AppError::NotFound("User not found".into()))?;

    Ok(Json(user.into()))
}

pub async fn update_profile(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<UpdateProfileRequest>,
) -> AppResult<Json<UserProfile>> {
    let user = sqlx::query_as::<_, User>(
        r#"
        UPDATE users SET
            nickname = COALESCE($2, nickname),
            birthdate = COALESCE($3, birthdate),
            gender = COALESCE($4, gender),
            updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(auth_user.id)
    .bind(&body.nickname)
    .bind(body.birthdate)
    .bind(&body.gender)
    .fetch_optional(&state.db)
    .await?
    .ok_or(AppError::NotFound("User not found".into()))?;

    Ok(Json(user.into()))
}
