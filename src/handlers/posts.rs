use axum::{
    extract::{Path, State},
    Extension, Json,
};
use uuid::Uuid;

use crate::auth::middleware::AuthUser;
use crate::error::{AppError, AppResult};
use crate::models::post::{author_label, CommunityPost, CreatePostRequest, LoveResponse};
use crate::services::gate;
use crate::AppState;

/// Full feed, newest first. Stored order is insertion order.
pub async fn list_posts(State(state): State<AppState>) -> AppResult<Json<Vec<CommunityPost>>> {
    let posts =
        sqlx::query_as::<_, CommunityPost>("SELECT * FROM posts ORDER BY posted_at DESC")
            .fetch_all(&state.db)
            .await?;
    Ok(Json(posts))
}

/// Gate-accepted content becomes a published post; rejected drafts are
/// discarded without touching storage.
pub async fn submit_post(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<CreatePostRequest>,
) -> AppResult<Json<CommunityPost>> {
    if body.content.trim().is_empty() {
        return Err(AppError::Validation(gate::EMPTY_MESSAGE.into()));
    }
    if !gate::accept(&body.content) {
        return Err(AppError::Validation(gate::REJECTION_MESSAGE.into()));
    }

    let profile = sqlx::query_as::<_, (Option<String>, Option<String>)>(
        "SELECT nickname, username FROM users WHERE id = $1",
    )
    .bind(auth_user.id)
    .fetch_optional(&state.db)
    .await?
    .unwrap_or((None, None));

    let author = author_label(profile.0.as_deref(), profile.1.as_deref());

    let post = sqlx::query_as::<_, CommunityPost>(
        r#"
        INSERT INTO posts (id, author, content, love_count, retweet_count, posted_at)
        VALUES ($1, $2, $3, 0, 0, NOW())
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&author)
    .bind(&body.content)
    .fetch_one(&state.db)
    .await?;

    tracing::info!(post_id = %post.id, "Community post published");

    Ok(Json(post))
}

/// Single atomic increment at the store boundary; concurrent reactions on
/// the same post cannot lose updates. Repeat reactions from one viewer are
/// not de-duplicated.
pub async fn love_post(
    State(state): State<AppState>,
    Extension(_auth_user): Extension<AuthUser>,
    Path(post_id): Path<Uuid>,
) -> AppResult<Json<LoveResponse>> {
    let love_count = sqlx::query_scalar::<_, i32>(
        "UPDATE posts SET love_count = love_count + 1 WHERE id = $1 RETURNING love_count",
    )
    .bind(post_id)
    .fetch_optional(&state.db)
    .await?
    .ok_or(AppError::NotFound("Post not found".into()))?;

    Ok(Json(LoveResponse {
        post_id,
        love_count,
    }))
}
