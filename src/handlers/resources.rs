use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use uuid::Uuid;

use crate::auth::middleware::AuthUser;
use crate::error::{AppError, AppResult};
use crate::models::resource::{Resource, ResourceQuery};
use crate::AppState;

pub async fn list_resources(
    State(state): State<AppState>,
    Query(query): Query<ResourceQuery>,
) -> AppResult<Json<Vec<Resource>>> {
    let search = query
        .search
        .as_deref()
        .map(|s| format!("%{}%", s.trim()))
        .unwrap_or_else(|| "%".into());

    let resources = sqlx::query_as::<_, Resource>(
        r#"
        SELECT * FROM resources
        WHERE ($1::resource_kind IS NULL OR kind = $1)
          AND title ILIKE $2
        ORDER BY title ASC
        "#,
    )
    .bind(query.kind)
    .bind(&search)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(resources))
}

/// Viewing a resource is recorded per user, for the "recently visited" view.
pub async fn record_visit(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(resource_id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    let exists = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM resources WHERE id = $1")
        .bind(resource_id)
        .fetch_one(&state.db)
        .await?;

    if exists == 0 {
        return Err(AppError::NotFound("Resource not found".into()));
    }

    sqlx::query(
        r#"
        INSERT INTO resource_visits (id, user_id, resource_id, visited_at)
        VALUES ($1, $2, $3, NOW())
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(auth_user.id)
    .bind(resource_id)
    .execute(&state.db)
    .await?;

    Ok(Json(serde_json::json!({ "recorded": true })))
}
