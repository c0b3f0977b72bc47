use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::auth::jwt::{verify_token, TokenType};
use crate::error::AppError;
use crate::models::mood::GUEST_OWNER;
use crate::AppState;

#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: Uuid,
    pub email: Option<String>,
}

/// Owner attribution carried by the mood routes: a user id string for a valid
/// session, the guest sentinel otherwise.
#[derive(Debug, Clone)]
pub struct MoodOwner(pub String);

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(req.headers()).ok_or(AppError::Unauthorized)?;

    let token_data = verify_token(token, &state.config)?;

    if token_data.claims.token_type != TokenType::Access {
        return Err(AppError::Unauthorized);
    }

    let auth_user = AuthUser {
        id: token_data.claims.sub,
        email: if token_data.claims.email.is_empty() {
            None
        } else {
            Some(token_data.claims.email)
        },
    };

    req.extensions_mut().insert(auth_user);
    Ok(next.run(req).await)
}

/// Mood routes stay usable without a session: a missing or invalid token
/// resolves the owner to the guest sentinel instead of failing.
pub async fn resolve_mood_owner(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let owner = bearer_token(req.headers())
        .and_then(|token| verify_token(token, &state.config).ok())
        .filter(|data| data.claims.token_type == TokenType::Access)
        .map(|data| data.claims.sub.to_string())
        .unwrap_or_else(|| GUEST_OWNER.to_string());

    req.extensions_mut().insert(MoodOwner(owner));
    next.run(req).await
}
