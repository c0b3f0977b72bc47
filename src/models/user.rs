use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: Option<String>,
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
    pub nickname: Option<String>,
    pub username: Option<String>,
    pub birthdate: Option<NaiveDate>,
    pub gender: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub email: Option<String>,
    pub nickname: Option<String>,
    pub username: Option<String>,
    pub birthdate: Option<NaiveDate>,
    pub gender: Option<String>,
    /// Clients route to the set-username screen while this is false.
    pub has_username: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserProfile {
    fn from(u: User) -> Self {
        let has_username = u.username.as_deref().is_some_and(|s| !s.is_empty());
        Self {
            id: u.id,
            email: u.email,
            nickname: u.nickname,
            username: u.username,
            birthdate: u.birthdate,
            gender: u.gender,
            has_username,
            created_at: u.created_at,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct RefreshToken {
    pub id: Uuid,
    pub user_id: Uuid,
    pub token_hash: String,
    pub expires_at: DateTime<Utc>,
    pub revoked: bool,
    pub created_at: DateTime<Utc>,
}
