use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CommunityPost {
    pub id: Uuid,
    pub author: String,
    pub content: String,
    pub love_count: i32,
    /// Reserved; nothing increments this yet.
    pub retweet_count: i32,
    pub posted_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct LoveResponse {
    pub post_id: Uuid,
    pub love_count: i32,
}

/// Display label shown on the feed. Falls back to "Anonymous" when the poster
/// has no profile data to show.
pub fn author_label(nickname: Option<&str>, username: Option<&str>) -> String {
    match (
        nickname.filter(|s| !s.is_empty()),
        username.filter(|s| !s.is_empty()),
    ) {
        (Some(nickname), Some(username)) => format!("{} @{}", nickname, username),
        _ => "Anonymous".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_combines_nickname_and_handle() {
        assert_eq!(author_label(Some("Mei"), Some("mei123")), "Mei @mei123");
    }

    #[test]
    fn label_falls_back_to_anonymous() {
        assert_eq!(author_label(None, None), "Anonymous");
        assert_eq!(author_label(Some("Mei"), None), "Anonymous");
        assert_eq!(author_label(None, Some("mei123")), "Anonymous");
        assert_eq!(author_label(Some(""), Some("mei123")), "Anonymous");
    }
}
