use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "resource_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Article,
    Video,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Resource {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub kind: ResourceKind,
    pub link: String,
}

#[derive(Debug, Deserialize)]
pub struct ResourceQuery {
    pub kind: Option<ResourceKind>,
    pub search: Option<String>,
}
