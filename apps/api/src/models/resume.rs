use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// A stored resume. `score` and `suggestions` are populated by the AI
/// review pass and stay empty until the owner requests one.
#[derive(Debug, Clone, Serialize)]
pub struct Resume {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub content: String,
    pub template: String,
    pub score: Option<i32>,
    pub suggestions: Option<Value>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewResume {
    pub user_id: i64,
    pub title: String,
    pub content: String,
    pub template: String,
}
