use chrono::{DateTime, Utc};
use serde::Serialize;

/// A raw ingested tweet. Parsed fields are filled in once the AI parse
/// completes; `job_id` links to the listing created from it, if any.
#[derive(Debug, Clone, Serialize)]
pub struct TwitterJob {
    pub id: i64,
    pub tweet_id: String,
    pub content: String,
    pub author: String,
    pub parsed_title: Option<String>,
    pub parsed_company: Option<String>,
    pub parsed_location: Option<String>,
    pub processed: bool,
    pub job_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewTwitterJob {
    pub tweet_id: String,
    pub content: String,
    pub author: String,
}

/// Partial update applied when parsing completes. `None` fields are left
/// untouched.
#[derive(Debug, Clone, Default)]
pub struct TwitterJobPatch {
    pub parsed_title: Option<String>,
    pub parsed_company: Option<String>,
    pub parsed_location: Option<String>,
    pub processed: Option<bool>,
    pub job_id: Option<i64>,
}
