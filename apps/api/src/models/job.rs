use chrono::{DateTime, Utc};
use serde::Serialize;

/// A job listing. `user_id` is the posting agency, absent for listings
/// created by ingestion. `status` is one of "active", "filled", "expired".
#[derive(Debug, Clone, Serialize)]
pub struct Job {
    pub id: i64,
    pub user_id: Option<i64>,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub requirements: String,
    pub salary: Option<String>,
    #[serde(rename = "type")]
    pub job_type: String,
    pub source: Option<String>,
    pub source_url: Option<String>,
    pub status: String,
    pub applications_count: i64,
    pub created_at: DateTime<Utc>,
}

/// Insertable job fields. Status starts at "active" with a zero
/// applications count.
#[derive(Debug, Clone)]
pub struct NewJob {
    pub user_id: Option<i64>,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub requirements: String,
    pub salary: Option<String>,
    pub job_type: String,
    pub source: Option<String>,
    pub source_url: Option<String>,
}
