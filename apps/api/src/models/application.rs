use chrono::{DateTime, Utc};
use serde::Serialize;

/// A seeker's application to a job with a specific resume.
/// `email_sent` flips once the employer notification goes out.
#[derive(Debug, Clone, Serialize)]
pub struct Application {
    pub id: i64,
    pub user_id: i64,
    pub job_id: i64,
    pub resume_id: i64,
    pub status: String,
    pub email_sent: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewApplication {
    pub user_id: i64,
    pub job_id: i64,
    pub resume_id: i64,
}
