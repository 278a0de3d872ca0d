//! Data store — keyed maps with serial integer identifiers.
//!
//! The `Store` trait is the only surface handlers talk to; `MemStore` is
//! the in-memory implementation behind a `tokio::sync::RwLock`.

mod memory;
pub mod seed;

pub use memory::MemStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{
    Application, Job, NewApplication, NewJob, NewResume, NewTwitterJob, NewUser, Resume,
    TwitterJob, TwitterJobPatch, User,
};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },
}

impl StoreError {
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        StoreError::NotFound { entity, id }
    }
}

#[async_trait]
pub trait Store: Send + Sync {
    // User operations
    async fn get_user(&self, id: i64) -> Option<User>;
    async fn get_user_by_username(&self, username: &str) -> Option<User>;
    async fn create_user(&self, new: NewUser) -> User;
    async fn update_stripe_customer_id(
        &self,
        user_id: i64,
        customer_id: &str,
    ) -> Result<User, StoreError>;
    async fn update_stripe_subscription(
        &self,
        user_id: i64,
        subscription_id: Option<String>,
        tier: &str,
    ) -> Result<User, StoreError>;
    async fn list_users(&self) -> Vec<User>;

    // Resume operations
    async fn create_resume(&self, new: NewResume) -> Resume;
    async fn get_resume(&self, id: i64) -> Option<Resume>;
    async fn list_user_resumes(&self, user_id: i64) -> Vec<Resume>;
    async fn set_resume_review(
        &self,
        id: i64,
        score: i32,
        suggestions: serde_json::Value,
    ) -> Result<Resume, StoreError>;

    // Job operations
    async fn create_job(&self, new: NewJob) -> Job;
    async fn get_job(&self, id: i64) -> Option<Job>;
    async fn list_jobs(&self) -> Vec<Job>;
    async fn increment_job_applications(&self, job_id: i64) -> Result<Job, StoreError>;

    // Application operations
    async fn create_application(&self, new: NewApplication) -> Application;
    async fn get_application(&self, id: i64) -> Option<Application>;
    async fn list_user_applications(&self, user_id: i64) -> Vec<Application>;
    async fn list_applications(&self) -> Vec<Application>;
    async fn mark_application_email_sent(&self, id: i64) -> Result<Application, StoreError>;

    // Ingested tweet operations
    async fn create_twitter_job(&self, new: NewTwitterJob) -> TwitterJob;
    async fn get_twitter_job_by_tweet_id(&self, tweet_id: &str) -> Option<TwitterJob>;
    async fn update_twitter_job(
        &self,
        id: i64,
        patch: TwitterJobPatch,
    ) -> Result<TwitterJob, StoreError>;
}
