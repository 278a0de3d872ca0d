use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::models::{
    Application, Job, NewApplication, NewJob, NewResume, NewTwitterJob, NewUser, Resume,
    TwitterJob, TwitterJobPatch, User,
};
use crate::store::{Store, StoreError};

/// In-memory store. Each entity kind has its own map keyed by a serial
/// identifier starting at 1. `BTreeMap` keeps listings in insertion order.
pub struct MemStore {
    inner: RwLock<Inner>,
}

struct Inner {
    users: BTreeMap<i64, User>,
    resumes: BTreeMap<i64, Resume>,
    jobs: BTreeMap<i64, Job>,
    applications: BTreeMap<i64, Application>,
    twitter_jobs: BTreeMap<i64, TwitterJob>,
    next_user_id: i64,
    next_resume_id: i64,
    next_job_id: i64,
    next_application_id: i64,
    next_twitter_job_id: i64,
}

impl MemStore {
    pub fn new() -> Self {
        MemStore {
            inner: RwLock::new(Inner {
                users: BTreeMap::new(),
                resumes: BTreeMap::new(),
                jobs: BTreeMap::new(),
                applications: BTreeMap::new(),
                twitter_jobs: BTreeMap::new(),
                next_user_id: 1,
                next_resume_id: 1,
                next_job_id: 1,
                next_application_id: 1,
                next_twitter_job_id: 1,
            }),
        }
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Store for MemStore {
    async fn get_user(&self, id: i64) -> Option<User> {
        self.inner.read().await.users.get(&id).cloned()
    }

    async fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.inner
            .read()
            .await
            .users
            .values()
            .find(|u| u.username == username)
            .cloned()
    }

    async fn create_user(&self, new: NewUser) -> User {
        let mut inner = self.inner.write().await;
        let id = inner.next_user_id;
        inner.next_user_id += 1;
        let user = User {
            id,
            username: new.username,
            password: new.password,
            email: new.email,
            role: new.role,
            stripe_customer_id: None,
            stripe_subscription_id: None,
            subscription_tier: "free".to_string(),
            company_name: new.company_name,
            company_logo: new.company_logo,
            company_description: new.company_description,
            location: new.location,
            job_preferences: new.job_preferences,
            created_at: Utc::now(),
        };
        inner.users.insert(id, user.clone());
        user
    }

    async fn update_stripe_customer_id(
        &self,
        user_id: i64,
        customer_id: &str,
    ) -> Result<User, StoreError> {
        let mut inner = self.inner.write().await;
        let user = inner
            .users
            .get_mut(&user_id)
            .ok_or_else(|| StoreError::not_found("user", user_id))?;
        user.stripe_customer_id = Some(customer_id.to_string());
        Ok(user.clone())
    }

    async fn update_stripe_subscription(
        &self,
        user_id: i64,
        subscription_id: Option<String>,
        tier: &str,
    ) -> Result<User, StoreError> {
        let mut inner = self.inner.write().await;
        let user = inner
            .users
            .get_mut(&user_id)
            .ok_or_else(|| StoreError::not_found("user", user_id))?;
        user.stripe_subscription_id = subscription_id;
        user.subscription_tier = tier.to_string();
        Ok(user.clone())
    }

    async fn list_users(&self) -> Vec<User> {
        self.inner.read().await.users.values().cloned().collect()
    }

    async fn create_resume(&self, new: NewResume) -> Resume {
        let mut inner = self.inner.write().await;
        let id = inner.next_resume_id;
        inner.next_resume_id += 1;
        let resume = Resume {
            id,
            user_id: new.user_id,
            title: new.title,
            content: new.content,
            template: new.template,
            score: None,
            suggestions: None,
            created_at: Utc::now(),
        };
        inner.resumes.insert(id, resume.clone());
        resume
    }

    async fn get_resume(&self, id: i64) -> Option<Resume> {
        self.inner.read().await.resumes.get(&id).cloned()
    }

    async fn list_user_resumes(&self, user_id: i64) -> Vec<Resume> {
        self.inner
            .read()
            .await
            .resumes
            .values()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect()
    }

    async fn set_resume_review(
        &self,
        id: i64,
        score: i32,
        suggestions: serde_json::Value,
    ) -> Result<Resume, StoreError> {
        let mut inner = self.inner.write().await;
        let resume = inner
            .resumes
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found("resume", id))?;
        resume.score = Some(score);
        resume.suggestions = Some(suggestions);
        Ok(resume.clone())
    }

    async fn create_job(&self, new: NewJob) -> Job {
        let mut inner = self.inner.write().await;
        let id = inner.next_job_id;
        inner.next_job_id += 1;
        let job = Job {
            id,
            user_id: new.user_id,
            title: new.title,
            company: new.company,
            location: new.location,
            description: new.description,
            requirements: new.requirements,
            salary: new.salary,
            job_type: new.job_type,
            source: new.source,
            source_url: new.source_url,
            status: "active".to_string(),
            applications_count: 0,
            created_at: Utc::now(),
        };
        inner.jobs.insert(id, job.clone());
        job
    }

    async fn get_job(&self, id: i64) -> Option<Job> {
        self.inner.read().await.jobs.get(&id).cloned()
    }

    async fn list_jobs(&self) -> Vec<Job> {
        self.inner.read().await.jobs.values().cloned().collect()
    }

    async fn increment_job_applications(&self, job_id: i64) -> Result<Job, StoreError> {
        let mut inner = self.inner.write().await;
        let job = inner
            .jobs
            .get_mut(&job_id)
            .ok_or_else(|| StoreError::not_found("job", job_id))?;
        job.applications_count += 1;
        Ok(job.clone())
    }

    async fn create_application(&self, new: NewApplication) -> Application {
        let mut inner = self.inner.write().await;
        let id = inner.next_application_id;
        inner.next_application_id += 1;
        let application = Application {
            id,
            user_id: new.user_id,
            job_id: new.job_id,
            resume_id: new.resume_id,
            status: "pending".to_string(),
            email_sent: false,
            created_at: Utc::now(),
        };
        inner.applications.insert(id, application.clone());
        application
    }

    async fn get_application(&self, id: i64) -> Option<Application> {
        self.inner.read().await.applications.get(&id).cloned()
    }

    async fn list_user_applications(&self, user_id: i64) -> Vec<Application> {
        self.inner
            .read()
            .await
            .applications
            .values()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect()
    }

    async fn list_applications(&self) -> Vec<Application> {
        self.inner
            .read()
            .await
            .applications
            .values()
            .cloned()
            .collect()
    }

    async fn mark_application_email_sent(&self, id: i64) -> Result<Application, StoreError> {
        let mut inner = self.inner.write().await;
        let application = inner
            .applications
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found("application", id))?;
        application.email_sent = true;
        Ok(application.clone())
    }

    async fn create_twitter_job(&self, new: NewTwitterJob) -> TwitterJob {
        let mut inner = self.inner.write().await;
        let id = inner.next_twitter_job_id;
        inner.next_twitter_job_id += 1;
        let twitter_job = TwitterJob {
            id,
            tweet_id: new.tweet_id,
            content: new.content,
            author: new.author,
            parsed_title: None,
            parsed_company: None,
            parsed_location: None,
            processed: false,
            job_id: None,
            created_at: Utc::now(),
        };
        inner.twitter_jobs.insert(id, twitter_job.clone());
        twitter_job
    }

    async fn get_twitter_job_by_tweet_id(&self, tweet_id: &str) -> Option<TwitterJob> {
        self.inner
            .read()
            .await
            .twitter_jobs
            .values()
            .find(|t| t.tweet_id == tweet_id)
            .cloned()
    }

    async fn update_twitter_job(
        &self,
        id: i64,
        patch: TwitterJobPatch,
    ) -> Result<TwitterJob, StoreError> {
        let mut inner = self.inner.write().await;
        let twitter_job = inner
            .twitter_jobs
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found("twitter job", id))?;
        if patch.parsed_title.is_some() {
            twitter_job.parsed_title = patch.parsed_title;
        }
        if patch.parsed_company.is_some() {
            twitter_job.parsed_company = patch.parsed_company;
        }
        if patch.parsed_location.is_some() {
            twitter_job.parsed_location = patch.parsed_location;
        }
        if let Some(processed) = patch.processed {
            twitter_job.processed = processed;
        }
        if patch.job_id.is_some() {
            twitter_job.job_id = patch.job_id;
        }
        Ok(twitter_job.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user(username: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            password: "hash".to_string(),
            email: format!("{username}@example.com"),
            role: "seeker".to_string(),
            company_name: None,
            company_logo: None,
            company_description: None,
            location: None,
            job_preferences: None,
        }
    }

    fn sample_job(title: &str) -> NewJob {
        NewJob {
            user_id: Some(1),
            title: title.to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            description: "desc".to_string(),
            requirements: "reqs".to_string(),
            salary: None,
            job_type: "full-time".to_string(),
            source: Some("direct".to_string()),
            source_url: None,
        }
    }

    #[tokio::test]
    async fn test_user_ids_are_serial_from_one() {
        let store = MemStore::new();
        let a = store.create_user(sample_user("a")).await;
        let b = store.create_user(sample_user("b")).await;
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(a.subscription_tier, "free");
    }

    #[tokio::test]
    async fn test_get_user_by_username() {
        let store = MemStore::new();
        store.create_user(sample_user("alice")).await;
        let found = store.get_user_by_username("alice").await;
        assert!(found.is_some());
        assert!(store.get_user_by_username("bob").await.is_none());
    }

    #[tokio::test]
    async fn test_increment_job_applications_adds_exactly_one() {
        let store = MemStore::new();
        let job = store.create_job(sample_job("Engineer")).await;
        assert_eq!(job.applications_count, 0);

        let updated = store.increment_job_applications(job.id).await.unwrap();
        assert_eq!(updated.applications_count, 1);

        let read_back = store.get_job(job.id).await.unwrap();
        assert_eq!(read_back.applications_count, 1);
    }

    #[tokio::test]
    async fn test_increment_missing_job_is_not_found() {
        let store = MemStore::new();
        let err = store.increment_job_applications(42).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { id: 42, .. }));
    }

    #[tokio::test]
    async fn test_mark_application_email_sent() {
        let store = MemStore::new();
        let application = store
            .create_application(NewApplication {
                user_id: 1,
                job_id: 1,
                resume_id: 1,
            })
            .await;
        assert!(!application.email_sent);
        assert_eq!(application.status, "pending");

        let updated = store
            .mark_application_email_sent(application.id)
            .await
            .unwrap();
        assert!(updated.email_sent);
    }

    #[tokio::test]
    async fn test_list_user_resumes_filters_by_owner() {
        let store = MemStore::new();
        for user_id in [1, 1, 2] {
            store
                .create_resume(NewResume {
                    user_id,
                    title: "t".to_string(),
                    content: "c".to_string(),
                    template: "modern".to_string(),
                })
                .await;
        }
        assert_eq!(store.list_user_resumes(1).await.len(), 2);
        assert_eq!(store.list_user_resumes(2).await.len(), 1);
        assert!(store.list_user_resumes(3).await.is_empty());
    }

    #[tokio::test]
    async fn test_twitter_job_patch_applies_only_set_fields() {
        let store = MemStore::new();
        let record = store
            .create_twitter_job(NewTwitterJob {
                tweet_id: "123".to_string(),
                content: "hiring a rustacean".to_string(),
                author: "acme".to_string(),
            })
            .await;
        assert!(!record.processed);

        let updated = store
            .update_twitter_job(
                record.id,
                TwitterJobPatch {
                    parsed_title: Some("Rust Engineer".to_string()),
                    processed: Some(true),
                    job_id: Some(7),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.parsed_title.as_deref(), Some("Rust Engineer"));
        assert!(updated.processed);
        assert_eq!(updated.job_id, Some(7));
        // Untouched fields survive the patch
        assert_eq!(updated.content, "hiring a rustacean");
        assert!(updated.parsed_company.is_none());
    }

    #[tokio::test]
    async fn test_twitter_job_lookup_by_tweet_id() {
        let store = MemStore::new();
        store
            .create_twitter_job(NewTwitterJob {
                tweet_id: "t-1".to_string(),
                content: "c".to_string(),
                author: "a".to_string(),
            })
            .await;
        assert!(store.get_twitter_job_by_tweet_id("t-1").await.is_some());
        assert!(store.get_twitter_job_by_tweet_id("t-2").await.is_none());
    }

    #[tokio::test]
    async fn test_set_resume_review_stores_score_and_suggestions() {
        let store = MemStore::new();
        let resume = store
            .create_resume(NewResume {
                user_id: 1,
                title: "t".to_string(),
                content: "c".to_string(),
                template: "modern".to_string(),
            })
            .await;
        assert!(resume.score.is_none());

        let updated = store
            .set_resume_review(resume.id, 82, serde_json::json!(["tighten the summary"]))
            .await
            .unwrap();
        assert_eq!(updated.score, Some(82));
        assert!(updated.suggestions.is_some());
    }
}
