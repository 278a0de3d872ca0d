//! Resume CRUD plus the two AI passes: enhance (rewrites the content,
//! returned but not stored) and review (stores a score and suggestions).

pub mod handlers;

use crate::errors::AppError;
use crate::models::{Resume, User};
use crate::store::Store;

/// Loads a resume and checks it belongs to the caller. Missing resumes
/// are 404; someone else's resume is 401, matching the rest of the API's
/// authorization responses.
pub async fn owned_resume(
    store: &dyn Store,
    user: &User,
    resume_id: i64,
) -> Result<Resume, AppError> {
    let resume = store
        .get_resume(resume_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Resume {resume_id} not found")))?;
    if resume.user_id != user.id {
        return Err(AppError::Unauthorized);
    }
    Ok(resume)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewResume, NewUser};
    use crate::store::MemStore;

    async fn user_with_resume(store: &MemStore) -> (User, Resume) {
        let user = store
            .create_user(NewUser {
                username: "alice".to_string(),
                password: "hash".to_string(),
                email: "alice@example.com".to_string(),
                role: "seeker".to_string(),
                company_name: None,
                company_logo: None,
                company_description: None,
                location: None,
                job_preferences: None,
            })
            .await;
        let resume = store
            .create_resume(NewResume {
                user_id: user.id,
                title: "Backend".to_string(),
                content: "content".to_string(),
                template: "modern".to_string(),
            })
            .await;
        (user, resume)
    }

    #[tokio::test]
    async fn test_owner_can_load_resume() {
        let store = MemStore::new();
        let (user, resume) = user_with_resume(&store).await;
        let loaded = owned_resume(&store, &user, resume.id).await.unwrap();
        assert_eq!(loaded.id, resume.id);
    }

    #[tokio::test]
    async fn test_missing_resume_is_not_found() {
        let store = MemStore::new();
        let (user, _) = user_with_resume(&store).await;
        let err = owned_resume(&store, &user, 99).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_foreign_resume_is_unauthorized() {
        let store = MemStore::new();
        let (_, resume) = user_with_resume(&store).await;
        let other = store
            .create_user(NewUser {
                username: "mallory".to_string(),
                password: "hash".to_string(),
                email: "mallory@example.com".to_string(),
                role: "seeker".to_string(),
                company_name: None,
                company_logo: None,
                company_description: None,
                location: None,
                job_preferences: None,
            })
            .await;
        let err = owned_resume(&store, &other, resume.id).await.unwrap_err();
        assert!(matches!(err, AppError::Unauthorized));
    }
}
