use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::llm_client::tasks;
use crate::models::{NewResume, Resume};
use crate::resumes::owned_resume;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateResumeRequest {
    pub title: String,
    pub content: String,
    pub template: String,
}

#[derive(Debug, Serialize)]
pub struct EnhanceResponse {
    pub enhanced: String,
}

/// POST /api/resumes
pub async fn create_resume(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(req): Json<CreateResumeRequest>,
) -> Result<(StatusCode, Json<Resume>), AppError> {
    if req.title.trim().is_empty() || req.content.trim().is_empty() || req.template.trim().is_empty()
    {
        return Err(AppError::Validation(
            "title, content and template are required".to_string(),
        ));
    }

    let resume = state
        .store
        .create_resume(NewResume {
            user_id: user.id,
            title: req.title,
            content: req.content,
            template: req.template,
        })
        .await;

    Ok((StatusCode::CREATED, Json(resume)))
}

/// GET /api/resumes
pub async fn list_resumes(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<Resume>>, AppError> {
    Ok(Json(state.store.list_user_resumes(user.id).await))
}

/// GET /api/resumes/:id
pub async fn get_resume(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<Resume>, AppError> {
    let resume = owned_resume(state.store.as_ref(), &user, id).await?;
    Ok(Json(resume))
}

/// POST /api/resumes/:id/enhance
///
/// Returns the rewritten content without touching the stored resume; the
/// owner decides whether to save it via a normal edit.
pub async fn enhance_resume(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<EnhanceResponse>, AppError> {
    let resume = owned_resume(state.store.as_ref(), &user, id).await?;

    let enhanced = tasks::enhance_resume(&state.llm, &resume.content)
        .await
        .map_err(|e| AppError::Llm(format!("Failed to enhance resume: {e}")))?;

    Ok(Json(EnhanceResponse { enhanced }))
}

/// POST /api/resumes/:id/review
///
/// Runs the scoring pass and stores the result on the resume.
pub async fn review_resume(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<Resume>, AppError> {
    let resume = owned_resume(state.store.as_ref(), &user, id).await?;

    let review = tasks::review_resume(&state.llm, &resume.content)
        .await
        .map_err(|e| AppError::Llm(format!("Failed to review resume: {e}")))?;

    let updated = state
        .store
        .set_resume_review(
            resume.id,
            review.score.clamp(0, 100),
            serde_json::json!(review.suggestions),
        )
        .await?;

    Ok(Json(updated))
}
