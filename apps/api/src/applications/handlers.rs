use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::applications::workflow::auto_apply_all;
use crate::auth::AuthUser;
use crate::email::application_notification;
use crate::errors::AppError;
use crate::models::{Application, NewApplication};
use crate::resumes::owned_resume;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateApplicationRequest {
    pub job_id: i64,
    pub resume_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct AutoApplyRequest {
    pub resume_id: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct AutoApplyResponse {
    pub applications: Vec<Application>,
}

/// POST /api/applications
///
/// The application record is created before the job is checked; a bad
/// job id returns 400 with the record already written, like the rest of
/// the workflow's eventually-consistent steps.
pub async fn create_application(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(req): Json<CreateApplicationRequest>,
) -> Result<(StatusCode, Json<Application>), AppError> {
    let application = state
        .store
        .create_application(NewApplication {
            user_id: user.id,
            job_id: req.job_id,
            resume_id: req.resume_id,
        })
        .await;

    let job = state
        .store
        .get_job(req.job_id)
        .await
        .ok_or_else(|| AppError::Validation("Job not found".to_string()))?;

    state.store.increment_job_applications(job.id).await?;

    let employer = match job.user_id {
        Some(employer_id) => state.store.get_user(employer_id).await,
        None => None,
    };
    if let Some(employer) = employer {
        state
            .mailer
            .send(&application_notification(
                &employer.email,
                &job.title,
                &user.username,
            ))
            .await
            .map_err(|e| AppError::Email(e.to_string()))?;
        state
            .store
            .mark_application_email_sent(application.id)
            .await?;
    }

    Ok((StatusCode::CREATED, Json(application)))
}

/// GET /api/applications
pub async fn list_applications(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<Application>>, AppError> {
    Ok(Json(state.store.list_user_applications(user.id).await))
}

/// POST /api/auto-apply
///
/// Bulk-applies the given resume to every active job. The response only
/// lists the applications whose whole chain succeeded; per-job failures
/// are logged server-side and invisible to the caller.
pub async fn auto_apply(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(req): Json<AutoApplyRequest>,
) -> Result<Json<AutoApplyResponse>, AppError> {
    let resume_id = req
        .resume_id
        .ok_or_else(|| AppError::Validation("Resume ID is required".to_string()))?;

    owned_resume(state.store.as_ref(), &user, resume_id)
        .await
        .map_err(|_| AppError::Validation("Invalid resume".to_string()))?;

    if user.job_preferences.is_none() {
        return Err(AppError::Validation("No job preferences set".to_string()));
    }

    let applications =
        auto_apply_all(state.store.as_ref(), state.mailer.as_ref(), &user, resume_id).await;

    Ok(Json(AutoApplyResponse { applications }))
}
