use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::jobs::matching_jobs;
use crate::llm_client::tasks;
use crate::models::{Job, NewJob};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateJobRequest {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub requirements: String,
    pub salary: Option<String>,
    #[serde(rename = "type")]
    pub job_type: String,
}

#[derive(Debug, Deserialize)]
pub struct SuggestSkillsRequest {
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct SuggestSkillsResponse {
    pub skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateDescriptionRequest {
    pub title: String,
    pub requirements: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateDescriptionResponse {
    pub description: String,
}

/// POST /api/jobs
///
/// Agencies only; other roles get the same 401 as unauthenticated calls.
pub async fn create_job(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(req): Json<CreateJobRequest>,
) -> Result<(StatusCode, Json<Job>), AppError> {
    if user.role != "agency" {
        return Err(AppError::Unauthorized);
    }

    for (field, value) in [
        ("title", &req.title),
        ("company", &req.company),
        ("location", &req.location),
        ("description", &req.description),
        ("requirements", &req.requirements),
        ("type", &req.job_type),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("{field} is required")));
        }
    }

    let job = state
        .store
        .create_job(NewJob {
            user_id: Some(user.id),
            title: req.title,
            company: req.company,
            location: req.location,
            description: req.description,
            requirements: req.requirements,
            salary: req.salary,
            job_type: req.job_type,
            source: Some("direct".to_string()),
            source_url: None,
        })
        .await;

    Ok((StatusCode::CREATED, Json(job)))
}

/// GET /api/jobs, the public listing.
pub async fn list_jobs(State(state): State<AppState>) -> Json<Vec<Job>> {
    Json(state.store.list_jobs().await)
}

/// GET /api/jobs/matching
///
/// A caller with no stored preferences gets a 400, not an empty list.
pub async fn matching(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<Job>>, AppError> {
    let prefs = user
        .job_preferences
        .as_ref()
        .ok_or_else(|| AppError::Validation("No job preferences set".to_string()))?;

    let jobs = state.store.list_jobs().await;
    Ok(Json(matching_jobs(jobs, prefs)))
}

/// POST /api/jobs/suggest-skills
pub async fn suggest_skills(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Json(req): Json<SuggestSkillsRequest>,
) -> Result<Json<SuggestSkillsResponse>, AppError> {
    if req.description.trim().is_empty() {
        return Err(AppError::Validation("description is required".to_string()));
    }

    let skills = tasks::suggest_skills(&state.llm, &req.description)
        .await
        .map_err(|e| AppError::Llm(format!("Failed to suggest skills: {e}")))?;

    Ok(Json(SuggestSkillsResponse { skills }))
}

/// POST /api/jobs/generate-description, agencies only.
pub async fn generate_description(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(req): Json<GenerateDescriptionRequest>,
) -> Result<Json<GenerateDescriptionResponse>, AppError> {
    if user.role != "agency" {
        return Err(AppError::Unauthorized);
    }
    if req.title.trim().is_empty() || req.requirements.trim().is_empty() {
        return Err(AppError::Validation(
            "title and requirements are required".to_string(),
        ));
    }

    let description = tasks::generate_job_description(&state.llm, &req.title, &req.requirements)
        .await
        .map_err(|e| AppError::Llm(format!("Failed to generate job description: {e}")))?;

    Ok(Json(GenerateDescriptionResponse { description }))
}
