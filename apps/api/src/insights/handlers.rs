use axum::{extract::State, Json};

use crate::auth::AuthUser;
use crate::insights::{
    location_trends, recent_jobs, salary_trends, skill_trends, LocationTrend, SalaryTrend,
    SkillTrend,
};
use crate::models::Job;
use crate::state::AppState;

/// GET /api/insights/salary-trends
pub async fn salary(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
) -> Json<Vec<SalaryTrend>> {
    let jobs = state.store.list_jobs().await;
    Json(salary_trends(&jobs))
}

/// GET /api/insights/location-trends
pub async fn locations(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
) -> Json<Vec<LocationTrend>> {
    let jobs = state.store.list_jobs().await;
    Json(location_trends(&jobs))
}

/// GET /api/insights/skill-trends
pub async fn skills(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
) -> Json<Vec<SkillTrend>> {
    let jobs = state.store.list_jobs().await;
    Json(skill_trends(&jobs))
}

/// GET /api/insights/recent-jobs
pub async fn recent(State(state): State<AppState>, AuthUser(_user): AuthUser) -> Json<Vec<Job>> {
    let jobs = state.store.list_jobs().await;
    Json(recent_jobs(jobs))
}
