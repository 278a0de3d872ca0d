pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::{admin, applications, auth, billing, insights, jobs, resumes};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Auth
        .route("/api/register", post(auth::handlers::register))
        .route("/api/login", post(auth::handlers::login))
        .route("/api/logout", post(auth::handlers::logout))
        .route("/api/user", get(auth::handlers::current_user))
        // Resumes
        .route(
            "/api/resumes",
            post(resumes::handlers::create_resume).get(resumes::handlers::list_resumes),
        )
        .route("/api/resumes/:id", get(resumes::handlers::get_resume))
        .route(
            "/api/resumes/:id/enhance",
            post(resumes::handlers::enhance_resume),
        )
        .route(
            "/api/resumes/:id/review",
            post(resumes::handlers::review_resume),
        )
        // Jobs
        .route(
            "/api/jobs",
            post(jobs::handlers::create_job).get(jobs::handlers::list_jobs),
        )
        .route("/api/jobs/matching", get(jobs::handlers::matching))
        .route(
            "/api/jobs/suggest-skills",
            post(jobs::handlers::suggest_skills),
        )
        .route(
            "/api/jobs/generate-description",
            post(jobs::handlers::generate_description),
        )
        // Applications
        .route(
            "/api/applications",
            post(applications::handlers::create_application)
                .get(applications::handlers::list_applications),
        )
        .route("/api/auto-apply", post(applications::handlers::auto_apply))
        // Billing
        .route("/api/subscribe", post(billing::handlers::subscribe))
        .route(
            "/api/cancel-subscription",
            post(billing::handlers::cancel_subscription),
        )
        // Market insights
        .route("/api/insights/salary-trends", get(insights::handlers::salary))
        .route(
            "/api/insights/location-trends",
            get(insights::handlers::locations),
        )
        .route("/api/insights/skill-trends", get(insights::handlers::skills))
        .route("/api/insights/recent-jobs", get(insights::handlers::recent))
        // Admin
        .route("/api/admin/users", get(admin::handlers::list_users))
        .route(
            "/api/admin/applications",
            get(admin::handlers::list_applications),
        )
        .with_state(state)
}
