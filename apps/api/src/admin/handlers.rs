use axum::{extract::State, Json};

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::{Application, User};
use crate::state::AppState;

/// GET /api/admin/users
pub async fn list_users(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<User>>, AppError> {
    require_admin(&user)?;
    Ok(Json(state.store.list_users().await))
}

/// GET /api/admin/applications
pub async fn list_applications(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<Application>>, AppError> {
    require_admin(&user)?;
    Ok(Json(state.store.list_applications().await))
}

fn require_admin(user: &User) -> Result<(), AppError> {
    if user.role != "admin" {
        return Err(AppError::Unauthorized);
    }
    Ok(())
}
