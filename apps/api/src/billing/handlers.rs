use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

use crate::auth::AuthUser;
use crate::billing::{self, SubscribeResponse};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SubscribeRequest {
    pub tier: String,
}

/// POST /api/subscribe
pub async fn subscribe(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(req): Json<SubscribeRequest>,
) -> Result<Json<SubscribeResponse>, AppError> {
    let response =
        billing::create_subscription(state.store.as_ref(), &state.billing, &user, &req.tier)
            .await?;
    Ok(Json(response))
}

/// POST /api/cancel-subscription
pub async fn cancel_subscription(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<StatusCode, AppError> {
    billing::cancel_subscription(state.store.as_ref(), &state.billing, &user).await?;
    Ok(StatusCode::OK)
}
