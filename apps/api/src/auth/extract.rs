use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::CookieJar;

use crate::auth::session::SESSION_COOKIE;
use crate::errors::AppError;
use crate::models::User;
use crate::state::AppState;

/// Extractor that resolves the session cookie to the authenticated user.
/// Rejects with 401 when the cookie is missing, the session is expired,
/// or the account no longer exists.
pub struct AuthUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(SESSION_COOKIE)
            .map(|c| c.value().to_string())
            .ok_or(AppError::Unauthorized)?;

        let user_id = state
            .sessions
            .resolve(&token)
            .await
            .ok_or(AppError::Unauthorized)?;

        let user = state
            .store
            .get_user(user_id)
            .await
            .ok_or(AppError::Unauthorized)?;

        Ok(AuthUser(user))
    }
}
