use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use tracing::{info, warn};

use crate::auth::password::{hash_password, verify_password};
use crate::auth::session::SESSION_COOKIE;
use crate::auth::AuthUser;
use crate::email::welcome_email;
use crate::errors::AppError;
use crate::models::{JobPreferences, NewUser, User};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub email: String,
    pub role: Option<String>,
    pub company_name: Option<String>,
    pub company_logo: Option<String>,
    pub company_description: Option<String>,
    pub location: Option<String>,
    pub job_preferences: Option<JobPreferences>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// POST /api/register
///
/// Creates an account, sends the welcome email (best-effort) and
/// establishes a session for the new user.
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<RegisterRequest>,
) -> Result<(CookieJar, (StatusCode, Json<User>)), AppError> {
    if req.username.trim().is_empty() || req.password.is_empty() || req.email.trim().is_empty() {
        return Err(AppError::Validation(
            "username, password and email are required".to_string(),
        ));
    }

    if state
        .store
        .get_user_by_username(&req.username)
        .await
        .is_some()
    {
        return Err(AppError::Validation("Username already exists".to_string()));
    }

    let password = hash_password(&req.password)?;
    let user = state
        .store
        .create_user(NewUser {
            username: req.username,
            password,
            email: req.email,
            role: req.role.unwrap_or_else(|| "seeker".to_string()),
            company_name: req.company_name,
            company_logo: req.company_logo,
            company_description: req.company_description,
            location: req.location,
            job_preferences: req.job_preferences,
        })
        .await;
    info!("User registered: {}", user.username);

    if let Err(e) = state.mailer.send(&welcome_email(&user.email, &user.username)).await {
        warn!("Welcome email to {} failed: {e}", user.email);
    }

    let token = state.sessions.create(user.id).await;
    Ok((
        jar.add(session_cookie(token)),
        (StatusCode::CREATED, Json(user)),
    ))
}

/// POST /api/login
///
/// Unknown usernames and wrong passwords yield the same 401 response.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<User>), AppError> {
    info!("Login attempt for username: {}", req.username);

    let user = state
        .store
        .get_user_by_username(&req.username)
        .await
        .ok_or(AppError::InvalidCredentials)?;

    if !verify_password(&req.password, &user.password) {
        return Err(AppError::InvalidCredentials);
    }

    let token = state.sessions.create(user.id).await;
    info!("Login successful for user: {}", user.username);
    Ok((jar.add(session_cookie(token)), Json(user)))
}

/// POST /api/logout
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, StatusCode), AppError> {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        state.sessions.destroy(cookie.value()).await;
    }
    Ok((jar.remove(Cookie::from(SESSION_COOKIE)), StatusCode::OK))
}

/// GET /api/user
pub async fn current_user(AuthUser(user): AuthUser) -> Json<User> {
    Json(user)
}

fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}
