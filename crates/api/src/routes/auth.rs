//! Authentication route handlers.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::User;
use crate::services::auth::AuthService;
use crate::state::AppState;

/// Registration request body.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Given name.
    pub name: String,
    /// Surname.
    pub surname: String,
    /// Desired login name.
    pub username: String,
    /// Login secret.
    pub secret: String,
}

/// Registration response.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub status: &'static str,
    pub msg: String,
}

/// Register a new user.
///
/// POST /register
///
/// # Errors
///
/// Returns 400 for an invalid username, a weak secret, or a taken username.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>> {
    let auth = AuthService::new(state.pool());

    let user = auth
        .register(&req.name, &req.surname, &req.username, &req.secret)
        .await?;

    tracing::info!(user_id = %user.id, "user registered");

    Ok(Json(RegisterResponse {
        status: "ok",
        msg: "user registered".to_owned(),
    }))
}

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Login name.
    pub username: String,
    /// Login secret.
    pub secret: String,
}

/// Login response. Echoes the user record; never any credential material.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub status: &'static str,
    pub msg: String,
    pub user: User,
}

/// Verify credentials and echo the user.
///
/// POST /login
///
/// # Errors
///
/// Returns 401 when the username/secret pair does not match; unknown user
/// and wrong secret are indistinguishable.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let auth = AuthService::new(state.pool());

    let user = auth.login(&req.username, &req.secret).await?;

    tracing::debug!(user_id = %user.id, "user logged in");

    Ok(Json(LoginResponse {
        status: "ok",
        msg: "login successful".to_owned(),
        user,
    }))
}
