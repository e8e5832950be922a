use std::time::SystemTime;

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::mint_access_token;
use crate::db::require_db;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::services::users::{register_user, verify_credentials};
use crate::state::app_state::AppState;

/// Passwords shorter than this are rejected at signup.
const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

fn validate_email(email: &str) -> Result<(), AppError> {
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::invalid(
            ErrorCode::InvalidEmail,
            "A valid email address is required",
        ));
    }
    Ok(())
}

fn validate_new_password(password: &str) -> Result<(), AppError> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::invalid(
            ErrorCode::InvalidPassword,
            format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
        ));
    }
    Ok(())
}

/// Create an account and hand back a fresh access token.
async fn signup(
    req: web::Json<SignupRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let email = req.email.trim();
    validate_email(email)?;
    validate_new_password(&req.password)?;

    let db = require_db(&app_state)?;
    let user = register_user(db, email, &req.password).await?;

    let token = mint_access_token(user.id, SystemTime::now(), &app_state.security)?;

    Ok(HttpResponse::Created().json(TokenResponse { token }))
}

/// Exchange valid credentials for a fresh access token.
async fn login(
    req: web::Json<LoginRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let email = req.email.trim();
    if email.is_empty() || req.password.is_empty() {
        return Err(AppError::invalid(
            ErrorCode::ValidationError,
            "Email and password are required",
        ));
    }

    let db = require_db(&app_state)?;
    let user = verify_credentials(db, email, &req.password).await?;

    let token = mint_access_token(user.id, SystemTime::now(), &app_state.security)?;

    Ok(HttpResponse::Ok().json(TokenResponse { token }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/signup").route(web::post().to(signup)))
        .service(web::resource("/login").route(web::post().to(login)));
}
