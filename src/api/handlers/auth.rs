use axum::{extract::State, response::IntoResponse, Json};
use crate::api::dtos::requests::LoginRequest;
use crate::api::dtos::responses::{LoginResponse, SessionToken};
use crate::domain::models::auth::{generate_token, hash_token, AdminProfile, SessionRecord};
use crate::error::AppError;
use crate::state::AppState;
use argon2::{Argon2, PasswordHash, PasswordVerifier};
use std::sync::Arc;
use tracing::info;

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.email != state.config.admin_email {
        return Err(AppError::Unauthorized);
    }

    let parsed_hash = PasswordHash::new(&state.config.admin_password_hash)
        .map_err(|_| AppError::Internal("admin password hash is not a valid PHC string".into()))?;

    Argon2::default()
        .verify_password(payload.password.as_bytes(), &parsed_hash)
        .map_err(|_| AppError::Unauthorized)?;

    let token = generate_token();
    let record = SessionRecord::new(payload.email, hash_token(&token));
    state.session_repo.create(&record).await?;

    info!("Admin logged in: {}", record.email);

    Ok(Json(LoginResponse {
        success: true,
        user: AdminProfile { email: record.email },
        session: SessionToken { access_token: token },
    }))
}
