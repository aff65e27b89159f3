use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};
use crate::domain::models::auth::{hash_token, AdminProfile};
use crate::error::AppError;
use crate::state::AppState;
use chrono::Utc;
use std::sync::Arc;
use tracing::Span;

/// Bearer-token guard for the admin surface. Fails closed: a missing,
/// unknown or stale token is Unauthorized, and stale session rows are
/// deleted on sight.
pub struct AdminUser(pub AdminProfile);

impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or(AppError::Unauthorized)?
            .to_str()
            .map_err(|_| AppError::Unauthorized)?;

        let token = header_value
            .strip_prefix("Bearer ")
            .ok_or(AppError::Unauthorized)?;

        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);

        let token_hash = hash_token(token);
        let record = app_state
            .session_repo
            .find(&token_hash)
            .await?
            .ok_or(AppError::Unauthorized)?;

        if record.is_expired(Utc::now()) {
            let _ = app_state.session_repo.delete(&token_hash).await;
            return Err(AppError::Unauthorized);
        }

        Span::current().record("admin", record.email.as_str());

        Ok(AdminUser(AdminProfile { email: record.email }))
    }
}
