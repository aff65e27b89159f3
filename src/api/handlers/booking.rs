use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use crate::api::dtos::requests::{BookingCompleteRequest, BookingListQuery};
use crate::api::dtos::responses::{
    BookingCompleteResponse, BookingsResponse, ConfirmBookingResponse, SuccessResponse,
};
use crate::api::extractors::auth::AdminUser;
use crate::domain::models::booking::{Booking, NewBookingParams};
use crate::domain::ports::BookingFilter;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

/// Records a completed booking. The payload is the wizard snapshot plus
/// the payment reference; prices arrive precomputed and are stored as sent.
pub async fn booking_complete(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<BookingCompleteRequest>,
) -> Result<impl IntoResponse, AppError> {
    let add_ons_json = serde_json::to_string(&payload.booking_data.add_ons)
        .map_err(|e| AppError::Internal(format!("failed to serialize add-ons: {}", e)))?;

    let booking = Booking::new(NewBookingParams {
        customer: payload.booking_data.customer_info,
        package_name: payload.booking_data.package.name,
        package_price: payload.booking_data.package.price as i64,
        add_ons_json,
        total_price: payload.total_price,
        deposit_paid: payload.deposit_paid,
        payment_intent_id: payload.payment_intent_id,
    });

    let created = state.booking_repo.create(&booking).await?;

    info!("Booking saved: {} ({})", created.id, created.customer_email);

    Ok(Json(BookingCompleteResponse {
        success: true,
        booking_id: created.id,
    }))
}

pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Query(query): Query<BookingListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let confirmed = match query.status.as_deref() {
        None | Some("all") | Some("") => None,
        Some("confirmed") => Some(true),
        Some("pending") => Some(false),
        Some(other) => {
            return Err(AppError::Validation(format!("unknown status filter: {}", other)));
        }
    };

    let bookings = state
        .booking_repo
        .list(&BookingFilter {
            confirmed,
            start_date: query.start_date,
            end_date: query.end_date,
        })
        .await?;

    Ok(Json(BookingsResponse { success: true, bookings }))
}

pub async fn confirm_booking(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state.booking_repo.confirm(&booking_id).await?;

    info!("Booking confirmed: {}", booking.id);

    Ok(Json(ConfirmBookingResponse { success: true, booking }))
}

pub async fn delete_booking(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.booking_repo.delete(&booking_id).await?;

    info!("Booking deleted: {}", booking_id);

    Ok(Json(SuccessResponse { success: true }))
}
