use axum::{extract::State, response::IntoResponse, Json};
use crate::api::dtos::requests::CreatePaymentIntentRequest;
use crate::api::dtos::responses::PaymentIntentResponse;
use crate::domain::ports::PaymentIntentParams;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

pub async fn create_payment_intent(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreatePaymentIntentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let gateway = state.payment.as_ref().ok_or(AppError::PaymentNotConfigured)?;

    if payload.amount <= 0 {
        return Err(AppError::Validation("amount must be a positive number of dollars".into()));
    }

    let client_secret = gateway
        .create_payment_intent(&PaymentIntentParams {
            amount: payload.amount,
            customer_email: payload.booking_data.customer_info.email.clone(),
            customer_name: payload.booking_data.customer_info.name.clone(),
            package_name: payload.booking_data.package.name.clone(),
            total_price: payload.total_price,
        })
        .await?;

    info!(
        "Payment intent created for {} (deposit ${})",
        payload.booking_data.customer_info.email, payload.amount
    );

    Ok(Json(PaymentIntentResponse { client_secret }))
}
