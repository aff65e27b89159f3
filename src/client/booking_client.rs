use crate::api::dtos::requests::{BookingCompleteRequest, BookingSnapshot, CreatePaymentIntentRequest};
use crate::api::dtos::responses::{BookingCompleteResponse, PaymentIntentResponse};
use crate::client::{api_error, ClientError};
use crate::domain::wizard::BookingDraft;
use reqwest::Client;
use uuid::Uuid;

/// Drives the wizard's final submit: request a payment intent, then record
/// the booking. Two sequential calls, no retries. A phase-1 failure stops
/// before anything is persisted; a phase-2 failure is surfaced without
/// voiding the intent.
pub struct BookingClient {
    http: Client,
    base_url: String,
}

impl BookingClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Submits a finished draft and returns the persisted booking id.
    pub async fn submit(&self, draft: &BookingDraft) -> Result<String, ClientError> {
        let package = draft.selected_package().ok_or(ClientError::IncompleteDraft)?;

        let snapshot = BookingSnapshot {
            package: package.clone(),
            add_ons: draft.selected_add_ons().to_vec(),
            customer_info: draft.customer_info.clone(),
        };

        // Phase 1: payment intent for the deposit.
        let res = self.http.post(format!("{}/api/create-payment-intent", self.base_url))
            .json(&CreatePaymentIntentRequest {
                amount: draft.deposit_price() as i64,
                booking_data: snapshot.clone(),
                total_price: draft.total_price() as i64,
            })
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(api_error(res).await);
        }

        let _intent: PaymentIntentResponse = res.json().await?;

        // No live capture yet: the booking is recorded immediately with a
        // simulated payment reference, as the site has always done.
        let payment_reference = format!("simulated_payment_{}", Uuid::new_v4());

        self.complete(snapshot, payment_reference, draft.total_price() as i64, draft.deposit_price() as i64)
            .await
    }

    async fn complete(
        &self,
        snapshot: BookingSnapshot,
        payment_intent_id: String,
        total_price: i64,
        deposit_paid: i64,
    ) -> Result<String, ClientError> {
        let res = self.http.post(format!("{}/api/booking-complete", self.base_url))
            .json(&BookingCompleteRequest {
                booking_data: snapshot,
                payment_intent_id,
                total_price,
                deposit_paid,
            })
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(api_error(res).await);
        }

        let body: BookingCompleteResponse = res.json().await?;
        Ok(body.booking_id)
    }
}
