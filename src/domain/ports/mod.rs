use crate::domain::models::{
    auth::SessionRecord,
    booking::Booking,
    image::{ImageCategory, StoredImage},
};
use crate::error::AppError;
use async_trait::async_trait;

/// Filters for the admin booking list. `confirmed: None` means no status
/// filter; the date bounds are inclusive on `booking_date`.
#[derive(Debug, Default, Clone)]
pub struct BookingFilter {
    pub confirmed: Option<bool>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create(&self, booking: &Booking) -> Result<Booking, AppError>;
    /// Newest first.
    async fn list(&self, filter: &BookingFilter) -> Result<Vec<Booking>, AppError>;
    /// Idempotent: confirming an already-confirmed booking succeeds.
    async fn confirm(&self, id: &str) -> Result<Booking, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn create(&self, record: &SessionRecord) -> Result<(), AppError>;
    async fn find(&self, token_hash: &str) -> Result<Option<SessionRecord>, AppError>;
    async fn delete(&self, token_hash: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Overwrites silently when the path already exists.
    async fn put(&self, path: &str, bytes: &[u8]) -> Result<(), AppError>;
    async fn get(&self, path: &str) -> Result<Vec<u8>, AppError>;
    async fn exists(&self, path: &str) -> Result<bool, AppError>;
    async fn delete(&self, path: &str) -> Result<(), AppError>;
    async fn list(&self, category: ImageCategory) -> Result<Vec<StoredImage>, AppError>;
    fn public_url(&self, path: &str) -> String;
}

#[derive(Debug, Clone)]
pub struct PaymentIntentParams {
    pub amount: i64, // whole dollars; the gateway converts to minor units
    pub customer_email: String,
    pub customer_name: String,
    pub package_name: String,
    pub total_price: i64,
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Returns the intent's client secret.
    async fn create_payment_intent(&self, params: &PaymentIntentParams) -> Result<String, AppError>;
}
