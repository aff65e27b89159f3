use std::sync::Arc;
use crate::domain::ports::{BookingRepository, ImageStore, PaymentGateway, SessionRepository};
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub booking_repo: Arc<dyn BookingRepository>,
    pub session_repo: Arc<dyn SessionRepository>,
    pub image_store: Arc<dyn ImageStore>,
    // None when STRIPE_SECRET_KEY is absent; the handler answers with an
    // explicit configuration error instead of crashing.
    pub payment: Option<Arc<dyn PaymentGateway>>,
}
