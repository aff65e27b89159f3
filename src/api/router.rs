use axum::{
    body::Body,
    extract::Request,
    http::{header, HeaderValue, Method},
    routing::{delete, get, patch, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::api::handlers::{auth, booking, health, images, payment};
use crate::state::AppState;
use tower_http::{
    classify::ServerErrorsFailureClass,
    cors::CorsLayer,
    trace::TraceLayer,
};
use tracing::{error, info, info_span, Span};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    let origin = state
        .config
        .frontend_origin
        .parse::<HeaderValue>()
        .expect("FRONTEND_URL is not a valid origin");

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/api/health", get(health::health_check))

        // Public booking flow
        .route("/api/create-payment-intent", post(payment::create_payment_intent))
        .route("/api/booking-complete", post(booking::booking_complete))

        // Public portfolio feed
        .route("/api/images/{category}", get(images::list_images))

        // Admin
        .route("/api/admin/login", post(auth::login))
        .route("/api/admin/bookings", get(booking::list_bookings))
        .route("/api/admin/bookings/{id}/confirm", patch(booking::confirm_booking))
        .route("/api/admin/bookings/{id}", delete(booking::delete_booking))
        .route("/api/admin/upload-image", post(images::upload_image))
        .route("/api/admin/photos", get(images::list_photos).delete(images::delete_photo))
        .route("/api/admin/photos/move", post(images::move_photo))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        admin = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(cors)
        .with_state(state)
}
