//! The site's browser-side behavior as a library: the wizard's submission
//! flow, the dashboard's session guard, and the admin resource calls, all
//! against the HTTP surface in `api`.

pub mod admin_client;
pub mod booking_client;
pub mod session;

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    /// No usable session: log in again. Fail-closed result of the guard.
    #[error("authentication required")]
    AuthRequired,
    /// The backend's `{error}` message, surfaced inline as-is.
    #[error("{0}")]
    Api(String),
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("draft has no selected package")]
    IncompleteDraft,
    #[error("file is {size} bytes; the limit is {limit}")]
    FileTooLarge { size: u64, limit: u64 },
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Pulls the `{error}` body out of a failed response, falling back to the
/// status line when the body is not the expected shape.
pub(crate) async fn api_error(res: reqwest::Response) -> ClientError {
    let status = res.status();
    match res.json::<ErrorBody>().await {
        Ok(body) => ClientError::Api(body.error),
        Err(_) => ClientError::Api(format!("request failed with status {}", status)),
    }
}
