use chrono::{DateTime, Duration, Utc};
use rand::{distributions::Alphanumeric, Rng};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use sqlx::FromRow;

/// Sessions issued at login die this many hours later, on both sides of
/// the wire: the dashboard's local clock check and the bearer lookup here.
pub const SESSION_TTL_HOURS: i64 = 24;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AdminProfile {
    pub email: String,
}

/// A session row. Only the hash of the bearer token is stored.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct SessionRecord {
    pub token_hash: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl SessionRecord {
    pub fn new(email: String, token_hash: String) -> Self {
        Self {
            token_hash,
            email,
            created_at: Utc::now(),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now - self.created_at > Duration::hours(SESSION_TTL_HOURS)
    }
}

pub fn generate_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(48)
        .map(char::from)
        .collect()
}

pub fn hash_token(raw: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(raw.as_bytes());
    format!("{:x}", hasher.finalize())
}
