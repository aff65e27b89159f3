use crate::api::dtos::responses::SessionToken;
use crate::domain::models::auth::{AdminProfile, SESSION_TTL_HOURS};
use crate::client::ClientError;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// What the dashboard keeps in local storage after a login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminSession {
    pub user: AdminProfile,
    pub session: SessionToken,
    pub timestamp: DateTime<Utc>,
}

/// The session guard. A JSON file stands in for the browser's local
/// storage; everything else behaves the same way: no record, a garbled
/// record, or a record older than 24 hours all fail closed and wipe the
/// file so the next check starts clean.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn save(&self, user: AdminProfile, session: SessionToken) -> Result<AdminSession, ClientError> {
        let record = AdminSession {
            user,
            session,
            timestamp: Utc::now(),
        };

        let json = serde_json::to_string(&record)
            .map_err(|e| ClientError::Api(format!("failed to encode session: {}", e)))?;
        fs::write(&self.path, json)?;

        Ok(record)
    }

    pub fn clear(&self) {
        let _ = fs::remove_file(&self.path);
    }

    pub fn check_auth(&self) -> Result<AdminSession, ClientError> {
        self.check_auth_at(Utc::now())
    }

    pub fn check_auth_at(&self, now: DateTime<Utc>) -> Result<AdminSession, ClientError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => return Err(ClientError::AuthRequired),
        };

        let record: AdminSession = match serde_json::from_str(&raw) {
            Ok(record) => record,
            Err(_) => {
                self.clear();
                return Err(ClientError::AuthRequired);
            }
        };

        if now - record.timestamp > Duration::hours(SESSION_TTL_HOURS) {
            self.clear();
            return Err(ClientError::AuthRequired);
        }

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store(dir: &TempDir) -> SessionStore {
        SessionStore::new(dir.path().join("admin_session.json"))
    }

    fn session_at(store: &SessionStore, timestamp: DateTime<Utc>) {
        let record = AdminSession {
            user: AdminProfile { email: "admin@example.com".to_string() },
            session: SessionToken { access_token: "tok".to_string() },
            timestamp,
        };
        fs::write(&store.path, serde_json::to_string(&record).unwrap()).unwrap();
    }

    #[test]
    fn test_missing_session_requires_auth() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(store(&dir).check_auth(), Err(ClientError::AuthRequired)));
    }

    #[test]
    fn test_fresh_session_is_returned() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        let now = Utc::now();
        session_at(&store, now - Duration::hours(23));

        let session = store.check_auth_at(now).unwrap();
        assert_eq!(session.user.email, "admin@example.com");
        assert_eq!(session.session.access_token, "tok");
    }

    #[test]
    fn test_stale_session_is_rejected_and_cleared() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        let now = Utc::now();
        session_at(&store, now - Duration::hours(25));

        assert!(matches!(store.check_auth_at(now), Err(ClientError::AuthRequired)));
        assert!(!store.path.exists(), "stale record must be wiped");
    }

    #[test]
    fn test_garbled_session_is_rejected_and_cleared() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        fs::write(&store.path, "{not json").unwrap();

        assert!(matches!(store.check_auth(), Err(ClientError::AuthRequired)));
        assert!(!store.path.exists());
    }
}
