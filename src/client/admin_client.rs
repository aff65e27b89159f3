use crate::api::dtos::requests::{
    BookingListQuery, DeletePhotoRequest, LoginRequest, MovePhotoRequest, PhotoListQuery,
    UploadImageRequest,
};
use crate::api::dtos::responses::{
    BookingsResponse, LoginResponse, PhotosResponse, UploadImageResponse,
};
use crate::client::session::{AdminSession, SessionStore};
use crate::client::{api_error, ClientError};
use crate::domain::models::booking::Booking;
use crate::domain::models::image::{ImageCategory, StoredImage};
use base64::{engine::general_purpose, Engine as _};
use reqwest::Client;
use std::path::Path;

/// Uploads above this size are refused before any bytes leave the machine.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// The dashboard's resource calls. Every request passes the session guard
/// first, and every mutation re-fetches the full list so the caller's view
/// matches the backend.
pub struct AdminClient {
    http: Client,
    base_url: String,
    pub sessions: SessionStore,
}

impl AdminClient {
    pub fn new(base_url: impl Into<String>, session_path: impl Into<std::path::PathBuf>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            sessions: SessionStore::new(session_path),
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AdminSession, ClientError> {
        let res = self.http.post(format!("{}/api/admin/login", self.base_url))
            .json(&LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(api_error(res).await);
        }

        let body: LoginResponse = res.json().await?;
        self.sessions.save(body.user, body.session)
    }

    pub fn logout(&self) {
        self.sessions.clear();
    }

    fn bearer(&self) -> Result<String, ClientError> {
        Ok(self.sessions.check_auth()?.session.access_token)
    }

    pub async fn bookings(&self, query: &BookingListQuery) -> Result<Vec<Booking>, ClientError> {
        let token = self.bearer()?;

        let res = self.http.get(format!("{}/api/admin/bookings", self.base_url))
            .bearer_auth(token)
            .query(query)
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(api_error(res).await);
        }

        let body: BookingsResponse = res.json().await?;
        Ok(body.bookings)
    }

    pub async fn confirm_booking(&self, id: &str) -> Result<Vec<Booking>, ClientError> {
        let token = self.bearer()?;

        let res = self.http.patch(format!("{}/api/admin/bookings/{}/confirm", self.base_url, id))
            .bearer_auth(token)
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(api_error(res).await);
        }

        self.bookings(&BookingListQuery::default()).await
    }

    pub async fn delete_booking(&self, id: &str) -> Result<Vec<Booking>, ClientError> {
        let token = self.bearer()?;

        let res = self.http.delete(format!("{}/api/admin/bookings/{}", self.base_url, id))
            .bearer_auth(token)
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(api_error(res).await);
        }

        self.bookings(&BookingListQuery::default()).await
    }

    pub async fn photos(&self, category: Option<ImageCategory>) -> Result<Vec<StoredImage>, ClientError> {
        let token = self.bearer()?;

        let query = PhotoListQuery {
            category: category.map(|c| c.to_string()),
        };

        let res = self.http.get(format!("{}/api/admin/photos", self.base_url))
            .bearer_auth(token)
            .query(&query)
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(api_error(res).await);
        }

        let body: PhotosResponse = res.json().await?;
        Ok(body.photos)
    }

    /// Reads the file directly, refuses anything over the size limit, and
    /// ships it as a base64 data URL.
    pub async fn upload_image(
        &self,
        file: &Path,
        category: ImageCategory,
        custom_name: Option<&str>,
    ) -> Result<UploadImageResponse, ClientError> {
        let bytes = std::fs::read(file)?;

        let size = bytes.len() as u64;
        if size > MAX_UPLOAD_BYTES {
            return Err(ClientError::FileTooLarge { size, limit: MAX_UPLOAD_BYTES });
        }

        let file_name = match custom_name {
            Some(name) => name.to_string(),
            None => file
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .ok_or_else(|| ClientError::Api("file has no name".to_string()))?,
        };

        let token = self.bearer()?;
        let file_data = format!("data:image/jpeg;base64,{}", general_purpose::STANDARD.encode(&bytes));

        let res = self.http.post(format!("{}/api/admin/upload-image", self.base_url))
            .bearer_auth(token)
            .json(&UploadImageRequest {
                file_name,
                file_data,
                category: category.to_string(),
            })
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(api_error(res).await);
        }

        Ok(res.json::<UploadImageResponse>().await?)
    }

    pub async fn move_photo(
        &self,
        old_path: &str,
        new_category: ImageCategory,
    ) -> Result<Vec<StoredImage>, ClientError> {
        let token = self.bearer()?;

        let res = self.http.post(format!("{}/api/admin/photos/move", self.base_url))
            .bearer_auth(token)
            .json(&MovePhotoRequest {
                old_path: old_path.to_string(),
                new_path: None,
                new_category: Some(new_category.to_string()),
            })
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(api_error(res).await);
        }

        self.photos(None).await
    }

    pub async fn delete_photo(&self, path: &str) -> Result<Vec<StoredImage>, ClientError> {
        let token = self.bearer()?;

        let res = self.http.delete(format!("{}/api/admin/photos", self.base_url))
            .bearer_auth(token)
            .json(&DeletePhotoRequest { path: path.to_string() })
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(api_error(res).await);
        }

        self.photos(None).await
    }
}
