use crate::domain::models::image::{ImageCategory, StoredImage, PLACEHOLDER};
use crate::domain::ports::ImageStore;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::error;

/// Hosted storage flavor: the managed provider's object REST API, driven
/// with a service key. One bucket ("images"), paths of the form
/// `category/name`.
pub struct HttpImageStore {
    client: Client,
    base_url: String,
    service_key: String,
}

impl HttpImageStore {
    pub fn new(base_url: String, service_key: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            service_key,
        }
    }

    fn object_url(&self, path: &str) -> String {
        format!("{}/object/images/{}", self.base_url, path)
    }
}

#[derive(Serialize)]
struct ListRequest<'a> {
    prefix: &'a str,
    limit: u32,
}

#[derive(Deserialize)]
struct RemoteObject {
    name: String,
    created_at: Option<DateTime<Utc>>,
    metadata: Option<RemoteMetadata>,
}

#[derive(Deserialize)]
struct RemoteMetadata {
    size: Option<u64>,
}

async fn upstream_error(context: &str, res: reqwest::Response) -> AppError {
    let status = res.status();
    let body = res.text().await.unwrap_or_default();
    let msg = format!("{} failed. Status: {}, Body: {}", context, status, body);
    error!("{}", msg);
    AppError::Storage(msg)
}

#[async_trait]
impl ImageStore for HttpImageStore {
    async fn put(&self, path: &str, bytes: &[u8]) -> Result<(), AppError> {
        let res = self.client.post(self.object_url(path))
            .bearer_auth(&self.service_key)
            .header("x-upsert", "true")
            .header("content-type", "application/octet-stream")
            .body(bytes.to_vec())
            .send()
            .await
            .map_err(|e| AppError::Storage(format!("storage connection error: {}", e)))?;

        if !res.status().is_success() {
            return Err(upstream_error("upload", res).await);
        }
        Ok(())
    }

    async fn get(&self, path: &str) -> Result<Vec<u8>, AppError> {
        let res = self.client.get(self.object_url(path))
            .bearer_auth(&self.service_key)
            .send()
            .await
            .map_err(|e| AppError::Storage(format!("storage connection error: {}", e)))?;

        if res.status() == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!("object not found: {}", path)));
        }
        if !res.status().is_success() {
            return Err(upstream_error("download", res).await);
        }

        let bytes = res.bytes()
            .await
            .map_err(|e| AppError::Storage(format!("storage read error: {}", e)))?;
        Ok(bytes.to_vec())
    }

    async fn exists(&self, path: &str) -> Result<bool, AppError> {
        let res = self.client.head(self.object_url(path))
            .bearer_auth(&self.service_key)
            .send()
            .await
            .map_err(|e| AppError::Storage(format!("storage connection error: {}", e)))?;

        Ok(res.status().is_success())
    }

    async fn delete(&self, path: &str) -> Result<(), AppError> {
        let res = self.client.delete(self.object_url(path))
            .bearer_auth(&self.service_key)
            .send()
            .await
            .map_err(|e| AppError::Storage(format!("storage connection error: {}", e)))?;

        if res.status() == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!("object not found: {}", path)));
        }
        if !res.status().is_success() {
            return Err(upstream_error("delete", res).await);
        }
        Ok(())
    }

    async fn list(&self, category: ImageCategory) -> Result<Vec<StoredImage>, AppError> {
        let res = self.client.post(format!("{}/object/list/images", self.base_url))
            .bearer_auth(&self.service_key)
            .json(&ListRequest { prefix: category.as_str(), limit: 1000 })
            .send()
            .await
            .map_err(|e| AppError::Storage(format!("storage connection error: {}", e)))?;

        if !res.status().is_success() {
            return Err(upstream_error("list", res).await);
        }

        let objects: Vec<RemoteObject> = res.json()
            .await
            .map_err(|e| AppError::Storage(format!("storage list decode error: {}", e)))?;

        let images = objects
            .into_iter()
            .filter(|object| object.name != PLACEHOLDER)
            .map(|object| {
                let path = format!("{}/{}", category, object.name);
                StoredImage {
                    url: self.public_url(&path),
                    name: object.name,
                    path,
                    category,
                    size: object.metadata.and_then(|m| m.size).unwrap_or(0),
                    created_at: object.created_at,
                }
            })
            .collect();

        Ok(images)
    }

    fn public_url(&self, path: &str) -> String {
        format!("{}/object/public/images/{}", self.base_url, path)
    }
}
