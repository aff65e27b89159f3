use crate::domain::models::image::{ImageCategory, StoredImage, PLACEHOLDER};
use crate::domain::ports::ImageStore;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;

/// Filesystem-backed image store: one directory per category under `root`,
/// public URLs formed from a configured base.
pub struct LocalImageStore {
    root: PathBuf,
    public_base: String,
}

impl LocalImageStore {
    pub fn new(root: impl Into<PathBuf>, public_base: String) -> Self {
        Self {
            root: root.into(),
            public_base,
        }
    }

    fn resolve(&self, path: &str) -> Result<PathBuf, AppError> {
        if path.split('/').any(|segment| segment.is_empty() || segment == "..") {
            return Err(AppError::Validation(format!("invalid object path: {}", path)));
        }
        Ok(self.root.join(path))
    }
}

fn map_io(path: &str, e: std::io::Error) -> AppError {
    if e.kind() == ErrorKind::NotFound {
        AppError::NotFound(format!("object not found: {}", path))
    } else {
        AppError::Storage(format!("{}: {}", path, e))
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn put(&self, path: &str, bytes: &[u8]) -> Result<(), AppError> {
        let full = self.resolve(path)?;
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).await.map_err(|e| map_io(path, e))?;
        }
        fs::write(&full, bytes).await.map_err(|e| map_io(path, e))
    }

    async fn get(&self, path: &str) -> Result<Vec<u8>, AppError> {
        let full = self.resolve(path)?;
        fs::read(&full).await.map_err(|e| map_io(path, e))
    }

    async fn exists(&self, path: &str) -> Result<bool, AppError> {
        let full = self.resolve(path)?;
        fs::try_exists(&full).await.map_err(|e| map_io(path, e))
    }

    async fn delete(&self, path: &str) -> Result<(), AppError> {
        let full = self.resolve(path)?;
        fs::remove_file(&full).await.map_err(|e| map_io(path, e))
    }

    async fn list(&self, category: ImageCategory) -> Result<Vec<StoredImage>, AppError> {
        let dir = self.root.join(category.as_str());

        let mut entries = match fs::read_dir(&dir).await {
            Ok(entries) => entries,
            // A category nobody has uploaded to yet is simply empty.
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(map_io(category.as_str(), e)),
        };

        let mut images = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(|e| map_io(category.as_str(), e))? {
            let name = entry.file_name().to_string_lossy().to_string();
            if name == PLACEHOLDER {
                continue;
            }

            let metadata = entry.metadata().await.map_err(|e| map_io(&name, e))?;
            if !metadata.is_file() {
                continue;
            }

            let path = format!("{}/{}", category, name);
            images.push(StoredImage {
                url: self.public_url(&path),
                name,
                path,
                category,
                size: metadata.len(),
                created_at: created_time(&metadata),
            });
        }

        images.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(images)
    }

    fn public_url(&self, path: &str) -> String {
        format!("{}/{}", self.public_base.trim_end_matches('/'), path)
    }
}

fn created_time(metadata: &std::fs::Metadata) -> Option<DateTime<Utc>> {
    metadata.created().or_else(|_| metadata.modified()).ok().map(DateTime::<Utc>::from)
}
