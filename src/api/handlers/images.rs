use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use crate::api::dtos::requests::{DeletePhotoRequest, MovePhotoRequest, PhotoListQuery, UploadImageRequest};
use crate::api::dtos::responses::{
    ImagesResponse, MovePhotoResponse, PhotosResponse, SuccessResponse, UploadImageResponse,
};
use crate::api::extractors::auth::AdminUser;
use crate::domain::models::image::{ImageCategory, StoredImage};
use crate::domain::services::photo_library;
use crate::error::AppError;
use crate::state::AppState;
use base64::{engine::general_purpose, Engine as _};
use std::sync::Arc;
use tracing::info;

pub async fn upload_image(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Json(payload): Json<UploadImageRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.file_name.trim().is_empty() {
        return Err(AppError::Validation("fileName must not be empty".into()));
    }
    if payload.file_name.contains('/') || payload.file_name.contains("..") {
        return Err(AppError::Validation("fileName must not contain path separators".into()));
    }

    let category = parse_category(&payload.category)?;
    let bytes = decode_data_url(&payload.file_data)?;

    let path = format!("{}/{}", category, payload.file_name);
    state.image_store.put(&path, &bytes).await?;

    info!("Image uploaded: {} ({} bytes)", path, bytes.len());

    let url = state.image_store.public_url(&path);
    Ok(Json(UploadImageResponse { success: true, path, url }))
}

/// Public portfolio feed. Accepts one of the fixed categories, or "all".
pub async fn list_images(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let images = match category.as_str() {
        "all" => collect_all(&state).await?,
        other => state.image_store.list(parse_category(other)?).await?,
    };

    Ok(Json(ImagesResponse { success: true, images }))
}

pub async fn list_photos(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Query(query): Query<PhotoListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let photos = match query.category.as_deref() {
        None | Some("all") | Some("") => collect_all(&state).await?,
        Some(other) => state.image_store.list(parse_category(other)?).await?,
    };

    Ok(Json(PhotosResponse { success: true, photos }))
}

pub async fn delete_photo(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Json(payload): Json<DeletePhotoRequest>,
) -> Result<impl IntoResponse, AppError> {
    state.image_store.delete(&payload.path).await?;

    info!("Photo deleted: {}", payload.path);

    Ok(Json(SuccessResponse { success: true }))
}

pub async fn move_photo(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Json(payload): Json<MovePhotoRequest>,
) -> Result<impl IntoResponse, AppError> {
    let new_path = match (payload.new_path, payload.new_category) {
        (Some(path), _) => path,
        (None, Some(category)) => {
            let category = parse_category(&category)?;
            let file_name = payload
                .old_path
                .rsplit('/')
                .next()
                .filter(|name| !name.is_empty())
                .ok_or_else(|| AppError::Validation("oldPath has no file name".into()))?;
            format!("{}/{}", category, file_name)
        }
        (None, None) => {
            return Err(AppError::Validation("newPath or newCategory is required".into()));
        }
    };

    let outcome = photo_library::move_object(state.image_store.as_ref(), &payload.old_path, &new_path).await?;

    Ok(Json(MovePhotoResponse {
        success: true,
        new_path: outcome.new_path,
        url: outcome.url,
    }))
}

fn parse_category(raw: &str) -> Result<ImageCategory, AppError> {
    raw.parse::<ImageCategory>().map_err(AppError::Validation)
}

/// Strips a `data:image/...;base64,` prefix when present and decodes.
fn decode_data_url(data: &str) -> Result<Vec<u8>, AppError> {
    let payload = match data.split_once(";base64,") {
        Some((prefix, rest)) if prefix.starts_with("data:image/") => rest,
        _ => data,
    };

    general_purpose::STANDARD
        .decode(payload.trim())
        .map_err(|_| AppError::Validation("fileData is not valid base64".into()))
}

async fn collect_all(state: &AppState) -> Result<Vec<StoredImage>, AppError> {
    let mut all = Vec::new();
    for category in ImageCategory::ALL {
        all.extend(state.image_store.list(category).await?);
    }
    Ok(all)
}
