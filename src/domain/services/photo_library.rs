use crate::domain::models::image::StoredImage;
use crate::domain::ports::ImageStore;
use crate::error::AppError;
use std::collections::HashMap;
use tracing::info;

pub struct MoveOutcome {
    pub new_path: String,
    pub url: String,
}

/// Moves an object between categories as a guarded two-phase sequence:
/// copy to the destination, verify the destination object actually exists,
/// and only then remove the source. Any failure before the final delete
/// leaves the source untouched, so the worst crash outcome is a duplicate,
/// never a lost photo. `find_duplicates` is the matching reconciliation.
pub async fn move_object(
    store: &dyn ImageStore,
    old_path: &str,
    new_path: &str,
) -> Result<MoveOutcome, AppError> {
    let bytes = store.get(old_path).await?;

    store.put(new_path, &bytes).await?;

    if !store.exists(new_path).await? {
        return Err(AppError::Storage(format!(
            "destination {} missing after copy; source left in place",
            new_path
        )));
    }

    store.delete(old_path).await?;

    info!("Photo moved: {} -> {}", old_path, new_path);

    Ok(MoveOutcome {
        new_path: new_path.to_string(),
        url: store.public_url(new_path),
    })
}

/// Scans every category for file names present more than once — the
/// footprint of a move that crashed between copy and delete.
pub async fn find_duplicates(store: &dyn ImageStore) -> Result<Vec<Vec<StoredImage>>, AppError> {
    use crate::domain::models::image::ImageCategory;

    let mut by_name: HashMap<String, Vec<StoredImage>> = HashMap::new();

    for category in ImageCategory::ALL {
        for image in store.list(category).await? {
            by_name.entry(image.name.clone()).or_default().push(image);
        }
    }

    let mut duplicates: Vec<Vec<StoredImage>> = by_name
        .into_values()
        .filter(|group| group.len() > 1)
        .collect();
    duplicates.sort_by(|a, b| a[0].name.cmp(&b[0].name));

    Ok(duplicates)
}
