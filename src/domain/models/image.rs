use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Folder marker objects that listings must never surface.
pub const PLACEHOLDER: &str = ".emptyFolderPlaceholder";

/// The five portfolio categories. The set is fixed; anything else is a
/// validation error at the API edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageCategory {
    RealEstate,
    Portraits,
    Performance,
    EventsMisc,
    Promotional,
}

impl ImageCategory {
    pub const ALL: [ImageCategory; 5] = [
        ImageCategory::RealEstate,
        ImageCategory::Portraits,
        ImageCategory::Performance,
        ImageCategory::EventsMisc,
        ImageCategory::Promotional,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageCategory::RealEstate => "real-estate",
            ImageCategory::Portraits => "portraits",
            ImageCategory::Performance => "performance",
            ImageCategory::EventsMisc => "events-misc",
            ImageCategory::Promotional => "promotional",
        }
    }
}

impl fmt::Display for ImageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ImageCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category: {}", s))
    }
}

/// One object in the image store, as listings report it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredImage {
    pub name: String,
    pub path: String, // category/name
    pub category: ImageCategory,
    pub url: String,
    pub size: u64,
    pub created_at: Option<DateTime<Utc>>,
}
