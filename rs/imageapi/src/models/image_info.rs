use serde::{Deserialize, Serialize};

use super::ImageType;

/// One entry of `GET /Items/{itemId}/Images`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImageInfo {
    pub image_type: ImageType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blur_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default)]
    pub size: u64,
}

impl ImageInfo {
    /// Index used to address this image; the server omits it for single-slot types.
    pub fn index(&self) -> u32 {
        self.image_index.unwrap_or(0)
    }
}
