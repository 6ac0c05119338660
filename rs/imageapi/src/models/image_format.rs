use std::fmt;

use serde::{Deserialize, Serialize};

/// Output encoding requested from the server. No format means the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageFormat {
    Bmp,
    Gif,
    Jpg,
    Png,
    Webp,
    Svg,
}

impl ImageFormat {
    pub const ALL: [ImageFormat; 6] = [
        Self::Bmp,
        Self::Gif,
        Self::Jpg,
        Self::Png,
        Self::Webp,
        Self::Svg,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bmp => "Bmp",
            Self::Gif => "Gif",
            Self::Jpg => "Jpg",
            Self::Png => "Png",
            Self::Webp => "Webp",
            Self::Svg => "Svg",
        }
    }

    pub const fn mime_type(&self) -> &'static str {
        match self {
            Self::Bmp => "image/bmp",
            Self::Gif => "image/gif",
            Self::Jpg => "image/jpeg",
            Self::Png => "image/png",
            Self::Webp => "image/webp",
            Self::Svg => "image/svg+xml",
        }
    }

    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Bmp => "bmp",
            Self::Gif => "gif",
            Self::Jpg => "jpg",
            Self::Png => "png",
            Self::Webp => "webp",
            Self::Svg => "svg",
        }
    }

    /// Ignores parameters such as `; charset=binary`.
    pub fn from_mime_type(mime_type: &str) -> Option<Self> {
        let essence = mime_type.split(';').next()?.trim();
        match essence.to_ascii_lowercase().as_str() {
            "image/jpg" => Some(Self::Jpg),
            essence => Self::ALL
                .into_iter()
                .find(|format| format.mime_type() == essence),
        }
    }

    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "jpeg" => Some(Self::Jpg),
            extension => Self::ALL
                .into_iter()
                .find(|format| format.extension() == extension),
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
