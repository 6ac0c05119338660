use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Image slot on an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageType {
    Primary,
    Art,
    Backdrop,
    Banner,
    Logo,
    Thumb,
    Disc,
    Box,
    Screenshot,
    Menu,
    Chapter,
    BoxRear,
    Profile,
}

impl ImageType {
    pub const ALL: [ImageType; 13] = [
        Self::Primary,
        Self::Art,
        Self::Backdrop,
        Self::Banner,
        Self::Logo,
        Self::Thumb,
        Self::Disc,
        Self::Box,
        Self::Screenshot,
        Self::Menu,
        Self::Chapter,
        Self::BoxRear,
        Self::Profile,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "Primary",
            Self::Art => "Art",
            Self::Backdrop => "Backdrop",
            Self::Banner => "Banner",
            Self::Logo => "Logo",
            Self::Thumb => "Thumb",
            Self::Disc => "Disc",
            Self::Box => "Box",
            Self::Screenshot => "Screenshot",
            Self::Menu => "Menu",
            Self::Chapter => "Chapter",
            Self::BoxRear => "BoxRear",
            Self::Profile => "Profile",
        }
    }
}

impl fmt::Display for ImageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageType {
    type Err = String;

    /// Case-insensitive, like the server's own route binding.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|image_type| image_type.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown image type: {s}"))
    }
}
