use crate::error::ImageApiError;
use crate::request::QueryPairs;

use super::ImageFormat;

/// Processing options shared by the image fetch endpoints. Every field is
/// optional; unset fields are left out of the query string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageQuery {
    pub max_width: Option<u32>,
    pub max_height: Option<u32>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// 0–100; the server defaults to 90.
    pub quality: Option<u8>,
    pub fill_width: Option<u32>,
    pub fill_height: Option<u32>,
    pub tag: Option<String>,
    pub format: Option<ImageFormat>,
    pub percent_played: Option<f64>,
    pub unplayed_count: Option<u32>,
    pub blur: Option<u32>,
    pub background_color: Option<String>,
    pub foreground_layer: Option<String>,
    pub image_index: Option<u32>,
}

impl ImageQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_size(mut self, max_width: u32, max_height: u32) -> Self {
        self.max_width = Some(max_width);
        self.max_height = Some(max_height);
        self
    }

    pub fn max_width(mut self, max_width: u32) -> Self {
        self.max_width = Some(max_width);
        self
    }

    pub fn max_height(mut self, max_height: u32) -> Self {
        self.max_height = Some(max_height);
        self
    }

    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn fill_width(mut self, fill_width: u32) -> Self {
        self.fill_width = Some(fill_width);
        self
    }

    pub fn fill_height(mut self, fill_height: u32) -> Self {
        self.fill_height = Some(fill_height);
        self
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn fill(mut self, fill_width: u32, fill_height: u32) -> Self {
        self.fill_width = Some(fill_width);
        self.fill_height = Some(fill_height);
        self
    }

    pub fn quality(mut self, quality: u8) -> Self {
        self.quality = Some(quality);
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn format(mut self, format: ImageFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn percent_played(mut self, percent_played: f64) -> Self {
        self.percent_played = Some(percent_played);
        self
    }

    pub fn unplayed_count(mut self, unplayed_count: u32) -> Self {
        self.unplayed_count = Some(unplayed_count);
        self
    }

    pub fn blur(mut self, blur: u32) -> Self {
        self.blur = Some(blur);
        self
    }

    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn foreground_layer(mut self, layer: impl Into<String>) -> Self {
        self.foreground_layer = Some(layer.into());
        self
    }

    pub fn image_index(mut self, image_index: u32) -> Self {
        self.image_index = Some(image_index);
        self
    }

    pub(crate) fn validate(&self, operation: &'static str) -> Result<(), ImageApiError> {
        if let Some(quality) = self.quality {
            if quality > 100 {
                return Err(ImageApiError::invalid(
                    operation,
                    "quality",
                    format!("{quality} is outside 0-100"),
                ));
            }
        }
        if let Some(percent_played) = self.percent_played {
            if !(0.0..=100.0).contains(&percent_played) {
                return Err(ImageApiError::invalid(
                    operation,
                    "percentPlayed",
                    format!("{percent_played} is outside 0-100"),
                ));
            }
        }
        Ok(())
    }

    /// Query pairs in wire order, skipping the names listed in `skip`
    /// (parameters that an endpoint carries in its path instead).
    pub fn to_query(&self, skip: &[&str]) -> QueryPairs {
        let mut query = QueryPairs::new();
        let mut push = |name: &'static str, value: Option<String>| {
            if !skip.contains(&name) {
                query.push_opt(name, value);
            }
        };
        push("maxWidth", self.max_width.map(|v| v.to_string()));
        push("maxHeight", self.max_height.map(|v| v.to_string()));
        push("width", self.width.map(|v| v.to_string()));
        push("height", self.height.map(|v| v.to_string()));
        push("quality", self.quality.map(|v| v.to_string()));
        push("fillWidth", self.fill_width.map(|v| v.to_string()));
        push("fillHeight", self.fill_height.map(|v| v.to_string()));
        push("tag", self.tag.clone());
        push("format", self.format.map(|v| v.to_string()));
        push("percentPlayed", self.percent_played.map(|v| v.to_string()));
        push("unplayedCount", self.unplayed_count.map(|v| v.to_string()));
        push("blur", self.blur.map(|v| v.to_string()));
        push("backgroundColor", self.background_color.clone());
        push("foregroundLayer", self.foreground_layer.clone());
        push("imageIndex", self.image_index.map(|v| v.to_string()));
        query
    }
}

/// Path parameters of the fully-addressed item image route
/// `/Items/{itemId}/Images/{imageType}/{imageIndex}/{tag}/{format}/{maxWidth}/{maxHeight}/{percentPlayed}/{unplayedCount}`.
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedImage {
    pub tag: String,
    pub format: ImageFormat,
    pub max_width: u32,
    pub max_height: u32,
    pub percent_played: f64,
    pub unplayed_count: u32,
}

impl TaggedImage {
    pub fn new(tag: impl Into<String>, format: ImageFormat, max_width: u32, max_height: u32) -> Self {
        Self {
            tag: tag.into(),
            format,
            max_width,
            max_height,
            percent_played: 0.0,
            unplayed_count: 0,
        }
    }

    pub fn percent_played(mut self, percent_played: f64) -> Self {
        self.percent_played = percent_played;
        self
    }

    pub fn unplayed_count(mut self, unplayed_count: u32) -> Self {
        self.unplayed_count = unplayed_count;
        self
    }

    /// Query names this route carries in its path.
    pub(crate) const PATH_NAMES: [&'static str; 7] = [
        "tag",
        "format",
        "maxWidth",
        "maxHeight",
        "percentPlayed",
        "unplayedCount",
        "imageIndex",
    ];
}
