use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use bytes::Bytes;

use crate::error::ImageApiError;

use super::ImageFormat;

/// How the image bytes are put on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadEncoding {
    /// Base64 text, which is what the server's upload routes decode.
    #[default]
    Base64,
    Raw,
}

/// Request body of the image upload endpoints.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    content_type: String,
    data: Bytes,
    encoding: UploadEncoding,
}

impl ImageUpload {
    pub fn new(content_type: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            content_type: content_type.into(),
            data: data.into(),
            encoding: UploadEncoding::default(),
        }
    }

    pub fn with_format(format: ImageFormat, data: impl Into<Bytes>) -> Self {
        Self::new(format.mime_type(), data)
    }

    /// Reads an image from disk, taking the content type from the file extension.
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, ImageApiError> {
        let path = path.as_ref();
        let content_type = path
            .extension()
            .and_then(|extension| extension.to_str())
            .and_then(ImageFormat::from_extension)
            .map(|format| format.mime_type())
            .unwrap_or("application/octet-stream");
        let data = tokio::fs::read(path).await?;
        Ok(Self::new(content_type, data))
    }

    /// Sends the bytes as they are instead of base64 text.
    pub fn raw(mut self) -> Self {
        self.encoding = UploadEncoding::Raw;
        self
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }

    pub fn encoding(&self) -> UploadEncoding {
        self.encoding
    }

    pub(crate) fn validate(&self, operation: &'static str) -> Result<(), ImageApiError> {
        if self.data.is_empty() {
            return Err(ImageApiError::missing(operation, "body"));
        }
        let essence = self.content_type.split(';').next().unwrap_or_default().trim();
        if !essence.to_ascii_lowercase().starts_with("image/") {
            return Err(ImageApiError::invalid(
                operation,
                "Content-Type",
                format!("expected image/*, got {}", self.content_type),
            ));
        }
        Ok(())
    }

    pub(crate) fn body(&self) -> Bytes {
        match self.encoding {
            UploadEncoding::Base64 => Bytes::from(STANDARD.encode(&self.data)),
            UploadEncoding::Raw => self.data.clone(),
        }
    }
}
