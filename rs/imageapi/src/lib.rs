//! Typed client for the image endpoints of a Jellyfin-compatible media server.
//!
//! [`ImageApi`] exposes one method pair per HTTP operation: `op` returns the
//! decoded payload, `op_with_http_info` additionally returns the status code and
//! response headers. Requests go through an [`ApiClient`], which owns the
//! connection pool, the middleware stack and the per-request read timeout.

pub mod api;
pub mod client;
pub mod config;
pub mod constant;
pub mod download;
pub mod error;
pub mod models;
pub mod request;

#[cfg(test)]
mod util;

pub use api::{ImageApi, NamedEntity};
pub use client::{ApiClient, ApiClientBuilder, ApiResponse, AuthMiddleware, TracingMiddleware};
pub use config::{ApiConfig, ConfigError};
pub use download::ImageDownload;
pub use error::{ImageApiError, Result};
pub use models::{
    ImageFormat, ImageInfo, ImageQuery, ImageType, ImageUpload, TaggedImage, UploadEncoding,
};
