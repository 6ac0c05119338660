use reqwest::header::{HeaderMap, InvalidHeaderValue};
use reqwest::StatusCode;
use thiserror::Error;

use crate::config::ConfigError;

pub type Result<T> = std::result::Result<T, ImageApiError>;

#[derive(Error, Debug)]
pub enum ImageApiError {
    /// A required parameter was absent; raised before any request is sent.
    #[error("Missing the required parameter '{parameter}' when calling {operation}")]
    MissingParameter {
        operation: &'static str,
        parameter: &'static str,
    },
    #[error("Invalid parameter '{parameter}' when calling {operation}: {reason}")]
    InvalidParameter {
        operation: &'static str,
        parameter: &'static str,
        reason: String,
    },
    /// The server answered with a status outside of 2xx.
    #[error("{operation} call failed with: {} - {}", .status.as_u16(), display_body(.body))]
    Api {
        operation: &'static str,
        status: StatusCode,
        headers: HeaderMap,
        body: String,
    },
    #[error("Path template error: {0}")]
    Path(String),
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest_middleware::Error),
    #[error("Reqwest error: {0}")]
    ReqwestError(#[from] reqwest::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Url error: {0}")]
    UrlError(#[from] url::ParseError),
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] InvalidHeaderValue),
    #[error("Config error: {0}")]
    ConfigError(#[from] ConfigError),
}

fn display_body(body: &str) -> &str {
    if body.is_empty() {
        "[no body]"
    } else {
        body
    }
}

impl ImageApiError {
    pub(crate) fn missing(operation: &'static str, parameter: &'static str) -> Self {
        Self::MissingParameter {
            operation,
            parameter,
        }
    }

    pub(crate) fn invalid(
        operation: &'static str,
        parameter: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            operation,
            parameter,
            reason: reason.into(),
        }
    }

    /// HTTP status associated with the error. Client-side validation failures
    /// report 400 even though nothing was sent.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::MissingParameter { .. } | Self::InvalidParameter { .. } => Some(400),
            Self::Api { status, .. } => Some(status.as_u16()),
            Self::ReqwestError(e) => e.status().map(|status| status.as_u16()),
            _ => None,
        }
    }

    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::Api { body, .. } => Some(body),
            _ => None,
        }
    }

    pub fn response_headers(&self) -> Option<&HeaderMap> {
        match self {
            Self::Api { headers, .. } => Some(headers),
            _ => None,
        }
    }

    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::MissingParameter { .. } | Self::InvalidParameter { .. }
        )
    }
}
