use imageapi::ImageApiError;
use shared::env::EnvError;
use shared::tracing::TracingSetupError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Image API error: {0}")]
    ImageApiError(#[from] ImageApiError),
    #[error("Env error: {0}")]
    EnvError(#[from] EnvError),
    #[error("Tracing setup error: {0}")]
    TracingSetupError(#[from] TracingSetupError),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Invalid item id '{0}': {1}")]
    InvalidItemId(String, #[source] uuid::Error),
    #[error("{0} image(s) could not be downloaded")]
    Incomplete(usize),
}
