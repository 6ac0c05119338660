use thiserror::Error;
use tracing::subscriber::SetGlobalDefaultError;

use crate::env::EnvError;

#[derive(Error, Debug)]
pub enum TracingSetupError {
    #[error("Could not read the log filter: {0}")]
    EnvError(#[from] EnvError),
    #[error("Global subscriber already set: {0}")]
    SetGlobalDefaultError(#[from] SetGlobalDefaultError),
}
