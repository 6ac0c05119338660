use std::num::ParseIntError;
use thiserror::Error;

use shared::env::EnvError;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable error: {0}")]
    EnvError(#[from] EnvError),
    #[error("Invalid server url: {0}")]
    UrlError(#[from] url::ParseError),
    #[error("Server url cannot be used as a base: {0}")]
    NotABase(String),
    #[error("Invalid number in {key}: {source}")]
    InvalidNumber {
        key: &'static str,
        #[source]
        source: ParseIntError,
    },
}
