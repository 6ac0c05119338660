mod config;
mod error;

pub use config::ApiConfig;
pub use error::ConfigError;
