use std::path::PathBuf;
use std::time::Duration;

use shared::env::{get_env_var, get_optional_env_var};
use url::Url;
use uuid::Uuid;

use crate::constant::{
    CLIENT_VERSION, DEFAULT_CLIENT_NAME, DEFAULT_DEVICE_NAME, ENV_CLIENT_NAME, ENV_DEVICE_ID,
    ENV_DEVICE_NAME, ENV_DOWNLOAD_DIR, ENV_READ_TIMEOUT_SECS, ENV_SERVER_URL, ENV_TOKEN,
};

use super::ConfigError;

/// Connection settings for one media server.
///
/// The client identification fields end up in the `Authorization` header the
/// server uses to attribute sessions and devices.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_uri: Url,
    pub token: Option<String>,
    pub read_timeout: Option<Duration>,
    pub download_dir: Option<PathBuf>,
    pub client_name: String,
    pub device_name: String,
    pub device_id: String,
    pub client_version: String,
}

impl ApiConfig {
    pub fn new(base_uri: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_uri: parse_base_uri(base_uri)?,
            token: None,
            read_timeout: None,
            download_dir: None,
            client_name: DEFAULT_CLIENT_NAME.to_string(),
            device_name: DEFAULT_DEVICE_NAME.to_string(),
            device_id: Uuid::new_v4().simple().to_string(),
            client_version: CLIENT_VERSION.to_string(),
        })
    }

    /// Reads `MEDIA_SERVER_URL` (required) and the optional `MEDIA_SERVER_*` settings.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::new(&get_env_var(ENV_SERVER_URL)?)?;
        config.token = get_optional_env_var(ENV_TOKEN)?;
        if let Some(secs) = get_optional_env_var(ENV_READ_TIMEOUT_SECS)? {
            let secs = secs
                .trim()
                .parse::<u64>()
                .map_err(|source| ConfigError::InvalidNumber {
                    key: ENV_READ_TIMEOUT_SECS,
                    source,
                })?;
            config.read_timeout = Some(Duration::from_secs(secs));
        }
        config.download_dir = get_optional_env_var(ENV_DOWNLOAD_DIR)?.map(PathBuf::from);
        if let Some(client_name) = get_optional_env_var(ENV_CLIENT_NAME)? {
            config.client_name = client_name;
        }
        if let Some(device_name) = get_optional_env_var(ENV_DEVICE_NAME)? {
            config.device_name = device_name;
        }
        if let Some(device_id) = get_optional_env_var(ENV_DEVICE_ID)? {
            config.device_id = device_id;
        }
        Ok(config)
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout);
        self
    }

    pub fn with_download_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.download_dir = Some(dir.into());
        self
    }

    pub fn with_client(mut self, client_name: impl Into<String>, version: impl Into<String>) -> Self {
        self.client_name = client_name.into();
        self.client_version = version.into();
        self
    }

    pub fn with_device(mut self, device_name: impl Into<String>, device_id: impl Into<String>) -> Self {
        self.device_name = device_name.into();
        self.device_id = device_id.into();
        self
    }
}

fn parse_base_uri(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim())?;
    // "localhost:8096" parses with "localhost" as its scheme
    if url.cannot_be_a_base() {
        return Err(ConfigError::NotABase(raw.to_owned()));
    }
    Ok(url)
}
