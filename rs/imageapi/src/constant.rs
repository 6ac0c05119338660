pub const ENV_SERVER_URL: &str = "MEDIA_SERVER_URL";
pub const ENV_TOKEN: &str = "MEDIA_SERVER_TOKEN";
pub const ENV_READ_TIMEOUT_SECS: &str = "MEDIA_SERVER_READ_TIMEOUT_SECS";
pub const ENV_DOWNLOAD_DIR: &str = "MEDIA_SERVER_DOWNLOAD_DIR";
pub const ENV_CLIENT_NAME: &str = "MEDIA_SERVER_CLIENT";
pub const ENV_DEVICE_NAME: &str = "MEDIA_SERVER_DEVICE";
pub const ENV_DEVICE_ID: &str = "MEDIA_SERVER_DEVICE_ID";

pub const DEFAULT_CLIENT_NAME: &str = "imageapi";
pub const DEFAULT_DEVICE_NAME: &str = "imageapi";
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const ACCEPT_IMAGE: &str = "image/*, application/octet-stream, application/json, application/json; profile=CamelCase, application/json; profile=PascalCase";
pub const ACCEPT_JSON: &str =
    "application/json, application/json; profile=CamelCase, application/json; profile=PascalCase";

pub const DOWNLOAD_DIR_PREFIX: &str = "image-download-";
pub const DOWNLOAD_FILE_STEM: &str = "download";
