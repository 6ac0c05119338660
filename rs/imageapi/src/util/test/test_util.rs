use httpmock::MockServer;
use uuid::Uuid;

use crate::api::ImageApi;
use crate::config::ApiConfig;
use crate::error::ImageApiError;

pub const TEST_TOKEN: &str = "test-token";
pub const TEST_DEVICE_ID: &str = "test-device";

/// Smallest valid PNG: 1x1, one transparent pixel.
pub const PNG_PIXEL: [u8; 67] = [
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1f,
    0x15, 0xc4, 0x89, 0x00, 0x00, 0x00, 0x0a, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9c, 0x63, 0x00,
    0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0d, 0x0a, 0x2d, 0xb4, 0x00, 0x00, 0x00, 0x00, 0x49,
    0x45, 0x4e, 0x44, 0xae, 0x42, 0x60, 0x82,
];

pub fn test_config(server: &MockServer) -> Result<ApiConfig, ImageApiError> {
    Ok(ApiConfig::new(&server.base_url())?
        .with_client("imageapi", "0.1.0")
        .with_device("tests", TEST_DEVICE_ID)
        .with_token(TEST_TOKEN))
}

pub fn test_api(server: &MockServer) -> Result<ImageApi, ImageApiError> {
    ImageApi::from_config(test_config(server)?)
}

pub fn item_id() -> Uuid {
    Uuid::from_u128(0x7e64_e319_657a_9516_ec78_490d_a03e_dccb)
}

pub fn item_path(suffix: &str) -> String {
    format!("/Items/{}/Images{}", item_id(), suffix)
}
