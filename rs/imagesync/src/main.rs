use std::path::PathBuf;

use imagesync::constant::{DEFAULT_OUTPUT_DIR, ENV_ITEM_ID, ENV_OUTPUT_DIR};
use imagesync::error::SyncError;
use imagesync::sync::sync_item_images;
use imageapi::ImageApi;
use shared::env::{get_env_var, get_optional_env_var};
use shared::tracing::setup_tracing;
use tracing::{error, info};
use uuid::Uuid;

#[tokio::main]
async fn main() -> Result<(), SyncError> {
    dotenv::dotenv().ok();
    setup_tracing()?;

    let raw_item_id = get_env_var(ENV_ITEM_ID)?;
    let item_id = Uuid::parse_str(raw_item_id.trim())
        .map_err(|e| SyncError::InvalidItemId(raw_item_id.clone(), e))?;
    let output_dir = get_optional_env_var(ENV_OUTPUT_DIR)?
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    let api = ImageApi::from_env()?;
    info!("Syncing images of {} into {}", item_id, output_dir.display());
    let report = sync_item_images(&api, item_id, &output_dir).await?;

    info!("Saved {} image(s)", report.saved.len());
    if !report.is_complete() {
        for failed in &report.failed {
            error!("{}", failed);
        }
        return Err(SyncError::Incomplete(report.failed.len()));
    }
    Ok(())
}
