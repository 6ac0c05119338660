use std::fmt;
use std::path::{Path, PathBuf};

use imageapi::{ImageApi, ImageApiError, ImageDownload, ImageInfo, ImageQuery, ImageType};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::SyncError;

/// An image that was listed but could not be saved.
#[derive(Debug)]
pub struct FailedImage {
    pub image_type: ImageType,
    pub index: u32,
    pub error: ImageApiError,
}

impl fmt::Display for FailedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} #{}: {}", self.image_type, self.index, self.error)
    }
}

#[derive(Debug, Default)]
pub struct SyncReport {
    pub saved: Vec<PathBuf>,
    pub failed: Vec<FailedImage>,
}

impl SyncReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Downloads every image of `item_id` into `output_dir` as
/// `{ImageType}_{index}{ext}`. Listing failures abort the run; a failed
/// image is recorded in the report and the rest are still fetched.
pub async fn sync_item_images(
    api: &ImageApi,
    item_id: Uuid,
    output_dir: &Path,
) -> Result<SyncReport, SyncError> {
    tokio::fs::create_dir_all(output_dir).await?;
    let infos = api.get_item_image_infos(item_id).await?;
    info!("Item {} has {} image(s)", item_id, infos.len());

    let query = ImageQuery::new();
    let mut report = SyncReport::default();
    for image in infos {
        let index = image.index();
        let saved = match api
            .get_item_image_by_index(item_id, image.image_type, index, &query)
            .await
        {
            Ok(download) => save(&image, download, output_dir).await,
            Err(e) => Err(e),
        };
        match saved {
            Ok(path) => {
                info!("Saved {}", path.display());
                report.saved.push(path);
            }
            Err(error) => {
                warn!("Skipping {} #{}: {}", image.image_type, index, error);
                report.failed.push(FailedImage {
                    image_type: image.image_type,
                    index,
                    error,
                });
            }
        }
    }
    Ok(report)
}

async fn save(
    image: &ImageInfo,
    download: ImageDownload,
    output_dir: &Path,
) -> Result<PathBuf, ImageApiError> {
    let extension = download
        .format()
        .map(|format| format!(".{}", format.extension()))
        .or_else(|| {
            Path::new(download.file_name())
                .extension()
                .and_then(|extension| extension.to_str())
                .map(|extension| format!(".{}", extension))
        })
        .unwrap_or_default();
    let file_name = format!("{}_{}{}", image.image_type, image.index(), extension);
    download.persist(output_dir.join(file_name)).await
}
