use std::fmt;
use std::path::{Path, PathBuf};

use bytes::Bytes;
use futures::StreamExt;
use lazy_static::lazy_static;
use regex::Regex;
use reqwest::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use reqwest::Response;
use tempfile::TempDir;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::constant::{DOWNLOAD_DIR_PREFIX, DOWNLOAD_FILE_STEM};

use crate::error::ImageApiError;
use crate::models::ImageFormat;

lazy_static! {
    // quoted names may contain spaces; bare tokens end at whitespace or ';'
    static ref FILENAME_PATTERN: Option<Regex> =
        Regex::new(r#"filename=(?:"([^"]+)"|'([^']+)'|([^'";\s]+))"#).ok();
}

/// Image body written to disk. The file lives in a private temporary
/// directory that is removed when the value is dropped; use
/// [`ImageDownload::persist`] to keep it.
pub struct ImageDownload {
    // held for its Drop, which removes the directory
    _dir: TempDir,
    path: PathBuf,
    content_type: Option<String>,
    len: u64,
}

impl ImageDownload {
    /// Streams the response body into a fresh file under `download_dir`
    /// (or the system temp dir).
    pub(crate) async fn from_response(
        response: Response,
        download_dir: Option<&Path>,
    ) -> Result<Self, ImageApiError> {
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let file_name = response
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|value| value.to_str().ok())
            .and_then(filename_from_disposition)
            .unwrap_or_else(|| generated_file_name(content_type.as_deref()));

        let mut builder = tempfile::Builder::new();
        builder.prefix(DOWNLOAD_DIR_PREFIX);
        let dir = match download_dir {
            Some(parent) => builder.tempdir_in(parent)?,
            None => builder.tempdir()?,
        };
        let path = dir.path().join(file_name);

        let mut file = File::create(&path).await?;
        let mut stream = response.bytes_stream();
        let mut len = 0;
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            len += chunk.len() as u64;
            file.write_all(&chunk).await?;
        }
        file.flush().await?;
        debug!("Downloaded {} bytes to {}", len, path.display());

        Ok(Self {
            _dir: dir,
            path,
            content_type,
            len,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Format announced by the server, if it is one the API knows.
    pub fn format(&self) -> Option<ImageFormat> {
        self.content_type
            .as_deref()
            .and_then(ImageFormat::from_mime_type)
    }

    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub async fn read(&self) -> Result<Bytes, ImageApiError> {
        Ok(Bytes::from(tokio::fs::read(&self.path).await?))
    }

    /// Copies the image out of the temporary directory. When `dest` is an
    /// existing directory the downloaded file name is kept.
    pub async fn persist(self, dest: impl AsRef<Path>) -> Result<PathBuf, ImageApiError> {
        let dest = dest.as_ref();
        let target = if tokio::fs::metadata(dest)
            .await
            .map(|metadata| metadata.is_dir())
            .unwrap_or(false)
        {
            dest.join(self.file_name())
        } else {
            dest.to_path_buf()
        };
        tokio::fs::copy(&self.path, &target).await?;
        Ok(target)
    }
}

impl fmt::Debug for ImageDownload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageDownload")
            .field("path", &self.path)
            .field("content_type", &self.content_type)
            .field("len", &self.len)
            .finish()
    }
}

/// File name from a `Content-Disposition` header, reduced to its last path
/// component so it cannot escape the download directory.
pub fn filename_from_disposition(disposition: &str) -> Option<String> {
    let captures = FILENAME_PATTERN.as_ref()?.captures(disposition)?;
    let raw = captures
        .get(1)
        .or_else(|| captures.get(2))
        .or_else(|| captures.get(3))?
        .as_str();
    let name = Path::new(raw).file_name()?.to_str()?;
    match name {
        "." | ".." => None,
        name => Some(name.to_owned()),
    }
}

fn generated_file_name(content_type: Option<&str>) -> String {
    match content_type.and_then(ImageFormat::from_mime_type) {
        Some(format) => format!("{DOWNLOAD_FILE_STEM}.{}", format.extension()),
        None => DOWNLOAD_FILE_STEM.to_owned(),
    }
}
