#[cfg(test)]
mod tests {
    use rstest::rstest;
    use tempfile::tempdir;

    use crate::download::{filename_from_disposition, ImageDownload};
    use crate::error::ImageApiError;
    use crate::models::ImageFormat;

    fn response(headers: &[(&str, &str)], body: &[u8]) -> reqwest::Response {
        let mut builder = http::Response::builder().status(200);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        reqwest::Response::from(builder.body(body.to_vec()).expect("valid response"))
    }

    #[rstest]
    #[case("attachment; filename=\"poster.jpg\"", Some("poster.jpg"))]
    #[case("attachment; filename='logo.png'", Some("logo.png"))]
    #[case("inline; filename=backdrop.webp; size=10", Some("backdrop.webp"))]
    #[case("attachment; filename=\"../../etc/passwd\"", Some("passwd"))]
    #[case("attachment; filename=\"..\"", None)]
    #[case("attachment; filename=\"my poster.jpg\"", Some("my poster.jpg"))]
    #[case("attachment; filename='band logo.png'; size=3", Some("band logo.png"))]
    #[case("inline", None)]
    fn test_filename_from_disposition(#[case] header: &str, #[case] expected: Option<&str>) {
        assert_eq!(filename_from_disposition(header).as_deref(), expected);
    }

    #[tokio::test]
    async fn test_download_uses_disposition_name() -> Result<(), ImageApiError> {
        let parent = tempdir()?;
        let download = ImageDownload::from_response(
            response(
                &[
                    ("content-type", "image/jpeg"),
                    ("content-disposition", "attachment; filename=\"poster.jpg\""),
                ],
                b"jpeg-bytes",
            ),
            Some(parent.path()),
        )
        .await?;
        assert_eq!(download.file_name(), "poster.jpg");
        assert!(download.path().starts_with(parent.path()));
        assert_eq!(download.content_type(), Some("image/jpeg"));
        assert_eq!(download.format(), Some(ImageFormat::Jpg));
        assert_eq!(download.len(), 10);
        assert_eq!(&download.read().await?[..], b"jpeg-bytes");
        Ok(())
    }

    #[tokio::test]
    async fn test_download_generates_name_from_content_type() -> Result<(), ImageApiError> {
        let download =
            ImageDownload::from_response(response(&[("content-type", "image/png")], b"png"), None)
                .await?;
        assert_eq!(download.file_name(), "download.png");

        let download = ImageDownload::from_response(response(&[], b""), None).await?;
        assert_eq!(download.file_name(), "download");
        assert!(download.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_download_removed_on_drop() -> Result<(), ImageApiError> {
        let download =
            ImageDownload::from_response(response(&[("content-type", "image/gif")], b"gif"), None)
                .await?;
        let path = download.path().to_path_buf();
        assert!(path.exists());
        drop(download);
        assert!(!path.exists());
        Ok(())
    }

    #[tokio::test]
    async fn test_download_persist_into_directory_and_file() -> Result<(), ImageApiError> {
        let target_dir = tempdir()?;
        let headers = [
            ("content-type", "image/png"),
            ("content-disposition", "attachment; filename=\"logo.png\""),
        ];

        let download = ImageDownload::from_response(response(&headers, b"logo"), None).await?;
        let kept = download.persist(target_dir.path()).await?;
        assert_eq!(kept, target_dir.path().join("logo.png"));
        assert_eq!(std::fs::read(&kept)?, b"logo");

        let download = ImageDownload::from_response(response(&headers, b"logo2"), None).await?;
        let renamed = target_dir.path().join("renamed.png");
        assert_eq!(download.persist(&renamed).await?, renamed);
        assert_eq!(std::fs::read(&renamed)?, b"logo2");
        Ok(())
    }
}
