#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use http::Extensions;
    use httpmock::Method::GET;
    use httpmock::MockServer;
    use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
    use reqwest::{Request, Response};
    use reqwest_middleware::{Middleware, Next};

    use crate::api::ImageApi;
    use crate::client::ApiClient;
    use crate::config::ApiConfig;
    use crate::constant::ACCEPT_JSON;
    use crate::error::ImageApiError;
    use crate::util::test::test_util::{item_id, item_path, test_config, TEST_DEVICE_ID};

    struct CountingMiddleware {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl Middleware for CountingMiddleware {
        async fn handle(
            &self,
            mut req: Request,
            extensions: &mut Extensions,
            next: Next<'_>,
        ) -> reqwest_middleware::Result<Response> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            req.headers_mut()
                .insert("x-middleware", HeaderValue::from_static("counting"));
            next.run(req, extensions).await
        }
    }

    #[tokio::test]
    async fn test_authorization_header_is_sent() -> Result<(), ImageApiError> {
        let server = MockServer::start_async().await;
        let expected = format!(
            r#"MediaBrowser Client="imageapi", Device="tests", DeviceId="{}", Version="0.1.0", Token="test-token""#,
            TEST_DEVICE_ID
        );
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path(item_path(""))
                    .header("authorization", expected.as_str())
                    .header("accept", ACCEPT_JSON);
                then.status(200).body("[]");
            })
            .await;

        let api = ImageApi::from_config(test_config(&server)?)?;
        api.get_item_image_infos(item_id()).await?;

        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn test_authorization_without_token() -> Result<(), ImageApiError> {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path(item_path("")).header(
                    "authorization",
                    r#"MediaBrowser Client="imageapi", Device="tests", DeviceId="anon", Version="0.1.0""#,
                );
                then.status(200).body("[]");
            })
            .await;
        let config = ApiConfig::new(&server.base_url())?
            .with_client("imageapi", "0.1.0")
            .with_device("tests", "anon");

        ImageApi::from_config(config)?
            .get_item_image_infos(item_id())
            .await?;

        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn test_caller_authorization_is_kept() -> Result<(), ImageApiError> {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path(item_path(""))
                    .header("authorization", "Bearer other");
                then.status(200).body("[]");
            })
            .await;
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer other"));

        ImageApi::from_config(test_config(&server)?)?
            .with_headers(headers)
            .get_item_image_infos(item_id())
            .await?;

        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn test_builder_runs_caller_middleware() -> Result<(), ImageApiError> {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path(item_path(""))
                    .header("x-middleware", "counting");
                then.status(200).body("[]");
            })
            .await;
        let calls = Arc::new(AtomicUsize::new(0));
        let client = ApiClient::builder(test_config(&server)?)
            .with(CountingMiddleware {
                calls: Arc::clone(&calls),
            })
            .build()?;
        let api = ImageApi::new(client);

        api.get_item_image_infos(item_id()).await?;
        api.get_item_image_infos(item_id()).await?;

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(mock.calls_async().await, 2);
        Ok(())
    }

    #[test]
    fn test_client_exposes_config() -> Result<(), ImageApiError> {
        let download_dir = tempfile::tempdir()?;
        let config = ApiConfig::new("http://media.local:8096/jellyfin/")?
            .with_read_timeout(std::time::Duration::from_secs(3))
            .with_download_dir(download_dir.path());
        let client = ApiClient::new(config)?;
        assert_eq!(client.base_uri().as_str(), "http://media.local:8096/jellyfin/");
        assert_eq!(client.read_timeout(), Some(std::time::Duration::from_secs(3)));
        assert_eq!(client.download_dir(), Some(download_dir.path()));
        Ok(())
    }
}
