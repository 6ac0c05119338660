use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Method};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware, Middleware, RequestBuilder};
use tracing::info;
use url::Url;

use crate::config::ApiConfig;
use crate::error::ImageApiError;

use super::{AuthMiddleware, TracingMiddleware};

/// Shared transport for all API calls. Cloning is cheap; clones share the
/// connection pool and middleware stack.
#[derive(Clone)]
pub struct ApiClient {
    client: ClientWithMiddleware,
    base_uri: Url,
    read_timeout: Option<Duration>,
    download_dir: Option<PathBuf>,
}

pub struct ApiClientBuilder {
    config: ApiConfig,
    middleware: Vec<Arc<dyn Middleware>>,
}

impl ApiClientBuilder {
    /// Appends a caller middleware. It runs after authentication and before
    /// request logging, so it sees and may rewrite the final request.
    pub fn with<M: Middleware>(mut self, middleware: M) -> Self {
        self.middleware.push(Arc::new(middleware));
        self
    }

    pub fn build(self) -> Result<ApiClient, ImageApiError> {
        let client = Client::builder().use_rustls_tls().build()?;
        let mut builder = ClientBuilder::new(client).with(AuthMiddleware::new(&self.config)?);
        for middleware in self.middleware {
            builder = builder.with_arc(middleware);
        }
        let client = builder.with(TracingMiddleware).build();

        info!(
            "Media server client for {} (device {})",
            self.config.base_uri, self.config.device_id
        );
        Ok(ApiClient {
            client,
            base_uri: self.config.base_uri,
            read_timeout: self.config.read_timeout,
            download_dir: self.config.download_dir,
        })
    }
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self, ImageApiError> {
        Self::builder(config).build()
    }

    pub fn from_env() -> Result<Self, ImageApiError> {
        Self::new(ApiConfig::from_env()?)
    }

    pub fn builder(config: ApiConfig) -> ApiClientBuilder {
        ApiClientBuilder {
            config,
            middleware: Vec::new(),
        }
    }

    pub fn base_uri(&self) -> &Url {
        &self.base_uri
    }

    pub fn read_timeout(&self) -> Option<Duration> {
        self.read_timeout
    }

    pub fn download_dir(&self) -> Option<&Path> {
        self.download_dir.as_deref()
    }

    /// Starts a request with the configured read timeout applied.
    pub fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = self.client.request(method, url);
        match self.read_timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        }
    }
}
