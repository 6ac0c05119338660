use async_trait::async_trait;
use http::Extensions;
use reqwest::header::{HeaderValue, InvalidHeaderValue, AUTHORIZATION};
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next};

use crate::config::ApiConfig;

/// Adds the `MediaBrowser` authorization header the server expects from
/// every client. Requests that already carry an `Authorization` header are
/// left untouched.
#[derive(Clone, Debug)]
pub struct AuthMiddleware {
    header: HeaderValue,
}

impl AuthMiddleware {
    pub fn new(config: &ApiConfig) -> Result<Self, InvalidHeaderValue> {
        let mut header = HeaderValue::from_str(&authorization_value(config))?;
        header.set_sensitive(config.token.is_some());
        Ok(Self { header })
    }

    pub fn header(&self) -> &HeaderValue {
        &self.header
    }
}

pub(crate) fn authorization_value(config: &ApiConfig) -> String {
    let mut value = format!(
        r#"MediaBrowser Client="{}", Device="{}", DeviceId="{}", Version="{}""#,
        quoted(&config.client_name),
        quoted(&config.device_name),
        quoted(&config.device_id),
        quoted(&config.client_version),
    );
    if let Some(token) = &config.token {
        value.push_str(&format!(r#", Token="{}""#, quoted(token)));
    }
    value
}

// the server splits on '"', so embedded quotes cannot be escaped
fn quoted(value: &str) -> String {
    value.replace('"', "")
}

#[async_trait]
impl Middleware for AuthMiddleware {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        if !req.headers().contains_key(AUTHORIZATION) {
            req.headers_mut().insert(AUTHORIZATION, self.header.clone());
        }
        next.run(req, extensions).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;

    #[test]
    fn test_authorization_value_without_token() -> Result<(), ConfigError> {
        let config = ApiConfig::new("http://localhost:8096")?
            .with_client("imageapi", "0.1.0")
            .with_device("tests", "device-1");
        assert_eq!(
            authorization_value(&config),
            r#"MediaBrowser Client="imageapi", Device="tests", DeviceId="device-1", Version="0.1.0""#
        );
        Ok(())
    }

    #[test]
    fn test_authorization_value_with_token_strips_quotes() -> Result<(), ConfigError> {
        let config = ApiConfig::new("http://localhost:8096")?
            .with_client("imageapi", "0.1.0")
            .with_device("my \"tv\"", "device-1")
            .with_token("abc123");
        let value = authorization_value(&config);
        assert!(value.contains(r#"Device="my tv""#));
        assert!(value.ends_with(r#", Token="abc123""#));
        let middleware = AuthMiddleware::new(&config).expect("valid header");
        assert!(middleware.header().is_sensitive());
        Ok(())
    }
}
