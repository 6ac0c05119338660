use std::time::Instant;

use async_trait::async_trait;
use http::Extensions;
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next};
use tracing::{debug, warn};

/// Logs every request and its outcome at debug level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingMiddleware;

#[async_trait]
impl Middleware for TracingMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        let method = req.method().clone();
        let path = req.url().path().to_owned();
        debug!("{} {} sending", method, path);

        let started = Instant::now();
        let result = next.run(req, extensions).await;
        let elapsed_ms = started.elapsed().as_millis();
        match &result {
            Ok(res) => debug!("{} {} -> {} in {}ms", method, path, res.status(), elapsed_ms),
            Err(e) => warn!("{} {} failed after {}ms: {}", method, path, elapsed_ms, e),
        }
        result
    }
}
