mod auth;
mod client;
mod logging;
mod response;
mod test;

pub use auth::AuthMiddleware;
pub use client::{ApiClient, ApiClientBuilder};
pub use logging::TracingMiddleware;
pub use response::ApiResponse;
