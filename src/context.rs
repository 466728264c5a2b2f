//! Request context extraction.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use std::convert::Infallible;
use uuid::Uuid;

/// Per-request information shared by all handlers.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Request ID, taken from `x-request-id` when the client supplies one.
    pub request_id: String,
}

impl RequestContext {
    pub fn new(request_id: Option<&str>) -> Self {
        let request_id = request_id
            .filter(|id| !id.is_empty())
            .map(String::from)
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        Self { request_id }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let request_id = parts
            .headers
            .get("x-request-id")
            .and_then(|v| v.to_str().ok());

        Ok(Self::new(request_id))
    }
}
