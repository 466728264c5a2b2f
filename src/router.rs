//! Request routing.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;

/// Creates the main router. Handlers are stateless.
pub fn create_router() -> Router {
    Router::new()
        // Browser page
        .route("/", get(handlers::index))
        .route("/page/:page", get(handlers::show_page).post(handlers::submit_page))
        // Form endpoints
        .route("/search", post(handlers::search))
        .route("/submit", post(handlers::submit))
        .route("/health", get(handlers::health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use http::{header, Request, StatusCode};
    use tower::ServiceExt;

    fn router() -> Router {
        create_router()
    }

    fn form_post(uri: &str, body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_search_third_page() {
        let response = router()
            .oneshot(form_post("/search", "page-num=3"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "[17,18,19,20,21,22,23,24]");
    }

    #[tokio::test]
    async fn test_search_rejects_non_numeric_page() {
        let response = router()
            .oneshot(form_post("/search", "page-num=abc"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.headers()["x-error-code"], "InvalidPageNumber");
    }

    #[tokio::test]
    async fn test_submit_echo() {
        let response = router()
            .oneshot(form_post("/submit", "selected-num=42"))
            .await
            .unwrap();
        assert_eq!(body_string(response).await, r#"{"num":42}"#);

        let response = router()
            .oneshot(form_post("/submit", "selected-num="))
            .await
            .unwrap();
        assert_eq!(body_string(response).await, r#"{"num":null}"#);

        let response = router().oneshot(form_post("/submit", "")).await.unwrap();
        assert_eq!(body_string(response).await, r#"{"num":null}"#);
    }

    #[tokio::test]
    async fn test_page_routes_clamp() {
        let response = router()
            .oneshot(Request::get("/page/15").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CACHE_CONTROL], "no-store");
        let html = body_string(response).await;
        assert!(html.contains("10 / 10"));
        assert!(html.contains("<li>80</li>"));
    }

    #[tokio::test]
    async fn test_page_route_saturates_huge_index() {
        let response = router()
            .oneshot(
                Request::get("/page/99999999999999999999")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let html = body_string(response).await;
        assert!(html.contains("10 / 10"));
    }
}
