use axum::body::Body;
use axum::response::Response;
use http::Request;

/// Builds a request for driving a router through `tower::ServiceExt::oneshot`.
pub fn create_test_request(
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json");

    match body {
        Some(json) => builder
            .body(Body::from(json.to_string()))
            .expect("failed to build test request"),
        None => builder
            .body(Body::empty())
            .expect("failed to build test request"),
    }
}

/// Collects a response body and parses it as JSON.
pub async fn response_to_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&bytes).expect("response body was not valid JSON")
}
