use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use super::*;

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn service_routes_answer_healthz() {
    let request = Request::get("/healthz").body(Body::empty()).unwrap();
    let response = service_routes().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn service_routes_reject_unknown_paths() {
    let request = Request::get("/api/waves").body(Body::empty()).unwrap();
    let response = service_routes().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
