mod common;

use axum::http::StatusCode;
use axum::{Router, routing::get};
use axum_test::TestServer;
use ilya_cms::handlers::health_handler;

#[tokio::test]
async fn test_health_endpoint_success() {
    let root = common::create_install("health-ok");
    let state = common::create_test_state(&root);
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["views"]["status"], "ok");
    assert_eq!(json["checks"]["controllers"]["status"], "ok");
    assert_eq!(json["checks"]["models"]["status"], "ok");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let root = common::create_install("health-shape");
    let state = common::create_test_state(&root);
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    let json = response.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json.get("checks").is_some());
    assert!(json["checks"].get("views").is_some());
    assert!(json["checks"].get("controllers").is_some());
    assert!(json["checks"].get("models").is_some());
}

#[tokio::test]
async fn test_health_endpoint_degraded_without_views() {
    let root = common::create_install("health-degraded");
    std::fs::remove_dir_all(root.join("app/views")).unwrap();

    let state = common::create_test_state(&root);
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["views"]["status"], "error");
    assert_eq!(json["checks"]["controllers"]["status"], "ok");
}
