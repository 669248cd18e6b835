//! Integration tests for the status endpoint.
//!
//! Requests are issued directly against the router via tower's `oneshot`,
//! with no live dependencies. Both dependencies point at a closed local
//! port so probes fail fast and deterministically; the endpoint must still
//! answer 200 and report each failure in-band.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use tower::ServiceExt;

use koronet_web::config::{AppConfig, DatabaseConfig, HttpConfig, LoggingConfig, RedisConfig};
use koronet_web::routes::create_router;
use koronet_web::state::AppState;

/// Configuration pointing both dependencies at a port nothing listens on.
fn unreachable_config() -> AppConfig {
    AppConfig {
        http: HttpConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            host: "127.0.0.1".to_string(),
            port: 1,
            name: "koronet_db".to_string(),
            user: "koronet_user".to_string(),
            password: "koronet_password".to_string(),
        },
        redis: RedisConfig {
            host: "127.0.0.1".to_string(),
            port: 1,
        },
        logging: LoggingConfig {
            format: "text".to_string(),
        },
    }
}

fn test_router() -> Router {
    create_router(AppState::new(unreachable_config()))
}

async fn get_status(app: &Router) -> Response {
    app.clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_status_is_200_when_dependencies_down() {
    let app = test_router();

    let response = get_status(&app).await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_body_starts_with_greeting() {
    let app = test_router();

    let body = body_string(get_status(&app).await).await;

    assert!(
        body.starts_with("Hi Koronet Team."),
        "unexpected body: {body}"
    );
}

#[tokio::test]
async fn test_body_reports_both_probe_failures_in_band() {
    let app = test_router();

    let body = body_string(get_status(&app).await).await;

    assert!(
        body.starts_with("Hi Koronet Team. DB Status: Error: "),
        "unexpected body: {body}"
    );
    assert!(
        body.contains(". Redis Status: Error: "),
        "unexpected body: {body}"
    );
    // A failed database probe must not leak into the cache status or
    // vice versa: both statuses appear exactly once, in order.
    assert_eq!(body.matches("DB Status: ").count(), 1);
    assert_eq!(body.matches("Redis Status: ").count(), 1);
}

#[tokio::test]
async fn test_repeated_requests_yield_identical_bodies() {
    let app = test_router();

    let first = body_string(get_status(&app).await).await;
    let second = body_string(get_status(&app).await).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_status_response_is_not_cacheable() {
    let app = test_router();

    let response = get_status(&app).await;

    assert_eq!(
        response
            .headers()
            .get(header::CACHE_CONTROL)
            .and_then(|v| v.to_str().ok()),
        Some("no-store")
    );
}
