//! HTTP surface tests
//!
//! Exercises the router end to end: the health probe, identity resolution
//! from the bearer subject, and how domain errors map onto status codes
//! and the error body.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use test_context::test_context;
use tower::ServiceExt;
use uuid::Uuid;

use crate::common::{create_event_for, create_member, create_product_for, TestHarness};

fn request(method: &str, uri: &str, bearer: Option<&str>, body: Option<&Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(subject) = bearer {
        builder = builder.header("authorization", format!("Bearer {subject}"));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    builder.body(body).expect("failed to build request")
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&bytes).expect("response body was not JSON")
}

fn product_body() -> Value {
    json!({
        "productName": "Kiki Plush",
        "description": "soft",
        "quantity": 1,
        "characterName": ["Kiki"],
        "licenseName": ["Studio Ghibli"],
        "productType": ["Plushie"],
        "condition": "New",
        "status": "In Stock",
        "storageLocation": "Shelf A",
        "purchaseLocation": "Convention",
        "purchaseDate": "2026-08-01T12:00:00Z",
        "purchasePrice": 40.0,
        "threshold": 1
    })
}

// =============================================================================
// Health
// =============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn health_reports_a_healthy_store(ctx: &TestHarness) {
    let response = ctx
        .app()
        .oneshot(request("GET", "/health", None, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["store"]["status"], "ok");
    assert!(body["store"].get("error").is_none());
}

// =============================================================================
// Identity resolution
// =============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn me_is_null_for_anonymous_callers(ctx: &TestHarness) {
    let response = ctx
        .app()
        .oneshot(request("GET", "/me", None, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await, Value::Null);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn me_reflects_the_bearer_subject(ctx: &TestHarness) {
    create_member(&ctx.deps, "ana").await;

    let response = ctx
        .app()
        .oneshot(request("GET", "/me", Some("user_ana"), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["email"], "ana@example.com");
    assert_eq!(body["externalId"], "user_ana");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn mutations_require_authentication(ctx: &TestHarness) {
    let response = ctx
        .app()
        .oneshot(request("POST", "/products", None, Some(&product_body())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = response_json(response).await;
    assert_eq!(body["code"], "UNAUTHENTICATED");
    assert_eq!(body["message"], "Not authenticated");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn an_unmirrored_subject_is_refused(ctx: &TestHarness) {
    let response = ctx
        .app()
        .oneshot(request(
            "POST",
            "/products",
            Some("user_ghost"),
            Some(&product_body()),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = response_json(response).await;
    assert_eq!(body["message"], "User not found");
}

// =============================================================================
// Public reads
// =============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn public_reads_work_without_auth(ctx: &TestHarness) {
    for uri in ["/products", "/events", "/users"] {
        let response = ctx
            .app()
            .oneshot(request("GET", uri, None, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
        assert_eq!(response_json(response).await, json!([]));
    }
}

#[test_context(TestHarness)]
#[tokio::test]
async fn a_missing_product_is_not_found(ctx: &TestHarness) {
    let uri = format!("/products/{}", Uuid::now_v7());
    let response = ctx
        .app()
        .oneshot(request("GET", &uri, None, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response_json(response).await;
    assert_eq!(body["code"], "NOT_FOUND");
    assert_eq!(body["message"], "Product not found");
}

// =============================================================================
// Error mapping
// =============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn product_creation_round_trips(ctx: &TestHarness) {
    create_member(&ctx.deps, "ana").await;

    let response = ctx
        .app()
        .oneshot(request(
            "POST",
            "/products",
            Some("user_ana"),
            Some(&product_body()),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let created = response_json(response).await;
    let id = created["id"].as_str().expect("missing id").to_string();

    let response = ctx
        .app()
        .oneshot(request("GET", &format!("/products/{id}"), None, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["productName"], "Kiki Plush");
    assert_eq!(body["status"], "In Stock");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn forbidden_writes_answer_403(ctx: &TestHarness) {
    let owner = create_member(&ctx.deps, "ana").await;
    create_member(&ctx.deps, "bea").await;
    let product = create_product_for(&ctx.deps, owner.id, "Kept").await;

    let response = ctx
        .app()
        .oneshot(request(
            "PATCH",
            &format!("/products/{}", product.id),
            Some("user_bea"),
            Some(&json!({"quantity": 5})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = response_json(response).await;
    assert_eq!(body["code"], "FORBIDDEN");
    assert_eq!(body["message"], "You cannot update this product");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn domain_conflicts_answer_409(ctx: &TestHarness) {
    let organizer = create_member(&ctx.deps, "ana").await;
    create_member(&ctx.deps, "bea").await;
    let event = create_event_for(&ctx.deps, &organizer, "Market").await;
    let uri = format!("/events/{}/participate", event.id);

    let first = ctx
        .app()
        .oneshot(request("POST", &uri, Some("user_bea"), None))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = ctx
        .app()
        .oneshot(request("POST", &uri, Some("user_bea"), None))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::CONFLICT);
    let body = response_json(second).await;
    assert_eq!(body["code"], "CONFLICT");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn validation_failures_answer_422(ctx: &TestHarness) {
    create_member(&ctx.deps, "ana").await;

    let response = ctx
        .app()
        .oneshot(request(
            "POST",
            "/events",
            Some("user_ana"),
            Some(&json!({
                "name": "Backwards",
                "description": "ends before it starts",
                "startTime": "2026-09-01T18:00:00Z",
                "endTime": "2026-09-01T12:00:00Z"
            })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response_json(response).await;
    assert_eq!(body["code"], "INVALID_ARGUMENT");
    assert_eq!(body["message"], "endTime must be after startTime");
}
