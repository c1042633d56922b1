//! Error contract: status codes and the JSON error envelope.

mod support;

use axum::http::StatusCode;
use serde_json::{json, Value};
use support::{delete, get, id_of, patch, post, put, test_app};

fn assert_error(body: &Value, code: &str) {
    assert_eq!(body["error"]["code"], code);
    assert!(body["error"]["message"].as_str().is_some_and(|m| !m.is_empty()));
}

fn sample_driver() -> Value {
    json!({
        "name": "Alex Ray",
        "birthDate": "23.10.1996",
        "address": "Green Street",
        "city": "Kharkiv",
        "rating": 10,
        "status": "active"
    })
}

#[tokio::test]
async fn absent_ids_are_not_found_for_every_operation() {
    let app = test_app();
    let absent = "11111111-2222-4333-8444-555555555555";

    let (status, body) = get(app.clone(), &format!("/api/cars/{}", absent)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&body, "not_found");

    let replacement = json!({
        "driverId": "d1",
        "make": "Honda",
        "model": "Civic",
        "number": "AX1234KA",
        "year": 2018,
        "status": "standard"
    });
    let (status, body) = put(app.clone(), &format!("/api/cars/{}", absent), replacement).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&body, "not_found");

    let (status, body) = patch(
        app.clone(),
        &format!("/api/cars/{}", absent),
        json!({"status": "active"}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&body, "not_found");

    let (status, body) = delete(app, &format!("/api/cars/{}", absent)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&body, "not_found");
}

#[tokio::test]
async fn malformed_id_is_bad_request_not_missing() {
    let app = test_app();
    for uri in [
        "/api/cars/not-a-uuid",
        "/api/drivers/12345",
        "/api/vehicles/xyz",
    ] {
        let (status, body) = get(app.clone(), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_error(&body, "bad_request");
    }
}

#[tokio::test]
async fn second_delete_reports_not_found() {
    let app = test_app();
    let (_, created) = post(app.clone(), "/api/drivers", sample_driver()).await;
    let id = id_of(&created);

    let (status, _) = delete(app.clone(), &format!("/api/drivers/{}", id)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = delete(app, &format!("/api/drivers/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&body, "not_found");
}

#[tokio::test]
async fn create_with_missing_required_field_is_validation_error() {
    let app = test_app();
    let mut body = sample_driver();
    body.as_object_mut().unwrap().remove("city");
    let (status, body) = post(app, "/api/drivers", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, "validation_error");
}

#[tokio::test]
async fn create_with_mistyped_field_is_validation_error() {
    let app = test_app();
    let mut body = sample_driver();
    body["rating"] = json!("ten");
    let (status, body) = post(app, "/api/drivers", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, "validation_error");
}

#[tokio::test]
async fn create_with_non_object_body_is_validation_error() {
    let app = test_app();
    let (status, body) = post(app, "/api/cars", json!(["not", "an", "object"])).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, "validation_error");
}

#[tokio::test]
async fn replace_still_requires_all_mandatory_fields() {
    let app = test_app();
    let (_, created) = post(app.clone(), "/api/drivers", sample_driver()).await;
    let id = id_of(&created);

    let (status, body) = put(
        app.clone(),
        &format!("/api/drivers/{}", id),
        json!({"name": "Only A Name"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, "validation_error");

    // the partial body must not have touched the record
    let (_, fetched) = get(app, &format!("/api/drivers/{}", id)).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn health_ready_and_version_respond_ok() {
    let app = test_app();

    let (status, body) = get(app.clone(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = get(app.clone(), "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = get(app, "/version").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "fleet-api");
}
