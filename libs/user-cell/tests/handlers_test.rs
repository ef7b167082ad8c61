use std::sync::Arc;

use assert_matches::assert_matches;
use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shared_config::AppConfig;
use shared_models::error::AppError;
use shared_utils::test_utils::TestConfig;
use user_cell::handlers::lookup_user;
use user_cell::models::UserLookupRequest;

fn config_for(server: &MockServer) -> Arc<AppConfig> {
    TestConfig::with_supabase_url(&server.uri()).to_arc()
}

fn doctor_row(phone: &str) -> Value {
    json!({
        "phone_number": phone,
        "name": "Dr. Aoife Byrne",
        "category_id": 2,
        "experience_years": 8,
        "about": "General practitioner",
        "photo_url": null,
        "consultation_count": 120,
        "created_at": "2024-11-02T09:30:00Z"
    })
}

fn patient_row(mobile: &str) -> Value {
    json!({
        "mobile_number": mobile,
        "created_at": "2025-01-15T10:00:00Z"
    })
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn rejects_empty_phone_number() {
    let server = MockServer::start().await;

    let result = lookup_user(
        State(config_for(&server)),
        Json(UserLookupRequest {
            phone_number: "".to_string(),
            user_type: "patient".to_string(),
        }),
    )
    .await;

    let fields = assert_matches!(result, Err(AppError::Validation(fields)) => fields);
    assert_eq!(fields[0].field, "phone_number");
    assert_eq!(fields[0].message, "Phone number is required");
}

#[tokio::test]
async fn rejects_unknown_user_type() {
    let server = MockServer::start().await;

    let result = lookup_user(
        State(config_for(&server)),
        Json(UserLookupRequest {
            phone_number: "0871234567".to_string(),
            user_type: "nurse".to_string(),
        }),
    )
    .await;

    let fields = assert_matches!(result, Err(AppError::Validation(fields)) => fields);
    assert_eq!(fields[0].field, "user_type");
}

#[tokio::test]
async fn returns_existing_doctor_profile() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/doctors"))
        .and(query_param("phone_number", "eq.0871111111"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([doctor_row("0871111111")])))
        .mount(&server)
        .await;

    let response = lookup_user(
        State(config_for(&server)),
        Json(UserLookupRequest {
            phone_number: "0871111111".to_string(),
            user_type: "doctor".to_string(),
        }),
    )
    .await
    .expect("lookup succeeds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["exists"], json!(true));
    assert_eq!(body["user_type"], json!("doctor"));
    assert_eq!(body["name"], json!("Dr. Aoife Byrne"));
    assert_eq!(body["consultation_count"], json!(120));
}

#[tokio::test]
async fn unknown_doctor_is_not_created() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/doctors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let response = lookup_user(
        State(config_for(&server)),
        Json(UserLookupRequest {
            phone_number: "0879999999".to_string(),
            user_type: "doctor".to_string(),
        }),
    )
    .await
    .expect("lookup answers");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["phone_number"], json!("0879999999"));
    assert_eq!(body["message"], json!("Doctor not found with the provided phone number"));
}

#[tokio::test]
async fn existing_patient_lookup_is_idempotent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/patients"))
        .and(query_param("mobile_number", "eq.0871234567"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([patient_row("0871234567")])))
        .mount(&server)
        .await;

    // No POST mock mounted: a create attempt would fail the test.
    let response = lookup_user(
        State(config_for(&server)),
        Json(UserLookupRequest {
            phone_number: "0871234567".to_string(),
            user_type: "patient".to_string(),
        }),
    )
    .await
    .expect("lookup succeeds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["exists"], json!(true));
    assert_eq!(body["phone_number"], json!("0871234567"));
}

#[tokio::test]
async fn first_time_patient_is_created() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/patients"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/patients"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([patient_row("0875550000")])))
        .expect(1)
        .mount(&server)
        .await;

    let response = lookup_user(
        State(config_for(&server)),
        Json(UserLookupRequest {
            phone_number: "0875550000".to_string(),
            user_type: "patient".to_string(),
        }),
    )
    .await
    .expect("lookup succeeds");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["exists"], json!(false));
}
