/// Shared test helper functions for creating test objects across the test suite
///
/// This module provides standardized builders for creating test entities that
/// follow the ownership chain: Companies → Growers → Farms → Fields, plus
/// payload and multipart builders for the batch/import pipeline tests.
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

/// Extract response body as JSON for testing
pub async fn extract_response_body(response: axum::response::Response) -> (StatusCode, Value) {
    use axum::body::to_bytes;

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    let body: Value = serde_json::from_slice(&bytes).unwrap_or_else(|_| {
        let raw_text = String::from_utf8_lossy(&bytes);
        json!({"error": raw_text})
    });
    (status, body)
}

pub async fn post_json(app: &axum::Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    extract_response_body(response).await
}

pub async fn get_json(app: &axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    extract_response_body(response).await
}

/// Create a test company; country defaults to the home country
pub async fn create_test_company(app: &axum::Router, country: Option<&str>) -> Uuid {
    let mut company_data = json!({
        "company_name": format!("Test Company {}", Uuid::new_v4()),
        "contact_person": "Test Contact",
        "email": "contact@example.com",
    });
    if let Some(country) = country {
        company_data["country"] = json!(country);
    }

    let (status, body) = post_json(app, "/api/companies", &company_data).await;
    assert_eq!(
        status,
        StatusCode::CREATED,
        "Failed to create test company: {body:?}"
    );
    Uuid::parse_str(body["id"].as_str().unwrap()).unwrap()
}

pub async fn create_test_grower(app: &axum::Router, company_id: Uuid) -> Uuid {
    let grower_data = json!({
        "company_id": company_id,
        "grower_name": format!("Test Grower {}", Uuid::new_v4()),
    });

    let (status, body) = post_json(app, "/api/growers", &grower_data).await;
    assert_eq!(
        status,
        StatusCode::CREATED,
        "Failed to create test grower: {body:?}"
    );
    Uuid::parse_str(body["id"].as_str().unwrap()).unwrap()
}

pub async fn create_test_farm(app: &axum::Router, grower_id: Uuid) -> Uuid {
    let farm_data = json!({
        "grower_id": grower_id,
        "farm_name": format!("Test Farm {}", Uuid::new_v4()),
    });

    let (status, body) = post_json(app, "/api/farms", &farm_data).await;
    assert_eq!(
        status,
        StatusCode::CREATED,
        "Failed to create test farm: {body:?}"
    );
    Uuid::parse_str(body["id"].as_str().unwrap()).unwrap()
}

pub async fn create_test_field(app: &axum::Router, farm_id: Uuid) -> Uuid {
    let field_data = json!({
        "farm_id": farm_id,
        "field_name": format!("Test Field {}", Uuid::new_v4()),
    });

    let (status, body) = post_json(app, "/api/fields", &field_data).await;
    assert_eq!(
        status,
        StatusCode::CREATED,
        "Failed to create test field: {body:?}"
    );
    Uuid::parse_str(body["id"].as_str().unwrap()).unwrap()
}

/// Complete ownership chain for batch tests
pub struct OwnershipChain {
    pub company_id: Uuid,
    pub grower_id: Uuid,
    pub farm_id: Uuid,
    pub field_id: Uuid,
}

pub async fn create_ownership_chain(app: &axum::Router, country: Option<&str>) -> OwnershipChain {
    let company_id = create_test_company(app, country).await;
    let grower_id = create_test_grower(app, company_id).await;
    let farm_id = create_test_farm(app, grower_id).await;
    let field_id = create_test_field(app, farm_id).await;

    OwnershipChain {
        company_id,
        grower_id,
        farm_id,
        field_id,
    }
}

/// Minimal sample payload referencing the given chain
pub fn sample_payload(chain: &OwnershipChain) -> Value {
    json!({
        "grower_id": chain.grower_id,
        "farm_id": chain.farm_id,
        "field_id": chain.field_id,
    })
}

/// Create a batch with `sample_count` default samples, returning the batch
/// identifier string
pub async fn create_test_batch(
    app: &axum::Router,
    chain: &OwnershipChain,
    sample_count: usize,
) -> String {
    let samples: Vec<Value> = (0..sample_count).map(|_| sample_payload(chain)).collect();
    let batch_data = json!({
        "company_id": chain.company_id,
        "samples": samples,
    });

    let (status, body) = post_json(app, "/api/batches", &batch_data).await;
    assert_eq!(
        status,
        StatusCode::CREATED,
        "Failed to create test batch: {body:?}"
    );
    body["batch_id"].as_str().unwrap().to_string()
}

pub const MULTIPART_BOUNDARY: &str = "portal-test-boundary";

/// Build a multipart/form-data body carrying the given (filename, content)
/// pairs as file fields
pub fn multipart_file_body(files: &[(&str, &str)]) -> Vec<u8> {
    let mut body = Vec::new();
    for (filename, content) in files {
        body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"files\"; filename=\"{filename}\"\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: text/csv\r\n\r\n");
        body.extend_from_slice(content.as_bytes());
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}--\r\n").as_bytes());
    body
}

/// POST files to the lab result importer and return the parsed report
pub async fn import_files(app: &axum::Router, files: &[(&str, &str)]) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/lab_results/import")
                .header(
                    "content-type",
                    format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
                )
                .body(Body::from(multipart_file_body(files)))
                .unwrap(),
        )
        .await
        .unwrap();
    extract_response_body(response).await
}
