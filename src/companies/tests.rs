use crate::config::test_helpers::setup_test_app;
use crate::test_helpers::{extract_response_body, get_json, post_json};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;
use uuid::Uuid;

#[tokio::test]
async fn test_company_crud_operations() {
    let app = setup_test_app().await;

    let company_data = json!({
        "company_name": format!("Prairie Agronomy {}", Uuid::new_v4()),
        "contact_person": "Sam Fielder",
        "email": "sam@example.com",
        "city": "Ames",
        "state": "IA",
        "country": "USA",
    });

    let (status, body) = post_json(&app, "/api/companies", &company_data).await;
    assert_eq!(status, StatusCode::CREATED, "Failed to create company: {body:?}");
    assert!(body["id"].is_string());
    assert_eq!(body["is_outside_us"], false);

    let company_id = body["id"].as_str().unwrap().to_string();

    let (get_status, get_body) = get_json(&app, &format!("/api/companies/{company_id}")).await;
    assert_eq!(get_status, StatusCode::OK);
    assert_eq!(get_body["id"], company_id.as_str());
    assert_eq!(get_body["contact_person"], "Sam Fielder");

    let (list_status, list_body) = get_json(&app, "/api/companies").await;
    assert_eq!(list_status, StatusCode::OK);
    assert!(list_body.is_array());
}

#[tokio::test]
async fn test_company_outside_home_country_flag() {
    let app = setup_test_app().await;

    let (status, body) = post_json(
        &app,
        "/api/companies",
        &json!({
            "company_name": format!("Andes Soil Co {}", Uuid::new_v4()),
            "country": "Chile",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "Body: {body:?}");
    assert_eq!(body["is_outside_us"], true);

    // Missing country counts as domestic
    let (status, body) = post_json(
        &app,
        "/api/companies",
        &json!({
            "company_name": format!("No Country Co {}", Uuid::new_v4()),
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "Body: {body:?}");
    assert_eq!(body["is_outside_us"], false);
}

#[tokio::test]
async fn test_company_update_rederives_flag() {
    let app = setup_test_app().await;

    let (status, body) = post_json(
        &app,
        "/api/companies",
        &json!({
            "company_name": format!("Borderline Farms {}", Uuid::new_v4()),
            "country": "Canada",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["is_outside_us"], true);
    let company_id = body["id"].as_str().unwrap().to_string();

    let update_response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!("/api/companies/{company_id}"))
                .header("content-type", "application/json")
                .body(Body::from(json!({"country": "USA"}).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let (update_status, update_body) = extract_response_body(update_response).await;
    assert_eq!(update_status, StatusCode::OK, "Body: {update_body:?}");
    assert_eq!(update_body["is_outside_us"], false);
}

#[tokio::test]
async fn test_duplicate_company_name_rejected() {
    let app = setup_test_app().await;

    let name = format!("Unique Name Co {}", Uuid::new_v4());
    let company_data = json!({"company_name": name});

    let (status, _) = post_json(&app, "/api/companies", &company_data).await;
    assert_eq!(status, StatusCode::CREATED);

    let (dup_status, _) = post_json(&app, "/api/companies", &company_data).await;
    assert!(
        !dup_status.is_success(),
        "Duplicate company name should be rejected, got {dup_status}"
    );
}

#[tokio::test]
async fn test_company_not_found() {
    let app = setup_test_app().await;

    let fake_id = Uuid::new_v4();
    let (status, _body) = get_json(&app, &format!("/api/companies/{fake_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
