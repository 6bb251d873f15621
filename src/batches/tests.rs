use crate::batches::services::allocate_batch_number;
use crate::config::test_helpers::{setup_test_app, setup_test_db};
use crate::test_helpers::{
    create_ownership_chain, create_test_batch, get_json, post_json, sample_payload,
};
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use sea_orm::TransactionTrait;
use serde_json::json;
use tower::ServiceExt;
use uuid::Uuid;

async fn get_text(app: &axum::Router, uri: &str) -> (StatusCode, String) {
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
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    (status, String::from_utf8_lossy(&bytes).to_string())
}

#[tokio::test]
async fn test_allocator_returns_distinct_increasing_numbers() {
    let db = setup_test_db().await;

    let mut numbers = Vec::new();
    for _ in 0..3 {
        let txn = db.begin().await.unwrap();
        let (batch_id, number) = allocate_batch_number(&txn).await.unwrap();
        txn.commit().await.unwrap();
        assert_eq!(batch_id, format!("SSP-{number:05}"));
        numbers.push(number);
    }

    assert_eq!(numbers, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_create_batch_assigns_sequences_and_bag_ids() {
    let app = setup_test_app().await;
    let chain = create_ownership_chain(&app, None).await;

    let batch_data = json!({
        "company_id": chain.company_id,
        "samples": [
            sample_payload(&chain),
            sample_payload(&chain),
            sample_payload(&chain),
        ],
        "notes": "spring submission",
        "created_by": "portal-test",
    });

    let (status, body) = post_json(&app, "/api/batches", &batch_data).await;
    assert_eq!(status, StatusCode::CREATED, "Failed to create batch: {body:?}");
    let batch_id = body["batch_id"].as_str().unwrap().to_string();
    let batch_number = body["batch_number"].as_i64().unwrap();
    assert_eq!(batch_id, format!("SSP-{batch_number:05}"));
    assert_eq!(body["sample_count"], 3);
    assert_eq!(body["samples"].as_array().unwrap().len(), 3);

    let (get_status, get_body) = get_json(&app, &format!("/api/batches/{batch_id}")).await;
    assert_eq!(get_status, StatusCode::OK, "Body: {get_body:?}");
    assert_eq!(get_body["batch"]["status"], "Pending");
    assert_eq!(get_body["batch"]["created_by"], "portal-test");

    let samples = get_body["samples"].as_array().unwrap();
    assert_eq!(samples.len(), 3);
    for (idx, sample) in samples.iter().enumerate() {
        let sequence = i64::try_from(idx).unwrap() + 1;
        assert_eq!(sample["sample_sequence"], sequence);
        assert_eq!(
            sample["bag_id"],
            format!("{batch_number:05}-{sequence}").as_str()
        );
        // Test selections merged over defaults
        assert_eq!(sample["tests"]["test_ph1"], true);
        assert_eq!(sample["tests"]["test_mo"], false);
        // Domestic company, so no quarantine
        assert_eq!(sample["quarantine"], false);
    }
}

#[tokio::test]
async fn test_create_batch_merges_partial_test_selection() {
    let app = setup_test_app().await;
    let chain = create_ownership_chain(&app, None).await;

    let mut sample = sample_payload(&chain);
    sample["tests"] = json!({"test_mo": true, "test_ph1": false});
    sample["crop"] = json!("Corn");

    let (status, body) = post_json(
        &app,
        "/api/batches",
        &json!({"company_id": chain.company_id, "samples": [sample]}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "Body: {body:?}");
    let batch_id = body["batch_id"].as_str().unwrap();

    let (_, get_body) = get_json(&app, &format!("/api/batches/{batch_id}")).await;
    let tests = &get_body["samples"][0]["tests"];
    assert_eq!(tests["test_mo"], true);
    assert_eq!(tests["test_ph1"], false);
    // Untouched flags keep the documented defaults
    assert_eq!(tests["test_b"], true);
    assert_eq!(tests["test_plfa"], false);
}

#[tokio::test]
async fn test_quarantine_flag_frozen_at_creation() {
    let app = setup_test_app().await;
    let chain = create_ownership_chain(&app, Some("Canada")).await;

    let first_batch = create_test_batch(&app, &chain, 1).await;
    let (_, first_body) = get_json(&app, &format!("/api/batches/{first_batch}")).await;
    assert_eq!(first_body["samples"][0]["quarantine"], true);

    // Move the company home; existing samples must keep their frozen flag
    let update_response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!("/api/companies/{}", chain.company_id))
                .header("content-type", "application/json")
                .body(Body::from(json!({"country": "USA"}).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(update_response.status().is_success());

    let second_batch = create_test_batch(&app, &chain, 1).await;
    let (_, second_body) = get_json(&app, &format!("/api/batches/{second_batch}")).await;
    assert_eq!(second_body["samples"][0]["quarantine"], false);

    let (_, first_again) = get_json(&app, &format!("/api/batches/{first_batch}")).await;
    assert_eq!(first_again["samples"][0]["quarantine"], true);
}

#[tokio::test]
async fn test_empty_batch_rejected() {
    let app = setup_test_app().await;
    let chain = create_ownership_chain(&app, None).await;

    let (status, body) = post_json(
        &app,
        "/api/batches",
        &json!({"company_id": chain.company_id, "samples": []}),
    )
    .await;
    assert_eq!(
        status,
        StatusCode::BAD_REQUEST,
        "Empty sample list should be rejected: {body:?}"
    );
}

#[tokio::test]
async fn test_cross_tenant_ownership_chain_rejected() {
    let app = setup_test_app().await;
    let chain_a = create_ownership_chain(&app, None).await;
    let chain_b = create_ownership_chain(&app, None).await;

    // Grower from another company
    let (status, body) = post_json(
        &app,
        "/api/batches",
        &json!({"company_id": chain_a.company_id, "samples": [sample_payload(&chain_b)]}),
    )
    .await;
    assert_eq!(
        status,
        StatusCode::BAD_REQUEST,
        "Cross-tenant grower should be rejected: {body:?}"
    );

    // Field from another farm
    let mut mixed = sample_payload(&chain_a);
    mixed["field_id"] = json!(chain_b.field_id);
    let (status, body) = post_json(
        &app,
        "/api/batches",
        &json!({"company_id": chain_a.company_id, "samples": [mixed]}),
    )
    .await;
    assert_eq!(
        status,
        StatusCode::BAD_REQUEST,
        "Broken farm/field chain should be rejected: {body:?}"
    );

    // A failed batch leaves nothing behind
    let (_, list_body) = get_json(&app, "/api/batches").await;
    assert_eq!(list_body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_unknown_company_rejected() {
    let app = setup_test_app().await;
    let chain = create_ownership_chain(&app, None).await;

    let (status, _body) = post_json(
        &app,
        "/api/batches",
        &json!({"company_id": Uuid::new_v4(), "samples": [sample_payload(&chain)]}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_concurrent_batch_numbers_are_distinct() {
    let app = setup_test_app().await;
    let chain = create_ownership_chain(&app, None).await;

    let payload = json!({
        "company_id": chain.company_id,
        "samples": [sample_payload(&chain)],
    });

    let (first, second, third) = tokio::join!(
        post_json(&app, "/api/batches", &payload),
        post_json(&app, "/api/batches", &payload),
        post_json(&app, "/api/batches", &payload),
    );

    let mut numbers = Vec::new();
    for (status, body) in [first, second, third] {
        assert_eq!(status, StatusCode::CREATED, "Body: {body:?}");
        numbers.push(body["batch_number"].as_i64().unwrap());
    }

    let mut deduped = numbers.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(deduped.len(), 3, "batch numbers must be pairwise distinct: {numbers:?}");
}

#[tokio::test]
async fn test_generate_lab_submission_csv() {
    let app = setup_test_app().await;
    let chain = create_ownership_chain(&app, None).await;

    let mut sample = sample_payload(&chain);
    sample["crop"] = json!("Corn");
    sample["yield_goal"] = json!(210.0);
    sample["collect_datetime"] = json!("2026-04-02T09:00:00Z");

    let (status, body) = post_json(
        &app,
        "/api/batches",
        &json!({"company_id": chain.company_id, "samples": [sample, sample_payload(&chain)]}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let batch_id = body["batch_id"].as_str().unwrap().to_string();

    let generate_response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/api/batches/{batch_id}/generate_csv"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let (generate_status, generate_body) =
        crate::test_helpers::extract_response_body(generate_response).await;
    assert_eq!(generate_status, StatusCode::OK, "Body: {generate_body:?}");
    assert_eq!(generate_body["sample_count"], 2);
    assert_eq!(
        generate_body["csv_filename"],
        format!("{batch_id}_lab_submission.csv").as_str()
    );

    // Status transition is recorded on the batch header
    let (_, get_body) = get_json(&app, &format!("/api/batches/{batch_id}")).await;
    assert_eq!(get_body["batch"]["status"], "CSV Generated");
    assert!(get_body["batch"]["csv_path"].is_string());

    // Downloaded document carries the fixed header and one row per sample
    let (download_status, text) =
        get_text(&app, &format!("/api/batches/{batch_id}/download_csv")).await;
    assert_eq!(download_status, StatusCode::OK);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with(
        "CustomerOrderNo,LayerId,OrderNotes,SampleName,CollectDateTime,Grower,Farm,Field,"
    ));
    assert!(lines[1].contains(&batch_id));
    assert!(lines[1].contains("04/02/26"));

    // Re-exporting without data changes produces byte-identical output
    let second_generate = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/api/batches/{batch_id}/generate_csv"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(second_generate.status(), StatusCode::OK);

    let (_, second_text) =
        get_text(&app, &format!("/api/batches/{batch_id}/download_csv")).await;
    assert_eq!(text, second_text);

    let (_, after_body) = get_json(&app, &format!("/api/batches/{batch_id}")).await;
    assert_eq!(after_body["batch"]["status"], "CSV Generated");
}

#[tokio::test]
async fn test_generate_csv_unknown_batch() {
    let app = setup_test_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/batches/SSP-99999/generate_csv")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_rec_export_requires_imported_results() {
    let app = setup_test_app().await;
    let chain = create_ownership_chain(&app, None).await;
    let batch_id = create_test_batch(&app, &chain, 1).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/api/batches/{batch_id}/export_rec_system"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let (status, body) = crate::test_helpers::extract_response_body(response).await;
    assert_eq!(
        status,
        StatusCode::BAD_REQUEST,
        "Export without lab results must fail cleanly: {body:?}"
    );

    // And no file was written
    let (download_status, _) =
        get_text(&app, &format!("/api/batches/{batch_id}/download_rec_csv")).await;
    assert_eq!(download_status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_batch_cascades() {
    let app = setup_test_app().await;
    let chain = create_ownership_chain(&app, None).await;
    let batch_id = create_test_batch(&app, &chain, 2).await;

    let delete_response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/batches/{batch_id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(delete_response.status().is_success());

    let (get_status, _) = get_json(&app, &format!("/api/batches/{batch_id}")).await;
    assert_eq!(get_status, StatusCode::NOT_FOUND);

    let (_, stats) = get_json(&app, "/api/stats").await;
    assert_eq!(stats["total_batches"], 0);
    assert_eq!(stats["total_samples"], 0);
}

#[tokio::test]
async fn test_list_batches_includes_display_names() {
    let app = setup_test_app().await;
    let chain = create_ownership_chain(&app, None).await;
    create_test_batch(&app, &chain, 1).await;

    let (status, body) = get_json(&app, "/api/batches").await;
    assert_eq!(status, StatusCode::OK);
    let batches = body.as_array().unwrap();
    assert_eq!(batches.len(), 1);
    assert!(batches[0]["company_name"].is_string());
    assert!(batches[0]["grower_name"].is_string());
    assert_eq!(batches[0]["sample_count"], 1);
}
