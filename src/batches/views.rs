use super::models::{
    BatchCreated, BatchSubmission, Column as BatchColumn, Entity as BatchEntity, LabCsvSummary,
    RecCsvSummary,
};
use super::services;
use crate::common::auth::Role;
use crate::common::errors::{BusinessError, BusinessResult};
use crate::common::state::AppState;
use axum::{
    Json,
    body::Body,
    extract::{Path, Query, State},
    http::{
        StatusCode,
        header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    },
    response::Response,
    routing::{get, post},
};
use axum_keycloak_auth::{PassthroughMode, layer::KeycloakAuthLayer};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use serde::Deserialize;
use serde_json::{Value, json};
use utoipa_axum::router::OpenApiRouter;

pub fn router(state: &AppState) -> OpenApiRouter {
    let mut mutating_router = OpenApiRouter::new()
        .route(
            "/",
            post(create_batch)
                .get(list_batches)
                .with_state(state.clone()),
        )
        .route(
            "/{batch_id}",
            get(get_batch)
                .delete(delete_batch)
                .with_state(state.clone()),
        )
        .route(
            "/{batch_id}/generate_csv",
            post(generate_csv).with_state(state.clone()),
        )
        .route(
            "/{batch_id}/download_csv",
            get(download_csv).with_state(state.clone()),
        )
        .route(
            "/{batch_id}/export_rec_system",
            post(export_rec_system).with_state(state.clone()),
        )
        .route(
            "/{batch_id}/download_rec_csv",
            get(download_rec_csv).with_state(state.clone()),
        );

    if let Some(instance) = state.keycloak_auth_instance.clone() {
        mutating_router = mutating_router.layer(
            KeycloakAuthLayer::<Role>::builder()
                .instance(instance)
                .passthrough_mode(PassthroughMode::Block)
                .persist_raw_claims(false)
                .expected_audiences(vec![String::from("account")])
                .required_roles(vec![Role::Administrator])
                .build(),
        );
    } else if !state.config.tests_running {
        println!("Warning: Mutating routes of batches router are not protected");
    }

    mutating_router
}

#[derive(Debug, Deserialize)]
pub struct BatchListQuery {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// Create a submission batch with its samples as one atomic unit
#[utoipa::path(
    post,
    path = "/",
    request_body = BatchSubmission,
    responses(
        (status = 201, description = "Batch created", body = BatchCreated),
        (status = 400, description = "Empty sample list or broken ownership chain"),
        (status = 404, description = "Company not found")
    ),
    tag = "batches"
)]
pub async fn create_batch(
    State(state): State<AppState>,
    Json(submission): Json<BatchSubmission>,
) -> BusinessResult<(StatusCode, Json<BatchCreated>)> {
    let created = services::create_batch(&state.db, submission).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// List batches, newest first, with company and first-grower display names
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "List of batches")
    ),
    tag = "batches"
)]
pub async fn list_batches(
    State(state): State<AppState>,
    Query(query): Query<BatchListQuery>,
) -> BusinessResult<Json<Value>> {
    let db = &state.db;
    let batches = BatchEntity::find()
        .order_by_desc(BatchColumn::SubmissionDate)
        .offset(query.offset.unwrap_or(0))
        .limit(query.limit.unwrap_or(100))
        .all(db)
        .await
        .map_err(|e| BusinessError::from_db(e, "batch"))?;

    let mut batches_data = Vec::with_capacity(batches.len());
    for batch in batches {
        let company_name = crate::companies::models::Entity::find_by_id(batch.company_id)
            .one(db)
            .await
            .map_err(|e| BusinessError::from_db(e, "company"))?
            .map(|company| company.company_name);

        // Display name of the grower on the batch's first sample
        let grower_name = match crate::samples::models::Entity::find()
            .filter(crate::samples::models::Column::BatchId.eq(batch.id))
            .order_by_asc(crate::samples::models::Column::SampleSequence)
            .one(db)
            .await
            .map_err(|e| BusinessError::from_db(e, "sample"))?
        {
            Some(sample) => crate::growers::models::Entity::find_by_id(sample.grower_id)
                .one(db)
                .await
                .map_err(|e| BusinessError::from_db(e, "grower"))?
                .map(|grower| grower.grower_name),
            None => None,
        };

        let mut value = serde_json::to_value(&batch).map_err(|e| {
            BusinessError::InternalError {
                message: e.to_string(),
            }
        })?;
        if let Some(object) = value.as_object_mut() {
            object.insert("company_name".to_string(), json!(company_name));
            object.insert("grower_name".to_string(), json!(grower_name));
        }
        batches_data.push(value);
    }

    Ok(Json(json!(batches_data)))
}

/// Get a batch with its samples, test selections and joined display names
#[utoipa::path(
    get,
    path = "/{batch_id}",
    params(("batch_id" = String, Path, description = "Batch identifier, e.g. SSP-00042")),
    responses(
        (status = 200, description = "Batch details with samples"),
        (status = 404, description = "Batch not found")
    ),
    tag = "batches"
)]
pub async fn get_batch(
    Path(batch_ref): Path<String>,
    State(state): State<AppState>,
) -> BusinessResult<Json<Value>> {
    let db = &state.db;
    let batch = services::find_batch(db, &batch_ref).await?;

    let samples = crate::samples::models::Entity::find()
        .filter(crate::samples::models::Column::BatchId.eq(batch.id))
        .order_by_asc(crate::samples::models::Column::SampleSequence)
        .all(db)
        .await
        .map_err(|e| BusinessError::from_db(e, "sample"))?;

    let mut samples_data = Vec::with_capacity(samples.len());
    for sample in samples {
        let tests = crate::samples::test_selections::models::Entity::find()
            .filter(crate::samples::test_selections::models::Column::SampleId.eq(sample.id))
            .one(db)
            .await
            .map_err(|e| BusinessError::from_db(e, "test selection"))?
            .as_ref()
            .map(crate::samples::test_selections::models::TestSelectionFlags::from);

        let company_name = crate::companies::models::Entity::find_by_id(sample.company_id)
            .one(db)
            .await
            .map_err(|e| BusinessError::from_db(e, "company"))?
            .map(|company| company.company_name);
        let grower_name = crate::growers::models::Entity::find_by_id(sample.grower_id)
            .one(db)
            .await
            .map_err(|e| BusinessError::from_db(e, "grower"))?
            .map(|grower| grower.grower_name);
        let farm_name = crate::farms::models::Entity::find_by_id(sample.farm_id)
            .one(db)
            .await
            .map_err(|e| BusinessError::from_db(e, "farm"))?
            .map(|farm| farm.farm_name);
        let field_name = crate::fields::models::Entity::find_by_id(sample.field_id)
            .one(db)
            .await
            .map_err(|e| BusinessError::from_db(e, "field"))?
            .map(|field| field.field_name);

        let mut value = serde_json::to_value(&sample).map_err(|e| {
            BusinessError::InternalError {
                message: e.to_string(),
            }
        })?;
        if let Some(object) = value.as_object_mut() {
            object.insert("tests".to_string(), json!(tests));
            object.insert("company_name".to_string(), json!(company_name));
            object.insert("grower_name".to_string(), json!(grower_name));
            object.insert("farm_name".to_string(), json!(farm_name));
            object.insert("field_name".to_string(), json!(field_name));
        }
        samples_data.push(value);
    }

    Ok(Json(json!({
        "batch": batch,
        "samples": samples_data,
    })))
}

/// Delete a batch; samples and test selections cascade with it
#[utoipa::path(
    delete,
    path = "/{batch_id}",
    params(("batch_id" = String, Path, description = "Batch identifier")),
    responses(
        (status = 200, description = "Batch deleted"),
        (status = 404, description = "Batch not found")
    ),
    tag = "batches"
)]
pub async fn delete_batch(
    Path(batch_ref): Path<String>,
    State(state): State<AppState>,
) -> BusinessResult<Json<Value>> {
    let result = BatchEntity::delete_many()
        .filter(BatchColumn::BatchId.eq(&batch_ref))
        .exec(&state.db)
        .await
        .map_err(|e| BusinessError::from_db(e, "batch"))?;

    if result.rows_affected == 0 {
        return Err(BusinessError::not_found("batch", &batch_ref));
    }

    Ok(Json(json!({
        "message": format!("Batch {batch_ref} deleted successfully")
    })))
}

/// Generate the lab submission CSV for a batch
#[utoipa::path(
    post,
    path = "/{batch_id}/generate_csv",
    params(("batch_id" = String, Path, description = "Batch identifier")),
    responses(
        (status = 200, description = "Lab submission file generated", body = LabCsvSummary),
        (status = 404, description = "Batch not found or has no samples")
    ),
    tag = "batches"
)]
pub async fn generate_csv(
    Path(batch_ref): Path<String>,
    State(state): State<AppState>,
) -> BusinessResult<Json<LabCsvSummary>> {
    let summary = services::generate_lab_submission(&state.db, &state.config, &batch_ref).await?;
    Ok(Json(summary))
}

/// Download the generated lab submission CSV
#[utoipa::path(
    get,
    path = "/{batch_id}/download_csv",
    params(("batch_id" = String, Path, description = "Batch identifier")),
    responses(
        (status = 200, description = "CSV file"),
        (status = 404, description = "CSV not generated yet")
    ),
    tag = "batches"
)]
pub async fn download_csv(
    Path(batch_ref): Path<String>,
    State(state): State<AppState>,
) -> BusinessResult<Response> {
    let batch = services::find_batch(&state.db, &batch_ref).await?;
    let path = batch
        .csv_path
        .ok_or_else(|| BusinessError::not_found("lab submission file", &batch_ref))?;
    serve_csv_file(&path).await
}

/// Generate the rec-system export for a batch with imported lab results
#[utoipa::path(
    post,
    path = "/{batch_id}/export_rec_system",
    params(("batch_id" = String, Path, description = "Batch identifier")),
    responses(
        (status = 200, description = "Rec-system file generated", body = RecCsvSummary),
        (status = 400, description = "No lab results imported yet"),
        (status = 404, description = "Batch not found")
    ),
    tag = "batches"
)]
pub async fn export_rec_system(
    Path(batch_ref): Path<String>,
    State(state): State<AppState>,
) -> BusinessResult<Json<RecCsvSummary>> {
    let summary = services::export_rec_system(&state.db, &state.config, &batch_ref).await?;
    Ok(Json(summary))
}

/// Download the most recent rec-system export for a batch
#[utoipa::path(
    get,
    path = "/{batch_id}/download_rec_csv",
    params(("batch_id" = String, Path, description = "Batch identifier")),
    responses(
        (status = 200, description = "CSV file"),
        (status = 404, description = "Rec-system CSV not generated yet")
    ),
    tag = "batches"
)]
pub async fn download_rec_csv(
    Path(batch_ref): Path<String>,
    State(state): State<AppState>,
) -> BusinessResult<Response> {
    // The export is named after the composite batch id, so match by
    // substring and pick the newest file
    let mut entries = tokio::fs::read_dir(&state.config.export_dir)
        .await
        .map_err(|_| BusinessError::not_found("rec-system file", &batch_ref))?;

    let mut newest: Option<(std::time::SystemTime, std::path::PathBuf)> = None;
    while let Some(entry) = entries.next_entry().await.map_err(|e| {
        BusinessError::InternalError {
            message: e.to_string(),
        }
    })? {
        let name = entry.file_name().to_string_lossy().to_string();
        if !(name.contains(&batch_ref) && name.ends_with("_for_rec_system.csv")) {
            continue;
        }
        let modified = entry
            .metadata()
            .await
            .ok()
            .and_then(|meta| meta.modified().ok())
            .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
        if newest
            .as_ref()
            .is_none_or(|(current, _)| modified > *current)
        {
            newest = Some((modified, entry.path()));
        }
    }

    let (_, path) = newest.ok_or_else(|| BusinessError::not_found("rec-system file", &batch_ref))?;
    serve_csv_file(&path.to_string_lossy()).await
}

async fn serve_csv_file(path: &str) -> BusinessResult<Response> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|_| BusinessError::not_found("file", path))?;
    let filename = std::path::Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| "export.csv".to_string());

    Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, "text/csv")
        .header(
            CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        )
        .body(Body::from(bytes))
        .map_err(|e| BusinessError::InternalError {
            message: e.to_string(),
        })
}
