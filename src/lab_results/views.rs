use super::data::models as lab_result_data;
use super::models::{Column as LabResultColumn, Entity as LabResultEntity, ImportReport};
use super::services;
use crate::common::auth::Role;
use crate::common::errors::{BusinessError, BusinessResult};
use crate::common::state::AppState;
use axum::{
    Json,
    extract::{Multipart, Path, State},
    routing::{get, post},
};
use axum_keycloak_auth::{PassthroughMode, layer::KeycloakAuthLayer};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use serde_json::{Value, json};
use utoipa_axum::router::OpenApiRouter;

pub fn router(state: &AppState) -> OpenApiRouter {
    let mut mutating_router = OpenApiRouter::new()
        .route("/import", post(import_lab_results).with_state(state.clone()))
        .route(
            "/batch/{batch_id}",
            get(get_lab_results).with_state(state.clone()),
        )
        .route(
            "/plot_history/{plot_id}",
            get(get_plot_history).with_state(state.clone()),
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
        println!("Warning: Mutating routes of lab_results router are not protected");
    }

    mutating_router
}

/// Import one or more lab result CSV files as multipart form data
#[utoipa::path(
    post,
    path = "/import",
    request_body(content = String, description = "CSV files as multipart/form-data", content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Per-file import outcomes", body = ImportReport),
        (status = 400, description = "No files found in request")
    ),
    tag = "lab_results"
)]
pub async fn import_lab_results(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> BusinessResult<Json<ImportReport>> {
    let mut files: Vec<(String, Vec<u8>)> = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        BusinessError::validation("files", &format!("multipart error: {e}"))
    })? {
        if field.file_name().is_none() {
            continue;
        }
        let filename = field
            .file_name()
            .map(ToString::to_string)
            .unwrap_or_else(|| "upload.csv".to_string());
        let bytes = field
            .bytes()
            .await
            .map_err(|e| {
                BusinessError::validation("files", &format!("failed to read file data: {e}"))
            })?
            .to_vec();
        files.push((filename, bytes));
    }

    if files.is_empty() {
        return Err(BusinessError::validation(
            "files",
            "no files found in request",
        ));
    }

    let report = services::import_files(&state.db, &state.config, files).await;
    Ok(Json(report))
}

/// List lab result imports for a batch with their datum counts
#[utoipa::path(
    get,
    path = "/batch/{batch_id}",
    params(("batch_id" = String, Path, description = "Batch identifier, e.g. SSP-00042")),
    responses(
        (status = 200, description = "Lab result imports for the batch"),
        (status = 404, description = "Batch not found")
    ),
    tag = "lab_results"
)]
pub async fn get_lab_results(
    Path(batch_ref): Path<String>,
    State(state): State<AppState>,
) -> BusinessResult<Json<Value>> {
    let db = &state.db;
    let batch = crate::batches::services::find_batch(db, &batch_ref).await?;

    let results = LabResultEntity::find()
        .filter(LabResultColumn::BatchId.eq(batch.id))
        .order_by_desc(LabResultColumn::ImportDate)
        .all(db)
        .await
        .map_err(|e| BusinessError::from_db(e, "lab result"))?;

    let mut results_data = Vec::with_capacity(results.len());
    for result in results {
        let data_points = lab_result_data::Entity::find()
            .filter(lab_result_data::Column::LabResultId.eq(result.id))
            .count(db)
            .await
            .map_err(|e| BusinessError::from_db(e, "lab result data"))?;

        let mut value = serde_json::to_value(&result).map_err(|e| {
            BusinessError::InternalError {
                message: e.to_string(),
            }
        })?;
        if let Some(object) = value.as_object_mut() {
            object.insert("data_points".to_string(), json!(data_points));
        }
        results_data.push(value);
    }

    Ok(Json(json!(results_data)))
}

/// Historical data for a plot id, used to auto-fill new sample forms
#[utoipa::path(
    get,
    path = "/plot_history/{plot_id}",
    params(("plot_id" = String, Path, description = "Plot identifier to look up")),
    responses(
        (status = 200, description = "Previous submissions carrying this plot id")
    ),
    tag = "lab_results"
)]
pub async fn get_plot_history(
    Path(plot_id): Path<String>,
    State(state): State<AppState>,
) -> Json<Value> {
    let entries = services::plot_history(&state.db, &plot_id).await;
    Json(json!(entries))
}
