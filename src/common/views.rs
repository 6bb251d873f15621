use super::models::{HealthCheck, PortalStats};
use crate::batches::models::BatchStatus;
use crate::common::state::AppState;
use axum::{Json, extract::State, http::StatusCode};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};
use utoipa_axum::{router::OpenApiRouter, routes};

pub fn router(state: &AppState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(healthz))
        .routes(routes!(get_stats))
        .with_state(state.db.clone())
}

#[utoipa::path(
    get,
    path = "/healthz",
    responses(
        (
            status = OK,
            description = "Service health check",
            body = HealthCheck,
            content_type = "application/json"
        )
    )
)]
pub async fn healthz(State(db): State<DatabaseConnection>) -> (StatusCode, Json<HealthCheck>) {
    if db.ping().await.is_err() {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(HealthCheck {
                status: "error".to_string(),
            }),
        );
    }

    (
        StatusCode::OK,
        Json(HealthCheck {
            status: "ok".to_string(),
        }),
    )
}

#[utoipa::path(
    get,
    path = "/api/stats",
    responses(
        (
            status = OK,
            description = "Portal statistics",
            body = PortalStats,
            content_type = "application/json"
        ),
        (status = 500, description = "Database error")
    )
)]
pub async fn get_stats(
    State(db): State<DatabaseConnection>,
) -> Result<Json<PortalStats>, StatusCode> {
    let total_batches = crate::batches::models::Entity::find()
        .count(&db)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    let total_samples = crate::samples::models::Entity::find()
        .count(&db)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    let total_companies = crate::companies::models::Entity::find()
        .count(&db)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    let completed_batches = crate::batches::models::Entity::find()
        .filter(crate::batches::models::Column::Status.eq(BatchStatus::LabResultsReceived))
        .count(&db)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(PortalStats {
        total_batches,
        total_samples,
        total_companies,
        completed_batches,
    }))
}
