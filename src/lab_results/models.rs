use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// One record per imported result file. A batch accumulates these over
/// time; re-imports and corrections never supersede earlier records.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "lab_results")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub batch_id: Uuid,
    pub control_id: Option<String>,
    pub csv_filename: String,
    pub csv_path: String,
    pub row_count: i32,
    pub imported_by: String,
    pub import_date: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::batches::models::Entity",
        from = "Column::BatchId",
        to = "crate::batches::models::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Batches,
    #[sea_orm(has_many = "crate::lab_results::data::models::Entity")]
    LabResultData,
}

impl Related<crate::batches::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Batches.def()
    }
}

impl Related<crate::lab_results::data::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LabResultData.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Per-file outcome of a multi-file import. One bad file never aborts its
/// siblings.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FileImportOutcome {
    pub filename: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_count: Option<usize>,
}

impl FileImportOutcome {
    pub fn error(filename: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            status: "error".to_string(),
            message: Some(message.into()),
            batch_id: None,
            control_id: None,
            row_count: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ImportReport {
    pub total_files: usize,
    pub results: Vec<FileImportOutcome>,
}
