use crate::samples::models::SampleSubmission;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Lifecycle of a submission batch. The portal drives Pending through
/// Lab Results Received; the remaining states are set manually.
#[derive(
    Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, ToSchema, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "batch_status")]
pub enum BatchStatus {
    #[sea_orm(string_value = "Pending")]
    #[serde(rename = "Pending")]
    Pending,
    #[sea_orm(string_value = "CSV Generated")]
    #[serde(rename = "CSV Generated")]
    CsvGenerated,
    #[sea_orm(string_value = "Sent to Lab")]
    #[serde(rename = "Sent to Lab")]
    SentToLab,
    #[sea_orm(string_value = "Lab Results Received")]
    #[serde(rename = "Lab Results Received")]
    LabResultsReceived,
    #[sea_orm(string_value = "Completed")]
    #[serde(rename = "Completed")]
    Completed,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "batches")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Stable external identifier, `SSP-{batch_number:05}`
    #[sea_orm(unique)]
    pub batch_id: String,
    pub company_id: Uuid,
    #[sea_orm(unique)]
    pub batch_number: i32,
    pub sample_count: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub created_by: String,
    pub status: BatchStatus,
    /// The lab's own tracking code, learned from the first imported result file
    pub control_id: Option<String>,
    /// `{batch_id}-{control_id}` once the control id is known
    pub full_batch_id: Option<String>,
    pub csv_path: Option<String>,
    pub rec_csv_path: Option<String>,
    pub submission_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::companies::models::Entity",
        from = "Column::CompanyId",
        to = "crate::companies::models::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Companies,
    #[sea_orm(has_many = "crate::samples::models::Entity")]
    Samples,
    #[sea_orm(has_many = "crate::lab_results::models::Entity")]
    LabResults,
}

impl Related<crate::companies::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Companies.def()
    }
}

impl Related<crate::samples::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Samples.def()
    }
}

impl Related<crate::lab_results::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LabResults.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

fn default_created_by() -> Option<String> {
    Some("Internal".to_string())
}

/// Request payload for creating a batch together with its samples
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema)]
pub struct BatchSubmission {
    pub company_id: Uuid,
    pub samples: Vec<SampleSubmission>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default = "default_created_by")]
    pub created_by: Option<String>,
}

/// Result of a successful batch assembly
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BatchCreated {
    pub batch_id: String,
    pub batch_number: i32,
    pub sample_count: usize,
    pub samples: Vec<Uuid>,
}

/// Result of generating the lab submission file
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LabCsvSummary {
    pub batch_id: String,
    pub csv_filename: String,
    pub csv_path: String,
    pub sample_count: usize,
}

/// Result of generating the rec-system export file
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RecCsvSummary {
    pub batch_id: String,
    pub full_batch_id: String,
    pub csv_filename: String,
    pub csv_path: String,
    pub sample_count: usize,
}
