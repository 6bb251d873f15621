use super::test_selections::models::TestSelectionFlags;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Soil program tier a sample is enrolled in
#[derive(
    Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, ToSchema, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "program_level")]
pub enum ProgramLevel {
    #[sea_orm(string_value = "Excellent")]
    #[serde(rename = "Excellent")]
    Excellent,
    #[sea_orm(string_value = "Building")]
    #[serde(rename = "Building")]
    Building,
    #[sea_orm(string_value = "Minimal")]
    #[serde(rename = "Minimal")]
    Minimal,
}

impl Default for ProgramLevel {
    fn default() -> Self {
        ProgramLevel::Excellent
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "samples")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub batch_id: Uuid,
    /// 1-based position within the batch, assigned in submission order
    pub sample_sequence: i32,
    /// Physical bag label: `{batch_number:05}-{sequence}`
    pub bag_id: String,
    pub company_id: Uuid,
    pub grower_id: Uuid,
    pub farm_id: Uuid,
    pub field_id: Uuid,
    pub sample_name: Option<String>,
    pub zone: Option<String>,
    pub plot_id: Option<String>,
    pub crop: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))", nullable)]
    pub yield_goal: Option<Decimal>,
    pub previous_crop: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))", nullable)]
    pub previous_crop_yield: Option<Decimal>,
    pub lime_history: Option<Json>,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))", nullable)]
    pub acres: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((9, 6)))", nullable)]
    pub latitude: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((9, 6)))", nullable)]
    pub longitude: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((9, 2)))", nullable)]
    pub elevation: Option<Decimal>,
    pub collect_datetime: Option<DateTime<Utc>>,
    #[sea_orm(column_type = "Text", nullable)]
    pub special_notes: Option<String>,
    pub program_level: ProgramLevel,
    pub organic: bool,
    /// Frozen copy of the owning company's outside-home-country flag at
    /// batch-creation time; never recomputed afterwards
    pub quarantine: bool,
    pub created_at: DateTime<Utc>,
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
    #[sea_orm(
        belongs_to = "crate::growers::models::Entity",
        from = "Column::GrowerId",
        to = "crate::growers::models::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Growers,
    #[sea_orm(
        belongs_to = "crate::farms::models::Entity",
        from = "Column::FarmId",
        to = "crate::farms::models::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Farms,
    #[sea_orm(
        belongs_to = "crate::fields::models::Entity",
        from = "Column::FieldId",
        to = "crate::fields::models::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Fields,
    #[sea_orm(has_one = "crate::samples::test_selections::models::Entity")]
    TestSelections,
}

impl Related<crate::batches::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Batches.def()
    }
}

impl Related<crate::samples::test_selections::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TestSelections.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// One liming application in a sample's amendment history
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LimeHistoryEntry {
    /// Amendment applied, e.g. "Calcium Carbonate", "Dolomite", "Gypsum"
    pub amendment: String,
    /// Month of application, 1-12
    pub month: u8,
    pub year: i32,
    pub rate_lbs_per_acre: Decimal,
}

/// One sample as submitted by the caller when creating a batch. Sequence,
/// bag id and quarantine flag are assigned by batch assembly, never by the
/// caller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SampleSubmission {
    pub grower_id: Uuid,
    pub farm_id: Uuid,
    pub field_id: Uuid,
    #[serde(default)]
    pub sample_name: Option<String>,
    #[serde(default)]
    pub zone: Option<String>,
    #[serde(default)]
    pub plot_id: Option<String>,
    #[serde(default)]
    pub crop: Option<String>,
    #[serde(default)]
    pub yield_goal: Option<Decimal>,
    #[serde(default)]
    pub previous_crop: Option<String>,
    #[serde(default)]
    pub previous_crop_yield: Option<Decimal>,
    #[serde(default)]
    pub lime_history: Option<Vec<LimeHistoryEntry>>,
    #[serde(default)]
    pub acres: Option<Decimal>,
    #[serde(default)]
    pub latitude: Option<Decimal>,
    #[serde(default)]
    pub longitude: Option<Decimal>,
    #[serde(default)]
    pub elevation: Option<Decimal>,
    #[serde(default)]
    pub collect_datetime: Option<DateTime<Utc>>,
    #[serde(default)]
    pub special_notes: Option<String>,
    #[serde(default)]
    pub program_level: ProgramLevel,
    #[serde(default)]
    pub organic: bool,
    #[serde(default)]
    pub tests: TestSelectionFlags,
}
