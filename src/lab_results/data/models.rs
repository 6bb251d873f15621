use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tall fact table: one row per imported (row, non-empty field) pair. The
/// sample reference stays null when the bag id did not match any known
/// sample, so unmatched rows are kept rather than silently dropped.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "lab_result_data")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub lab_result_id: Uuid,
    pub sample_id: Option<Uuid>,
    /// 0-based data-row position within the imported file
    pub row_index: i32,
    /// Raw bag identifier as read from the file
    pub bag_id: String,
    pub field_name: String,
    pub field_value: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::lab_results::models::Entity",
        from = "Column::LabResultId",
        to = "crate::lab_results::models::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    LabResults,
    #[sea_orm(
        belongs_to = "crate::samples::models::Entity",
        from = "Column::SampleId",
        to = "crate::samples::models::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Samples,
}

impl Related<crate::lab_results::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LabResults.def()
    }
}

impl Related<crate::samples::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Samples.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
