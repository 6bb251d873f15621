use chrono::{DateTime, Utc};
use crudcrate::{CRUDResource, EntityToModels};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, EntityToModels)]
#[sea_orm(table_name = "farms")]
#[crudcrate(
    generate_router,
    api_struct = "Farm",
    name_singular = "farm",
    name_plural = "farms",
    description = "Farms group a grower's fields. Farm names are unique within their grower.",
)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[crudcrate(primary_key, update_model = false, create_model = false, on_create = Uuid::new_v4())]
    pub id: Uuid,
    #[crudcrate(sortable, filterable)]
    pub grower_id: Uuid,
    #[crudcrate(sortable, filterable, fulltext)]
    pub farm_name: String,
    #[crudcrate(filterable)]
    pub location: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))", nullable)]
    #[crudcrate(sortable)]
    pub total_acres: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((9, 6)))", nullable)]
    #[crudcrate(sortable)]
    pub latitude: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((9, 6)))", nullable)]
    #[crudcrate(sortable)]
    pub longitude: Option<Decimal>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    #[crudcrate(update_model = false, create_model = false, on_create = chrono::Utc::now(), sortable)]
    pub created_at: DateTime<Utc>,
    #[crudcrate(update_model = false, create_model = false, on_update = chrono::Utc::now(), on_create = chrono::Utc::now(), sortable)]
    pub last_updated: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::growers::models::Entity",
        from = "Column::GrowerId",
        to = "crate::growers::models::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Growers,
    #[sea_orm(has_many = "crate::fields::models::Entity")]
    Fields,
}

impl Related<crate::growers::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Growers.def()
    }
}

impl Related<crate::fields::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fields.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
