use chrono::{DateTime, Utc};
use crudcrate::{CRUDResource, EntityToModels, traits::MergeIntoActiveModel};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, IntoActiveModel, Set, entity::prelude::*,
};
use uuid::Uuid;

/// Home country for quarantine purposes. Samples from companies outside it
/// require quarantine handling at the lab.
const HOME_COUNTRY: &str = "USA";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, EntityToModels)]
#[sea_orm(table_name = "companies")]
#[crudcrate(
    generate_router,
    api_struct = "Company",
    name_singular = "company",
    name_plural = "companies",
    description = "Companies are the portal's clients. The outside-home-country flag drives quarantine handling for every sample they submit.",
    fn_create = create_company_with_country_flag,
    fn_update = update_company_with_country_flag,
)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[crudcrate(primary_key, update_model = false, create_model = false, on_create = Uuid::new_v4())]
    pub id: Uuid,
    #[sea_orm(unique)]
    #[crudcrate(sortable, filterable, fulltext)]
    pub company_name: String,
    #[crudcrate(filterable, fulltext)]
    pub contact_person: Option<String>,
    #[crudcrate(filterable)]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    #[crudcrate(sortable, filterable)]
    pub city: Option<String>,
    #[crudcrate(sortable, filterable)]
    pub state: Option<String>,
    pub zip: Option<String>,
    #[crudcrate(sortable, filterable)]
    pub country: Option<String>,
    #[crudcrate(update_model = false, create_model = false, on_create = false, sortable, filterable)]
    pub is_outside_us: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    #[crudcrate(update_model = false, create_model = false, on_create = chrono::Utc::now(), sortable)]
    pub created_at: DateTime<Utc>,
    #[crudcrate(update_model = false, create_model = false, on_update = chrono::Utc::now(), on_create = chrono::Utc::now(), sortable)]
    pub last_updated: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::growers::models::Entity")]
    Growers,
    #[sea_orm(has_many = "crate::batches::models::Entity")]
    Batches,
}

impl Related<crate::growers::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Growers.def()
    }
}

impl Related<crate::batches::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Batches.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// True when the company's country is not the home country. A missing
/// country counts as domestic.
pub fn is_outside_home_country(country: Option<&str>) -> bool {
    match country {
        Some(raw) => {
            let trimmed = raw.trim();
            !(trimmed.is_empty()
                || trimmed.eq_ignore_ascii_case(HOME_COUNTRY)
                || trimmed.eq_ignore_ascii_case("US")
                || trimmed.eq_ignore_ascii_case("United States"))
        }
        None => false,
    }
}

fn country_value(active: &ActiveValue<Option<String>>) -> Option<String> {
    match active {
        ActiveValue::Set(value) | ActiveValue::Unchanged(value) => value.clone(),
        ActiveValue::NotSet => None,
    }
}

/// Custom create that derives the quarantine source flag from the country
async fn create_company_with_country_flag(
    db: &DatabaseConnection,
    create_data: CompanyCreate,
) -> Result<Company, DbErr> {
    let mut active_model: ActiveModel = create_data.into();
    let country = country_value(&active_model.country);
    active_model.is_outside_us = Set(is_outside_home_country(country.as_deref()));

    let inserted = active_model.insert(db).await?;
    Ok(inserted.into())
}

/// Custom update that re-derives the flag when the country changes. Existing
/// samples keep the quarantine flag frozen at their batch-creation time.
async fn update_company_with_country_flag(
    db: &DatabaseConnection,
    id: Uuid,
    update_data: CompanyUpdate,
) -> Result<Company, DbErr> {
    let existing_model = Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(format!("Company with id '{id}' not found")))?;

    let existing_active: ActiveModel = existing_model.into_active_model();
    let mut updated_active = update_data.merge_into_activemodel(existing_active)?;
    let country = country_value(&updated_active.country);
    updated_active.is_outside_us = Set(is_outside_home_country(country.as_deref()));

    let updated = updated_active.update(db).await?;
    Ok(updated.into())
}
