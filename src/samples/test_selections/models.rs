use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// One row per sample holding the requested analyte set. The flag set is
/// closed; new analytes require a schema change, not new string keys.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "test_selections")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub sample_id: Uuid,
    pub test_b: bool,
    pub test_ca: bool,
    pub test_cu: bool,
    pub test_fe: bool,
    pub test_k: bool,
    pub test_mg: bool,
    pub test_mn: bool,
    pub test_na: bool,
    pub test_om: bool,
    pub test_p2: bool,
    pub test_ph1: bool,
    pub test_s: bool,
    pub test_zn: bool,
    pub test_bulk_den: bool,
    pub test_cl: bool,
    pub test_co: bool,
    pub test_mo: bool,
    pub test_salts: bool,
    pub test_al: bool,
    pub test_i: bool,
    pub test_morgan: bool,
    pub test_nh3: bool,
    pub test_no3: bool,
    pub test_olsen: bool,
    pub test_bray_p1: bool,
    pub test_ph2_salt: bool,
    pub test_ph3_buffer: bool,
    pub test_pret: bool,
    pub test_other: bool,
    pub test_ssc: bool,
    pub test_se: bool,
    pub test_si: bool,
    pub test_plfa: bool,
    pub test_total_p: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::samples::models::Entity",
        from = "Column::SampleId",
        to = "crate::samples::models::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Samples,
}

impl Related<crate::samples::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Samples.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Caller-facing analyte flags. Missing fields fall back to the documented
/// defaults via `Default`, so a partial selection merges over the standard
/// soil panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct TestSelectionFlags {
    // Standard tests (default on)
    pub test_b: bool,
    pub test_ca: bool,
    pub test_cu: bool,
    pub test_fe: bool,
    pub test_k: bool,
    pub test_mg: bool,
    pub test_mn: bool,
    pub test_na: bool,
    pub test_om: bool,
    pub test_p2: bool,
    pub test_ph1: bool,
    pub test_s: bool,
    pub test_zn: bool,

    // Optional toggles
    pub test_bulk_den: bool,
    pub test_cl: bool,
    pub test_co: bool,
    pub test_mo: bool,
    pub test_salts: bool,

    // Additional tests
    pub test_al: bool,
    pub test_i: bool,
    pub test_morgan: bool,
    pub test_nh3: bool,
    pub test_no3: bool,
    pub test_olsen: bool,
    pub test_bray_p1: bool,
    pub test_ph2_salt: bool,
    pub test_ph3_buffer: bool,
    pub test_pret: bool,
    pub test_other: bool,
    pub test_ssc: bool,
    pub test_se: bool,
    pub test_si: bool,
    pub test_plfa: bool,
    pub test_total_p: bool,
}

impl Default for TestSelectionFlags {
    fn default() -> Self {
        Self {
            test_b: true,
            test_ca: true,
            test_cu: true,
            test_fe: true,
            test_k: true,
            test_mg: true,
            test_mn: true,
            test_na: true,
            test_om: true,
            test_p2: true,
            test_ph1: true,
            test_s: true,
            test_zn: true,
            test_bulk_den: false,
            test_cl: false,
            test_co: false,
            test_mo: false,
            test_salts: false,
            test_al: false,
            test_i: false,
            test_morgan: false,
            test_nh3: false,
            test_no3: false,
            test_olsen: false,
            test_bray_p1: false,
            test_ph2_salt: false,
            test_ph3_buffer: false,
            test_pret: false,
            test_other: false,
            test_ssc: false,
            test_se: false,
            test_si: false,
            test_plfa: false,
            test_total_p: false,
        }
    }
}

impl TestSelectionFlags {
    pub fn into_active_model(self, sample_id: Uuid) -> ActiveModel {
        ActiveModel {
            id: Set(Uuid::new_v4()),
            sample_id: Set(sample_id),
            test_b: Set(self.test_b),
            test_ca: Set(self.test_ca),
            test_cu: Set(self.test_cu),
            test_fe: Set(self.test_fe),
            test_k: Set(self.test_k),
            test_mg: Set(self.test_mg),
            test_mn: Set(self.test_mn),
            test_na: Set(self.test_na),
            test_om: Set(self.test_om),
            test_p2: Set(self.test_p2),
            test_ph1: Set(self.test_ph1),
            test_s: Set(self.test_s),
            test_zn: Set(self.test_zn),
            test_bulk_den: Set(self.test_bulk_den),
            test_cl: Set(self.test_cl),
            test_co: Set(self.test_co),
            test_mo: Set(self.test_mo),
            test_salts: Set(self.test_salts),
            test_al: Set(self.test_al),
            test_i: Set(self.test_i),
            test_morgan: Set(self.test_morgan),
            test_nh3: Set(self.test_nh3),
            test_no3: Set(self.test_no3),
            test_olsen: Set(self.test_olsen),
            test_bray_p1: Set(self.test_bray_p1),
            test_ph2_salt: Set(self.test_ph2_salt),
            test_ph3_buffer: Set(self.test_ph3_buffer),
            test_pret: Set(self.test_pret),
            test_other: Set(self.test_other),
            test_ssc: Set(self.test_ssc),
            test_se: Set(self.test_se),
            test_si: Set(self.test_si),
            test_plfa: Set(self.test_plfa),
            test_total_p: Set(self.test_total_p),
        }
    }
}

impl From<&Model> for TestSelectionFlags {
    fn from(model: &Model) -> Self {
        Self {
            test_b: model.test_b,
            test_ca: model.test_ca,
            test_cu: model.test_cu,
            test_fe: model.test_fe,
            test_k: model.test_k,
            test_mg: model.test_mg,
            test_mn: model.test_mn,
            test_na: model.test_na,
            test_om: model.test_om,
            test_p2: model.test_p2,
            test_ph1: model.test_ph1,
            test_s: model.test_s,
            test_zn: model.test_zn,
            test_bulk_den: model.test_bulk_den,
            test_cl: model.test_cl,
            test_co: model.test_co,
            test_mo: model.test_mo,
            test_salts: model.test_salts,
            test_al: model.test_al,
            test_i: model.test_i,
            test_morgan: model.test_morgan,
            test_nh3: model.test_nh3,
            test_no3: model.test_no3,
            test_olsen: model.test_olsen,
            test_bray_p1: model.test_bray_p1,
            test_ph2_salt: model.test_ph2_salt,
            test_ph3_buffer: model.test_ph3_buffer,
            test_pret: model.test_pret,
            test_other: model.test_other,
            test_ssc: model.test_ssc,
            test_se: model.test_se,
            test_si: model.test_si,
            test_plfa: model.test_plfa,
            test_total_p: model.test_total_p,
        }
    }
}
