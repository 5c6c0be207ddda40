//! Service job entity.
//!
//! `files_uploaded` and `afr_graph_screenshots` are JSON-encoded string
//! lists stored as text, decoded by the model layer.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "jobs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub customer_id: Uuid,
    pub date: String,
    pub technician_name: String,
    pub work_performed: Option<String>,
    pub tune_stage: Option<String>,
    pub mods_installed: Option<String>,
    pub dyno_results: Option<String>,
    pub before_ecu_map_version: Option<String>,
    pub after_ecu_map_version: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub files_uploaded: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub afr_graph_screenshots: Option<String>,
    pub calibration_notes: Option<String>,
    pub road_test_notes: Option<String>,
    pub next_recommendations: Option<String>,
    pub warranty_or_retune_status: Option<String>,
    pub odometer_at_visit: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::vehicle::Entity",
        from = "Column::VehicleId",
        to = "super::vehicle::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Vehicle,
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::CustomerId",
        to = "super::customer::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Customer,
}

impl Related<super::vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vehicle.def()
    }
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
