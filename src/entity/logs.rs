use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Append-only snapshot of a plant's state and desired values.
///
/// `id` doubles as the insertion sequence: the latest row for a plant is the
/// one with the highest id.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "Log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub entry_creation_time: DateTimeWithTimeZone,
    pub entry_store_time: Option<DateTimeWithTimeZone>,
    pub temperature: f64,
    pub luminosity_state: f64,
    pub humidity_state: f64,
    pub luminosity_event: f64,
    pub humidity_event: f64,
    pub plant_id: i32,
    pub valve_state: bool,
    pub pump_state: bool,
    pub led_intensity_state: i32,
    pub valve_event: bool,
    pub pump_event: bool,
    pub led_intensity_event: i32,
    pub mode_event: i32,
    pub mode_state: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::plants::Entity",
        from = "Column::PlantId",
        to = "super::plants::Column::Id"
    )]
    Plant,
}

impl Related<super::plants::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Plant.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
