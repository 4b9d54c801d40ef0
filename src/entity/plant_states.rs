use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Last sensed/actuated condition of a plant, written by the device reporting path.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "PlantState")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub last_updated: Option<DateTimeWithTimeZone>,
    pub luminosity_state: f64,
    pub humidity_state: f64,
    pub valve_state: bool,
    pub led_intensity_state: i32,
    pub mode: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::plants::Entity")]
    Plants,
}

impl Related<super::plants::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Plants.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
