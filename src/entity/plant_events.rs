use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Desired (commanded) values for a plant. Mirrors `plant_states`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "PlantEvent")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub last_updated: Option<DateTimeWithTimeZone>,
    pub luminosity_event: f64,
    pub humidity_event: f64,
    pub valve_event: bool,
    pub led_intensity_event: i32,
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
