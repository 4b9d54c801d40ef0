use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "Plant")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub error: bool,
    pub plant_state_id: i32,
    pub plant_event_id: i32,
    pub iot_dev_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::plant_states::Entity",
        from = "Column::PlantStateId",
        to = "super::plant_states::Column::Id"
    )]
    PlantState,
    #[sea_orm(
        belongs_to = "super::plant_events::Entity",
        from = "Column::PlantEventId",
        to = "super::plant_events::Column::Id"
    )]
    PlantEvent,
    #[sea_orm(
        belongs_to = "super::iot_devs::Entity",
        from = "Column::IotDevId",
        to = "super::iot_devs::Column::Id"
    )]
    IotDev,
    #[sea_orm(has_many = "super::logs::Entity")]
    Logs,
}

impl Related<super::plant_states::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlantState.def()
    }
}

impl Related<super::plant_events::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlantEvent.def()
    }
}

impl Related<super::iot_devs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::IotDev.def()
    }
}

impl Related<super::logs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Logs.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
