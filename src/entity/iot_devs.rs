use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "IotDev")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub online_status: bool,
    pub dev_state_id: i32,
    pub dev_event_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::iot_dev_states::Entity",
        from = "Column::DevStateId",
        to = "super::iot_dev_states::Column::Id"
    )]
    DevState,
    #[sea_orm(
        belongs_to = "super::iot_dev_events::Entity",
        from = "Column::DevEventId",
        to = "super::iot_dev_events::Column::Id"
    )]
    DevEvent,
    #[sea_orm(has_many = "super::plants::Entity")]
    Plants,
}

impl Related<super::iot_dev_states::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DevState.def()
    }
}

impl Related<super::iot_dev_events::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DevEvent.def()
    }
}

impl Related<super::plants::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Plants.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
