use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "IotDevEvent")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub last_updated: Option<DateTimeWithTimeZone>,
    pub pump_event: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::iot_devs::Entity")]
    IotDevs,
}

impl Related<super::iot_devs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::IotDevs.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
