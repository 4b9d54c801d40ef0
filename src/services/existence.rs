use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter};

use crate::entity::{iot_dev_events, plant_events};
use crate::error::{AppError, AppResult};

/// Fail with NotFound unless a PlantEvent row with this id exists.
pub async fn ensure_plant_event_exists<C: ConnectionTrait>(conn: &C, id: i32) -> AppResult<()> {
    let count = plant_events::Entity::find()
        .filter(plant_events::Column::Id.eq(id))
        .count(conn)
        .await?;

    if count == 0 {
        return Err(AppError::NotFound(format!(
            "PlantEvent with ID {id} does not exist."
        )));
    }
    Ok(())
}

/// Fail with NotFound unless an IotDevEvent row with this id exists.
pub async fn ensure_device_event_exists<C: ConnectionTrait>(conn: &C, id: i32) -> AppResult<()> {
    let count = iot_dev_events::Entity::find()
        .filter(iot_dev_events::Column::Id.eq(id))
        .count(conn)
        .await?;

    if count == 0 {
        return Err(AppError::NotFound(format!(
            "IotDevEvent with ID {id} does not exist."
        )));
    }
    Ok(())
}
