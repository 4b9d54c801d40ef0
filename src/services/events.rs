use chrono::Utc;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    QueryFilter, TransactionTrait,
};

use crate::entity::{iot_dev_events, plant_events};
use crate::error::{AppError, AppResult};
use crate::services::existence;

/// A single updatable PlantEvent column together with its new value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlantEventField {
    Luminosity(f64),
    Humidity(f64),
    Valve(bool),
    LedIntensity(i32),
}

impl PlantEventField {
    /// Column name as exposed in request and response bodies.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Luminosity(_) => "luminosity_event",
            Self::Humidity(_) => "humidity_event",
            Self::Valve(_) => "valve_event",
            Self::LedIntensity(_) => "led_intensity_event",
        }
    }

    fn apply(self, model: &mut plant_events::ActiveModel) {
        match self {
            Self::Luminosity(v) => model.luminosity_event = Set(v),
            Self::Humidity(v) => model.humidity_event = Set(v),
            Self::Valve(v) => model.valve_event = Set(v),
            Self::LedIntensity(v) => model.led_intensity_event = Set(v),
        }
    }
}

/// Set one field of a PlantEvent row and stamp `last_updated`.
///
/// Runs as its own transaction: existence check, update, commit. A row that
/// disappears between the check and the write is reported as NotFound.
pub async fn update_plant_event_field(
    db: &DatabaseConnection,
    field: PlantEventField,
    plant_event_id: i32,
) -> AppResult<()> {
    let txn = db.begin().await?;

    match write_plant_event(&txn, field, plant_event_id).await {
        Ok(()) => {
            txn.commit().await?;
            tracing::info!(
                plant_event_id,
                field = field.name(),
                value = ?field,
                "Plant event updated"
            );
            Ok(())
        }
        Err(e) => {
            tracing::warn!(plant_event_id, field = field.name(), error = %e, "Plant event update rolled back");
            if let Err(rollback) = txn.rollback().await {
                tracing::error!(plant_event_id, error = %rollback, "Rollback failed");
            }
            Err(e)
        }
    }
}

async fn write_plant_event(
    txn: &DatabaseTransaction,
    field: PlantEventField,
    plant_event_id: i32,
) -> AppResult<()> {
    existence::ensure_plant_event_exists(txn, plant_event_id).await?;

    let mut changes = plant_events::ActiveModel {
        last_updated: Set(Some(Utc::now().into())),
        ..Default::default()
    };
    field.apply(&mut changes);

    let result = plant_events::Entity::update_many()
        .set(changes)
        .filter(plant_events::Column::Id.eq(plant_event_id))
        .exec(txn)
        .await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound(format!(
            "PlantEvent with ID {plant_event_id} does not exist."
        )));
    }
    Ok(())
}

/// Set `pump_event` on an IotDevEvent row and stamp `last_updated`.
pub async fn update_device_pump_event(
    db: &DatabaseConnection,
    pump_event: bool,
    device_event_id: i32,
) -> AppResult<()> {
    let txn = db.begin().await?;

    match write_pump_event(&txn, pump_event, device_event_id).await {
        Ok(()) => {
            txn.commit().await?;
            tracing::info!(device_event_id, pump_event, "Pump event updated");
            Ok(())
        }
        Err(e) => {
            tracing::warn!(device_event_id, error = %e, "Pump event update rolled back");
            if let Err(rollback) = txn.rollback().await {
                tracing::error!(device_event_id, error = %rollback, "Rollback failed");
            }
            Err(e)
        }
    }
}

async fn write_pump_event(
    txn: &DatabaseTransaction,
    pump_event: bool,
    device_event_id: i32,
) -> AppResult<()> {
    existence::ensure_device_event_exists(txn, device_event_id).await?;

    let changes = iot_dev_events::ActiveModel {
        pump_event: Set(pump_event),
        last_updated: Set(Some(Utc::now().into())),
        ..Default::default()
    };

    let result = iot_dev_events::Entity::update_many()
        .set(changes)
        .filter(iot_dev_events::Column::Id.eq(device_event_id))
        .exec(txn)
        .await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound(format!(
            "IotDevEvent with ID {device_event_id} does not exist."
        )));
    }
    Ok(())
}
