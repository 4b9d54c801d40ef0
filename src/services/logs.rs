//! Append-only audit rows.
//!
//! A log row snapshots a plant's current state, its desired values and the
//! pump state/event of an IoT device. Temperature is never reported through
//! this service, so it is carried forward from the plant's latest log row
//! (0.0 when the plant has none).
//!
//! Device rows are addressed by device id: IotDevState and IotDevEvent are
//! read with the device id as their own primary key, never through IotDev.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DatabaseTransaction,
    EntityTrait, ModelTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::entity::{iot_dev_events, iot_dev_states, logs, plant_events, plant_states, plants};
use crate::error::{AppError, AppResult};

/// Append a log row for `plant_id`, using the plant's `iot_dev_id` as the device id.
pub async fn insert_log_for_plant(db: &DatabaseConnection, plant_id: i32) -> AppResult<logs::Model> {
    let txn = db.begin().await?;

    let result = async {
        let plant = load_plant(&txn, plant_id).await?;
        append_log(&txn, &plant, plant.iot_dev_id).await
    }
    .await;

    finish(txn, result, plant_id).await
}

/// Append a log row for `plant_id`, taking the pump fields from `device_id`.
///
/// The device is not required to be the one the plant is attached to; a
/// mismatch is only logged.
pub async fn insert_log_for_device(
    db: &DatabaseConnection,
    device_id: i32,
    plant_id: i32,
) -> AppResult<logs::Model> {
    let txn = db.begin().await?;

    let result = async {
        let plant = load_plant(&txn, plant_id).await?;
        if plant.iot_dev_id != device_id {
            tracing::warn!(
                plant_id,
                device_id,
                plant_device_id = plant.iot_dev_id,
                "Logging plant against a device it is not attached to"
            );
        }
        append_log(&txn, &plant, device_id).await
    }
    .await;

    finish(txn, result, plant_id).await
}

async fn finish(
    txn: DatabaseTransaction,
    result: AppResult<logs::Model>,
    plant_id: i32,
) -> AppResult<logs::Model> {
    match result {
        Ok(log) => {
            txn.commit().await?;
            tracing::info!(plant_id, log_id = log.id, "New log entry created");
            Ok(log)
        }
        Err(e) => {
            tracing::error!(plant_id, error = %e, "Failed to insert new log entry");
            if let Err(rollback) = txn.rollback().await {
                tracing::error!(plant_id, error = %rollback, "Rollback failed");
            }
            Err(e)
        }
    }
}

async fn load_plant(txn: &DatabaseTransaction, plant_id: i32) -> AppResult<plants::Model> {
    plants::Entity::find_by_id(plant_id)
        .one(txn)
        .await?
        .ok_or(AppError::MissingRecord {
            entity: "Plant",
            id: plant_id,
        })
}

/// Most recent temperature logged for the plant, by insertion order.
async fn last_temperature(txn: &DatabaseTransaction, plant_id: i32) -> AppResult<Option<f64>> {
    let temperature = logs::Entity::find()
        .select_only()
        .column(logs::Column::Temperature)
        .filter(logs::Column::PlantId.eq(plant_id))
        .order_by_desc(logs::Column::Id)
        .limit(1)
        .into_tuple::<f64>()
        .one(txn)
        .await?;

    Ok(temperature)
}

async fn append_log(
    txn: &DatabaseTransaction,
    plant: &plants::Model,
    device_id: i32,
) -> AppResult<logs::Model> {
    let temperature = last_temperature(txn, plant.id).await?;
    tracing::debug!(plant_id = plant.id, ?temperature, "Last temperature");

    let state = plant
        .find_related(plant_states::Entity)
        .one(txn)
        .await?
        .ok_or(AppError::MissingRecord {
            entity: "PlantState",
            id: plant.plant_state_id,
        })?;

    let event = plant
        .find_related(plant_events::Entity)
        .one(txn)
        .await?
        .ok_or(AppError::MissingRecord {
            entity: "PlantEvent",
            id: plant.plant_event_id,
        })?;

    let dev_state = iot_dev_states::Entity::find_by_id(device_id)
        .one(txn)
        .await?
        .ok_or(AppError::MissingRecord {
            entity: "IotDevState",
            id: device_id,
        })?;

    let dev_event = iot_dev_events::Entity::find_by_id(device_id)
        .one(txn)
        .await?
        .ok_or(AppError::MissingRecord {
            entity: "IotDevEvent",
            id: device_id,
        })?;

    let now = Utc::now();
    let log = logs::ActiveModel {
        entry_creation_time: Set(now.into()),
        entry_store_time: Set(Some(now.into())),
        temperature: Set(temperature.unwrap_or(0.0)),
        luminosity_state: Set(state.luminosity_state),
        humidity_state: Set(state.humidity_state),
        valve_state: Set(state.valve_state),
        led_intensity_state: Set(state.led_intensity_state),
        mode_state: Set(state.mode),
        luminosity_event: Set(event.luminosity_event),
        humidity_event: Set(event.humidity_event),
        valve_event: Set(event.valve_event),
        led_intensity_event: Set(event.led_intensity_event),
        mode_event: Set(event.mode),
        pump_state: Set(dev_state.pump_state),
        pump_event: Set(dev_event.pump_event),
        plant_id: Set(plant.id),
        ..Default::default()
    };

    Ok(log.insert(txn).await?)
}
