use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

use crate::common::AppState;
use crate::error::{AppError, AppResult};
use crate::routes::json_body;
use crate::services::logs;
use crate::services::validation::{require_positive_integer, require_present};

use super::types::{DeviceLogRequest, LogCreatedResponse, PlantLogRequest};

/// Report a missing row the request addressed by id as 404. Rows reached
/// through a reference stay a 500.
fn addressed_not_found(err: AppError, addressed: &[&str]) -> AppError {
    match err {
        AppError::MissingRecord { entity, id } if addressed.contains(&entity) => {
            AppError::NotFound(format!("{entity} with ID {id} does not exist."))
        }
        other => other,
    }
}

/// Append a log row for a plant
///
/// Snapshots the plant's state and event rows together with the pump
/// state/event of the device the plant is attached to.
#[utoipa::path(
    post,
    path = "/logs/plant",
    request_body = PlantLogRequest,
    responses(
        (status = 201, description = "Log entry created", body = LogCreatedResponse),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Plant not found"),
        (status = 500, description = "A related state or event record is missing"),
    ),
    tag = "logs"
)]
pub async fn insert_plant_log(
    State(state): State<AppState>,
    payload: Result<Json<PlantLogRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<LogCreatedResponse>)> {
    let body = json_body(payload)?;

    let plant_id = require_present(body.plant_id.as_ref(), "plant_id")?;
    let plant_id = require_positive_integer(plant_id, "plant_id")?;

    let log = logs::insert_log_for_plant(&state.db, plant_id)
        .await
        .map_err(|e| addressed_not_found(e, &["Plant"]))?;

    Ok((
        StatusCode::CREATED,
        Json(LogCreatedResponse {
            message: "Log entry created".to_string(),
            log_id: log.id,
            plant_id,
            iot_dev_id: None,
            temperature: log.temperature,
        }),
    ))
}

/// Append a log row triggered by an IoT device
#[utoipa::path(
    post,
    path = "/logs/device",
    request_body = DeviceLogRequest,
    responses(
        (status = 201, description = "Log entry created", body = LogCreatedResponse),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Plant or device state/event not found"),
        (status = 500, description = "A related state or event record is missing"),
    ),
    tag = "logs"
)]
pub async fn insert_device_log(
    State(state): State<AppState>,
    payload: Result<Json<DeviceLogRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<LogCreatedResponse>)> {
    let body = json_body(payload)?;

    let iot_dev_id = require_present(body.iot_dev_id.as_ref(), "iot_dev_id")?;
    let plant_id = require_present(body.plant_id.as_ref(), "plant_id")?;
    let iot_dev_id = require_positive_integer(iot_dev_id, "iot_dev_id")?;
    let plant_id = require_positive_integer(plant_id, "plant_id")?;

    let log = logs::insert_log_for_device(&state.db, iot_dev_id, plant_id)
        .await
        .map_err(|e| addressed_not_found(e, &["Plant", "IotDevState", "IotDevEvent"]))?;

    Ok((
        StatusCode::CREATED,
        Json(LogCreatedResponse {
            message: "Log entry created".to_string(),
            log_id: log.id,
            plant_id,
            iot_dev_id: Some(iot_dev_id),
            temperature: log.temperature,
        }),
    ))
}
