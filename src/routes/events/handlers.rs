use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::common::AppState;
use crate::error::AppResult;
use crate::routes::json_body;
use crate::services::events::{self, PlantEventField};
use crate::services::validation::{
    require_boolean, require_float, require_integer, require_positive_integer, require_present,
    require_range,
};

use super::types::{
    HumidityEventResponse, LedEventResponse, LuminosityEventResponse, PlantEventRequest,
    PumpEventRequest, PumpEventResponse, ValveEventResponse,
};

/// Set the desired luminosity of a plant
#[utoipa::path(
    put,
    path = "/events/plant/luminosity",
    request_body = PlantEventRequest,
    responses(
        (status = 200, description = "Luminosity event updated", body = LuminosityEventResponse),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Plant event not found"),
    ),
    tag = "events"
)]
pub async fn update_luminosity_event(
    State(state): State<AppState>,
    payload: Result<Json<PlantEventRequest>, JsonRejection>,
) -> AppResult<Json<LuminosityEventResponse>> {
    let body = json_body(payload)?;

    let value = require_present(body.luminosity_event.as_ref(), "luminosity_event")?;
    let plant_id = require_present(body.plant_id.as_ref(), "plant_id")?;
    let plant_id = require_positive_integer(plant_id, "plant_id")?;
    require_float(value, "luminosity_event")?;
    let luminosity_event = require_range(value, 0.0, 100.0, "luminosity_event")?;

    // plant_id is the PlantEvent key
    events::update_plant_event_field(
        &state.db,
        PlantEventField::Luminosity(luminosity_event),
        plant_id,
    )
    .await?;

    Ok(Json(LuminosityEventResponse {
        message: "Luminosity event updated".to_string(),
        plant_id,
        luminosity_event,
    }))
}

/// Set the desired humidity of a plant
#[utoipa::path(
    put,
    path = "/events/plant/humidity",
    request_body = PlantEventRequest,
    responses(
        (status = 200, description = "Humidity event updated", body = HumidityEventResponse),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Plant event not found"),
    ),
    tag = "events"
)]
pub async fn update_humidity_event(
    State(state): State<AppState>,
    payload: Result<Json<PlantEventRequest>, JsonRejection>,
) -> AppResult<Json<HumidityEventResponse>> {
    let body = json_body(payload)?;

    let value = require_present(body.humidity_event.as_ref(), "humidity_event")?;
    let plant_id = require_present(body.plant_id.as_ref(), "plant_id")?;
    let plant_id = require_positive_integer(plant_id, "plant_id")?;
    require_float(value, "humidity_event")?;
    let humidity_event = require_range(value, 0.0, 100.0, "humidity_event")?;

    events::update_plant_event_field(
        &state.db,
        PlantEventField::Humidity(humidity_event),
        plant_id,
    )
    .await?;

    Ok(Json(HumidityEventResponse {
        message: "Humidity event updated".to_string(),
        plant_id,
        humidity_event,
    }))
}

/// Open or close a plant's valve
#[utoipa::path(
    put,
    path = "/events/plant/valve",
    request_body = PlantEventRequest,
    responses(
        (status = 200, description = "Valve event updated", body = ValveEventResponse),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Plant event not found"),
    ),
    tag = "events"
)]
pub async fn update_valve_event(
    State(state): State<AppState>,
    payload: Result<Json<PlantEventRequest>, JsonRejection>,
) -> AppResult<Json<ValveEventResponse>> {
    let body = json_body(payload)?;

    let value = require_present(body.valve_event.as_ref(), "valve_event")?;
    let plant_id = require_present(body.plant_id.as_ref(), "plant_id")?;
    let plant_id = require_positive_integer(plant_id, "plant_id")?;
    let valve_event = require_boolean(value, "valve_event")?;

    events::update_plant_event_field(
        &state.db,
        PlantEventField::Valve(valve_event),
        plant_id,
    )
    .await?;

    Ok(Json(ValveEventResponse {
        message: "Valve event updated".to_string(),
        plant_id,
        valve_event,
    }))
}

/// Set the desired LED intensity of a plant
#[utoipa::path(
    put,
    path = "/events/plant/led",
    request_body = PlantEventRequest,
    responses(
        (status = 200, description = "LED intensity event updated", body = LedEventResponse),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Plant event not found"),
    ),
    tag = "events"
)]
pub async fn update_led_event(
    State(state): State<AppState>,
    payload: Result<Json<PlantEventRequest>, JsonRejection>,
) -> AppResult<Json<LedEventResponse>> {
    let body = json_body(payload)?;

    let value = require_present(body.led_intensity_event.as_ref(), "led_intensity_event")?;
    let plant_id = require_present(body.plant_id.as_ref(), "plant_id")?;
    let plant_id = require_positive_integer(plant_id, "plant_id")?;
    let led_intensity_event = require_integer(value, "led_intensity_event")?;
    require_range(value, 0.0, 100.0, "led_intensity_event")?;

    events::update_plant_event_field(
        &state.db,
        PlantEventField::LedIntensity(led_intensity_event),
        plant_id,
    )
    .await?;

    Ok(Json(LedEventResponse {
        message: "LED intensity event updated".to_string(),
        plant_id,
        led_intensity_event,
    }))
}

/// Switch an IoT device's pump on or off
#[utoipa::path(
    put,
    path = "/events/device/pump",
    request_body = PumpEventRequest,
    responses(
        (status = 200, description = "Pump event updated", body = PumpEventResponse),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Device event not found"),
    ),
    tag = "events"
)]
pub async fn update_pump_event(
    State(state): State<AppState>,
    payload: Result<Json<PumpEventRequest>, JsonRejection>,
) -> AppResult<Json<PumpEventResponse>> {
    let body = json_body(payload)?;

    let value = require_present(body.pump_event.as_ref(), "pump_event")?;
    let iot_dev_id = require_present(body.iot_dev_id.as_ref(), "iot_dev_id")?;
    let iot_dev_id = require_positive_integer(iot_dev_id, "iot_dev_id")?;
    let pump_event = require_boolean(value, "pump_event")?;

    // iot_dev_id is the IotDevEvent key
    events::update_device_pump_event(&state.db, pump_event, iot_dev_id).await?;

    Ok(Json(PumpEventResponse {
        message: "Pump event updated".to_string(),
        iot_dev_id,
        pump_event,
    }))
}
