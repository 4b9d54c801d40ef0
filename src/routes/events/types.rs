use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Body shared by the plant event endpoints. Only `plant_id` and the field
/// targeted by the endpoint are read.
///
/// Fields stay raw JSON so the handlers can apply strict type checks.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PlantEventRequest {
    #[schema(value_type = Option<i32>, example = 1)]
    pub plant_id: Option<Value>,
    /// Desired luminosity, float in [0, 100]
    #[schema(value_type = Option<f64>, example = 55.0)]
    pub luminosity_event: Option<Value>,
    /// Desired humidity, float in [0, 100]
    #[schema(value_type = Option<f64>, example = 40.0)]
    pub humidity_event: Option<Value>,
    #[schema(value_type = Option<bool>)]
    pub valve_event: Option<Value>,
    /// Desired LED intensity, integer in [0, 100]
    #[schema(value_type = Option<i32>, example = 80)]
    pub led_intensity_event: Option<Value>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PumpEventRequest {
    #[schema(value_type = Option<i32>, example = 1)]
    pub iot_dev_id: Option<Value>,
    #[schema(value_type = Option<bool>)]
    pub pump_event: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LuminosityEventResponse {
    pub message: String,
    pub plant_id: i32,
    pub luminosity_event: f64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HumidityEventResponse {
    pub message: String,
    pub plant_id: i32,
    pub humidity_event: f64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValveEventResponse {
    pub message: String,
    pub plant_id: i32,
    pub valve_event: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LedEventResponse {
    pub message: String,
    pub plant_id: i32,
    pub led_intensity_event: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PumpEventResponse {
    pub message: String,
    pub iot_dev_id: i32,
    pub pump_event: bool,
}
