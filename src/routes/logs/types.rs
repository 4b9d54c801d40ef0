use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PlantLogRequest {
    #[schema(value_type = Option<i32>, example = 1)]
    pub plant_id: Option<Value>,
}

/// Device-triggered log. The pump fields come from `iot_dev_id`, everything
/// else from `plant_id`.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct DeviceLogRequest {
    #[schema(value_type = Option<i32>, example = 1)]
    pub iot_dev_id: Option<Value>,
    #[schema(value_type = Option<i32>, example = 1)]
    pub plant_id: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LogCreatedResponse {
    pub message: String,
    pub log_id: i32,
    pub plant_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iot_dev_id: Option<i32>,
    /// Temperature carried forward from the previous log row
    pub temperature: f64,
}
