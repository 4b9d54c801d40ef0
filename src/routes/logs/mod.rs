mod handlers;
mod types;

pub use handlers::{insert_device_log, insert_plant_log};
pub use types::{DeviceLogRequest, LogCreatedResponse, PlantLogRequest};

// Re-export utoipa path structs for OpenAPI documentation
pub use handlers::{__path_insert_device_log, __path_insert_plant_log};
