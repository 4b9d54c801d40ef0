mod handlers;
mod types;

pub use handlers::{
    update_humidity_event, update_led_event, update_luminosity_event, update_pump_event,
    update_valve_event,
};
pub use types::{
    HumidityEventResponse, LedEventResponse, LuminosityEventResponse, PlantEventRequest,
    PumpEventRequest, PumpEventResponse, ValveEventResponse,
};

// Re-export utoipa path structs for OpenAPI documentation
pub use handlers::{
    __path_update_humidity_event, __path_update_led_event, __path_update_luminosity_event,
    __path_update_pump_event, __path_update_valve_event,
};
