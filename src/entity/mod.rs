pub mod iot_dev_events;
pub mod iot_dev_states;
pub mod iot_devs;
pub mod logs;
pub mod plant_events;
pub mod plant_states;
pub mod plants;
