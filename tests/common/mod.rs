//! Shared fixtures: an in-memory SQLite database migrated with the real
//! schema, seeded plants/devices, and a oneshot request helper.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, ConnectOptions, Database, DatabaseConnection};
use serde_json::Value;
use tower::ServiceExt; // For oneshot()

use ::plant_events::common::AppState;
use ::plant_events::config::{Config, LogFormat};
use ::plant_events::entity::{iot_dev_events, iot_dev_states, iot_devs, plant_events, plant_states, plants};
use ::plant_events::routes;

/// Ids of one fully provisioned plant and the device it is attached to.
#[derive(Debug, Clone, Copy)]
pub struct SeededPlant {
    pub plant_id: i32,
    pub plant_state_id: i32,
    pub plant_event_id: i32,
    pub iot_dev_id: i32,
    pub dev_state_id: i32,
    pub dev_event_id: i32,
}

pub async fn test_db() -> DatabaseConnection {
    // A single connection keeps every query on the same in-memory database.
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        db_max_connections: 1,
        run_migrations: true,
        api_host: "127.0.0.1".to_string(),
        api_port: 0,
        log_format: LogFormat::Text,
    }
}

pub fn test_app(db: &DatabaseConnection) -> Router {
    routes::build_router(AppState::new(db.clone(), test_config()))
}

/// Timestamp used for every seeded `last_updated` column.
pub fn seeded_at() -> chrono::DateTime<chrono::FixedOffset> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap().into()
}

pub async fn seed_plant(db: &DatabaseConnection) -> SeededPlant {
    let state = plant_states::ActiveModel {
        last_updated: Set(Some(seeded_at())),
        luminosity_state: Set(30.5),
        humidity_state: Set(45.0),
        valve_state: Set(false),
        led_intensity_state: Set(10),
        mode: Set(1),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    let event = plant_events::ActiveModel {
        last_updated: Set(Some(seeded_at())),
        luminosity_event: Set(20.0),
        humidity_event: Set(35.0),
        valve_event: Set(true),
        led_intensity_event: Set(50),
        mode: Set(2),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    let dev_state = iot_dev_states::ActiveModel {
        last_updated: Set(Some(seeded_at())),
        pump_state: Set(true),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    let dev_event = iot_dev_events::ActiveModel {
        last_updated: Set(Some(seeded_at())),
        pump_event: Set(false),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    let device = iot_devs::ActiveModel {
        online_status: Set(true),
        dev_state_id: Set(dev_state.id),
        dev_event_id: Set(dev_event.id),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    let plant = plants::ActiveModel {
        error: Set(false),
        plant_state_id: Set(state.id),
        plant_event_id: Set(event.id),
        iot_dev_id: Set(device.id),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    SeededPlant {
        plant_id: plant.id,
        plant_state_id: state.id,
        plant_event_id: event.id,
        iot_dev_id: device.id,
        dev_state_id: dev_state.id,
        dev_event_id: dev_event.id,
    }
}

/// Ids of event/state rows that no Plant or IotDev references.
#[derive(Debug, Clone, Copy)]
pub struct UnownedRows {
    pub plant_event_id: i32,
    pub dev_state_id: i32,
    pub dev_event_id: i32,
}

/// Insert one PlantEvent, IotDevState and IotDevEvent row with no owner.
///
/// Called on a fresh database before `seed_plant`, this takes id 1 in each
/// table, so the seeded plant/device (id 1) own rows with id 2.
pub async fn seed_unowned_rows(db: &DatabaseConnection) -> UnownedRows {
    let event = plant_events::ActiveModel {
        last_updated: Set(Some(seeded_at())),
        luminosity_event: Set(5.0),
        humidity_event: Set(5.0),
        valve_event: Set(false),
        led_intensity_event: Set(0),
        mode: Set(0),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    let dev_state = iot_dev_states::ActiveModel {
        last_updated: Set(Some(seeded_at())),
        pump_state: Set(false),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    let dev_event = iot_dev_events::ActiveModel {
        last_updated: Set(Some(seeded_at())),
        pump_event: Set(false),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    UnownedRows {
        plant_event_id: event.id,
        dev_state_id: dev_state.id,
        dev_event_id: dev_event.id,
    }
}

/// Send a JSON request and return the status with the decoded body.
pub async fn send_json(app: Router, method: &str, uri: &str, body: &Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}
