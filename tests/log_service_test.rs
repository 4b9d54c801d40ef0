//! Tests for log insertion, at the service level and through `/logs`.
//!
//! Run with: cargo test --test log_service_test

mod common;

use axum::http::StatusCode;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use serde_json::json;

use common::{seed_plant, seed_unowned_rows, send_json, test_app, test_db};
use ::plant_events::entity::{logs, plant_events, plant_states};
use ::plant_events::error::AppError;
use ::plant_events::services::logs::{insert_log_for_device, insert_log_for_plant};

#[tokio::test]
async fn first_log_copies_current_rows_with_zero_temperature() {
    let db = test_db().await;
    let seeded = seed_plant(&db).await;

    let log = insert_log_for_plant(&db, seeded.plant_id).await.unwrap();

    assert_eq!(logs::Entity::find().count(&db).await.unwrap(), 1);
    assert_eq!(log.plant_id, seeded.plant_id);
    assert_eq!(log.temperature, 0.0);

    // PlantState
    assert_eq!(log.luminosity_state, 30.5);
    assert_eq!(log.humidity_state, 45.0);
    assert!(!log.valve_state);
    assert_eq!(log.led_intensity_state, 10);
    assert_eq!(log.mode_state, 1);

    // PlantEvent
    assert_eq!(log.luminosity_event, 20.0);
    assert_eq!(log.humidity_event, 35.0);
    assert!(log.valve_event);
    assert_eq!(log.led_intensity_event, 50);
    assert_eq!(log.mode_event, 2);

    // IotDevState / IotDevEvent
    assert!(log.pump_state);
    assert!(!log.pump_event);

    assert_eq!(log.entry_store_time, Some(log.entry_creation_time));

    let stored = logs::Entity::find_by_id(log.id).one(&db).await.unwrap().unwrap();
    assert_eq!(stored, log);
}

#[tokio::test]
async fn temperature_is_carried_forward_from_latest_log() {
    let db = test_db().await;
    let seeded = seed_plant(&db).await;

    let first = insert_log_for_plant(&db, seeded.plant_id).await.unwrap();

    // Temperature arrives from outside this service
    let mut reported: logs::ActiveModel = first.into();
    reported.temperature = Set(23.75);
    reported.update(&db).await.unwrap();

    let second = insert_log_for_plant(&db, seeded.plant_id).await.unwrap();
    assert_eq!(second.temperature, 23.75);

    // Other plants do not inherit it
    let other = seed_plant(&db).await;
    let unrelated = insert_log_for_plant(&db, other.plant_id).await.unwrap();
    assert_eq!(unrelated.temperature, 0.0);
}

#[tokio::test]
async fn log_reflects_latest_event_update() {
    let db = test_db().await;
    let seeded = seed_plant(&db).await;

    let (status, _) = send_json(
        test_app(&db),
        "PUT",
        "/events/plant/led",
        &json!({ "plant_id": seeded.plant_id, "led_intensity_event": 75 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let log = insert_log_for_plant(&db, seeded.plant_id).await.unwrap();
    assert_eq!(log.led_intensity_event, 75);
}

#[tokio::test]
async fn device_log_takes_pump_fields_from_the_given_device() {
    let db = test_db().await;
    let plant = seed_plant(&db).await;
    let other = seed_plant(&db).await;

    // Make the second device distinguishable
    let (status, _) = send_json(
        test_app(&db),
        "PUT",
        "/events/device/pump",
        &json!({ "iot_dev_id": other.iot_dev_id, "pump_event": true }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let log = insert_log_for_device(&db, other.iot_dev_id, plant.plant_id)
        .await
        .unwrap();

    assert_eq!(log.plant_id, plant.plant_id);
    assert!(log.pump_event);
    assert_eq!(log.luminosity_state, 30.5);
}

#[tokio::test]
async fn missing_related_row_fails_without_writing() {
    let db = test_db().await;
    let seeded = seed_plant(&db).await;

    // Simulate a broken reference by removing the state row behind the plant
    db.execute_unprepared("PRAGMA foreign_keys = OFF").await.unwrap();
    plant_states::Entity::delete_by_id(seeded.plant_state_id)
        .exec(&db)
        .await
        .unwrap();

    let err = insert_log_for_plant(&db, seeded.plant_id).await.unwrap_err();
    match err {
        AppError::MissingRecord { entity, id } => {
            assert_eq!(entity, "PlantState");
            assert_eq!(id, seeded.plant_state_id);
        }
        other => panic!("unexpected error: {other:?}"),
    }

    assert_eq!(logs::Entity::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn any_missing_source_row_fails_without_writing() {
    for entity in ["PlantState", "PlantEvent", "IotDevState", "IotDevEvent"] {
        let db = test_db().await;
        let seeded = seed_plant(&db).await;
        let id = match entity {
            "PlantState" => seeded.plant_state_id,
            "PlantEvent" => seeded.plant_event_id,
            // Device rows are keyed by the device id
            _ => seeded.iot_dev_id,
        };

        db.execute_unprepared("PRAGMA foreign_keys = OFF").await.unwrap();
        db.execute_unprepared(&format!(r#"DELETE FROM "{entity}" WHERE id = {id}"#))
            .await
            .unwrap();

        for result in [
            insert_log_for_plant(&db, seeded.plant_id).await,
            insert_log_for_device(&db, seeded.iot_dev_id, seeded.plant_id).await,
        ] {
            match result.unwrap_err() {
                AppError::MissingRecord {
                    entity: missing,
                    id: missing_id,
                } => {
                    assert_eq!(missing, entity);
                    assert_eq!(missing_id, id, "{entity}");
                }
                other => panic!("{entity}: unexpected error: {other:?}"),
            }
        }

        assert_eq!(logs::Entity::find().count(&db).await.unwrap(), 0, "{entity}");
    }

    // Unknown device on the device path
    let db = test_db().await;
    let seeded = seed_plant(&db).await;
    let err = insert_log_for_device(&db, 42, seeded.plant_id)
        .await
        .unwrap_err();
    assert!(
        matches!(
            err,
            AppError::MissingRecord {
                entity: "IotDevState",
                id: 42
            }
        ),
        "unexpected error: {err:?}"
    );
    assert_eq!(logs::Entity::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn device_rows_are_read_by_device_id() {
    let db = test_db().await;
    let unowned = seed_unowned_rows(&db).await;
    let seeded = seed_plant(&db).await;

    // IotDev#1 owns IotDevState#2 (pump on); IotDevState#1 has no device
    assert_eq!(seeded.iot_dev_id, unowned.dev_state_id);
    assert_ne!(seeded.dev_state_id, unowned.dev_state_id);

    let log = insert_log_for_device(&db, seeded.iot_dev_id, seeded.plant_id)
        .await
        .unwrap();
    assert!(!log.pump_state);

    let log = insert_log_for_plant(&db, seeded.plant_id).await.unwrap();
    assert!(!log.pump_state);

    // Plant-side rows still follow the plant's own references
    assert_eq!(log.luminosity_event, 20.0);
    assert_eq!(log.luminosity_state, 30.5);
}

#[tokio::test]
async fn unknown_plant_is_a_missing_record() {
    let db = test_db().await;

    let err = insert_log_for_plant(&db, 7).await.unwrap_err();
    assert!(matches!(
        err,
        AppError::MissingRecord {
            entity: "Plant",
            id: 7
        }
    ));
}

#[tokio::test]
async fn log_insertion_never_touches_event_rows() {
    let db = test_db().await;
    let seeded = seed_plant(&db).await;
    let before = plant_events::Entity::find().all(&db).await.unwrap();

    insert_log_for_plant(&db, seeded.plant_id).await.unwrap();
    insert_log_for_device(&db, seeded.iot_dev_id, seeded.plant_id)
        .await
        .unwrap();

    let after = plant_events::Entity::find().all(&db).await.unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn plant_log_endpoint_creates_row() {
    let db = test_db().await;
    let seeded = seed_plant(&db).await;

    let (status, body) = send_json(
        test_app(&db),
        "POST",
        "/logs/plant",
        &json!({ "plant_id": seeded.plant_id }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Log entry created");
    assert_eq!(body["plant_id"], seeded.plant_id);
    assert_eq!(body["temperature"], 0.0);
    assert!(body.get("iot_dev_id").is_none());

    let rows = logs::Entity::find()
        .filter(logs::Column::PlantId.eq(seeded.plant_id))
        .order_by_desc(logs::Column::Id)
        .all(&db)
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(body["log_id"], rows[0].id);
}

#[tokio::test]
async fn device_log_endpoint_validates_and_resolves() {
    let db = test_db().await;
    let seeded = seed_plant(&db).await;

    let (status, body) = send_json(
        test_app(&db),
        "POST",
        "/logs/device",
        &json!({ "iot_dev_id": seeded.iot_dev_id, "plant_id": seeded.plant_id }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["iot_dev_id"], seeded.iot_dev_id);

    let (status, body) = send_json(
        test_app(&db),
        "POST",
        "/logs/device",
        &json!({ "iot_dev_id": 99, "plant_id": seeded.plant_id }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "IotDevState with ID 99 does not exist.");

    let (status, body) = send_json(
        test_app(&db),
        "POST",
        "/logs/device",
        &json!({ "iot_dev_id": seeded.iot_dev_id, "plant_id": 77 }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Plant with ID 77 does not exist.");

    let (status, body) = send_json(
        test_app(&db),
        "POST",
        "/logs/device",
        &json!({ "iot_dev_id": seeded.iot_dev_id }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "plant_id cannot be null");

    assert_eq!(logs::Entity::find().count(&db).await.unwrap(), 1);
}

#[tokio::test]
async fn plant_log_endpoint_rejects_unknown_plant() {
    let db = test_db().await;

    let (status, body) = send_json(
        test_app(&db),
        "POST",
        "/logs/plant",
        &json!({ "plant_id": 12 }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Plant with ID 12 does not exist.");
}

#[tokio::test]
async fn plant_log_endpoint_reports_broken_reference_as_server_error() {
    let db = test_db().await;
    let seeded = seed_plant(&db).await;

    db.execute_unprepared("PRAGMA foreign_keys = OFF").await.unwrap();
    plant_events::Entity::delete_by_id(seeded.plant_event_id)
        .exec(&db)
        .await
        .unwrap();

    let (status, body) = send_json(
        test_app(&db),
        "POST",
        "/logs/plant",
        &json!({ "plant_id": seeded.plant_id }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body["error"],
        format!("Required PlantEvent record {} is missing", seeded.plant_event_id)
    );
    assert_eq!(logs::Entity::find().count(&db).await.unwrap(), 0);
}
