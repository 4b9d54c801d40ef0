pub mod events;
pub mod health;
pub mod logs;

use axum::{
    extract::rejection::JsonRejection,
    routing::{get, post, put},
    Json, Router,
};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::common::AppState;
use crate::error::{AppError, AppResult};

/// Unwrap a JSON body, turning axum's rejection into a 400.
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::root,
        health::healthz,
        events::update_luminosity_event,
        events::update_humidity_event,
        events::update_valve_event,
        events::update_led_event,
        events::update_pump_event,
        logs::insert_plant_log,
        logs::insert_device_log,
    ),
    components(
        schemas(
            health::RootResponse,
            events::PlantEventRequest,
            events::PumpEventRequest,
            events::LuminosityEventResponse,
            events::HumidityEventResponse,
            events::ValveEventResponse,
            events::LedEventResponse,
            events::PumpEventResponse,
            logs::PlantLogRequest,
            logs::DeviceLogRequest,
            logs::LogCreatedResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "events", description = "Desired state for plants and IoT devices"),
        (name = "logs", description = "Historical state/event snapshots"),
    ),
    info(
        title = "Plant Events API",
        description = "Desired-state events and audit logs for IoT plant irrigation",
        version = "0.1.0"
    )
)]
struct ApiDoc;

pub fn build_router(state: AppState) -> Router {
    let event_routes = Router::new()
        .route("/plant/luminosity", put(events::update_luminosity_event))
        .route("/plant/humidity", put(events::update_humidity_event))
        .route("/plant/valve", put(events::update_valve_event))
        .route("/plant/led", put(events::update_led_event))
        .route("/device/pump", put(events::update_pump_event));

    let log_routes = Router::new()
        .route("/plant", post(logs::insert_plant_log))
        .route("/device", post(logs::insert_device_log));

    let api_routes = Router::new()
        .nest("/events", event_routes)
        .nest("/logs", log_routes)
        .layer(RequestBodyLimitLayer::new(64 * 1024)); // 64KB body limit

    let health_routes = Router::new()
        .route("/", get(health::root))
        .route("/healthz", get(health::healthz));

    // OpenAPI documentation
    let docs_routes = Router::new().merge(Scalar::with_url("/docs", ApiDoc::openapi()));

    tracing::debug!(
        address = %state.config.bind_address(),
        "Router built"
    );

    Router::new()
        .merge(api_routes)
        .merge(health_routes)
        .merge(docs_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                )
                .layer(CompressionLayer::new()),
        )
        .with_state(state)
}
