use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::data::DataRegistry;
use crate::server::api;

type SharedRegistry = Arc<DataRegistry>;

pub fn router(registry: SharedRegistry) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/fighters", get(fighters))
        .route("/fighters/:id/abilities", get(fighter_abilities))
        .route("/abilities", get(abilities))
        .route("/warbands", get(warbands))
        .route("/warbands/:name", get(warband))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(registry)
}

async fn health(State(registry): State<SharedRegistry>) -> Response {
    json_or_error(api::health_payload(&registry))
}

async fn fighters(State(registry): State<SharedRegistry>) -> Response {
    json_or_error(api::fighters_payload(&registry))
}

async fn abilities(State(registry): State<SharedRegistry>) -> Response {
    json_or_error(api::abilities_payload(&registry))
}

async fn warbands(State(registry): State<SharedRegistry>) -> Response {
    json_or_error(api::warbands_payload(&registry))
}

async fn warband(State(registry): State<SharedRegistry>, Path(name): Path<String>) -> Response {
    lookup_response(api::warband_payload(&registry, &name))
}

async fn fighter_abilities(
    State(registry): State<SharedRegistry>,
    Path(id): Path<String>,
) -> Response {
    lookup_response(api::fighter_abilities_payload(&registry, &id))
}

async fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "Route not found")
}

fn json_response(body: String) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}

fn json_or_error(payload: Result<String, serde_json::Error>) -> Response {
    match payload {
        Ok(body) => json_response(body),
        Err(err) => {
            let err = api::LookupError::Serialize(err);
            tracing::error!("{err}");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    }
}

fn lookup_response(payload: Result<String, api::LookupError>) -> Response {
    match payload {
        Ok(body) => json_response(body),
        Err(err @ api::LookupError::NotFound(_)) => {
            error_response(StatusCode::NOT_FOUND, &err.to_string())
        }
        Err(err) => {
            tracing::error!("{err}");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    let body = format!(
        "{{\n  \"status\": \"error\",\n  \"message\": {}\n}}",
        serde_json::to_string(message).unwrap_or_else(|_| "\"Unknown error\"".to_string())
    );
    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}
