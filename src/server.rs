use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Local;
use reqwest::Client;
use serde::Serialize;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
};

use crate::{
    config::Config,
    error::Error,
    fetch::make_client,
    menu::{archive, week},
    store::Store,
};

#[derive(Clone, Debug)]
pub struct AppState {
    config: Arc<Config>,
    client: Client,
    store: Arc<Store>,
}

impl AppState {
    pub fn new(config: Config, store: Arc<Store>) -> Self {
        Self {
            config: Arc::new(config),
            client: make_client(),
            store,
        }
    }
}

/// Every successful response is wrapped as `{ "body": ... }`.
#[derive(Serialize)]
struct Body<T> {
    body: T,
}

struct AppError(Error);

impl From<Error> for AppError {
    fn from(e: Error) -> Self {
        Self(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        log::error!("{}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": self.0.to_string() })),
        )
            .into_response()
    }
}

async fn dynamic_menu(State(state): State<AppState>) -> Response {
    let today = Local::now().date_naive();
    let menus = week(&state.client, &state.config, today).await;
    (
        [(header::CACHE_CONTROL, state.config.cache_control.clone())],
        Json(Body { body: menus }),
    )
        .into_response()
}

async fn cron(State(state): State<AppState>) -> Result<Response, AppError> {
    let today = Local::now().date_naive();
    let report = archive(&state.client, &state.config, &state.store, today).await?;
    Ok(Json(Body { body: report }).into_response())
}

async fn list_menu(State(state): State<AppState>) -> Result<Response, AppError> {
    let entries = state.store.list().await?;
    Ok(Json(Body { body: entries }).into_response())
}

pub fn router(state: AppState) -> Router {
    let compression_layer: CompressionLayer = CompressionLayer::new()
        .br(true)
        .deflate(true)
        .gzip(true)
        .zstd(true);
    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_origin(Any);

    Router::new()
        .route("/api/dynamic-menu", get(dynamic_menu))
        .route("/api/cron", get(cron))
        .route("/api/menu", get(list_menu))
        .with_state(state)
        .layer(cors_layer)
        .layer(compression_layer)
}
