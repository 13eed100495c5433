//! HTTP transport - mounts `FilmService` on axum.
//!
//! Requires the `http` feature.
//!
//! Handlers call the store synchronously on the tokio worker thread; each
//! request is one small whole-file read and at most one write.
//!
//! ## Routes
//!
//! - `GET /health` - `{ "ok": true }`.
//! - `GET /films` - all films, `?minimum-duration=N` keeps those lasting at least N.
//! - `POST /films` - create.
//! - `GET|DELETE|PATCH|PUT /films/:id` - read, remove, merge, replace.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use film_api::{http, FilmService, JsonFileStore};
//!
//! let service = Arc::new(FilmService::new(JsonFileStore::new("data/films.json")));
//! http::serve(service, "127.0.0.1:3000").await?;
//! ```

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use super::error::ApiError;
use super::film_service::FilmService;
use crate::film::Film;
use crate::store::FilmStore;

type Shared<S> = State<Arc<FilmService<S>>>;

/// Full application: `/health` plus the film routes under `/films`.
pub fn router<S: FilmStore + 'static>(service: Arc<FilmService<S>>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/films", films_router(service))
}

/// The film routes alone, relative to wherever they are mounted.
pub fn films_router<S: FilmStore + 'static>(service: Arc<FilmService<S>>) -> Router {
    Router::new()
        .route("/", get(list_films::<S>).post(create_film::<S>))
        .route(
            "/:id",
            get(get_film::<S>)
                .delete(delete_film::<S>)
                .patch(patch_film::<S>)
                .put(put_film::<S>),
        )
        .with_state(service)
}

/// Serve the films API at the given address (e.g. `"0.0.0.0:3000"`).
pub async fn serve<S: FilmStore + 'static>(
    service: Arc<FilmService<S>>,
    addr: &str,
) -> Result<(), std::io::Error> {
    let app = router(service);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        match self.body() {
            Some(body) => (status, Json(body)).into_response(),
            None => status.into_response(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ListParams {
    #[serde(rename = "minimum-duration")]
    minimum_duration: Option<String>,
}

/// Non-JSON bodies become `{}` and fail validation like any empty body.
fn body_or_empty(body: Result<Json<Value>, JsonRejection>) -> Value {
    match body {
        Ok(Json(value)) => value,
        Err(rejection) => {
            log::debug!("treating unreadable body as empty: {}", rejection);
            json!({})
        }
    }
}

async fn health_handler() -> impl IntoResponse {
    Json(json!({ "ok": true }))
}

async fn get_film<S: FilmStore + 'static>(
    State(service): Shared<S>,
    Path(id): Path<String>,
) -> Result<Json<Film>, ApiError> {
    service.get(&id).map(Json)
}

async fn list_films<S: FilmStore + 'static>(
    State(service): Shared<S>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Film>>, ApiError> {
    service.list(params.minimum_duration.as_deref()).map(Json)
}

async fn create_film<S: FilmStore + 'static>(
    State(service): Shared<S>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Film>, ApiError> {
    service.create(&body_or_empty(body)).map(Json)
}

async fn delete_film<S: FilmStore + 'static>(
    State(service): Shared<S>,
    Path(id): Path<String>,
) -> Result<Json<Film>, ApiError> {
    service.delete(&id).map(Json)
}

async fn patch_film<S: FilmStore + 'static>(
    State(service): Shared<S>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Film>, ApiError> {
    service.patch(&id, &body_or_empty(body)).map(Json)
}

async fn put_film<S: FilmStore + 'static>(
    State(service): Shared<S>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Film>, ApiError> {
    service.put(&id, &body_or_empty(body)).map(Json)
}
