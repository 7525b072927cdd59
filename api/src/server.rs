//! HTTP server exposing the shelter database as JSON.
//!
//! Routes:
//!   GET  /api/health      → health check
//!   GET  /api/breeds      → all breeds (filter options)
//!   GET  /api/dogs        → dog listing, `?breed_id=` and `?status=` optional
//!   GET  /api/dogs/:id    → one dog with its full description

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use shelter_common::model::{Breed, Dog, DogDetail};
use shelter_common::protocol::{ErrorBody, HealthResponse};

use crate::db::{self, DogFilter};

/// Shared state for route handlers.
#[derive(Clone)]
struct ApiState {
    db_path: PathBuf,
    start_time: Instant,
}

/// Errors a handler can answer with.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Dog not found")]
    DogNotFound,
    #[error("Invalid breed_id: {0:?}")]
    InvalidBreedId(String),
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::DogNotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidBreedId(_) => StatusCode::BAD_REQUEST,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Database(e) = &self {
            error!("Database query failed: {e}");
        }
        (self.status(), Json(ErrorBody::new(self.to_string()))).into_response()
    }
}

/// Build the API router over the database at `db_path`.
///
/// The schema must already exist (see [`db::initialize`]).
pub fn router(db_path: PathBuf) -> Router {
    let state = ApiState {
        db_path,
        start_time: Instant::now(),
    };

    Router::new()
        .route("/api/health", get(health))
        .route("/api/breeds", get(list_breeds))
        .route("/api/dogs", get(list_dogs))
        .route("/api/dogs/:id", get(get_dog))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the HTTP server. Blocks until shutdown.
pub async fn run(
    db_path: PathBuf,
    listen_addr: &str,
    shutdown: Arc<AtomicBool>,
) -> anyhow::Result<()> {
    let app = router(db_path);

    let listener = TcpListener::bind(listen_addr).await?;
    info!("Shelter API listening on {listen_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            loop {
                tokio::time::sleep(std::time::Duration::from_secs(1)).await;
                if shutdown.load(Ordering::Relaxed) {
                    break;
                }
            }
        })
        .await?;

    Ok(())
}

// ── route handlers ───────────────────────────────────────────────────────

async fn health(State(state): State<ApiState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

async fn list_breeds(State(state): State<ApiState>) -> Result<Json<Vec<Breed>>, ApiError> {
    Ok(Json(db::list_breeds(&state.db_path)?))
}

/// Raw listing query.  Empty values mean "no filter", like an unset selector.
#[derive(Debug, Default, Deserialize)]
struct DogsQuery {
    breed_id: Option<String>,
    status: Option<String>,
}

impl DogsQuery {
    fn into_filter(self) -> Result<DogFilter, ApiError> {
        let breed_id = match self.breed_id.filter(|v| !v.is_empty()) {
            Some(raw) => Some(
                raw.trim()
                    .parse::<i64>()
                    .map_err(|_| ApiError::InvalidBreedId(raw))?,
            ),
            None => None,
        };
        Ok(DogFilter {
            breed_id,
            status: self.status.filter(|v| !v.is_empty()),
        })
    }
}

async fn list_dogs(
    State(state): State<ApiState>,
    Query(query): Query<DogsQuery>,
) -> Result<Json<Vec<Dog>>, ApiError> {
    let filter = query.into_filter()?;
    Ok(Json(db::list_dogs(&state.db_path, &filter)?))
}

async fn get_dog(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
) -> Result<Json<DogDetail>, ApiError> {
    db::dog_detail(&state.db_path, id)?
        .map(Json)
        .ok_or(ApiError::DogNotFound)
}

// ─── tests ───────────────────────────────────────────────────────────────
