//! HTTP routes serving boundary GeoJSON.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::error::{BoundaryError, ErrorKind};
use crate::models::BoundaryRequest;
use crate::service::BoundaryService;

/// Application state shared across handlers
pub struct AppState {
    pub service: BoundaryService,
}

/// Build the router over `service`.
pub fn router(service: BoundaryService) -> Router {
    let state = Arc::new(AppState { service });

    Router::new()
        .route("/health", get(health_handler))
        .route("/map/subdistrict", get(sub_district_handler))
        .route(
            "/map/subdistrict_by_name/{name}",
            get(sub_district_by_name_handler),
        )
        .route("/map/{type}", get(map_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Failure surfaced to HTTP clients as `{"error": "..."}`
#[derive(Debug)]
pub enum ApiError {
    Boundary(BoundaryError),
    Task(String),
}

impl From<BoundaryError> for ApiError {
    fn from(err: BoundaryError) -> Self {
        ApiError::Boundary(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Boundary(err) => {
                let status = match err.kind() {
                    ErrorKind::InvalidRequest => StatusCode::BAD_REQUEST,
                    ErrorKind::NotFound => StatusCode::NOT_FOUND,
                    ErrorKind::ReadError => StatusCode::INTERNAL_SERVER_ERROR,
                };
                if status.is_server_error() {
                    error!("{}", err);
                }
                (status, err.to_string())
            }
            ApiError::Task(message) => {
                error!("Boundary task failed: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Error processing shapefile: {}", message),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// GeoJSON body with a JSON content type
struct GeoJsonBody(String);

impl IntoResponse for GeoJsonBody {
    fn into_response(self) -> Response {
        ([(header::CONTENT_TYPE, "application/json")], self.0).into_response()
    }
}

/// Run the blocking shapefile pipeline off the async workers.
async fn serve(state: &AppState, request: BoundaryRequest) -> Result<GeoJsonBody, ApiError> {
    let service = state.service.clone();
    let json = tokio::task::spawn_blocking(move || service.fetch(&request))
        .await
        .map_err(|e| ApiError::Task(e.to_string()))??;
    Ok(GeoJsonBody(json))
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    base_path_exists: bool,
}

/// Health check endpoint
async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        base_path_exists: state.service.base_path().is_dir(),
    })
}

#[derive(Deserialize)]
struct MapQueryParams {
    /// Narrow districts to one state
    state: Option<String>,
}

/// State or district boundaries
async fn map_handler(
    State(state): State<Arc<AppState>>,
    Path(map_type): Path<String>,
    Query(params): Query<MapQueryParams>,
) -> Result<GeoJsonBody, ApiError> {
    let request = BoundaryRequest::from_map_type(&map_type, params.state)?;
    serve(&state, request).await
}

#[derive(Deserialize)]
struct SubDistrictQueryParams {
    /// Accepted for client compatibility; the sub-district file is national
    #[allow(dead_code)]
    state: Option<String>,
    district: Option<String>,
}

/// Sub-district boundaries of one district
async fn sub_district_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SubDistrictQueryParams>,
) -> Result<GeoJsonBody, ApiError> {
    let request = BoundaryRequest::sub_district(params.district)?;
    serve(&state, request).await
}

/// One sub-district by its own name
async fn sub_district_by_name_handler(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<GeoJsonBody, ApiError> {
    let request = BoundaryRequest::sub_district_named(Some(name))?;
    serve(&state, request).await
}
