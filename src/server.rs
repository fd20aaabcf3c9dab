//! HTTP surface over [`RecipeService`].
//!
//! | Route | Success | Failures |
//! |-------|---------|----------|
//! | `GET /recipes` | 200, JSON array | 500 |
//! | `POST /recipes` `{link, name}` | 201, created record | 400, 500 |
//! | `PUT /recipes/:id` `{body}` | 200, updated record | 400, 404, 500 |
//!
//! Error bodies are `{"error": "<message>"}`. Server-side failures carry a
//! generic message; the detail is logged.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::error::{Error, Result};
use crate::service::{NewRecipe, RecipeService, UpdateRecipe};

/// Error response with the status derived from [`Error::status_code`].
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// Wrap `err`. `generic` replaces the message of server-side failures.
    fn from_error(err: &Error, generic: &str) -> Self {
        let status = StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if err.is_client_error() {
            Self { status, message: err.to_string() }
        } else {
            error!(error = %err, "{generic}");
            Self { status, message: generic.to_string() }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::from_error(&Error::Parse(rejection.body_text()), "invalid request body")
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::from_error(&Error::Validation(rejection.body_text()), "invalid recipe id")
    }
}

/// Build the application router.
///
/// With `cors_origin` set, only that origin is allowed (with credentials);
/// otherwise any origin is.
///
/// # Errors
///
/// Returns [`Error::Config`] if `cors_origin` is not a valid header value.
pub fn router(service: Arc<RecipeService>, cors_origin: Option<&str>) -> Result<Router> {
    Ok(Router::new()
        .route("/recipes", get(list_recipes).post(add_recipe))
        .route("/recipes/:id", put(update_recipe))
        .layer(cors_layer(cors_origin)?)
        .layer(TraceLayer::new_for_http())
        .with_state(service))
}

/// CORS policy for the configured origin.
///
/// # Errors
///
/// Returns [`Error::Config`] for an origin that is not a valid header value.
pub fn cors_layer(origin: Option<&str>) -> Result<CorsLayer> {
    let Some(origin) = origin.map(str::trim).filter(|o| !o.is_empty()) else {
        return Ok(CorsLayer::permissive());
    };
    let origin: HeaderValue = origin
        .parse()
        .map_err(|_| Error::Config(format!("invalid CORS origin: {origin}")))?;
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true))
}

async fn list_recipes(State(service): State<Arc<RecipeService>>) -> Response {
    match service.list().await {
        Ok(records) => Json(records).into_response(),
        Err(e) => ApiError::from_error(&e, "failed to list recipes").into_response(),
    }
}

async fn add_recipe(
    State(service): State<Arc<RecipeService>>,
    payload: std::result::Result<Json<NewRecipe>, JsonRejection>,
) -> std::result::Result<Response, ApiError> {
    let Json(input) = payload?;
    match service.add(input).await {
        Ok(record) => Ok((StatusCode::CREATED, Json(record)).into_response()),
        Err(e) => Err(ApiError::from_error(&e, "failed to add recipe")),
    }
}

async fn update_recipe(
    State(service): State<Arc<RecipeService>>,
    id: std::result::Result<Path<i64>, PathRejection>,
    payload: std::result::Result<Json<UpdateRecipe>, JsonRejection>,
) -> std::result::Result<Response, ApiError> {
    let Path(id) = id?;
    let Json(input) = payload?;
    match service.update(id, input).await {
        Ok(record) => Ok(Json(record).into_response()),
        Err(e) => Err(ApiError::from_error(&e, "failed to update recipe")),
    }
}
