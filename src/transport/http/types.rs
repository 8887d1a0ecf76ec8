use crate::app::DatabaseService;
use crate::domain::repository::{RestaurantRepository, ReviewRepository};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::sync::Arc;
use utoipa::ToSchema;

/// Shared per-process state. Repositories are stateless facades over the store,
/// so every request sees (and mutates) the store directly.
#[derive(Clone)]
pub struct AppState {
    pub restaurants: Arc<dyn RestaurantRepository>,
    pub reviews: Arc<dyn ReviewRepository>,
    /// Present when running against PostgreSQL; `/health` pings it.
    pub db_service: Option<DatabaseService>,
}

impl AppState {
    pub fn new(
        restaurants: Arc<dyn RestaurantRepository>,
        reviews: Arc<dyn ReviewRepository>,
    ) -> Self {
        Self {
            restaurants,
            reviews,
            db_service: None,
        }
    }

    pub fn with_database(db_service: DatabaseService) -> Self {
        Self {
            restaurants: Arc::new(db_service.restaurant_repository()),
            reviews: Arc::new(db_service.review_repository()),
            db_service: Some(db_service),
        }
    }
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Failures surfaced by the API and page handlers.
///
/// 400 and 404 carry no body. Storage faults are not recovered and become 500.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("not found")]
    NotFound,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(reason) => {
                tracing::debug!(%reason, "Rejected request");
                StatusCode::BAD_REQUEST.into_response()
            }
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::Internal(e) => {
                tracing::error!(error = %e, "Unhandled storage fault");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponse {
                        success: false,
                        data: None,
                        error: Some("Internal server error".to_string()),
                    }),
                )
                    .into_response()
            }
        }
    }
}
