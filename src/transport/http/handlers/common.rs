use crate::transport::http::types::ApiError;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Unwraps a JSON body, turning any decode failure into a 400.
pub fn json_body<T>(request: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    match request {
        Ok(Json(value)) => Ok(value),
        Err(e) => Err(ApiError::BadRequest(format!("Invalid JSON body: {}", e))),
    }
}

/// Unwraps a numeric path id, turning a malformed one into a 400.
pub fn path_id(path: Result<Path<i32>, PathRejection>) -> Result<i32, ApiError> {
    match path {
        Ok(Path(id)) => Ok(id),
        Err(e) => Err(ApiError::BadRequest(format!("Invalid id in path: {}", e))),
    }
}

/// 201 with a `Location` header pointing at the new resource.
pub fn created_at<T: Serialize>(location: String, value: T) -> Response {
    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(value),
    )
        .into_response()
}

/// A path id and body id must name the same record.
pub fn ensure_ids_match(path_id: i32, body_id: i32) -> Result<(), ApiError> {
    if path_id != body_id {
        return Err(ApiError::BadRequest(format!(
            "Id in path ({}) does not match id in body ({})",
            path_id, body_id
        )));
    }
    Ok(())
}
