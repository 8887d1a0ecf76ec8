use crate::domain::model::Review;
use crate::transport::http::handlers::common::{created_at, ensure_ids_match, json_body, path_id};
use crate::transport::http::types::{ApiError, AppState};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use tracing::info;

#[utoipa::path(
    get,
    path = "/api/reviews",
    responses(
        (status = 200, description = "All reviews", body = [Review]),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_reviews_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Review>>, ApiError> {
    Ok(Json(state.reviews.get_all().await?))
}

#[utoipa::path(
    get,
    path = "/api/reviews/{id}",
    params(("id" = i32, Path, description = "Review id")),
    responses(
        (status = 200, description = "The review", body = Review),
        (status = 404, description = "No review with this id")
    )
)]
pub async fn get_review_handler(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Review>, ApiError> {
    let id = path_id(id)?;
    state
        .reviews
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

#[utoipa::path(
    post,
    path = "/api/reviews",
    request_body = Review,
    responses(
        (status = 201, description = "Review created", body = Review),
        (status = 400, description = "Validation failed"),
        (status = 500, description = "Restaurant does not exist (foreign key) or storage fault")
    )
)]
pub async fn create_review_handler(
    State(state): State<AppState>,
    request: Result<Json<Review>, JsonRejection>,
) -> Result<Response, ApiError> {
    let review = json_body(request)?;
    review.validate().map_err(ApiError::BadRequest)?;

    let created = state.reviews.add(review).await?;
    info!(
        review_id = created.id,
        restaurant_id = created.restaurant_id,
        "Review created"
    );

    Ok(created_at(format!("/api/reviews/{}", created.id), created))
}

#[utoipa::path(
    put,
    path = "/api/reviews/{id}",
    params(("id" = i32, Path, description = "Review id")),
    request_body = Review,
    responses(
        (status = 200, description = "Review updated"),
        (status = 400, description = "Validation failed or id mismatch"),
        (status = 404, description = "No review with this id")
    )
)]
pub async fn update_review_handler(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    request: Result<Json<Review>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let id = path_id(id)?;
    let review = json_body(request)?;
    review.validate().map_err(ApiError::BadRequest)?;
    ensure_ids_match(id, review.id)?;

    if state.reviews.get_by_id(id).await?.is_none() {
        return Err(ApiError::NotFound);
    }
    if !state.reviews.update(&review).await? {
        return Err(ApiError::NotFound);
    }

    info!(review_id = id, "Review updated");
    Ok(StatusCode::OK)
}

#[utoipa::path(
    delete,
    path = "/api/reviews/{id}",
    params(("id" = i32, Path, description = "Review id")),
    responses(
        (status = 200, description = "Review deleted"),
        (status = 404, description = "No review with this id")
    )
)]
pub async fn delete_review_handler(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = path_id(id)?;
    if state.reviews.get_by_id(id).await?.is_none() {
        return Err(ApiError::NotFound);
    }
    if !state.reviews.delete(id).await? {
        return Err(ApiError::NotFound);
    }

    info!(review_id = id, "Review deleted");
    Ok(StatusCode::OK)
}
