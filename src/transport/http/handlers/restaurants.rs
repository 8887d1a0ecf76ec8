use crate::domain::model::Restaurant;
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
    path = "/api/restaurants",
    responses(
        (status = 200, description = "All restaurants", body = [Restaurant]),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_restaurants_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Restaurant>>, ApiError> {
    Ok(Json(state.restaurants.get_all().await?))
}

#[utoipa::path(
    get,
    path = "/api/restaurants/{id}",
    params(("id" = i32, Path, description = "Restaurant id")),
    responses(
        (status = 200, description = "The restaurant", body = Restaurant),
        (status = 404, description = "No restaurant with this id")
    )
)]
pub async fn get_restaurant_handler(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Restaurant>, ApiError> {
    let id = path_id(id)?;
    state
        .restaurants
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

#[utoipa::path(
    post,
    path = "/api/restaurants",
    request_body = Restaurant,
    responses(
        (status = 201, description = "Restaurant created", body = Restaurant),
        (status = 400, description = "Validation failed")
    )
)]
pub async fn create_restaurant_handler(
    State(state): State<AppState>,
    request: Result<Json<Restaurant>, JsonRejection>,
) -> Result<Response, ApiError> {
    let restaurant = json_body(request)?;
    restaurant.validate().map_err(ApiError::BadRequest)?;

    let created = state.restaurants.add(restaurant).await?;
    info!(restaurant_id = created.id, "Restaurant created");

    Ok(created_at(format!("/api/restaurants/{}", created.id), created))
}

#[utoipa::path(
    put,
    path = "/api/restaurants/{id}",
    params(("id" = i32, Path, description = "Restaurant id")),
    request_body = Restaurant,
    responses(
        (status = 200, description = "Restaurant updated"),
        (status = 400, description = "Validation failed or id mismatch"),
        (status = 404, description = "No restaurant with this id")
    )
)]
pub async fn update_restaurant_handler(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    request: Result<Json<Restaurant>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let id = path_id(id)?;
    let restaurant = json_body(request)?;
    restaurant.validate().map_err(ApiError::BadRequest)?;
    ensure_ids_match(id, restaurant.id)?;

    if state.restaurants.get_by_id(id).await?.is_none() {
        return Err(ApiError::NotFound);
    }
    // A concurrent delete can still win between the check and the update.
    if !state.restaurants.update(&restaurant).await? {
        return Err(ApiError::NotFound);
    }

    info!(restaurant_id = id, "Restaurant updated");
    Ok(StatusCode::OK)
}

#[utoipa::path(
    delete,
    path = "/api/restaurants/{id}",
    params(("id" = i32, Path, description = "Restaurant id")),
    responses(
        (status = 200, description = "Restaurant and its reviews deleted"),
        (status = 404, description = "No restaurant with this id")
    )
)]
pub async fn delete_restaurant_handler(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = path_id(id)?;
    if state.restaurants.get_by_id(id).await?.is_none() {
        return Err(ApiError::NotFound);
    }
    if !state.restaurants.delete(id).await? {
        return Err(ApiError::NotFound);
    }

    info!(restaurant_id = id, "Restaurant deleted");
    Ok(StatusCode::OK)
}
