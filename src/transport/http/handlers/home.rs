//! Server-rendered pages under `/Home`.

use crate::app::view_models::{EditReviewViewModel, RestaurantReviewsViewModel};
use crate::domain::model::Review;
use crate::transport::http::csrf;
use crate::transport::http::types::{ApiError, AppState};
use crate::transport::http::views;
use axum::extract::rejection::{FormRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::{Deserialize, Deserializer};
use tracing::{info, warn};

/// The posted add-review form, including the anti-forgery field.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddReviewForm {
    #[serde(rename = "__RequestVerificationToken", default)]
    pub verification_token: String,
    #[serde(default, deserialize_with = "lenient_i32")]
    pub rating: i32,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub body: Option<String>,
    #[serde(default, deserialize_with = "lenient_i32")]
    pub restaurant_id: i32,
    #[serde(default)]
    pub reviewer_name: String,
}

impl AddReviewForm {
    fn into_parts(self) -> (String, EditReviewViewModel) {
        (
            self.verification_token,
            EditReviewViewModel {
                rating: self.rating,
                body: self.body,
                restaurant_id: self.restaurant_id,
                reviewer_name: self.reviewer_name,
            },
        )
    }
}

/// Blank or non-numeric input becomes 0, which then fails field validation
/// instead of rejecting the whole form.
fn lenient_i32<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().parse().unwrap_or(0))
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.is_empty()))
}

/// Unwraps a numeric path id; a malformed one becomes a 400 page.
fn page_id(path: Result<Path<i32>, PathRejection>) -> Result<i32, Response> {
    path.map(|Path(id)| id).map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Html(views::bad_request(&format!("Invalid id in path: {}", e))),
        )
            .into_response()
    })
}

pub async fn index_handler(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let restaurants = state.restaurants.get_all().await?;
    Ok(Html(views::index(&restaurants)))
}

/// Restaurant with its reviews. Both reads only need the id, so they run together.
pub async fn details_handler(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Response, ApiError> {
    let id = match page_id(id) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };
    let (restaurant, reviews) = tokio::try_join!(
        state.restaurants.get_by_id(id),
        state.reviews.get_reviews_by_restaurant(id)
    )?;

    let Some(restaurant) = restaurant else {
        return Ok((
            StatusCode::NOT_FOUND,
            Html(views::not_found(&format!("Restaurant {} does not exist.", id))),
        )
            .into_response());
    };

    let model = RestaurantReviewsViewModel {
        restaurant,
        reviews,
    };
    Ok(Html(views::details(&model)).into_response())
}

pub async fn add_review_form_handler(restaurant_id: Result<Path<i32>, PathRejection>) -> Response {
    let restaurant_id = match page_id(restaurant_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let token = csrf::generate_token();
    let model = EditReviewViewModel::for_restaurant(restaurant_id);
    (
        [(SET_COOKIE, csrf::set_cookie_value(&token))],
        Html(views::add_review_form(&model, &token, &[])),
    )
        .into_response()
}

pub async fn add_review_handler(
    State(state): State<AppState>,
    restaurant_id: Result<Path<i32>, PathRejection>,
    headers: HeaderMap,
    form: Result<Form<AddReviewForm>, FormRejection>,
) -> Result<Response, ApiError> {
    let restaurant_id = match page_id(restaurant_id) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };
    let Form(form) = match form {
        Ok(f) => f,
        Err(e) => {
            return Ok((
                StatusCode::BAD_REQUEST,
                Html(views::bad_request(&format!("The form could not be read: {}", e))),
            )
                .into_response());
        }
    };
    let (token, model) = form.into_parts();

    if !csrf::verify(&headers, &token) {
        warn!(restaurant_id, "Add review rejected: anti-forgery token mismatch");
        return Ok((
            StatusCode::BAD_REQUEST,
            Html(views::bad_request("The anti-forgery token is missing or invalid.")),
        )
            .into_response());
    }

    let mut errors = Vec::new();
    if model.restaurant_id != restaurant_id {
        errors.push("Restaurant id's in model and url don't match.".to_string());
    }
    errors.extend(model.validation_errors());

    if !errors.is_empty() {
        return Ok(Html(views::add_review_form(&model, &token, &errors)).into_response());
    }

    let created = state.reviews.add(Review::from(model)).await?;
    info!(review_id = created.id, restaurant_id, "Review added from form");

    Ok(Redirect::to(&format!("/Home/Details/{}", restaurant_id)).into_response())
}

pub async fn privacy_handler() -> Html<String> {
    Html(views::privacy())
}
