use crate::domain::model::{Restaurant, Review};
use crate::transport::http::handlers::{health, home, restaurants, reviews};
use crate::transport::http::types::ApiResponse;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        restaurants::list_restaurants_handler,
        restaurants::get_restaurant_handler,
        restaurants::create_restaurant_handler,
        restaurants::update_restaurant_handler,
        restaurants::delete_restaurant_handler,
        reviews::list_reviews_handler,
        reviews::get_review_handler,
        reviews::create_review_handler,
        reviews::update_review_handler,
        reviews::delete_review_handler
    ),
    components(schemas(ApiResponse, Restaurant, Review))
)]
pub struct ApiDoc;

pub fn create_router(app_state: crate::transport::http::types::AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/api/restaurants",
            get(restaurants::list_restaurants_handler).post(restaurants::create_restaurant_handler),
        )
        .route(
            "/api/restaurants/:id",
            get(restaurants::get_restaurant_handler)
                .put(restaurants::update_restaurant_handler)
                .delete(restaurants::delete_restaurant_handler),
        )
        .route(
            "/api/reviews",
            get(reviews::list_reviews_handler).post(reviews::create_review_handler),
        )
        .route(
            "/api/reviews/:id",
            get(reviews::get_review_handler)
                .put(reviews::update_review_handler)
                .delete(reviews::delete_review_handler),
        )
        .route("/", get(home::index_handler))
        .route("/Home", get(home::index_handler))
        .route("/Home/Index", get(home::index_handler))
        .route("/Home/Details/:id", get(home::details_handler))
        .route(
            "/Home/AddReview/:restaurant_id",
            get(home::add_review_form_handler).post(home::add_review_handler),
        )
        .route("/Home/Privacy", get(home::privacy_handler))
        .with_state(app_state)
}
