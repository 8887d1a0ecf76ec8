pub mod converter;
pub mod database_service;
pub mod view_models;

pub use database_service::DatabaseService;
pub use view_models::{EditReviewViewModel, RestaurantReviewsViewModel};
