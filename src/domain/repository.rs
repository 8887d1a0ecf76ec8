//! Storage capabilities for the two domain records.
//!
//! `update` and `delete` report whether a row was affected. Callers still check
//! existence first, and treat `false` as "gone since the check".

use crate::domain::model::{Restaurant, Review};
use async_trait::async_trait;

#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    /// Every restaurant, ordered by id. Empty store yields an empty vec.
    async fn get_all(&self) -> anyhow::Result<Vec<Restaurant>>;

    async fn get_by_id(&self, id: i32) -> anyhow::Result<Option<Restaurant>>;

    /// Persists a new record; the store assigns the id. `restaurant.id` is ignored.
    async fn add(&self, restaurant: Restaurant) -> anyhow::Result<Restaurant>;

    /// Replaces all scalar fields of the record with `restaurant.id`.
    async fn update(&self, restaurant: &Restaurant) -> anyhow::Result<bool>;

    /// Removes the record and, through the store's cascade, its reviews.
    async fn delete(&self, id: i32) -> anyhow::Result<bool>;
}

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn get_all(&self) -> anyhow::Result<Vec<Review>>;

    async fn get_by_id(&self, id: i32) -> anyhow::Result<Option<Review>>;

    async fn get_reviews_by_restaurant(&self, restaurant_id: i32) -> anyhow::Result<Vec<Review>>;

    /// Fails if `review.restaurant_id` does not reference an existing restaurant.
    async fn add(&self, review: Review) -> anyhow::Result<Review>;

    async fn update(&self, review: &Review) -> anyhow::Result<bool>;

    async fn delete(&self, id: i32) -> anyhow::Result<bool>;
}
