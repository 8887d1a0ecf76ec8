//! In-memory store used as a test double and for running without PostgreSQL.
//!
//! Both repositories share one `InMemoryStore` so the foreign key from reviews
//! to restaurants (and its cascade delete) can be emulated.

use crate::domain::model::{Restaurant, Review};
use crate::domain::repository::{RestaurantRepository, ReviewRepository};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct Tables {
    restaurants: BTreeMap<i32, Restaurant>,
    reviews: BTreeMap<i32, Review>,
    last_restaurant_id: i32,
    last_review_id: i32,
}

impl Tables {
    fn check_restaurant_exists(&self, restaurant_id: i32) -> Result<()> {
        if self.restaurants.contains_key(&restaurant_id) {
            Ok(())
        } else {
            Err(anyhow!(
                "foreign key violation: restaurant {} does not exist",
                restaurant_id
            ))
        }
    }
}

/// Shared handle to the in-memory tables. Cloning shares the data.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the same seed row the migrations insert.
    pub fn seeded() -> Self {
        let mut tables = Tables::default();
        tables.restaurants.insert(
            1,
            Restaurant {
                id: 1,
                name: "Wok palace".to_string(),
                city: Some("Hasselt".to_string()),
                country: Some("Belgium".to_string()),
            },
        );
        tables.last_restaurant_id = 1;
        Self {
            tables: Arc::new(RwLock::new(tables)),
        }
    }

    pub fn restaurants(&self) -> InMemoryRestaurantRepository {
        InMemoryRestaurantRepository {
            store: self.clone(),
        }
    }

    pub fn reviews(&self) -> InMemoryReviewRepository {
        InMemoryReviewRepository {
            store: self.clone(),
        }
    }
}

#[derive(Clone)]
pub struct InMemoryRestaurantRepository {
    store: InMemoryStore,
}

#[async_trait]
impl RestaurantRepository for InMemoryRestaurantRepository {
    async fn get_all(&self) -> Result<Vec<Restaurant>> {
        let tables = self.store.tables.read().await;
        Ok(tables.restaurants.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Restaurant>> {
        let tables = self.store.tables.read().await;
        Ok(tables.restaurants.get(&id).cloned())
    }

    async fn add(&self, mut restaurant: Restaurant) -> Result<Restaurant> {
        let mut tables = self.store.tables.write().await;
        tables.last_restaurant_id += 1;
        restaurant.id = tables.last_restaurant_id;
        tables.restaurants.insert(restaurant.id, restaurant.clone());
        Ok(restaurant)
    }

    async fn update(&self, restaurant: &Restaurant) -> Result<bool> {
        let mut tables = self.store.tables.write().await;
        match tables.restaurants.get_mut(&restaurant.id) {
            Some(current) => {
                *current = restaurant.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let mut tables = self.store.tables.write().await;
        if tables.restaurants.remove(&id).is_none() {
            return Ok(false);
        }
        tables.reviews.retain(|_, review| review.restaurant_id != id);
        Ok(true)
    }
}

#[derive(Clone)]
pub struct InMemoryReviewRepository {
    store: InMemoryStore,
}

#[async_trait]
impl ReviewRepository for InMemoryReviewRepository {
    async fn get_all(&self) -> Result<Vec<Review>> {
        let tables = self.store.tables.read().await;
        Ok(tables.reviews.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Review>> {
        let tables = self.store.tables.read().await;
        Ok(tables.reviews.get(&id).cloned())
    }

    async fn get_reviews_by_restaurant(&self, restaurant_id: i32) -> Result<Vec<Review>> {
        let tables = self.store.tables.read().await;
        Ok(tables
            .reviews
            .values()
            .filter(|review| review.restaurant_id == restaurant_id)
            .cloned()
            .collect())
    }

    async fn add(&self, mut review: Review) -> Result<Review> {
        let mut tables = self.store.tables.write().await;
        tables.check_restaurant_exists(review.restaurant_id)?;
        tables.last_review_id += 1;
        review.id = tables.last_review_id;
        tables.reviews.insert(review.id, review.clone());
        Ok(review)
    }

    async fn update(&self, review: &Review) -> Result<bool> {
        let mut tables = self.store.tables.write().await;
        if !tables.reviews.contains_key(&review.id) {
            return Ok(false);
        }
        tables.check_restaurant_exists(review.restaurant_id)?;
        tables.reviews.insert(review.id, review.clone());
        Ok(true)
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let mut tables = self.store.tables.write().await;
        Ok(tables.reviews.remove(&id).is_some())
    }
}
