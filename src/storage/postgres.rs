//! Restaurant and review repositories backed by PostgreSQL.
//!
//! Every operation is a single statement. Referential integrity and the
//! cascade from `restaurants` to `reviews` live in the schema (see `migrations/`).

use crate::domain::model::{Restaurant, Review};
use crate::domain::repository::{RestaurantRepository, ReviewRepository};
use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PgRestaurantRepository {
    pool: PgPool,
}

impl PgRestaurantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RestaurantRepository for PgRestaurantRepository {
    async fn get_all(&self) -> Result<Vec<Restaurant>> {
        let rows = sqlx::query_as::<_, Restaurant>(
            "SELECT id, name, city, country FROM restaurants ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Restaurant>> {
        let row = sqlx::query_as::<_, Restaurant>(
            "SELECT id, name, city, country FROM restaurants WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn add(&self, restaurant: Restaurant) -> Result<Restaurant> {
        let created = sqlx::query_as::<_, Restaurant>(
            "INSERT INTO restaurants (name, city, country) VALUES ($1, $2, $3)
             RETURNING id, name, city, country",
        )
        .bind(&restaurant.name)
        .bind(&restaurant.city)
        .bind(&restaurant.country)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn update(&self, restaurant: &Restaurant) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE restaurants SET name = $2, city = $3, country = $4 WHERE id = $1",
        )
        .bind(restaurant.id)
        .bind(&restaurant.name)
        .bind(&restaurant.city)
        .bind(&restaurant.country)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM restaurants WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[derive(Clone)]
pub struct PgReviewRepository {
    pool: PgPool,
}

impl PgReviewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewRepository for PgReviewRepository {
    async fn get_all(&self) -> Result<Vec<Review>> {
        let rows = sqlx::query_as::<_, Review>(
            "SELECT id, rating, body, restaurant_id, reviewer_name FROM reviews ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Review>> {
        let row = sqlx::query_as::<_, Review>(
            "SELECT id, rating, body, restaurant_id, reviewer_name FROM reviews WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn get_reviews_by_restaurant(&self, restaurant_id: i32) -> Result<Vec<Review>> {
        let rows = sqlx::query_as::<_, Review>(
            "SELECT id, rating, body, restaurant_id, reviewer_name FROM reviews
             WHERE restaurant_id = $1 ORDER BY id",
        )
        .bind(restaurant_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn add(&self, review: Review) -> Result<Review> {
        let created = sqlx::query_as::<_, Review>(
            "INSERT INTO reviews (rating, body, restaurant_id, reviewer_name) VALUES ($1, $2, $3, $4)
             RETURNING id, rating, body, restaurant_id, reviewer_name",
        )
        .bind(review.rating)
        .bind(&review.body)
        .bind(review.restaurant_id)
        .bind(&review.reviewer_name)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn update(&self, review: &Review) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE reviews SET rating = $2, body = $3, restaurant_id = $4, reviewer_name = $5
             WHERE id = $1",
        )
        .bind(review.id)
        .bind(review.rating)
        .bind(&review.body)
        .bind(review.restaurant_id)
        .bind(&review.reviewer_name)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
