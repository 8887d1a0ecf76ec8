//! The PostgreSQL-backed data service.
//!
//! This module owns the connection pool. It is responsible for:
//! 1.  Connecting to PostgreSQL and applying the forward migrations in `migrations/`.
//! 2.  Handing out the repositories that run against that pool.
//! 3.  Answering liveness pings for `/health`.

use crate::infra::config::DatabaseConfig;
use crate::storage::{PgRestaurantRepository, PgReviewRepository};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// The main service that manages database interaction.
#[derive(Clone)]
pub struct DatabaseService {
    pool: PgPool,
}

impl DatabaseService {
    /// Connects to the database and brings the schema up to date.
    pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.url)
            .await?;

        let service = Self { pool };
        service.migrate().await?;
        Ok(service)
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Applies pending forward migrations (the seed restaurant comes with the first one).
    pub async fn migrate(&self) -> anyhow::Result<()> {
        MIGRATOR.run(self.pool()).await?;
        info!(migrations = MIGRATOR.iter().count(), "Database schema up to date");
        Ok(())
    }

    pub async fn ping(&self) -> anyhow::Result<()> {
        sqlx::query("SELECT 1").execute(self.pool()).await?;
        Ok(())
    }

    /// Row counts of (restaurants, reviews).
    pub async fn counts(&self) -> anyhow::Result<(i64, i64)> {
        let restaurants: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM restaurants")
            .fetch_one(self.pool())
            .await?;
        let reviews: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reviews")
            .fetch_one(self.pool())
            .await?;
        Ok((restaurants, reviews))
    }

    pub fn restaurant_repository(&self) -> PgRestaurantRepository {
        PgRestaurantRepository::new(self.pool().clone())
    }

    pub fn review_repository(&self) -> PgReviewRepository {
        PgReviewRepository::new(self.pool().clone())
    }
}
