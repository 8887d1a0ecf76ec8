//! Shared harness: an in-process API on an ephemeral port over the in-memory store,
//! plus deterministic builders for synthetic records.

#![allow(dead_code)]

use odetofood::transport;
use odetofood::{InMemoryStore, Restaurant, Review};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

pub struct TestApp {
    pub base_url: String,
    pub client: reqwest::Client,
    pub store: InMemoryStore,
    server_handle: tokio::task::JoinHandle<()>,
}

impl TestApp {
    /// Starts the router over a store that already holds the seed restaurant (id 1).
    pub async fn spawn() -> Self {
        Self::spawn_with(InMemoryStore::seeded()).await
    }

    pub async fn spawn_with(store: InMemoryStore) -> Self {
        let app_state = transport::http::AppState::new(
            Arc::new(store.restaurants()),
            Arc::new(store.reviews()),
        );
        let router = transport::http::create_router(app_state);

        // Bind to an ephemeral port to avoid conflicts between tests.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let server_handle = tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .unwrap();

        Self {
            base_url: format!("http://127.0.0.1:{}", port),
            client,
            store,
            server_handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self.server_handle.abort();
    }
}

/// Synthetic values from a fixed seed, so every run sees the same data.
pub struct Fixtures {
    rng: StdRng,
}

impl Fixtures {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn word(&mut self) -> String {
        (0..8)
            .map(|_| self.rng.gen_range(b'a'..=b'z') as char)
            .collect()
    }

    pub fn rating(&mut self) -> i32 {
        self.rng.gen_range(1..=10)
    }

    pub fn restaurant(&mut self) -> Restaurant {
        Restaurant {
            id: 0,
            name: self.word(),
            city: Some(self.word()),
            country: Some(self.word()),
        }
    }

    pub fn review_for(&mut self, restaurant_id: i32) -> Review {
        Review {
            id: 0,
            rating: self.rating(),
            body: Some(self.word()),
            restaurant_id,
            reviewer_name: self.word(),
        }
    }
}
