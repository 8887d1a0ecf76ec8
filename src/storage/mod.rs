pub mod memory;
pub mod postgres;

pub use memory::{InMemoryRestaurantRepository, InMemoryReviewRepository, InMemoryStore};
pub use postgres::{PgRestaurantRepository, PgReviewRepository};
