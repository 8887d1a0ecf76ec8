pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::DatabaseService;
pub use domain::model::{Restaurant, Review};
pub use domain::{RestaurantRepository, ReviewRepository};
pub use storage::InMemoryStore;
