pub mod csrf;
pub mod router;
pub mod types;
pub mod views;
pub mod handlers {
    pub mod common;
    pub mod health;
    pub mod home;
    pub mod restaurants;
    pub mod reviews;
}

pub use router::{create_router, ApiDoc};
pub use types::{ApiError, AppState};
