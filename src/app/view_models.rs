//! Presentation shapes for the server-rendered pages.

use crate::domain::model::review::{validate_rating, validate_reviewer_name};
use crate::domain::model::{Restaurant, Review};

/// Restaurant details page: the restaurant plus its reviews.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantReviewsViewModel {
    pub restaurant: Restaurant,
    pub reviews: Vec<Review>,
}

/// The add-review form, as rendered and as posted back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditReviewViewModel {
    pub rating: i32,
    pub body: Option<String>,
    pub restaurant_id: i32,
    pub reviewer_name: String,
}

impl EditReviewViewModel {
    /// A blank form for the given restaurant.
    pub fn for_restaurant(restaurant_id: i32) -> Self {
        Self {
            restaurant_id,
            ..Default::default()
        }
    }

    /// Every field rule that fails, in form order.
    pub fn validation_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if let Err(e) = validate_rating(self.rating) {
            errors.push(e);
        }
        if let Err(e) = validate_reviewer_name(&self.reviewer_name) {
            errors.push(e);
        }
        errors
    }
}
