use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::is_blank;

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 10;

/// A single review. `restaurant_id` must reference an existing restaurant;
/// the store enforces that, not this type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
#[serde(rename_all = "camelCase", default)]
pub struct Review {
    pub id: i32,
    /// Inclusive range 1..=10.
    pub rating: i32,
    pub body: Option<String>,
    pub restaurant_id: i32,
    pub reviewer_name: String,
}

impl Review {
    /// Returns Ok(()) if valid, Err(String) with the reason if invalid.
    pub fn validate(&self) -> Result<(), String> {
        validate_review_fields(self.rating, &self.reviewer_name)
    }
}

/// All field rules for a review, first failure wins.
pub fn validate_review_fields(rating: i32, reviewer_name: &str) -> Result<(), String> {
    validate_rating(rating)?;
    validate_reviewer_name(reviewer_name)
}

pub fn validate_rating(rating: i32) -> Result<(), String> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(format!(
            "Rating must be between {} and {}",
            MIN_RATING, MAX_RATING
        ));
    }
    Ok(())
}

pub fn validate_reviewer_name(reviewer_name: &str) -> Result<(), String> {
    if is_blank(reviewer_name) {
        return Err("Reviewer name is required".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(rating: i32, reviewer_name: &str) -> Review {
        Review {
            rating,
            reviewer_name: reviewer_name.to_string(),
            restaurant_id: 1,
            ..Default::default()
        }
    }

    #[test]
    fn rating_bounds_are_inclusive() {
        assert!(review(MIN_RATING, "Bob").validate().is_ok());
        assert!(review(MAX_RATING, "Bob").validate().is_ok());
        assert!(review(MIN_RATING - 1, "Bob").validate().is_err());
        assert!(review(MAX_RATING + 1, "Bob").validate().is_err());
    }

    #[test]
    fn reviewer_name_is_required() {
        assert!(review(5, "").validate().is_err());
        assert!(review(5, " \t").validate().is_err());
    }

    #[test]
    fn uses_camel_case_json_fields() {
        let json = serde_json::to_value(review(7, "Alice")).unwrap();
        assert_eq!(json["restaurantId"], 1);
        assert_eq!(json["reviewerName"], "Alice");
        assert!(json["body"].is_null());
    }
}
