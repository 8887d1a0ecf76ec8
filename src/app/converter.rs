//! Mapping from the add-review form to a domain `Review`.

use crate::app::view_models::EditReviewViewModel;
use crate::domain::model::Review;

impl From<&EditReviewViewModel> for Review {
    /// Copies the four form fields verbatim; `id` stays 0 until the store assigns one.
    fn from(model: &EditReviewViewModel) -> Self {
        Review {
            id: 0,
            rating: model.rating,
            body: model.body.clone(),
            restaurant_id: model.restaurant_id,
            reviewer_name: model.reviewer_name.clone(),
        }
    }
}

impl From<EditReviewViewModel> for Review {
    fn from(model: EditReviewViewModel) -> Self {
        Review {
            id: 0,
            rating: model.rating,
            body: model.body,
            restaurant_id: model.restaurant_id,
            reviewer_name: model.reviewer_name,
        }
    }
}
