//! Domain records for restaurants and the reviews attached to them.
//!
//! A restaurant carries no embedded review collection: the association is
//! always resolved through `ReviewRepository::get_reviews_by_restaurant`.

pub mod restaurant;
pub mod review;

pub use restaurant::Restaurant;
pub use review::{Review, MAX_RATING, MIN_RATING};

/// Both required string fields share the same rule: present and not blank.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
