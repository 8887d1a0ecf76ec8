use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::is_blank;

/// A restaurant that can be reviewed. `id` is assigned by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
#[serde(rename_all = "camelCase", default)]
pub struct Restaurant {
    pub id: i32,
    pub name: String,
    pub city: Option<String>,
    pub country: Option<String>,
}

impl Restaurant {
    /// Returns Ok(()) if valid, Err(String) with the reason if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if is_blank(&self.name) {
            return Err("Restaurant name is required".to_string());
        }
        Ok(())
    }
}
