// Category DTOs

use serde::{Deserialize, Serialize};

/// A category as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub category_id: i64,
    pub name: String,
}

/// Payload for `add_category` and `update_category`.
///
/// The backend takes the full shape on both create and update; there is no
/// partial patch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPayload {
    pub name: String,
}

impl From<&Category> for CategoryPayload {
    fn from(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
        }
    }
}
