use chrono::DateTime;
use poem_openapi::{payload::Json, ApiResponse, Object};

use crate::types::db::item;

/// Request model for creating a new item
#[derive(Object, Debug)]
pub struct CreateItemRequest {
    /// Name of the item (1-100 characters)
    #[oai(validator(min_length = 1, max_length = 100))]
    pub name: String,

    /// Optional description of the item
    pub description: Option<String>,
}

/// Request model for replacing the fields of an existing item
#[derive(Object, Debug)]
pub struct UpdateItemRequest {
    /// New name of the item (1-100 characters)
    #[oai(validator(min_length = 1, max_length = 100))]
    pub name: String,

    /// New description of the item; omitting it clears the stored value
    pub description: Option<String>,
}

/// Response model representing an item
#[derive(Object, Debug)]
pub struct Item {
    /// Unique identifier for the item
    pub id: String,

    /// Name of the item
    pub name: String,

    /// Optional description of the item
    pub description: Option<String>,

    /// Timestamp when the item was created (ISO 8601 format)
    pub created_at: String,

    /// Timestamp when the item was last modified (ISO 8601 format)
    pub updated_at: String,
}

impl From<item::Model> for Item {
    fn from(model: item::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            created_at: to_rfc3339(model.created_at),
            updated_at: to_rfc3339(model.updated_at),
        }
    }
}

fn to_rfc3339(epoch_seconds: i64) -> String {
    DateTime::from_timestamp(epoch_seconds, 0)
        .map(|t| t.to_rfc3339())
        .unwrap_or_default()
}

/// Response for a successful item creation
#[derive(ApiResponse)]
pub enum CreateItemResponse {
    /// Item created
    #[oai(status = 201)]
    Created(Json<Item>),
}

/// Response for a successful item deletion
#[derive(ApiResponse)]
pub enum DeleteItemResponse {
    /// Item deleted, nothing to return
    #[oai(status = 204)]
    Deleted,
}
