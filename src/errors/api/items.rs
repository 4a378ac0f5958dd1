use poem_openapi::{payload::Json, ApiResponse, Object};

use crate::errors::internal::{InternalError, ItemError};

/// Standardized error response for item endpoints
#[derive(Object, Debug)]
pub struct ItemsErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

/// Item API error types
#[derive(ApiResponse, Debug)]
pub enum ItemsError {
    /// Identifier is not a valid item id
    #[oai(status = 400)]
    InvalidItemId(Json<ItemsErrorResponse>),

    /// No item with the given identifier exists
    #[oai(status = 404)]
    ItemNotFound(Json<ItemsErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ItemsErrorResponse>),
}

impl ItemsError {
    /// Create an InvalidItemId error
    pub fn invalid_item_id(id: &str) -> Self {
        ItemsError::InvalidItemId(Json(ItemsErrorResponse {
            error: "invalid_item_id".to_string(),
            message: format!("'{}' is not a valid item id", id),
            status_code: 400,
        }))
    }

    /// Create an ItemNotFound error
    pub fn item_not_found(id: &str) -> Self {
        ItemsError::ItemNotFound(Json(ItemsErrorResponse {
            error: "item_not_found".to_string(),
            message: format!("No item found with id '{}'", id),
            status_code: 404,
        }))
    }

    /// Convert InternalError to ItemsError
    ///
    /// This is the explicit conversion point from internal errors to API errors.
    /// Internal error details are logged but not exposed to clients.
    pub fn from_internal_error(err: InternalError) -> Self {
        match &err {
            InternalError::Item(ItemError::ItemNotFound { id }) => {
                tracing::debug!("Item not found: {}", id);
                Self::item_not_found(id)
            }
            InternalError::Database(_) => {
                tracing::error!("Database error in item operation: {}", err);
                Self::internal_server_error()
            }
        }
    }

    /// Create a generic internal server error
    ///
    /// Always returns a generic message without exposing internal details.
    fn internal_server_error() -> Self {
        ItemsError::InternalError(Json(ItemsErrorResponse {
            error: "internal_error".to_string(),
            message: "An internal error occurred".to_string(),
            status_code: 500,
        }))
    }
}
