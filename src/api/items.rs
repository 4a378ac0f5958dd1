use std::sync::Arc;

use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};
use uuid::Uuid;

use crate::errors::ItemsError;
use crate::stores::ItemStore;
use crate::types::dto::items::{
    CreateItemRequest, CreateItemResponse, DeleteItemResponse, Item, UpdateItemRequest,
};

/// Items API endpoints
pub struct ItemsApi {
    item_store: Arc<ItemStore>,
}

impl ItemsApi {
    /// Create a new ItemsApi with the given ItemStore
    pub fn new(item_store: Arc<ItemStore>) -> Self {
        Self { item_store }
    }
}

/// API tags for item endpoints
#[derive(Tags)]
enum ApiTags {
    /// Item management endpoints
    Items,
}

#[OpenApi]
impl ItemsApi {
    /// List all items
    ///
    /// Returns every stored item; an empty collection yields an empty array
    #[oai(path = "/items", method = "get", tag = "ApiTags::Items")]
    async fn list_items(&self) -> Result<Json<Vec<Item>>, ItemsError> {
        let items = self
            .item_store
            .list_items()
            .await
            .map_err(ItemsError::from_internal_error)?;

        Ok(Json(items.into_iter().map(Item::from).collect()))
    }

    /// Get a single item by id
    #[oai(path = "/items/:id", method = "get", tag = "ApiTags::Items")]
    async fn get_item(&self, id: Path<String>) -> Result<Json<Item>, ItemsError> {
        let item_id = parse_item_id(&id.0)?;

        let item = self
            .item_store
            .get_item(&item_id)
            .await
            .map_err(ItemsError::from_internal_error)?;

        Ok(Json(item.into()))
    }

    /// Create a new item
    ///
    /// Accepts item details and returns the created item with generated id
    /// and timestamps
    #[oai(path = "/items", method = "post", tag = "ApiTags::Items")]
    async fn create_item(
        &self,
        body: Json<CreateItemRequest>,
    ) -> Result<CreateItemResponse, ItemsError> {
        let item = self
            .item_store
            .create_item(body.0.name, body.0.description)
            .await
            .map_err(ItemsError::from_internal_error)?;

        Ok(CreateItemResponse::Created(Json(item.into())))
    }

    /// Update an existing item
    ///
    /// Replaces the stored fields other than the identifier and returns the
    /// updated item
    #[oai(path = "/items/:id", method = "put", tag = "ApiTags::Items")]
    async fn update_item(
        &self,
        id: Path<String>,
        body: Json<UpdateItemRequest>,
    ) -> Result<Json<Item>, ItemsError> {
        let item_id = parse_item_id(&id.0)?;

        let item = self
            .item_store
            .update_item(&item_id, body.0.name, body.0.description)
            .await
            .map_err(ItemsError::from_internal_error)?;

        Ok(Json(item.into()))
    }

    /// Delete an item by id
    #[oai(path = "/items/:id", method = "delete", tag = "ApiTags::Items")]
    async fn delete_item(&self, id: Path<String>) -> Result<DeleteItemResponse, ItemsError> {
        let item_id = parse_item_id(&id.0)?;

        self.item_store
            .delete_item(&item_id)
            .await
            .map_err(ItemsError::from_internal_error)?;

        Ok(DeleteItemResponse::Deleted)
    }
}

/// Validate the identifier format before any store call
///
/// A malformed id is a client error, distinct from a well-formed id that
/// matches no stored item.
fn parse_item_id(raw: &str) -> Result<Uuid, ItemsError> {
    Uuid::parse_str(raw).map_err(|_| ItemsError::invalid_item_id(raw))
}
