use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use crate::errors::internal::{InternalError, ItemError};
use crate::types::db::item::{self, ActiveModel, Entity as Items};

/// ItemStore manages the persisted item collection
///
/// The store is the sole owner of stored item state; handlers never cache
/// items outside a single request.
pub struct ItemStore {
    db: DatabaseConnection,
}

impl ItemStore {
    /// Create a new ItemStore with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// List all stored items, oldest first
    ///
    /// An empty collection yields an empty vector, never an error.
    pub async fn list_items(&self) -> Result<Vec<item::Model>, InternalError> {
        Items::find()
            .order_by_asc(item::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_items", e))
    }

    /// Fetch a single item by its identifier
    ///
    /// # Returns
    /// * `Ok(Model)` - The stored item
    /// * `Err(InternalError)` - ItemNotFound if no item with that id exists
    pub async fn get_item(&self, id: &Uuid) -> Result<item::Model, InternalError> {
        let found = Items::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("get_item", e))?;

        match found {
            Some(model) => Ok(model),
            None => Err(ItemError::ItemNotFound { id: id.to_string() }.into()),
        }
    }

    /// Persist a new item with a freshly generated identifier
    pub async fn create_item(
        &self,
        name: String,
        description: Option<String>,
    ) -> Result<item::Model, InternalError> {
        let now = Utc::now().timestamp();

        let new_item = ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            name: Set(name),
            description: Set(description),
            created_at: Set(now),
            updated_at: Set(now),
        };

        new_item
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("create_item", e))
    }

    /// Replace the stored fields of an existing item
    ///
    /// Identifier and creation timestamp are unchanged; all other fields are
    /// replaced by the given values.
    pub async fn update_item(
        &self,
        id: &Uuid,
        name: String,
        description: Option<String>,
    ) -> Result<item::Model, InternalError> {
        let existing = self.get_item(id).await?;

        let mut active: ActiveModel = existing.into();
        active.name = Set(name);
        active.description = Set(description);
        active.updated_at = Set(Utc::now().timestamp());

        active
            .update(&self.db)
            .await
            .map_err(|e| InternalError::database("update_item", e))
    }

    /// Remove an item by its identifier
    ///
    /// # Returns
    /// * `Ok(())` - The item was removed
    /// * `Err(InternalError)` - ItemNotFound if no item with that id exists
    pub async fn delete_item(&self, id: &Uuid) -> Result<(), InternalError> {
        let result = Items::delete_by_id(id.to_string())
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("delete_item", e))?;

        if result.rows_affected == 0 {
            return Err(ItemError::ItemNotFound { id: id.to_string() }.into());
        }

        Ok(())
    }

    /// Remove every stored item
    ///
    /// Used by the test environment to guarantee an empty collection between
    /// test cases. Returns the number of removed items.
    pub async fn clear_items(&self) -> Result<u64, InternalError> {
        let result = Items::delete_many()
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("clear_items", e))?;

        Ok(result.rows_affected)
    }
}
