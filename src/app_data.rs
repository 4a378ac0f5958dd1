use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::stores::ItemStore;

/// Centralized application data following the main-owned stores pattern
///
/// The database connection is established once in main (or once per test
/// environment), stores are created over it here, and the whole struct is
/// shared with the API layer behind an Arc. Handlers read the single active
/// handle; nothing re-establishes a connection over a live one.
pub struct AppData {
    pub db: DatabaseConnection,
    pub item_store: Arc<ItemStore>,
}

impl AppData {
    /// Initialize all application data
    ///
    /// The connection should be established and migrated before calling this.
    pub fn init(db: DatabaseConnection) -> Self {
        tracing::debug!("Creating stores...");
        let item_store = Arc::new(ItemStore::new(db.clone()));
        tracing::debug!("Stores created");

        Self { db, item_store }
    }
}
