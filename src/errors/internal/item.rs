use thiserror::Error;

/// Item store specific errors
#[derive(Error, Debug)]
pub enum ItemError {
    /// No item with the given identifier exists
    #[error("Item not found: {id}")]
    ItemNotFound { id: String },
}
