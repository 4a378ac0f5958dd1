use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Database error: {operation} failed: {source}")]
    Operation {
        operation: String,
        #[source]
        source: sea_orm::DbErr,
    },

    #[error("Closing connection failed: {source}")]
    Close {
        #[source]
        source: sea_orm::DbErr,
    },
}
