use std::time::Duration;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::errors::internal::{DatabaseError, InternalError};

/// Upper bound on connection establishment; an unreachable target fails the
/// caller instead of hanging
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Establish the database connection
///
/// Connects to the given target and returns the connection. Does NOT run
/// migrations - call migrate() separately.
///
/// # Returns
/// * `Ok(DatabaseConnection)` - Connection established successfully
/// * `Err(InternalError)` - Connection failed or timed out
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, InternalError> {
    let mut options = ConnectOptions::new(database_url.to_string());
    options.connect_timeout(CONNECT_TIMEOUT);

    let db = Database::connect(options)
        .await
        .map_err(|e| InternalError::database("connect_database", e))?;

    tracing::debug!("Connected to database");

    Ok(db)
}

/// Run migrations on the database
///
/// Runs all pending migrations on the provided database connection.
pub async fn migrate(db: &DatabaseConnection) -> Result<(), InternalError> {
    Migrator::up(db, None)
        .await
        .map_err(|e| InternalError::database("run_migrations", e))?;

    tracing::debug!("Database migrations completed");

    Ok(())
}

/// Release the database connection
///
/// Consumes the handle, so a connection can only be closed by the code that
/// owns it and cannot be closed twice.
pub async fn close(db: DatabaseConnection) -> Result<(), InternalError> {
    db.close()
        .await
        .map_err(|source| InternalError::Database(DatabaseError::Close { source }))?;

    tracing::debug!("Database connection closed");

    Ok(())
}
