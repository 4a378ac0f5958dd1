// Common test utilities for integration tests

use std::sync::Arc;

use itemstash_backend::api;
use itemstash_backend::app_data::AppData;
use itemstash_backend::config::database;
use itemstash_backend::stores::ItemStore;
use poem::test::TestClient;
use poem::Route;
use sea_orm::DatabaseConnection;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;

/// An ephemeral PostgreSQL instance provisioned for a single test
///
/// Provisioning blocks until the image's wait strategy observes the
/// PostgreSQL readiness log line, with a startup timeout generous enough to
/// absorb a first-time image pull. Dropping the value stops and removes the
/// container on all exit paths, including panicking tests.
pub struct TestDb {
    // Held for its Drop; dropping stops and removes the container
    #[allow(dead_code)]
    container: ContainerAsync<Postgres>,
    pub db: DatabaseConnection,
}

impl TestDb {
    /// Provision a disposable PostgreSQL instance, connect to it and bring
    /// the schema up
    pub async fn provision() -> Self {
        let container = Postgres::default()
            .start()
            .await
            .expect("Failed to start PostgreSQL container");

        let host = container
            .get_host()
            .await
            .expect("Failed to get container host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get mapped port");

        let database_url = format!("postgres://postgres:postgres@{}:{}/postgres", host, port);

        // Same connect/migrate path the application uses at startup
        let db = database::connect(&database_url)
            .await
            .expect("Failed to connect to test database");
        database::migrate(&db)
            .await
            .expect("Failed to run migrations");

        Self { container, db }
    }

    /// Remove all stored items so the next phase observes an empty collection
    pub async fn reset(&self) {
        ItemStore::new(self.db.clone())
            .clear_items()
            .await
            .expect("Failed to clear items");
    }
}

/// Provision a test database and build a client over the application routes
///
/// The returned TestDb must be kept alive for the duration of the test; the
/// container is torn down when it is dropped.
pub async fn setup_app() -> (TestDb, TestClient<Route>) {
    let test_db = TestDb::provision().await;
    let app_data = Arc::new(AppData::init(test_db.db.clone()));
    let client = TestClient::new(api::build_app(app_data));

    (test_db, client)
}
