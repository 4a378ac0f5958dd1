use std::sync::Arc;

use itemstash_backend::api;
use itemstash_backend::app_data::AppData;
use itemstash_backend::config::{database, init_logging, BootstrapSettings};
use poem::{listener::TcpListener, Server};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging().expect("Failed to initialize logging");

    let settings = BootstrapSettings::from_env().expect("Failed to load bootstrap settings");

    // Connect to database and bring the schema up
    let db = database::connect(settings.database_url())
        .await
        .expect("Failed to connect to database");
    database::migrate(&db).await.expect("Failed to run migrations");

    let app_data = Arc::new(AppData::init(db.clone()));
    let app = api::build_app(app_data);

    tracing::info!("Starting server on http://{}", settings.server_address());
    tracing::info!(
        "Swagger UI available at http://{}/swagger",
        settings.server_address()
    );

    let result = Server::new(TcpListener::bind(settings.server_address()))
        .run(app)
        .await;

    // Release the shared connection before exit
    if let Err(e) = database::close(db).await {
        tracing::warn!("Failed to close database connection: {}", e);
    }

    result
}
