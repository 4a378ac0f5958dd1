// API layer - HTTP endpoints
pub mod health;
pub mod items;

use std::sync::Arc;

pub use health::HealthApi;
pub use items::ItemsApi;
use poem::Route;
use poem_openapi::OpenApiService;

use crate::app_data::AppData;

/// Compose the application routes over the given application data
///
/// Used by main and by integration tests so both exercise the same wiring.
/// API endpoints are mounted at the route root, Swagger UI under /swagger.
pub fn build_app(app_data: Arc<AppData>) -> Route {
    let api_service = OpenApiService::new(
        (HealthApi, ItemsApi::new(app_data.item_store.clone())),
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
    );
    let ui = api_service.swagger_ui();

    Route::new().nest("/swagger", ui).nest("/", api_service)
}
