// Configuration layer - environment, database, logging
pub mod bootstrap_settings;
pub mod database;
pub mod logging;

pub use bootstrap_settings::BootstrapSettings;
pub use logging::init_logging;
