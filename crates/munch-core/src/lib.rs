pub mod app_config;
pub mod config;
pub mod listing;
pub mod menu;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use listing::{leading_number, RestaurantListing, UNKNOWN_DISTANCE_MILES};
pub use menu::{MenuItem, RestaurantMenu, ALL_CATEGORIES};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
