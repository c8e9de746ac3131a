//! Application configuration: TOML file with serde defaults.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{CatalogConfig, Config, PagerConfig, SelectionPolicy, ShareConfig};
