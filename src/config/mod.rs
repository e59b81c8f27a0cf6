pub mod env;
mod loader;

pub use env::{AppConfig, DirectoryConfig, LoggingConfig};
pub use loader::load_config;
