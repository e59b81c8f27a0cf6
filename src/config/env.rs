use std::time::Duration;

use thiserror::Error;

use crate::domain::Language;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub default_language: Language,
    pub draft_delay: Duration,
    pub daily_draft_limit: u32,
    pub directories: DirectoryConfig,
    pub logging: LoggingConfig,
    pub timezone: String,
}

#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    pub logs_dir: String,
    pub data_dir: String,
    pub db_filename: String,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}
