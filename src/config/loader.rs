use std::{env, time::Duration};

use crate::domain::Language;

use super::env::{AppConfig, ConfigError, DirectoryConfig, LoggingConfig};

pub fn load_config() -> Result<AppConfig, ConfigError> {
    AppConfig::from_env()
}

impl AppConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let default_language = env::var("RTI_DEFAULT_LANGUAGE")
            .map(|tag| Language::from_tag(&tag))
            .unwrap_or(Language::DEFAULT);

        let draft_delay = Duration::from_millis(parse_int("DRAFT_DELAY_MS")?.unwrap_or(2_000));
        let daily_draft_limit = parse_int("DAILY_DRAFT_LIMIT")?.unwrap_or(3) as u32;

        let directories = DirectoryConfig {
            logs_dir: env::var("LOGS_DIR").unwrap_or_else(|_| "logs".to_string()),
            data_dir: env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()),
            db_filename: env::var("DB_FILENAME").unwrap_or_else(|_| "drafts.db".to_string()),
        };

        let logging = LoggingConfig {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        };

        let timezone = env::var("RTI_TIMEZONE").unwrap_or_else(|_| "Asia/Kolkata".to_string());

        Ok(Self {
            default_language,
            draft_delay,
            daily_draft_limit,
            directories,
            logging,
            timezone,
        })
    }
}

fn parse_int(key: &'static str) -> Result<Option<u64>, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { key, value }),
        Err(_) => Ok(None),
    }
}
