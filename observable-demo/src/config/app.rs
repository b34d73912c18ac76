use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use validator::Validate;

use crate::{counters::EventKind, error::AppError};

const DEFAULT_CONFIG: &str = include_str!("../../resources/config/default.toml");
const DEFAULT_CONFIG_PREFIX: &str = "APP";

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct AppConfig {
    #[validate(range(min = 1))]
    pub rounds: u32,
    pub event: EventKind,
    pub fast_start: u32,
    pub fast_step: u32,
    pub slow_start: u32,
    pub slow_step: u32,
}

impl AppConfig {
    pub fn new() -> Result<Self, AppError> {
        let config = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(Environment::with_prefix(DEFAULT_CONFIG_PREFIX))
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }
}

#[cfg(test)]
mod tests {
    use crate::{counters::EventKind, error::AppError};

    use super::AppConfig;

    #[test]
    fn test_new() {
        let result = AppConfig::new();
        assert!(
            matches!(result, Ok(ref x) if x.rounds == 3 && x.event == EventKind::Tick),
            "By default, it should return a valid config"
        );

        temp_env::with_var("APP_ROUNDS", Some("7"), || {
            let result = AppConfig::new();
            assert!(
                matches!(result, Ok(x) if x.rounds == 7),
                "Should take into account env vars"
            )
        });

        temp_env::with_var("APP_EVENT", Some("reset"), || {
            let result = AppConfig::new();
            assert!(
                matches!(result, Ok(x) if x.event == EventKind::Reset),
                "Should read the event kind from env vars"
            )
        });

        temp_env::with_var("APP_FAST_STEP", Some("invalid"), || {
            let result = AppConfig::new();
            assert!(
                matches!(result, Err(AppError::Config(_))),
                "Should return error when config is not valid"
            )
        });

        temp_env::with_var("APP_ROUNDS", Some("0"), || {
            let result = AppConfig::new();
            assert!(
                matches!(result, Err(AppError::InvalidSettings(_))),
                "Should reject a config without any round"
            )
        });
    }
}
