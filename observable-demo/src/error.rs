use config::ConfigError;
use observable::NotifyError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unable to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Invalid settings: {0}")]
    InvalidSettings(#[from] ValidationErrors),
    #[error("Broadcast failed: {0}")]
    Notify(#[from] NotifyError),
}
