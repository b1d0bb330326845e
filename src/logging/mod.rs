pub mod config;

use self::config::{LoggingConfig, LoggingConfigError};
use thiserror::Error;
use tracing_subscriber::fmt::format::PrettyFields;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("error configuring logging `{0}`")]
    LoggingConfigError(#[from] LoggingConfigError),

    #[error("init logging error: `{0}`")]
    TryInitError(String),
}

pub struct Logging;

impl Logging {
    /// Installs the global subscriber. Logs go to stderr, stdout is left for the unit status.
    pub fn try_init(config: &LoggingConfig) -> Result<(), LoggingError> {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(config.logging_filter()?)
            .fmt_fields(PrettyFields::new())
            .try_init()
            .map_err(|_| {
                LoggingError::TryInitError(
                    "unable to set charm global logging subscriber".to_string(),
                )
            })
    }
}
