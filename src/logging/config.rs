use serde::Deserialize;
use thiserror::Error;
use tracing::metadata::LevelFilter;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Error, Debug)]
pub enum LoggingConfigError {
    #[error("invalid log level `{0}`")]
    InvalidLevel(String),
}

#[derive(Debug, Deserialize, PartialEq, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl LoggingConfig {
    /// Filter defaulting to the configured level. `RUST_LOG` directives take precedence.
    pub(crate) fn logging_filter(&self) -> Result<EnvFilter, LoggingConfigError> {
        let level = self
            .level
            .parse::<LevelFilter>()
            .map_err(|_| LoggingConfigError::InvalidLevel(self.level.clone()))?;
        Ok(EnvFilter::builder()
            .with_default_directive(level.into())
            .from_env_lossy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn known_levels_build_a_filter() {
        for level in ["trace", "debug", "info", "warn", "error", "off"] {
            let config = LoggingConfig {
                level: level.to_string(),
            };
            assert!(config.logging_filter().is_ok(), "level {level}");
        }
    }

    #[test]
    fn unknown_level_is_rejected() {
        let config = LoggingConfig {
            level: "chatty".to_string(),
        };
        assert_matches!(
            config.logging_filter(),
            Err(LoggingConfigError::InvalidLevel(level)) if level == "chatty"
        );
    }
}
