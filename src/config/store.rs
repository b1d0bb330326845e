use crate::config::charm_config::CharmConfig;
use crate::config::error::ConfigError;
use std::path::{Path, PathBuf};

pub struct CharmConfigStoreFile {
    path: PathBuf,
}

impl CharmConfigStoreFile {
    pub fn new(file_path: &Path) -> Self {
        Self {
            path: file_path.to_path_buf(),
        }
    }

    /// Loads the config file. A missing file means every setting keeps its default.
    ///
    /// Called before logging is initialised, so it does not log.
    pub fn load(&self) -> Result<CharmConfig, ConfigError> {
        if !self.path.exists() {
            return Ok(CharmConfig::default());
        }
        let config_file = std::fs::File::open(&self.path)?;
        Ok(serde_yaml::from_reader(config_file)?)
    }
}
