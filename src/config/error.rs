use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("error reading config: `{0}`")]
    IOError(#[from] std::io::Error),

    #[error("error parsing config: `{0}`")]
    InvalidYamlConfiguration(#[from] serde_yaml::Error),
}
