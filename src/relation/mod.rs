//! Relation data advertised to the charm by the metrics and dashboard providers.
pub mod file;
pub mod peer;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelationDataError {
    #[error("error reading relation data: `{0}`")]
    IOError(#[from] std::io::Error),

    #[error("invalid relation data: `{0}`")]
    InvalidRelationData(#[from] serde_yaml::Error),
}

/// A Prometheus scrape job as published over the metrics endpoint relation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScrapeJob {
    #[serde(default = "default_metrics_path")]
    pub metrics_path: String,
    #[serde(default)]
    pub static_configs: Vec<StaticConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StaticConfig {
    /// `host:port` entries.
    #[serde(default)]
    pub targets: Vec<String>,
}

/// A Grafana dashboard as published over the dashboard relation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Dashboard {
    /// Name of the charm that provided the dashboard.
    pub charm: String,
    /// JSON text of the dashboard.
    pub content: String,
}

fn default_metrics_path() -> String {
    "/metrics".to_string()
}

/// Provides the scrape jobs currently advertised on the metrics endpoint relation.
pub trait MetricsConsumer {
    fn jobs(&self) -> Result<Vec<ScrapeJob>, RelationDataError>;
}

/// Provides the dashboards currently advertised on the dashboard relation.
pub trait DashboardConsumer {
    fn dashboards(&self) -> Result<Vec<Dashboard>, RelationDataError>;
}
