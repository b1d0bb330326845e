use crate::logging::config::LoggingConfig;
use crate::validator::dashboards::DashboardPolicy;
use duration_str::deserialize_duration;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Settings of the charm, read once at startup.
#[derive(Debug, Deserialize, Default, PartialEq, Clone)]
#[serde(default)]
pub struct CharmConfig {
    pub log: LoggingConfig,
    pub http: RequestConfig,
    pub targets: TargetsConfig,
    pub dashboards: DashboardsConfig,
}

#[derive(Debug, Deserialize, PartialEq, Clone)]
#[serde(default)]
pub struct RequestConfig {
    #[serde(deserialize_with = "deserialize_duration")]
    pub timeout: Duration,
    #[serde(deserialize_with = "deserialize_duration")]
    pub connect_timeout: Duration,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_REQUEST_TIMEOUT,
            connect_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

#[derive(Debug, Deserialize, Default, PartialEq, Clone)]
#[serde(default)]
pub struct TargetsConfig {
    /// Block when the advertised jobs declare no target at all.
    pub require_targets: bool,
}

#[derive(Debug, Deserialize, Default, PartialEq, Clone)]
#[serde(default)]
pub struct DashboardsConfig {
    /// Any invalid dashboard blocks the unit, even if others in the batch were valid.
    pub strict: bool,
}

impl DashboardsConfig {
    pub fn policy(&self) -> DashboardPolicy {
        if self.strict {
            DashboardPolicy::Strict
        } else {
            DashboardPolicy::Compatible
        }
    }
}
