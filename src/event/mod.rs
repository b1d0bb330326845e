pub mod channel;

use clap::ValueEnum;

/// Events the charm reacts to. Each one triggers a single synchronous handler run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CharmEvent {
    ConfigChanged,
    ScrapeTargetsChanged,
    DashboardsChanged,
}

impl CharmEvent {
    pub fn name(&self) -> &'static str {
        match self {
            CharmEvent::ConfigChanged => "config_changed",
            CharmEvent::ScrapeTargetsChanged => "scrape_targets_changed",
            CharmEvent::DashboardsChanged => "dashboards_changed",
        }
    }
}
