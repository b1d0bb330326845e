//! The charm: dispatches relation events to the validators and owns the unit status.
pub mod error;

use self::error::CharmError;
use crate::event::channel::EventConsumer;
use crate::event::CharmEvent;
use crate::http::client::HttpClient;
use crate::relation::peer::{PeerData, PeerStore};
use crate::relation::{DashboardConsumer, MetricsConsumer};
use crate::status::{Status, StatusSink, UnitStatus};
use crate::validator::dashboards::TESTING_DASHBOARDS_MESSAGE;
use crate::validator::{DashboardValidator, TargetValidator};
use tracing::{debug, error, info, info_span};

pub struct CosMockCharm<C, M, D, P>
where
    C: HttpClient,
    M: MetricsConsumer,
    D: DashboardConsumer,
    P: PeerStore,
{
    metrics_consumer: M,
    dashboard_consumer: D,
    target_validator: TargetValidator<C>,
    dashboard_validator: DashboardValidator,
    peers: PeerData<P>,
    unit_status: UnitStatus,
}

impl<C, M, D, P> CosMockCharm<C, M, D, P>
where
    C: HttpClient,
    M: MetricsConsumer,
    D: DashboardConsumer,
    P: PeerStore,
{
    pub fn new(
        metrics_consumer: M,
        dashboard_consumer: D,
        target_validator: TargetValidator<C>,
        dashboard_validator: DashboardValidator,
        peers: PeerData<P>,
    ) -> Self {
        Self {
            metrics_consumer,
            dashboard_consumer,
            target_validator,
            dashboard_validator,
            peers,
            unit_status: UnitStatus::default(),
        }
    }

    /// Starts from `status` instead of the default maintenance status.
    pub fn with_status(self, status: Status) -> Self {
        Self {
            unit_status: UnitStatus::new(status),
            ..self
        }
    }

    pub fn status(&self) -> Status {
        self.unit_status.current()
    }

    pub fn peers(&self) -> &PeerData<P> {
        &self.peers
    }

    /// Handles events one at a time until every publisher is gone.
    pub fn run(&self, consumer: EventConsumer<CharmEvent>) {
        while let Some(event) = consumer.next_event() {
            self.handle(event);
        }
        debug!("Event channel closed");
    }

    pub fn handle(&self, event: CharmEvent) {
        let span = info_span!("charm_event", event = event.name());
        let _guard = span.enter();

        debug!("{} received", event.name());
        match event {
            CharmEvent::ConfigChanged => self.on_config_changed(),
            CharmEvent::ScrapeTargetsChanged => self.on_scrape_targets_changed(),
            CharmEvent::DashboardsChanged => self.on_dashboards_changed(),
        }
        info!(status = %self.unit_status.current(), "Event handled");
    }

    fn on_config_changed(&self) {
        self.unit_status.set_status(Status::ready());
    }

    fn on_scrape_targets_changed(&self) {
        let status = self.validate_targets().unwrap_or_else(|err| {
            error!(%err, "Scrape targets validation failed");
            Status::blocked(err.to_string())
        });
        self.unit_status.set_status(status);
    }

    fn validate_targets(&self) -> Result<Status, CharmError> {
        let jobs = self.metrics_consumer.jobs()?;
        debug!(?jobs, "Current scrape jobs");
        Ok(self
            .target_validator
            .validate(&jobs, self.unit_status.current(), &self.unit_status)?)
    }

    fn on_dashboards_changed(&self) {
        let status = match self.dashboard_consumer.dashboards() {
            Ok(dashboards) => self
                .dashboard_validator
                .validate(&dashboards, &self.unit_status),
            Err(err) => {
                self.unit_status
                    .set_status(Status::maintenance(TESTING_DASHBOARDS_MESSAGE));
                error!(%err, "Could not read dashboards");
                Status::blocked(err.to_string())
            }
        };
        self.unit_status.set_status(status);
    }
}
