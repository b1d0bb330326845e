use super::error::ValidationError;
use crate::http::client::HttpClient;
use crate::relation::ScrapeJob;
use crate::status::outcome::ValidationOutcome;
use crate::status::{Status, StatusSink};
use tracing::debug;

pub const TESTING_TARGETS_MESSAGE: &str = "Testing targets";
pub const NO_TARGETS_MESSAGE: &str = "No targets received";

const DEFAULT_PROTOCOL: &str = "http://";

/// URL requested for `target` (`host:port`) on the job's metrics path.
pub fn target_url(target: &str, metrics_path: &str) -> String {
    format!("{DEFAULT_PROTOCOL}{target}{metrics_path}")
}

/// Requests every target advertised by the scrape jobs, one at a time.
pub struct TargetValidator<C: HttpClient> {
    client: C,
    require_targets: bool,
}

impl<C: HttpClient> TargetValidator<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            require_targets: false,
        }
    }

    /// When set, jobs that declare no target at all block the unit.
    pub fn with_require_targets(self, require_targets: bool) -> Self {
        Self {
            require_targets,
            ..self
        }
    }

    /// Validates `jobs` and returns the resulting unit status.
    ///
    /// Without jobs there is nothing to check and `prior` is returned untouched. Otherwise
    /// `Maintenance("Testing targets")` is published to `sink` before any request. The first
    /// failing request aborts the pass and the remaining targets are not requested.
    pub fn validate<S: StatusSink>(
        &self,
        jobs: &[ScrapeJob],
        prior: Status,
        sink: &S,
    ) -> Result<Status, ValidationError> {
        if jobs.is_empty() {
            debug!("No jobs received");
            return Ok(prior);
        }
        sink.set_status(Status::maintenance(TESTING_TARGETS_MESSAGE));
        debug!(jobs = jobs.len(), "Scrape jobs found");

        let mut outcome = ValidationOutcome::default();
        for job in jobs {
            debug!(static_configs = job.static_configs.len(), "Static configs found");
            for config in &job.static_configs {
                debug!(metrics_path = %job.metrics_path, targets = ?config.targets, "Requesting targets");
                for target in &config.targets {
                    outcome.record_attempt();
                    self.request_target(&target_url(target, &job.metrics_path))?;
                    outcome.record_success();
                }
            }
        }

        if self.require_targets && outcome.succeeded() == 0 {
            debug!("No targets received");
            return Ok(Status::blocked(NO_TARGETS_MESSAGE));
        }
        debug!(targets = outcome.succeeded(), "Targets validated");
        Ok(outcome.status(NO_TARGETS_MESSAGE))
    }

    fn request_target(&self, url: &str) -> Result<(), ValidationError> {
        debug!(%url, "Requesting target");
        let response = self
            .client
            .get(url)
            .map_err(|err| ValidationError::RequestFailure {
                url: url.to_string(),
                reason: err.to_string(),
            })?;

        let status_code = response.status();
        if !status_code.is_success() {
            return Err(ValidationError::RequestFailure {
                url: url.to_string(),
                reason: format!("unexpected HTTP response status code {status_code}"),
            });
        }
        debug!(%url, "Target is reachable");
        Ok(())
    }
}
