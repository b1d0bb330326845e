use super::error::ValidationError;
use crate::relation::Dashboard;
use crate::status::outcome::ValidationOutcome;
use crate::status::{Status, StatusSink};
use sha2::{Digest, Sha256};
use tracing::{debug, error};

pub const TESTING_DASHBOARDS_MESSAGE: &str = "Testing dashboards";
pub const NO_DASHBOARDS_MESSAGE: &str = "No dashboards received";

const DIGEST_PREFIX_LEN: usize = 7;

/// How an invalid dashboard affects the final status of a pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DashboardPolicy {
    /// The invalid dashboard is reported as `Blocked`, then the final status only depends on
    /// whether any dashboard was valid. A valid dashboard earlier in the batch therefore
    /// supersedes the failure with `Active`.
    #[default]
    Compatible,
    /// Any invalid dashboard makes the final status `Blocked` with the parse error.
    Strict,
}

/// Parses `dashboard` and returns the file name Grafana would store it under:
/// `juju_{charm}_{first 7 hex chars of the sha256 of the content}.json`.
pub fn dashboard_filename(dashboard: &Dashboard) -> Result<String, ValidationError> {
    let content = dashboard.content.as_bytes();
    serde_json::from_slice::<serde_json::Value>(content).map_err(|err| {
        ValidationError::ParseError {
            charm: dashboard.charm.clone(),
            err,
        }
    })?;
    let digest = format!("{:x}", Sha256::digest(content));
    Ok(format!(
        "juju_{}_{}.json",
        dashboard.charm,
        &digest[..DIGEST_PREFIX_LEN]
    ))
}

pub struct DashboardValidator {
    policy: DashboardPolicy,
}

impl DashboardValidator {
    pub fn new(policy: DashboardPolicy) -> Self {
        Self { policy }
    }

    /// Validates `dashboards` and returns the resulting unit status.
    ///
    /// `Maintenance("Testing dashboards")` is always published to `sink` first, even without
    /// dashboards. The first invalid dashboard stops the pass.
    pub fn validate<S: StatusSink>(&self, dashboards: &[Dashboard], sink: &S) -> Status {
        sink.set_status(Status::maintenance(TESTING_DASHBOARDS_MESSAGE));

        let mut outcome = ValidationOutcome::expecting(dashboards.len());
        let result = dashboards.iter().try_for_each(|dashboard| {
            let filename = dashboard_filename(dashboard)?;
            debug!(charm = %dashboard.charm, %filename, "Received valid dashboard");
            outcome.record_success();
            Ok::<(), ValidationError>(())
        });

        if let Err(err) = result {
            error!(%err, "Dashboard validation failed");
            let blocked = Status::blocked(err.to_string());
            if self.policy == DashboardPolicy::Strict {
                return blocked;
            }
            sink.set_status(blocked);
        }

        if outcome.succeeded() == 0 && outcome.attempted() > 0 {
            debug!("No dashboards received");
        } else {
            debug!(dashboards = outcome.succeeded(), "Dashboards validated");
        }
        outcome.status(NO_DASHBOARDS_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relation::tests::dashboard;
    use crate::status::tests::MockStatusSink;
    use assert_matches::assert_matches;
    use mockall::predicate::{eq, function};
    use mockall::Sequence;
    use rstest::rstest;

    const VALID: &str = r#"{"title": "Node exporter", "panels": []}"#;
    const INVALID: &str = r#"{"title": "#;

    fn maintenance_sink() -> MockStatusSink {
        let mut sink = MockStatusSink::new();
        sink.expect_set_status()
            .with(eq(Status::maintenance(TESTING_DASHBOARDS_MESSAGE)))
            .once()
            .return_const(());
        sink
    }

    /// Expects `Maintenance`, then a `Blocked` status carrying a parse error.
    fn maintenance_then_parse_error_sink() -> MockStatusSink {
        let mut sink = MockStatusSink::new();
        let mut seq = Sequence::new();
        sink.expect_set_status()
            .with(eq(Status::maintenance(TESTING_DASHBOARDS_MESSAGE)))
            .once()
            .in_sequence(&mut seq)
            .return_const(());
        sink.expect_set_status()
            .with(function(|status: &Status| {
                status.is_blocked() && status.message().starts_with("invalid dashboard from")
            }))
            .once()
            .in_sequence(&mut seq)
            .return_const(());
        sink
    }

    #[test]
    fn filename_of_empty_dashboard() {
        let filename = dashboard_filename(&dashboard("grafana", "{}")).unwrap();
        // sha256("{}") = 44136fa355b3678a1146ad16f7e8649e94fb4fc21fe77e8310c060f61caaff8a
        assert_eq!(filename, "juju_grafana_44136fa.json");
    }

    #[test]
    fn filename_depends_on_content_and_charm() {
        let a = dashboard_filename(&dashboard("grafana", VALID)).unwrap();
        let b = dashboard_filename(&dashboard("loki", VALID)).unwrap();
        let c = dashboard_filename(&dashboard("grafana", "{}")).unwrap();

        assert!(a.starts_with("juju_grafana_"));
        assert!(b.starts_with("juju_loki_"));
        assert_eq!(a["juju_grafana_".len()..], b["juju_loki_".len()..]);
        assert_ne!(a, c);
    }

    #[test]
    fn filename_of_invalid_dashboard() {
        let err = dashboard_filename(&dashboard("grafana", INVALID)).unwrap_err();
        assert_matches!(err, ValidationError::ParseError { charm, .. } if charm == "grafana");
    }

    #[rstest]
    #[case::nan(r#"{"threshold": NaN}"#)]
    #[case::infinity(r#"{"threshold": Infinity}"#)]
    #[case::number_out_of_range(r#"{"threshold": 1e400}"#)]
    #[case::leading_bom("\u{feff}{}")]
    fn only_strict_json_is_a_valid_dashboard(#[case] content: &str) {
        let err = dashboard_filename(&dashboard("grafana", content)).unwrap_err();
        assert_matches!(err, ValidationError::ParseError { .. });
    }

    #[test]
    fn all_dashboards_valid() {
        let dashboards = vec![
            dashboard("grafana", "{}"),
            dashboard("prometheus", VALID),
            dashboard("loki", "[]"),
        ];

        let status = DashboardValidator::new(DashboardPolicy::Compatible)
            .validate(&dashboards, &maintenance_sink());

        assert_eq!(status, Status::active("Ready to go"));
    }

    #[test]
    fn no_dashboards_still_tests() {
        let status =
            DashboardValidator::new(DashboardPolicy::Compatible).validate(&[], &maintenance_sink());

        assert_eq!(status, Status::ready());
    }

    #[test]
    fn single_invalid_dashboard() {
        let dashboards = vec![dashboard("grafana", INVALID)];

        let status = DashboardValidator::new(DashboardPolicy::Compatible)
            .validate(&dashboards, &maintenance_then_parse_error_sink());

        assert_eq!(status, Status::blocked(NO_DASHBOARDS_MESSAGE));
    }

    #[test]
    fn invalid_first_dashboard_aborts_the_batch() {
        let dashboards = vec![dashboard("grafana", INVALID), dashboard("loki", VALID)];

        let status = DashboardValidator::new(DashboardPolicy::Compatible)
            .validate(&dashboards, &maintenance_then_parse_error_sink());

        assert_eq!(status, Status::blocked(NO_DASHBOARDS_MESSAGE));
    }

    #[test]
    fn earlier_valid_dashboard_supersedes_parse_error() {
        let dashboards = vec![dashboard("loki", VALID), dashboard("grafana", INVALID)];

        let status = DashboardValidator::new(DashboardPolicy::Compatible)
            .validate(&dashboards, &maintenance_then_parse_error_sink());

        assert_eq!(status, Status::ready());
    }

    #[test]
    fn strict_policy_keeps_parse_error() {
        let dashboards = vec![dashboard("loki", VALID), dashboard("grafana", INVALID)];

        let status =
            DashboardValidator::new(DashboardPolicy::Strict).validate(&dashboards, &maintenance_sink());

        assert!(status.is_blocked());
        assert!(status
            .message()
            .starts_with("invalid dashboard from `grafana`:"));
    }

    #[test]
    fn strict_policy_with_valid_dashboards() {
        let dashboards = vec![dashboard("grafana", "{}")];

        let status =
            DashboardValidator::new(DashboardPolicy::Strict).validate(&dashboards, &maintenance_sink());

        assert_eq!(status, Status::ready());
    }

    #[test]
    fn validating_twice_yields_same_status() {
        let validator = DashboardValidator::new(DashboardPolicy::Compatible);
        let dashboards = vec![dashboard("loki", VALID), dashboard("grafana", INVALID)];

        let first = validator.validate(&dashboards, &maintenance_then_parse_error_sink());
        let second = validator.validate(&dashboards, &maintenance_then_parse_error_sink());

        assert_eq!(first, second);
    }
}
