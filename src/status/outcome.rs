use super::Status;

/// Counters of a single validation pass. `succeeded` never exceeds `attempted`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ValidationOutcome {
    attempted: usize,
    succeeded: usize,
}

impl ValidationOutcome {
    /// Outcome of a pass that is going to check `attempted` items.
    pub fn expecting(attempted: usize) -> Self {
        Self {
            attempted,
            succeeded: 0,
        }
    }

    pub fn attempted(&self) -> usize {
        self.attempted
    }

    pub fn succeeded(&self) -> usize {
        self.succeeded
    }

    pub fn record_attempt(&mut self) {
        self.attempted += 1;
    }

    pub fn record_success(&mut self) {
        self.succeeded += 1;
        self.attempted = self.attempted.max(self.succeeded);
    }

    /// Maps the counters to the final status of the pass.
    ///
    /// Something was attempted but nothing succeeded: `Blocked(nothing_received)`.
    /// Any other case is `Active("Ready to go")`.
    pub fn status(&self, nothing_received: &str) -> Status {
        if self.attempted > 0 && self.succeeded == 0 {
            return Status::blocked(nothing_received);
        }
        Status::ready()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::nothing_to_check(ValidationOutcome::default(), Status::ready())]
    #[case::nothing_succeeded(ValidationOutcome::expecting(2), Status::blocked("none"))]
    #[case::partial(ValidationOutcome { attempted: 3, succeeded: 1 }, Status::ready())]
    #[case::all(ValidationOutcome { attempted: 3, succeeded: 3 }, Status::ready())]
    fn outcome_to_status(#[case] outcome: ValidationOutcome, #[case] expected: Status) {
        assert_eq!(outcome.status("none"), expected);
    }

    #[test]
    fn success_never_exceeds_attempts() {
        let mut outcome = ValidationOutcome::default();
        outcome.record_success();
        outcome.record_success();
        assert_eq!(outcome.attempted(), 2);
        assert_eq!(outcome.succeeded(), 2);

        outcome.record_attempt();
        assert_eq!(outcome.attempted(), 3);
        assert_eq!(outcome.succeeded(), 2);
    }
}
