pub mod outcome;

use std::fmt::{Display, Formatter};
use std::sync::{PoisonError, RwLock};
use tracing::debug;

pub const READY_MESSAGE: &str = "Ready to go";
pub const STARTING_MESSAGE: &str = "Starting charm";

/// Unit status as displayed by the orchestration system.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Maintenance(String),
    Active(String),
    Blocked(String),
}

impl Status {
    pub fn maintenance(message: impl Into<String>) -> Self {
        Self::Maintenance(message.into())
    }

    pub fn active(message: impl Into<String>) -> Self {
        Self::Active(message.into())
    }

    pub fn blocked(message: impl Into<String>) -> Self {
        Self::Blocked(message.into())
    }

    /// `Active("Ready to go")`, the status of every successful validation pass.
    pub fn ready() -> Self {
        Self::Active(READY_MESSAGE.to_string())
    }

    pub fn level(&self) -> &'static str {
        match self {
            Status::Maintenance(_) => "maintenance",
            Status::Active(_) => "active",
            Status::Blocked(_) => "blocked",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Status::Maintenance(message) | Status::Active(message) | Status::Blocked(message) => {
                message
            }
        }
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self, Status::Blocked(_))
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.level(), self.message())
    }
}

/// Write-only slot receiving every status change of the unit.
pub trait StatusSink {
    fn set_status(&self, status: Status);
}

/// The unit's single status value. Every write overwrites the previous one.
#[derive(Debug)]
pub struct UnitStatus(RwLock<Status>);

impl UnitStatus {
    pub fn new(initial: Status) -> Self {
        Self(RwLock::new(initial))
    }

    pub fn current(&self) -> Status {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for UnitStatus {
    fn default() -> Self {
        Self::new(Status::maintenance(STARTING_MESSAGE))
    }
}

impl StatusSink for UnitStatus {
    fn set_status(&self, status: Status) {
        debug!(level = status.level(), message = status.message(), "Setting unit status");
        *self.0.write().unwrap_or_else(PoisonError::into_inner) = status;
    }
}
