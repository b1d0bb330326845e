pub mod dashboards;
pub mod error;
pub mod targets;

pub use dashboards::{DashboardPolicy, DashboardValidator};
pub use error::ValidationError;
pub use targets::TargetValidator;
