pub mod charm;
pub mod cli;
pub mod config;
pub mod event;
pub mod http;
pub mod logging;
pub mod relation;
pub mod status;
pub mod validator;

pub use crate::charm::CosMockCharm;
pub use crate::status::Status;
