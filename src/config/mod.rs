pub mod charm_config;
pub mod error;
pub mod store;
