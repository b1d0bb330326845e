use crate::config::charm_config::RequestConfig;
use std::time::Duration;

pub struct HttpConfig {
    pub(crate) timeout: Duration,
    pub(crate) conn_timeout: Duration,
}

impl HttpConfig {
    pub fn new(timeout: Duration, conn_timeout: Duration) -> Self {
        Self {
            timeout,
            conn_timeout,
        }
    }
}

impl From<&RequestConfig> for HttpConfig {
    fn from(config: &RequestConfig) -> Self {
        Self::new(config.timeout, config.connect_timeout)
    }
}
