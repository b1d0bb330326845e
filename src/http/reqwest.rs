//! # Blocking reqwest client used to scrape targets
use super::client::{HttpClient, HttpClientError};
use super::config::HttpConfig;
use reqwest::blocking::{Client, Response};

#[derive(thiserror::Error, Debug)]
pub enum ReqwestBuildError {
    #[error("could not build the reqwest client: {0}")]
    ClientBuilder(String),
}

/// [HttpClient] implementation backed by a reqwest blocking client.
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Builds the client with the request and connection timeouts from the provided configuration.
    pub fn try_new(config: HttpConfig) -> Result<Self, ReqwestBuildError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.conn_timeout)
            .build()
            .map_err(|err| ReqwestBuildError::ClientBuilder(err.to_string()))?;
        Ok(Self { client })
    }
}

impl HttpClient for ReqwestHttpClient {
    fn get(&self, url: &str) -> Result<http::Response<Vec<u8>>, HttpClientError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|err| HttpClientError::Transport(err.to_string()))?;
        try_build_response(response)
    }
}

/// Helper to build a [http::Response<Vec<u8>>] from a reqwest's blocking response.
/// It includes status, version and body. Headers are not included.
fn try_build_response(res: Response) -> Result<http::Response<Vec<u8>>, HttpClientError> {
    let status = res.status();
    let version = res.version();
    let body: Vec<u8> = res
        .bytes()
        .map_err(|err| HttpClientError::InvalidResponse(err.to_string()))?
        .into();
    http::Response::builder()
        .status(status)
        .version(version)
        .body(body)
        .map_err(|err| HttpClientError::InvalidResponse(err.to_string()))
}
