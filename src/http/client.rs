use http::Response;
use thiserror::Error;

/// An enumeration of potential errors related to the HTTP client.
#[derive(Error, Debug)]
pub enum HttpClientError {
    #[error("{0}")]
    Transport(String),
    #[error("could not read the response: {0}")]
    InvalidResponse(String),
}

/// The `HttpClient` trait defines the HTTP get interface used to reach scrape targets.
pub trait HttpClient {
    /// Blocking GET of `url`. Any received response is returned, whatever its status code.
    fn get(&self, url: &str) -> Result<Response<Vec<u8>>, HttpClientError>;
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use mockall::mock;

    mock! {
        pub HttpClient {}
        impl HttpClient for HttpClient {
            fn get(&self, url: &str) -> Result<Response<Vec<u8>>, HttpClientError>;
        }
    }

    pub fn response_with_status(status: u16) -> Response<Vec<u8>> {
        Response::builder()
            .status(status)
            .body(Vec::new())
            .unwrap()
    }

    impl MockHttpClient {
        pub fn should_get(&mut self, url: &str, status: u16) {
            let url = url.to_string();
            self.expect_get()
                .once()
                .withf(move |requested| requested.to_string() == url)
                .returning(move |_| Ok(response_with_status(status)));
        }

        pub fn should_not_get(&mut self, url: &str, error: HttpClientError) {
            let url = url.to_string();
            self.expect_get()
                .once()
                .withf(move |requested| requested.to_string() == url)
                .return_once(move |_| Err(error));
        }
    }
}
