use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("requesting `{url}` failed: {reason}")]
    RequestFailure { url: String, reason: String },

    #[error("invalid dashboard from `{charm}`: {err}")]
    ParseError {
        charm: String,
        err: serde_json::Error,
    },
}
