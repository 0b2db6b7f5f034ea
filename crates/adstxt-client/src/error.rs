//! Error types for ads.txt fetching

use thiserror::Error;

/// Errors that can occur while fetching a remote ads.txt file
#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level HTTP failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("unexpected status {status} fetching {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    /// The requested URL could not be built or parsed
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The response body is not valid UTF-8 text
    #[error("response body is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, Error>;
