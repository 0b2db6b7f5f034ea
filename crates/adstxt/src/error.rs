//! Error types for ads.txt reading and writing
//!
//! Parsing itself is infallible; only the transport and decoding layers
//! produce errors.

use thiserror::Error;

/// Result type for ads.txt operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading or writing ads.txt content
#[derive(Error, Debug)]
pub enum Error {
    /// IO error while reading from or writing to a stream
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input bytes are not valid UTF-8 text
    #[error("content is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}
