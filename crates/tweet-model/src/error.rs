//! Error types for the tweet-model crate.
//!
//! Decoding is the only fallible thing this crate does, so there is a
//! single error enum covering I/O on the input stream and malformed JSON.

use thiserror::Error;

/// Errors that can occur while decoding stream messages
#[derive(Error, Debug)]
pub enum DecodeError {
    /// I/O error occurred while reading the stream
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A line of the stream was not a valid message
    ///
    /// `line` is 1-based; it is 0 when decoding a single record outside of a stream.
    #[error("Invalid JSON at line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DecodeError>;
