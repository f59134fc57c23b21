//! Error types for the simulator.

use thiserror::Error;

use crate::common::config::MAX_FRAME_COUNT;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All errors the simulator can report.
///
/// Every variant is raised while validating input. Once a reference string
/// and frame count have been accepted, the simulators themselves never fail.
#[derive(Debug, Error)]
pub enum Error {
    /// The reference string is empty or contains a token that is not an integer.
    ///
    /// Holds the offending token, or `None` when the input had no tokens at all.
    #[error("Please enter a valid, space-separated string of numbers{}", token_suffix(.0))]
    InvalidInput(Option<String>),

    /// The frame count is not an integer in `1..=MAX_FRAME_COUNT`.
    #[error("Frame count must be a positive integer no greater than {max}, got '{0}'", max = MAX_FRAME_COUNT)]
    InvalidFrameCount(String),

    /// The algorithm selector is not one of the supported policies.
    #[error("Unknown algorithm '{0}' (expected 'fifo' or 'lru')")]
    UnknownAlgorithm(String),

    /// I/O error while reading a reference string from disk.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn token_suffix(token: &Option<String>) -> String {
    match token {
        Some(t) => format!(" (invalid token '{}')", t),
        None => String::new(),
    }
}
