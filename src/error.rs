//! Error types for the hand control library.

use thiserror::Error;

/// Errors raised while turning hand landmarks into control output
#[derive(Error, Debug)]
pub enum Error {
    /// Underlying I/O failure, e.g. writing to an output sink
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Detector data or a recording could not be used
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Detector reported fewer landmarks than a configured ID requires
    #[error("Landmark {index} missing: detector reported {len} landmarks")]
    MissingLandmark {
        /// Requested landmark ID
        index: usize,
        /// Number of landmarks actually reported
        len: usize,
    },

    /// Frame source could not deliver a frame
    #[error("Frame acquisition failed: {0}")]
    Acquisition(String),

    /// Rejected configuration; fatal before the first frame
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// File access failure with the path context already formatted
    #[error("I/O error: {0}")]
    IoError(String),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;
