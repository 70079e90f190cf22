//! Load errors for catalog sources.

use thiserror::Error;

/// Failure to read or parse a catalog source file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source file could not be read.
    #[error("failed to read catalog source: {0}")]
    Io(#[from] std::io::Error),

    /// The source file is not a valid JSON record array.
    #[error("failed to parse catalog source: {0}")]
    Parse(#[from] serde_json::Error),
}
