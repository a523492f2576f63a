use std::path::PathBuf;

use thiserror::Error;

/// Problems with the input data. None of them aborts loading: the offending
/// file or line is skipped and the rest of the database is kept.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot read {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{source_name}:{line}: {reason}")]
    MalformedLine {
        source_name: String,
        line: usize,
        reason: String,
    },
}

/// Rejected configuration values, reported before any mining starts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("must be an integer number, got {0:?}")]
    NotAnInteger(String),

    #[error("must be >= 0, got {0}")]
    Negative(String),

    #[error("must be a floating point number, got {0:?}")]
    NotAFloat(String),

    #[error("must be >= {min} and <= {max}, got {value}")]
    OutOfRange { value: f64, min: f64, max: f64 },

    #[error("minimum length {min_length} exceeds maximum length {max_length}")]
    LengthBounds { min_length: usize, max_length: usize },
}
