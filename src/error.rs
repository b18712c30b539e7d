use thiserror::Error;

/// Custom error types for subtoggle
#[derive(Debug, Error)]
pub enum SubtoggleError {
    #[error("Missing subscription option `{0}`.\n\nPass it in the options file or with --{0}")]
    MissingOption(&'static str),

    #[error("Invalid subscription options: {0}")]
    InvalidOptions(String),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
