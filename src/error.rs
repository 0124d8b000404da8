use thiserror::Error;

/// Unified error type for version-suffix operations
#[derive(Error, Debug)]
pub enum VersionSuffixError {
    #[error("Malformed override record: {0}")]
    MalformedRecord(String),

    #[error("Unknown branch category: {0}")]
    UnknownCategory(String),

    #[error("Malformed boolean token: {0}")]
    MalformedBoolean(String),

    #[error("Build context error: {0}")]
    Context(String),

    #[error("Output error: {0}")]
    Output(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in version-suffix
pub type Result<T> = std::result::Result<T, VersionSuffixError>;

impl VersionSuffixError {
    /// Create a malformed-record error with context
    pub fn malformed_record(msg: impl Into<String>) -> Self {
        VersionSuffixError::MalformedRecord(msg.into())
    }

    /// Create an unknown-category error with context
    pub fn unknown_category(msg: impl Into<String>) -> Self {
        VersionSuffixError::UnknownCategory(msg.into())
    }

    /// Create a malformed-boolean error with context
    pub fn malformed_boolean(msg: impl Into<String>) -> Self {
        VersionSuffixError::MalformedBoolean(msg.into())
    }

    /// Create a build-context error with context
    pub fn context(msg: impl Into<String>) -> Self {
        VersionSuffixError::Context(msg.into())
    }

    /// Create an output error with context
    pub fn output(msg: impl Into<String>) -> Self {
        VersionSuffixError::Output(msg.into())
    }
}
