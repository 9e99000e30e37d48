//! Error types for `claude_history_gate`.

/// Errors that can occur while running the gate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error occurred.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The structured-document parser is not available.
    #[error("Config parser unavailable: {0}")]
    ParserUnavailable(String),

    /// A template error occurred.
    #[error("Template error: {0}")]
    Template(String),
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
