use thiserror::Error;

/// Errors that can occur while loading configuration or parsing a page
#[derive(Debug, Error)]
pub enum TrackerError {
    /// The HTML input could not be turned into a DOM tree
    #[error("Failed to parse document: {0}")]
    DocumentParseFailed(String),

    /// A configuration file could not be read
    #[error("Failed to read config {path}: {reason}")]
    ConfigReadFailed { path: String, reason: String },

    /// A configuration file could not be deserialized
    #[error("Failed to parse config {path}: {reason}")]
    ConfigParseFailed { path: String, reason: String },

    /// The configuration is structurally valid but violates a constraint
    #[error("Invalid configuration: {0}")]
    ConfigInvalid(String),

    /// Serialization of a tree or command queue failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),
}

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, TrackerError>;
