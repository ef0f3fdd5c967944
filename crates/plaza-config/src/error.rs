/// Alias for `Result<T, ConfigError>`.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading or saving configuration.
///
/// Only document-level problems surface here. Malformed sub-sections of an
/// otherwise parsable preset degrade to defaults plus a warning on the
/// decoded document instead of failing the whole load.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The preset file could not be read or written.
    #[error("preset file error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not parsable JSON.
    #[error("failed to parse preset JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The document parsed, but its top level is not an object.
    #[error("preset root must be a JSON object")]
    NotAnObject,
}
