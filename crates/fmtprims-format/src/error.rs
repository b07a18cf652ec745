/// Errors raised by the format registry and the schema engine bridge.
///
/// Checkers themselves never fail: a malformed value is reported as "does not
/// conform", not as an error.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// A checker was registered under an empty name.
    #[error("format name must not be empty")]
    EmptyName,

    /// The schema handed to the engine bridge could not be compiled.
    #[error("failed to compile schema: {0}")]
    CompileFailed(String),

    /// The instance failed schema validation.
    #[error("validation failed: {0}")]
    ValidationFailed(String),

    /// The schema or instance text is not valid JSON.
    #[error("document is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FormatError>;
