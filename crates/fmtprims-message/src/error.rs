use crate::code::ErrorCode;

/// Errors that can occur while building or rendering messages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MessageError {
    /// The string does not name any error code.
    #[error("unknown error code: {0}")]
    UnknownCode(String),

    /// A template was rendered with the wrong number of arguments.
    #[error("{code} takes {expected} argument(s), got {got}")]
    ArityMismatch {
        code: ErrorCode,
        expected: usize,
        got: usize,
    },

    /// A template's placeholders disagree with its code's declared arity.
    #[error("template for {code} has {found} placeholder(s), declared arity is {declared}")]
    TemplateArity {
        code: ErrorCode,
        declared: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, MessageError>;
