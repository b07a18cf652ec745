//! JSON Schema string format checking with a pluggable registry.
//!
//! fmtprims decides whether a string satisfies a named semantic format such as
//! `email`, `uuid` or `date-time`, and renders the matching error messages.
//!
//! # Crate Structure
//!
//! - [`format`]: Format checker registry and built-in checkers
//! - [`message`]: Arity-checked error message templates

/// Re-export format types.
pub mod format {
    pub use fmtprims_format::*;
}

/// Re-export message types.
pub mod message {
    pub use fmtprims_message::*;
}
