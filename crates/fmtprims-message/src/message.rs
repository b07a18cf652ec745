use std::fmt;

use serde::Serialize;

use crate::catalog::{interpolate, TemplateCatalog};
use crate::code::ErrorCode;
use crate::error::Result;

/// Context label used for the document root.
pub const CONTEXT_ROOT: &str = "(root)";

/// A rendered validation message: a stable code plus English description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    code: ErrorCode,
    description: String,
}

impl Message {
    pub(crate) fn new(code: ErrorCode, description: String) -> Self {
        Self { code, description }
    }

    /// Render `code`'s template with positional arguments.
    pub fn render(code: ErrorCode, args: &[&dyn fmt::Display]) -> Result<Self> {
        TemplateCatalog::builtin().render(code, args)
    }

    /// The value does not satisfy the named format.
    pub fn does_not_match_format(format: &str) -> Self {
        Self::fixed(ErrorCode::DoesNotMatchFormat, &[&format])
    }

    /// The value has the wrong JSON type.
    pub fn must_be_of_type(expected: &str) -> Self {
        Self::fixed(ErrorCode::MustBeOfTypeX, &[&expected])
    }

    /// A schema pattern does not compile.
    pub fn invalid_regex_pattern(pattern: &str) -> Self {
        Self::fixed(ErrorCode::InvalidRegexPattern, &[&pattern])
    }

    // Arity is fixed by the caller's signature.
    fn fixed(code: ErrorCode, args: &[&dyn fmt::Display]) -> Self {
        debug_assert_eq!(code.arity(), args.len());
        Self::new(code, interpolate(code.template(), args))
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// One result line: `context : description, given value`.
    pub fn display_in(&self, context: &str, given: &str) -> String {
        format!("{context} : {}, given {given}", self.description)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

impl std::error::Error for Message {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MessageError;

    #[test]
    fn typed_constructors() {
        let message = Message::does_not_match_format("email");
        assert_eq!(message.code(), ErrorCode::DoesNotMatchFormat);
        assert_eq!(message.description(), "does not match format 'email'");

        assert_eq!(
            Message::must_be_of_type("string").to_string(),
            "must be of type string"
        );
        assert_eq!(
            Message::invalid_regex_pattern("[").description(),
            "Invalid regex pattern '['"
        );
    }

    #[test]
    fn render_reports_wrong_arity() {
        assert!(matches!(
            Message::render(ErrorCode::DoesNotMatchFormat, &[]),
            Err(MessageError::ArityMismatch {
                expected: 1,
                got: 0,
                ..
            })
        ));
    }

    #[test]
    fn result_line_includes_context_and_value() {
        let message = Message::does_not_match_format("uuid");
        assert_eq!(
            message.display_in(&format!("{CONTEXT_ROOT}.id"), "\"ABC\""),
            "(root).id : does not match format 'uuid', given \"ABC\""
        );
    }

    #[test]
    fn serializes_code_and_description() {
        let value = serde_json::to_value(Message::must_be_of_type("string")).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "code": "MUST_BE_OF_TYPE_X",
                "description": "must be of type string",
            })
        );
    }
}
