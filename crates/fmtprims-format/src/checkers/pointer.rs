//! RFC6901 JSON Pointers and relative JSON Pointers.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use super::compiled;
use crate::checker::FormatChecker;

static JSON_POINTER: OnceLock<Regex> = OnceLock::new();
static RELATIVE_JSON_POINTER: OnceLock<Regex> = OnceLock::new();

const JSON_POINTER_PATTERN: &str = r"^(?:/(?:[^~/]|~0|~1)*)*$";
const RELATIVE_JSON_POINTER_PATTERN: &str = r"^(?:0|[1-9][0-9]*)(?:#|(?:/(?:[^~/]|~0|~1)*)*)$";

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPointerChecker;

/// A non-negative integer prefix followed by `#` or a JSON Pointer.
#[derive(Debug, Clone, Copy, Default)]
pub struct RelativeJsonPointerChecker;

impl FormatChecker for JsonPointerChecker {
    fn is_format(&self, input: &Value) -> bool {
        input
            .as_str()
            .is_some_and(|text| compiled(&JSON_POINTER, JSON_POINTER_PATTERN).is_match(text))
    }

    fn kind(&self) -> &'static str {
        "json-pointer"
    }
}

impl FormatChecker for RelativeJsonPointerChecker {
    fn is_format(&self, input: &Value) -> bool {
        input.as_str().is_some_and(|text| {
            compiled(&RELATIVE_JSON_POINTER, RELATIVE_JSON_POINTER_PATTERN).is_match(text)
        })
    }

    fn kind(&self) -> &'static str {
        "relative-json-pointer"
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn json_pointers() {
        for valid in ["", "/", "/a/b", "/a~0b", "/a~1b", "/foo/0", "/ ", "/é"] {
            assert!(JsonPointerChecker.is_format(&json!(valid)), "{valid:?}");
        }
        for invalid in ["a/b", "/a~2b", "/a~", "#/a"] {
            assert!(!JsonPointerChecker.is_format(&json!(invalid)), "{invalid:?}");
        }
    }

    #[test]
    fn relative_json_pointers() {
        for valid in ["0", "1#", "0/a/b", "12/a~1b", "3"] {
            assert!(RelativeJsonPointerChecker.is_format(&json!(valid)), "{valid:?}");
        }
        for invalid in ["", "01", "-1", "/a", "1##", "1/a~2", "a/b"] {
            assert!(
                !RelativeJsonPointerChecker.is_format(&json!(invalid)),
                "{invalid:?}"
            );
        }
    }

    #[test]
    fn non_strings_are_rejected() {
        assert!(!JsonPointerChecker.is_format(&json!(0)));
        assert!(!RelativeJsonPointerChecker.is_format(&json!(0)));
    }
}
