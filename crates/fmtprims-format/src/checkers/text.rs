use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use super::compiled;
use crate::checker::FormatChecker;

static HOSTNAME: OnceLock<Regex> = OnceLock::new();
static UUID: OnceLock<Regex> = OnceLock::new();

const HOSTNAME_PATTERN: &str = r"^([a-zA-Z0-9]|[a-zA-Z0-9][a-zA-Z0-9\-]{0,61}[a-zA-Z0-9])(\.([a-zA-Z0-9]|[a-zA-Z0-9][a-zA-Z0-9\-]{0,61}[a-zA-Z0-9]))*$";
const UUID_PATTERN: &str = r"^[a-f0-9]{8}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{12}$";

/// Hostnames must be shorter than this many bytes.
pub const MAX_HOSTNAME_LEN: usize = 256;

/// Verifies RFC1123 hostnames: dot-separated labels of 1-63 alphanumerics or
/// hyphens, never starting or ending with a hyphen.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostnameChecker;

/// Verifies canonical lowercase UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidChecker;

/// Verifies that a string compiles as a regular expression.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexChecker;

impl FormatChecker for HostnameChecker {
    fn is_format(&self, input: &Value) -> bool {
        input.as_str().is_some_and(|text| {
            text.len() < MAX_HOSTNAME_LEN && compiled(&HOSTNAME, HOSTNAME_PATTERN).is_match(text)
        })
    }

    fn kind(&self) -> &'static str {
        "hostname"
    }
}

impl FormatChecker for UuidChecker {
    fn is_format(&self, input: &Value) -> bool {
        input
            .as_str()
            .is_some_and(|text| compiled(&UUID, UUID_PATTERN).is_match(text))
    }

    fn kind(&self) -> &'static str {
        "uuid"
    }
}

impl FormatChecker for RegexChecker {
    fn is_format(&self, input: &Value) -> bool {
        match input.as_str() {
            Some("") => true,
            Some(pattern) => Regex::new(pattern).is_ok(),
            None => false,
        }
    }

    fn kind(&self) -> &'static str {
        "regex"
    }
}
