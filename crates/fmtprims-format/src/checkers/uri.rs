//! RFC3986 URIs and RFC6570 URI templates.
//!
//! Parsing is delegated to `fluent-uri`, which follows the RFC3986 grammar
//! (extended to RFC3987 so the `iri` aliases admit non-ASCII characters).
//! Malformed percent-escapes, backslashes and a colon in the first segment of
//! a relative reference are all rejected by the parser.

use std::borrow::Cow;
use std::sync::OnceLock;

use fluent_uri::{Iri, IriRef};
use regex::Regex;
use serde_json::Value;

use super::compiled;
use crate::checker::FormatChecker;

static COMPONENTS: OnceLock<Regex> = OnceLock::new();

// RFC3986 appendix B
const COMPONENTS_PATTERN: &str = r"^(?:([^:/?#]+):)?(?://([^/?#]*))?([^?#]*)(?:\?([^#]*))?(?:#(.*))?$";

/// Verifies absolute URIs. Bound to `uri` and `iri`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UriChecker;

/// Verifies URIs and relative references. Bound to `uri-reference` and
/// `iri-reference`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UriReferenceChecker;

/// Verifies URI templates: a valid reference whose path holds balanced,
/// non-nested `{...}` expressions.
#[derive(Debug, Clone, Copy, Default)]
pub struct UriTemplateChecker;

impl FormatChecker for UriChecker {
    fn is_format(&self, input: &Value) -> bool {
        input.as_str().is_some_and(is_uri)
    }

    fn kind(&self) -> &'static str {
        "uri"
    }
}

impl FormatChecker for UriReferenceChecker {
    fn is_format(&self, input: &Value) -> bool {
        input.as_str().is_some_and(is_uri_reference)
    }

    fn kind(&self) -> &'static str {
        "uri-reference"
    }
}

impl FormatChecker for UriTemplateChecker {
    fn is_format(&self, input: &Value) -> bool {
        input.as_str().is_some_and(is_uri_template)
    }

    fn kind(&self) -> &'static str {
        "uri-template"
    }
}

/// An absolute URI: scheme required.
pub fn is_uri(text: &str) -> bool {
    Iri::parse(text).is_ok()
}

/// A URI or a relative reference.
pub fn is_uri_reference(text: &str) -> bool {
    IriRef::parse(text).is_ok()
}

pub fn is_uri_template(text: &str) -> bool {
    if !is_uri_reference(&escape_braces(text)) {
        return false;
    }
    path_component(text).is_some_and(has_balanced_expressions)
}

// Braces are not URI characters; encode them so the rest of the template is
// still held to the reference grammar.
fn escape_braces(text: &str) -> Cow<'_, str> {
    if !text.contains(['{', '}']) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace('{', "%7B").replace('}', "%7D"))
}

/// The raw path component as written.
fn path_component(text: &str) -> Option<&str> {
    compiled(&COMPONENTS, COMPONENTS_PATTERN)
        .captures(text)
        .and_then(|caps| caps.get(3))
        .map(|m| m.as_str())
}

fn has_balanced_expressions(path: &str) -> bool {
    let mut open = false;
    for c in path.chars() {
        match c {
            '{' if open => return false,
            '{' => open = true,
            '}' if !open => return false,
            '}' => open = false,
            _ => {}
        }
    }
    !open
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn absolute_uris_need_a_scheme() {
        assert!(is_uri("http://example.com"));
        assert!(is_uri("https://example.com/a/b?q=1#frag"));
        assert!(is_uri("mailto:user@example.com"));
        assert!(is_uri("urn:isbn:0451450523"));
        assert!(!is_uri("example.com"));
        assert!(!is_uri("/relative/path"));
        assert!(!is_uri("//example.com/path"));
        assert!(!is_uri(""));
    }

    #[test]
    fn backslashes_are_rejected() {
        assert!(!is_uri("http:\\\\evil"));
        assert!(!is_uri("http://example.com\\path"));
        assert!(!is_uri_reference("\\\\server\\share"));
        assert!(!is_uri_template("http://example.com/{a}\\b"));
    }

    #[test]
    fn references_may_be_relative() {
        assert!(is_uri_reference("http://example.com"));
        assert!(is_uri_reference("/relative/path"));
        assert!(is_uri_reference("../up?x=1"));
        assert!(is_uri_reference("#fragment"));
        assert!(is_uri_reference("//example.com/path"));
        assert!(is_uri_reference(""));
        assert!(!is_uri_reference("http://exa mple.com"));
    }

    #[test]
    fn percent_escapes_must_be_complete_hex() {
        assert!(is_uri("http://example.com/a%20b"));
        assert!(!is_uri("http://example.com/%zz"));
        assert!(!is_uri("http://example.com/a%2"));
        assert!(!is_uri_reference("%zz"));
        assert!(!is_uri_template("/users/{id}/%g1"));
    }

    #[test]
    fn scheme_less_references_cannot_start_with_a_colon_segment() {
        assert!(!is_uri_reference(":nope"));
        assert!(!is_uri_reference("1http:x"));
        assert!(is_uri_reference("./1http:x"));
        assert!(is_uri_reference("a/b:c"));
    }

    #[test]
    fn iri_characters_are_allowed() {
        assert!(is_uri("http://例子.测试/路径"));
        assert!(is_uri_reference("/café"));
    }

    #[test]
    fn templates_balance_braces_in_the_path() {
        assert!(is_uri_template("http://example.com/users/{id}"));
        assert!(is_uri_template("/users/{id}/posts/{post}"));
        assert!(is_uri_template("/plain/path"));
        assert!(!is_uri_template("/users/{id"));
        assert!(!is_uri_template("/users/id}"));
        assert!(!is_uri_template("/users/{{id}}"));
        assert!(!is_uri_template("/users/{a{b}"));
    }

    #[test]
    fn templates_ignore_braces_outside_the_path() {
        assert!(is_uri_template("/users?filter={open"));
        assert!(is_uri_template("/users#{section"));
    }

    #[test]
    fn query_delimiter_ends_the_scanned_path() {
        // "{?q}" is cut at '?', leaving an unclosed brace in the path
        assert!(!is_uri_template("/search{?q,lang}"));
    }

    #[test]
    fn non_strings_are_rejected() {
        assert!(!UriChecker.is_format(&json!(null)));
        assert!(!UriReferenceChecker.is_format(&json!(7)));
        assert!(!UriTemplateChecker.is_format(&json!(["/a"])));
    }
}
