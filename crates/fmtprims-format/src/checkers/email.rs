//! RFC5322 mailbox parsing.
//!
//! Address syntax is decided by the `email_address` crate, which accepts a bare
//! `addr-spec` (`user@example.com`) or one with display text
//! (`Jane Doe <user@example.com>`). That parser has no notion of comments, so
//! parenthesized comments are dropped before the address is handed over.

use std::borrow::Cow;

use email_address::{EmailAddress, Options};
use serde_json::Value;

use crate::checker::FormatChecker;

/// Verifies RFC5322 mailbox addresses. Bound to `email` and `idn-email`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailChecker;

impl FormatChecker for EmailChecker {
    fn is_format(&self, input: &Value) -> bool {
        let Some(text) = input.as_str() else {
            return false;
        };
        is_mailbox(text)
    }

    fn kind(&self) -> &'static str {
        "email"
    }
}

/// Returns true when `text` is a single RFC5322 mailbox.
pub fn is_mailbox(text: &str) -> bool {
    let Some(stripped) = strip_comments(text) else {
        return false;
    };
    let address = stripped.trim_matches(is_wsp);
    if address.is_empty() {
        return false;
    }

    let options = Options::default()
        .with_display_text()
        .with_domain_literal();
    EmailAddress::parse_with_options(address, options).is_ok()
}

/// Remove `(comment)` runs outside quoted strings and domain literals.
///
/// Comments nest and may hold quoted pairs. Returns `None` when a comment is
/// left open or closed without being opened.
fn strip_comments(text: &str) -> Option<Cow<'_, str>> {
    if !text.contains(['(', ')']) {
        return Some(Cow::Borrowed(text));
    }

    let mut out = String::with_capacity(text.len());
    let mut depth = 0usize;
    let mut quoted = false;
    let mut literal = false;
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if depth > 0 {
            match c {
                '\\' => {
                    chars.next()?;
                }
                '(' => depth += 1,
                ')' => depth -= 1,
                _ => {}
            }
            continue;
        }

        match c {
            '\\' if quoted => {
                out.push(c);
                out.push(chars.next()?);
                continue;
            }
            '"' if !literal => quoted = !quoted,
            '[' if !quoted => literal = true,
            ']' if !quoted => literal = false,
            '(' if !quoted && !literal => {
                depth = 1;
                continue;
            }
            ')' if !quoted && !literal => return None,
            _ => {}
        }
        out.push(c);
    }

    (depth == 0).then_some(Cow::Owned(out))
}

fn is_wsp(c: char) -> bool {
    c == ' ' || c == '\t'
}
