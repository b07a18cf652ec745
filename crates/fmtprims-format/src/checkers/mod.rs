//! Built-in format checkers.
//!
//! Every checker is a unit struct: its grammar lives in process-wide patterns
//! compiled on first use, so instances are free to copy and share.

use std::sync::{Arc, OnceLock};

use regex::Regex;

use crate::checker::FormatChecker;

pub mod datetime;
pub mod email;
pub mod ip;
pub mod pointer;
pub mod text;
pub mod uri;

pub use datetime::{DateChecker, DateTimeChecker, TimeChecker};
pub use email::EmailChecker;
pub use ip::{Ipv4Checker, Ipv6Checker};
pub use pointer::{JsonPointerChecker, RelativeJsonPointerChecker};
pub use text::{HostnameChecker, RegexChecker, UuidChecker};
pub use uri::{UriChecker, UriReferenceChecker, UriTemplateChecker};

/// The formats a registry knows out of the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinFormat {
    Date,
    Time,
    DateTime,
    Hostname,
    Email,
    Ipv4,
    Ipv6,
    Uri,
    UriReference,
    UriTemplate,
    Uuid,
    Regex,
    JsonPointer,
    RelativeJsonPointer,
}

impl BuiltinFormat {
    pub const ALL: [BuiltinFormat; 14] = [
        BuiltinFormat::Date,
        BuiltinFormat::Time,
        BuiltinFormat::DateTime,
        BuiltinFormat::Hostname,
        BuiltinFormat::Email,
        BuiltinFormat::Ipv4,
        BuiltinFormat::Ipv6,
        BuiltinFormat::Uri,
        BuiltinFormat::UriReference,
        BuiltinFormat::UriTemplate,
        BuiltinFormat::Uuid,
        BuiltinFormat::Regex,
        BuiltinFormat::JsonPointer,
        BuiltinFormat::RelativeJsonPointer,
    ];

    /// Canonical format name as written in a schema.
    pub fn name(self) -> &'static str {
        self.names()[0]
    }

    /// Canonical name followed by any aliases bound to the same checker.
    pub fn names(self) -> &'static [&'static str] {
        match self {
            BuiltinFormat::Date => &["date"],
            BuiltinFormat::Time => &["time"],
            BuiltinFormat::DateTime => &["date-time"],
            BuiltinFormat::Hostname => &["hostname"],
            BuiltinFormat::Email => &["email", "idn-email"],
            BuiltinFormat::Ipv4 => &["ipv4"],
            BuiltinFormat::Ipv6 => &["ipv6"],
            BuiltinFormat::Uri => &["uri", "iri"],
            BuiltinFormat::UriReference => &["uri-reference", "iri-reference"],
            BuiltinFormat::UriTemplate => &["uri-template"],
            BuiltinFormat::Uuid => &["uuid"],
            BuiltinFormat::Regex => &["regex"],
            BuiltinFormat::JsonPointer => &["json-pointer"],
            BuiltinFormat::RelativeJsonPointer => &["relative-json-pointer"],
        }
    }

    /// Resolve a format name or alias to its built-in.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.names().contains(&name))
    }

    /// A shareable instance of this format's checker.
    pub fn checker(self) -> Arc<dyn FormatChecker> {
        match self {
            BuiltinFormat::Date => Arc::new(DateChecker),
            BuiltinFormat::Time => Arc::new(TimeChecker),
            BuiltinFormat::DateTime => Arc::new(DateTimeChecker),
            BuiltinFormat::Hostname => Arc::new(HostnameChecker),
            BuiltinFormat::Email => Arc::new(EmailChecker),
            BuiltinFormat::Ipv4 => Arc::new(Ipv4Checker),
            BuiltinFormat::Ipv6 => Arc::new(Ipv6Checker),
            BuiltinFormat::Uri => Arc::new(UriChecker),
            BuiltinFormat::UriReference => Arc::new(UriReferenceChecker),
            BuiltinFormat::UriTemplate => Arc::new(UriTemplateChecker),
            BuiltinFormat::Uuid => Arc::new(UuidChecker),
            BuiltinFormat::Regex => Arc::new(RegexChecker),
            BuiltinFormat::JsonPointer => Arc::new(JsonPointerChecker),
            BuiltinFormat::RelativeJsonPointer => Arc::new(RelativeJsonPointerChecker),
        }
    }
}

/// Compile a built-in pattern once and hand out the shared instance.
pub(crate) fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("built-in format pattern must compile"))
}
