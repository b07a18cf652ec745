//! Pluggable registry of JSON Schema string format checkers.
//!
//! A validation engine that meets a `format` keyword asks the registry whether
//! the instance satisfies the named format. Built-in checkers cover RFC3339
//! dates and times, RFC3986 URIs, RFC5322 mailboxes, RFC6570 URI templates,
//! RFC6901 JSON Pointers, hostnames, UUIDs, IP literals and regular expressions.
//!
//! Unknown format names never invalidate data: [`FormatRegistry::is_format`]
//! returns `true` for them. Use [`FormatRegistry::check`] to tell "unknown"
//! apart from "satisfied".

pub mod checker;
pub mod checkers;
pub mod config;
pub mod error;
pub mod registry;

#[cfg(feature = "jsonschema")]
pub mod bridge;

#[cfg(feature = "jsonschema")]
pub use bridge::JsonSchemaBridge;
pub use checker::{FormatChecker, StringChecker};
pub use checkers::BuiltinFormat;
pub use config::RegistryConfig;
pub use error::{FormatError, Result};
pub use registry::{add, default_registry, has, is_format, remove, FormatOutcome, FormatRegistry};
