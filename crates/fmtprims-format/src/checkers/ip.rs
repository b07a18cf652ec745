use std::net::IpAddr;

use serde_json::Value;

use crate::checker::FormatChecker;

/// Verifies dotted-quad IPv4 literals.
///
/// The generic literal parser accepts both families, so the separator decides
/// which family a literal belongs to.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ipv4Checker;

/// Verifies IPv6 literals, including embedded IPv4 tails.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ipv6Checker;

impl FormatChecker for Ipv4Checker {
    fn is_format(&self, input: &Value) -> bool {
        let Some(text) = input.as_str() else {
            return false;
        };
        is_ip_literal(text) && text.contains('.')
    }

    fn kind(&self) -> &'static str {
        "ipv4"
    }
}

impl FormatChecker for Ipv6Checker {
    fn is_format(&self, input: &Value) -> bool {
        let Some(text) = input.as_str() else {
            return false;
        };
        is_ip_literal(text) && text.contains(':')
    }

    fn kind(&self) -> &'static str {
        "ipv6"
    }
}

fn is_ip_literal(text: &str) -> bool {
    text.parse::<IpAddr>().is_ok()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn ipv4_literals() {
        assert!(Ipv4Checker.is_format(&json!("192.168.0.1")));
        assert!(Ipv4Checker.is_format(&json!("0.0.0.0")));
        assert!(!Ipv4Checker.is_format(&json!("::1")));
        assert!(!Ipv4Checker.is_format(&json!("999.1.1.1")));
        assert!(!Ipv4Checker.is_format(&json!("1.2.3")));
        assert!(!Ipv4Checker.is_format(&json!("01.2.3.4")));
        assert!(!Ipv4Checker.is_format(&json!(" 1.2.3.4")));
    }

    #[test]
    fn ipv6_literals() {
        assert!(Ipv6Checker.is_format(&json!("::1")));
        assert!(Ipv6Checker.is_format(&json!("2001:db8::8a2e:370:7334")));
        assert!(Ipv6Checker.is_format(&json!("::ffff:192.0.2.1")));
        assert!(!Ipv6Checker.is_format(&json!("192.168.0.1")));
        assert!(!Ipv6Checker.is_format(&json!("2001:db8:::1")));
        assert!(!Ipv6Checker.is_format(&json!("[::1]")));
    }

    #[test]
    fn mapped_literal_carries_both_separators() {
        assert!(Ipv4Checker.is_format(&json!("::ffff:192.0.2.1")));
    }

    #[test]
    fn non_strings_are_rejected() {
        assert!(!Ipv4Checker.is_format(&json!(3232235521u32)));
        assert!(!Ipv6Checker.is_format(&json!(null)));
    }
}
