use serde_json::Value;

/// A stateless predicate deciding whether a value satisfies one format.
///
/// Implementations must reject every non-string value and must never panic on
/// malformed input. Any `Fn(&Value) -> bool` closure is a checker.
pub trait FormatChecker: Send + Sync {
    /// Returns true when `input` is a string conforming to the format.
    fn is_format(&self, input: &Value) -> bool;

    /// Short label naming the checker implementation.
    fn kind(&self) -> &'static str {
        "custom"
    }
}

impl<F> FormatChecker for F
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    fn is_format(&self, input: &Value) -> bool {
        self(input)
    }
}

/// Adapts a string predicate into a [`FormatChecker`].
///
/// Non-string values are rejected before the predicate runs.
///
/// ```
/// use fmtprims_format::{FormatRegistry, StringChecker};
/// use serde_json::json;
///
/// let registry = FormatRegistry::empty();
/// registry.add("even-length", StringChecker::new(|s: &str| s.len() % 2 == 0));
///
/// assert!(registry.is_format("even-length", &json!("ab")));
/// assert!(!registry.is_format("even-length", &json!("abc")));
/// assert!(!registry.is_format("even-length", &json!(12)));
/// ```
pub struct StringChecker<F> {
    predicate: F,
}

impl<F> StringChecker<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl<F> FormatChecker for StringChecker<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_format(&self, input: &Value) -> bool {
        match input.as_str() {
            Some(text) => (self.predicate)(text),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn closures_are_checkers() {
        let checker = |input: &Value| input == &json!("yes");
        assert!(checker.is_format(&json!("yes")));
        assert!(!checker.is_format(&json!("no")));
        assert_eq!(FormatChecker::kind(&checker), "custom");
    }

    #[test]
    fn string_checker_rejects_non_strings() {
        let checker = StringChecker::new(|_: &str| true);
        assert!(checker.is_format(&json!("")));
        for value in [json!(null), json!(true), json!(1.5), json!([]), json!({})] {
            assert!(!checker.is_format(&value), "{value} should be rejected");
        }
    }
}
