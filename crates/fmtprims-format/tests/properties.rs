use fmtprims_format::FormatRegistry;
use proptest::prelude::*;
use serde_json::{json, Value};

fn non_string_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        any::<f64>()
            .prop_filter("finite", |f| f.is_finite())
            .prop_map(|f| json!(f)),
        prop::collection::vec(".*", 0..4).prop_map(|items| json!(items)),
        ("[a-z]{1,8}", ".*").prop_map(|(k, v)| json!({ k: v })),
    ]
}

proptest! {
    #[test]
    fn registered_formats_reject_non_strings(value in non_string_value()) {
        let registry = FormatRegistry::with_builtins();
        for name in registry.names() {
            prop_assert!(!registry.is_format(&name, &value), "{} accepted {}", name, value);
        }
    }

    #[test]
    fn unregistered_formats_accept_anything(
        name in "x-[a-z]{1,12}",
        text in ".*",
        value in non_string_value(),
    ) {
        let registry = FormatRegistry::with_builtins();
        prop_assert!(registry.is_format(&name, &json!(text)));
        prop_assert!(registry.is_format(&name, &value));
    }

    #[test]
    fn checkers_never_panic_on_arbitrary_strings(text in "\\PC{0,64}") {
        let registry = FormatRegistry::with_builtins();
        for name in registry.names() {
            let _ = registry.is_format(&name, &json!(text));
        }
    }

    #[test]
    fn generated_dates_follow_the_calendar(year in 1000i32..9999, month in 1u32..=12, day in 1u32..=31) {
        let registry = FormatRegistry::with_builtins();
        let text = format!("{year:04}-{month:02}-{day:02}");
        let expected = calendar_valid(year, month, day);
        prop_assert_eq!(registry.is_format("date", &json!(text)), expected);
    }
}

fn calendar_valid(year: i32, month: u32, day: u32) -> bool {
    let leap = (year % 4 == 0 && year % 100 != 0) || year % 400 == 0;
    let days = match month {
        2 if leap => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    };
    day <= days
}
