//! RFC3339 section 5.6 dates and times.
//!
//! ```text
//! full-date    = YYYY "-" MM "-" DD          ; day checked against month and leap year
//! partial-time = HH ":" MM ":" SS [ "." 1*DIGIT ]
//! time-offset  = "Z" / ("+" / "-") HH ":" MM
//! full-time    = partial-time time-offset
//! date-time    = full-date "T" full-time
//! ```
//!
//! Seconds run to 60 so that leap seconds are representable.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use serde_json::Value;

use super::compiled;
use crate::checker::FormatChecker;

static DATE: OnceLock<Regex> = OnceLock::new();
static TIME: OnceLock<Regex> = OnceLock::new();

const DATE_PATTERN: &str = r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$";
const TIME_PATTERN: &str =
    r"^([0-9]{2}):([0-9]{2}):([0-9]{2})(?:\.[0-9]+)?(Z|[+-]([0-9]{2}):([0-9]{2}))?$";

/// Verifies `full-date` values.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateChecker;

/// Verifies `partial-time` values with an optional offset.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeChecker;

/// Verifies RFC3339 date-times. Bare dates and bare times are also accepted.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateTimeChecker;

impl FormatChecker for DateChecker {
    fn is_format(&self, input: &Value) -> bool {
        input.as_str().is_some_and(is_full_date)
    }

    fn kind(&self) -> &'static str {
        "date"
    }
}

impl FormatChecker for TimeChecker {
    fn is_format(&self, input: &Value) -> bool {
        input
            .as_str()
            .is_some_and(|text| is_time(text, Offset::Optional))
    }

    fn kind(&self) -> &'static str {
        "time"
    }
}

impl FormatChecker for DateTimeChecker {
    fn is_format(&self, input: &Value) -> bool {
        input.as_str().is_some_and(is_date_time)
    }

    fn kind(&self) -> &'static str {
        "date-time"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Offset {
    Optional,
    Required,
}

pub fn is_full_date(text: &str) -> bool {
    let Some(caps) = compiled(&DATE, DATE_PATTERN).captures(text) else {
        return false;
    };
    let (Ok(year), Ok(month), Ok(day)) = (
        caps[1].parse::<i32>(),
        caps[2].parse::<u32>(),
        caps[3].parse::<u32>(),
    ) else {
        return false;
    };
    NaiveDate::from_ymd_opt(year, month, day).is_some()
}

pub fn is_date_time(text: &str) -> bool {
    match text.split_once('T') {
        Some((date, time)) => is_full_date(date) && is_time(time, Offset::Required),
        None => is_time(text, Offset::Optional) || is_full_date(text),
    }
}

fn is_time(text: &str, offset: Offset) -> bool {
    let Some(caps) = compiled(&TIME, TIME_PATTERN).captures(text) else {
        return false;
    };
    if offset == Offset::Required && caps.get(4).is_none() {
        return false;
    }

    let field = |idx: usize| caps.get(idx).and_then(|m| m.as_str().parse::<u32>().ok());
    let in_range = |idx: usize, max: u32| field(idx).is_some_and(|v| v <= max);

    let clock = in_range(1, 23) && in_range(2, 59) && in_range(3, 60);
    let zone = match caps.get(5) {
        Some(_) => in_range(5, 23) && in_range(6, 59),
        None => true,
    };
    clock && zone
}
