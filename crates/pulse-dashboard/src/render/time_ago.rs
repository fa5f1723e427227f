//! Relative timestamps ("3 hours ago", "yesterday")

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl Unit {
    const fn name(self) -> &'static str {
        match self {
            Self::Second => "second",
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    /// Phrase for -1, 0 and 1 where English has one
    fn idiom(self, value: i64) -> Option<&'static str> {
        match (self, value) {
            (Self::Second, 0) => Some("now"),
            (Self::Day, -1) => Some("yesterday"),
            (Self::Day, 1) => Some("tomorrow"),
            (Self::Week, -1) => Some("last week"),
            (Self::Week, 1) => Some("next week"),
            (Self::Month, -1) => Some("last month"),
            (Self::Month, 1) => Some("next month"),
            (Self::Year, -1) => Some("last year"),
            (Self::Year, 1) => Some("next year"),
            _ => None,
        }
    }
}

/// Each unit is used while the magnitude stays below its bound
const UNITS: [(f64, Unit); 7] = [
    (60.0, Unit::Second),
    (60.0, Unit::Minute),
    (24.0, Unit::Hour),
    (7.0, Unit::Day),
    (4.34524, Unit::Week),
    (12.0, Unit::Month),
    (f64::INFINITY, Unit::Year),
];

/// Describe `created_at` relative to `now`
///
/// Past values are negative and every step floors, so partial units round away
/// from zero in the past: 61 seconds ago is "2 minutes ago".
pub fn time_ago(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let mut value = -((now - created_at).num_seconds() as f64);
    let mut unit = Unit::Second;
    for (bound, candidate) in UNITS {
        if value.abs() < bound {
            unit = candidate;
            break;
        }
        value = (value / bound).floor();
    }

    format_relative(value.floor() as i64, unit)
}

fn format_relative(value: i64, unit: Unit) -> String {
    if let Some(idiom) = unit.idiom(value) {
        return idiom.to_string();
    }

    let magnitude = value.unsigned_abs();
    let plural = if magnitude == 1 { "" } else { "s" };
    if value < 0 {
        format!("{magnitude} {}{plural} ago", unit.name())
    } else {
        format!("in {magnitude} {}{plural}", unit.name())
    }
}
