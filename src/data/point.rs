//! Fixture Record Types
//! Timestamped points, stacked points and the pie fixture, plus date parsing.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;

/// Date-time layouts accepted besides RFC 3339, tried in order.
const DATE_TIME_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse an ISO-like date string into an orderable instant.
///
/// Offsets are folded into UTC and dropped, and a bare date means midnight,
/// so every accepted input lands on one naive timeline. Returns `None` for
/// anything else; callers treat that as a date that fails every comparison.
pub fn parse_instant(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }

    DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, DATE_FORMAT)
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// One sample of a filtered series.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimestampedPoint {
    pub date: String,
    pub value: f64,
}

impl TimestampedPoint {
    pub fn new(date: impl Into<String>, value: f64) -> Self {
        Self {
            date: date.into(),
            value,
        }
    }

    /// Parsed instant of `date`, `None` when it does not parse.
    pub fn instant(&self) -> Option<NaiveDateTime> {
        parse_instant(&self.date)
    }
}

/// One row of the stacked-area fixture: two values sharing a date.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StackedPoint {
    pub date: String,
    pub value1: f64,
    pub value2: f64,
}

impl StackedPoint {
    pub fn new(date: impl Into<String>, value1: f64, value2: f64) -> Self {
        Self {
            date: date.into(),
            value1,
            value2,
        }
    }
}

/// Fixed category/value fixture for the pie panel.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PieFixture {
    pub labels: Vec<String>,
    #[serde(alias = "data")]
    pub values: Vec<f64>,
}
