//! Date Range Filter Module
//! Inclusive date-range selection over timestamped series.

use super::point::TimestampedPoint;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Visible window of the filtered panels.
///
/// Both ends are inclusive. No ordering is enforced between `start` and
/// `end`; an inverted range simply selects nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateRange {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Range between two calendar days, both at midnight (what a day picker yields).
    pub fn from_days(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: start.and_time(NaiveTime::MIN),
            end: end.and_time(NaiveTime::MIN),
        }
    }

    pub fn set_start(&mut self, start: NaiveDateTime) {
        self.start = start;
    }

    pub fn set_end(&mut self, end: NaiveDateTime) {
        self.end = end;
    }

    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    pub fn contains(&self, instant: &NaiveDateTime) -> bool {
        self.start <= *instant && *instant <= self.end
    }
}

/// Keep the points whose date falls inside `range`, in input order.
///
/// Points whose date does not parse never match.
pub fn filter_points(points: &[TimestampedPoint], range: &DateRange) -> Vec<TimestampedPoint> {
    if range.is_inverted() {
        return Vec::new();
    }

    points
        .iter()
        .filter(|p| p.instant().is_some_and(|t| range.contains(&t)))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Vec<TimestampedPoint> {
        vec![
            TimestampedPoint::new("2024-07-01", 1.0),
            TimestampedPoint::new("2024-07-02", 2.0),
            TimestampedPoint::new("2024-07-03", 3.0),
        ]
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let range = DateRange::from_days(day(2024, 7, 1), day(2024, 7, 2));
        let out = filter_points(&sample(), &range);
        assert_eq!(out, sample()[..2].to_vec());
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let range = DateRange::from_days(day(2024, 7, 5), day(2024, 7, 1));
        assert!(range.is_inverted());
        assert!(filter_points(&sample(), &range).is_empty());
    }

    #[test]
    fn test_single_instant_range() {
        let range = DateRange::from_days(day(2024, 7, 2), day(2024, 7, 2));
        let out = filter_points(&sample(), &range);
        assert_eq!(out, vec![TimestampedPoint::new("2024-07-02", 2.0)]);
    }

    #[test]
    fn test_unsorted_input_keeps_input_order() {
        let points = vec![
            TimestampedPoint::new("2024-07-03", 3.0),
            TimestampedPoint::new("2024-07-01", 1.0),
            TimestampedPoint::new("2024-08-01", 9.0),
            TimestampedPoint::new("2024-07-02", 2.0),
        ];
        let range = DateRange::from_days(day(2024, 7, 1), day(2024, 7, 3));
        let values: Vec<f64> = filter_points(&points, &range)
            .iter()
            .map(|p| p.value)
            .collect();
        assert_eq!(values, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_malformed_dates_are_dropped_silently() {
        let points = vec![
            TimestampedPoint::new("garbage", 0.0),
            TimestampedPoint::new("2024-07-02", 2.0),
            TimestampedPoint::new("", 0.0),
        ];
        let range = DateRange::from_days(day(2000, 1, 1), day(2100, 1, 1));
        assert_eq!(
            filter_points(&points, &range),
            vec![TimestampedPoint::new("2024-07-02", 2.0)]
        );
    }

    #[test]
    fn test_end_at_midnight_excludes_later_hours_of_that_day() {
        let points = vec![
            TimestampedPoint::new("2024-07-04T00:00:00", 1.0),
            TimestampedPoint::new("2024-07-04T01:00:00", 2.0),
        ];
        let range = DateRange::from_days(day(2024, 7, 1), day(2024, 7, 4));
        assert_eq!(filter_points(&points, &range).len(), 1);
    }

    #[test]
    fn test_setters_update_independently() {
        let mut range = DateRange::from_days(day(2024, 7, 1), day(2024, 7, 4));
        range.set_end(day(2024, 6, 1).and_time(NaiveTime::MIN));
        assert!(range.is_inverted());
        range.set_start(day(2024, 5, 1).and_time(NaiveTime::MIN));
        assert!(!range.is_inverted());
    }

    fn arb_points() -> impl Strategy<Value = Vec<TimestampedPoint>> {
        prop::collection::vec(
            (0u32..60, -1000.0f64..1000.0, prop::bool::weighted(0.1)),
            0..40,
        )
        .prop_map(|rows| {
            rows.into_iter()
                .map(|(offset, value, broken)| {
                    let date = if broken {
                        "n/a".to_string()
                    } else {
                        (day(2024, 7, 1) + chrono::Days::new(offset as u64)).to_string()
                    };
                    TimestampedPoint::new(date, value)
                })
                .collect()
        })
    }

    fn arb_range() -> impl Strategy<Value = DateRange> {
        (0u64..60, 0u64..60).prop_map(|(a, b)| {
            DateRange::from_days(
                day(2024, 7, 1) + chrono::Days::new(a),
                day(2024, 7, 1) + chrono::Days::new(b),
            )
        })
    }

    proptest! {
        #[test]
        fn prop_filter_is_ordered_subsequence(points in arb_points(), range in arb_range()) {
            let out = filter_points(&points, &range);
            let expected: Vec<TimestampedPoint> = if range.is_inverted() {
                Vec::new()
            } else {
                points
                    .iter()
                    .filter(|p| p.instant().is_some_and(|t| range.start <= t && t <= range.end))
                    .cloned()
                    .collect()
            };
            prop_assert_eq!(out, expected);
        }

        #[test]
        fn prop_inverted_range_always_empty(points in arb_points(), range in arb_range()) {
            prop_assume!(range.is_inverted());
            prop_assert!(filter_points(&points, &range).is_empty());
        }

        #[test]
        fn prop_filter_is_idempotent(points in arb_points(), range in arb_range()) {
            prop_assert_eq!(filter_points(&points, &range), filter_points(&points, &range));
        }
    }
}
