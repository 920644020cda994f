//! Range-filtered series view.
//! Holds the filter inputs and recomputes derived data when they change.

use crate::charts::{ChartModel, ChartModelBuilder};
use crate::data::{filter_points, DateRange, TimestampedPoint};
use chrono::NaiveDateTime;
use std::sync::Arc;
use tracing::debug;

/// Source series plus visible range, with the filtered series and its chart
/// model derived from them.
///
/// Inputs are changed through the setters; `refresh` recomputes only when
/// the source identity or the range differs from the last computation.
pub struct RangeFilteredSeriesView {
    source: Arc<[TimestampedPoint]>,
    range: DateRange,
    builder: ChartModelBuilder,
    computed_for: Option<(Arc<[TimestampedPoint]>, DateRange)>,
    filtered: Vec<TimestampedPoint>,
    series_model: ChartModel,
}

impl RangeFilteredSeriesView {
    pub fn new(
        source: Arc<[TimestampedPoint]>,
        range: DateRange,
        builder: ChartModelBuilder,
    ) -> Self {
        let mut view = Self {
            source,
            range,
            builder,
            computed_for: None,
            filtered: Vec::new(),
            series_model: ChartModel::default(),
        };
        view.refresh();
        view
    }

    pub fn source(&self) -> &Arc<[TimestampedPoint]> {
        &self.source
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn set_source(&mut self, source: Arc<[TimestampedPoint]>) {
        self.source = source;
    }

    pub fn set_range(&mut self, range: DateRange) {
        self.range = range;
    }

    pub fn set_start(&mut self, start: NaiveDateTime) {
        self.range.set_start(start);
    }

    pub fn set_end(&mut self, end: NaiveDateTime) {
        self.range.set_end(end);
    }

    /// Inputs differ from those the derived data was computed for.
    pub fn is_stale(&self) -> bool {
        match &self.computed_for {
            Some((source, range)) => !Arc::ptr_eq(source, &self.source) || *range != self.range,
            None => true,
        }
    }

    /// Recompute the filtered series and chart model if an input changed.
    /// Returns whether anything was recomputed.
    pub fn refresh(&mut self) -> bool {
        if !self.is_stale() {
            return false;
        }

        self.filtered = filter_points(&self.source, &self.range);
        self.series_model = self.builder.series_model(&self.filtered);
        self.computed_for = Some((Arc::clone(&self.source), self.range));

        debug!(
            start = %self.range.start,
            end = %self.range.end,
            source_len = self.source.len(),
            visible = self.filtered.len(),
            "recomputed filtered series"
        );
        true
    }

    pub fn filtered(&self) -> &[TimestampedPoint] {
        &self.filtered
    }

    pub fn series_model(&self) -> &ChartModel {
        &self.series_model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, d).unwrap()
    }

    fn source() -> Arc<[TimestampedPoint]> {
        vec![
            TimestampedPoint::new("2024-07-01", 1.0),
            TimestampedPoint::new("2024-07-02", 2.0),
            TimestampedPoint::new("2024-07-03", 3.0),
        ]
        .into()
    }

    fn view(range: DateRange) -> RangeFilteredSeriesView {
        RangeFilteredSeriesView::new(source(), range, ChartModelBuilder::default())
    }

    #[test]
    fn test_new_computes_immediately() {
        let view = view(DateRange::from_days(day(1), day(2)));
        assert!(!view.is_stale());
        assert_eq!(view.filtered().len(), 2);
        assert_eq!(view.series_model().labels, vec!["2024-07-01", "2024-07-02"]);
    }

    #[test]
    fn test_refresh_is_noop_without_changes() {
        let mut view = view(DateRange::from_days(day(1), day(2)));
        assert!(!view.refresh());
        view.set_range(view.range());
        assert!(!view.refresh());
    }

    #[test]
    fn test_range_change_triggers_recompute() {
        let mut view = view(DateRange::from_days(day(1), day(2)));
        view.set_end(day(3).and_hms_opt(0, 0, 0).unwrap());
        assert!(view.is_stale());
        assert!(view.refresh());
        assert_eq!(view.series_model().datasets[0].values, vec![1.0, 2.0, 3.0]);

        view.set_start(day(5).and_hms_opt(0, 0, 0).unwrap());
        assert!(view.refresh());
        assert!(view.filtered().is_empty());
        assert!(view.series_model().is_empty());
    }

    #[test]
    fn test_source_identity_triggers_recompute() {
        let mut view = view(DateRange::from_days(day(1), day(3)));

        // Same contents, new allocation: still a new source.
        view.set_source(source());
        assert!(view.refresh());

        let same = Arc::clone(view.source());
        view.set_source(same);
        assert!(!view.refresh());

        view.set_source(vec![TimestampedPoint::new("2024-07-02", 9.0)].into());
        assert!(view.refresh());
        assert_eq!(view.series_model().datasets[0].values, vec![9.0]);
    }
}
