//! Fixture Loader Module
//! Loads the static sample datasets, either embedded or from a directory.

use super::point::{PieFixture, StackedPoint, TimestampedPoint};
use crate::error::FixtureError;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

const HOUR_FILE: &str = "hour_data.json";
const DAY_FILE: &str = "day_data.json";
const STACKED_FILE: &str = "stacked_area_data.json";
const PIE_FILE: &str = "pie_data.json";

const HOUR_EMBEDDED: &str = include_str!("../../assets/fixtures/hour_data.json");
const DAY_EMBEDDED: &str = include_str!("../../assets/fixtures/day_data.json");
const STACKED_EMBEDDED: &str = include_str!("../../assets/fixtures/stacked_area_data.json");
const PIE_EMBEDDED: &str = include_str!("../../assets/fixtures/pie_data.json");

/// Which timestamped series feeds the range-filtered panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesSource {
    /// Sub-day granularity
    #[default]
    Hour,
    /// Day granularity
    Day,
}

/// All sample datasets, shared read-only for the life of the app.
#[derive(Debug, Clone)]
pub struct FixtureSet {
    pub hour: Arc<[TimestampedPoint]>,
    pub day: Arc<[TimestampedPoint]>,
    pub stacked: Arc<[StackedPoint]>,
    pub pie: PieFixture,
}

impl FixtureSet {
    /// Fixtures compiled into the binary.
    pub fn embedded() -> Result<Self, FixtureError> {
        Ok(Self {
            hour: parse::<Vec<TimestampedPoint>>(HOUR_FILE, HOUR_EMBEDDED)?.into(),
            day: parse::<Vec<TimestampedPoint>>(DAY_FILE, DAY_EMBEDDED)?.into(),
            stacked: parse::<Vec<StackedPoint>>(STACKED_FILE, STACKED_EMBEDDED)?.into(),
            pie: parse(PIE_FILE, PIE_EMBEDDED)?,
        })
    }

    /// Load fixtures from `dir`, falling back to the embedded copy for any
    /// file that is missing. A file that exists but does not parse is an error.
    pub fn load(dir: Option<&Path>) -> Result<Self, FixtureError> {
        let Some(dir) = dir else {
            return Self::embedded();
        };

        Ok(Self {
            hour: load_one::<Vec<TimestampedPoint>>(dir, HOUR_FILE, HOUR_EMBEDDED)?.into(),
            day: load_one::<Vec<TimestampedPoint>>(dir, DAY_FILE, DAY_EMBEDDED)?.into(),
            stacked: load_one::<Vec<StackedPoint>>(dir, STACKED_FILE, STACKED_EMBEDDED)?.into(),
            pie: load_one(dir, PIE_FILE, PIE_EMBEDDED)?,
        })
    }

    /// Series selected for the filtered panels. Cloning shares the allocation.
    pub fn series(&self, source: SeriesSource) -> Arc<[TimestampedPoint]> {
        match source {
            SeriesSource::Hour => Arc::clone(&self.hour),
            SeriesSource::Day => Arc::clone(&self.day),
        }
    }
}

fn parse<T: DeserializeOwned>(name: &'static str, text: &str) -> Result<T, FixtureError> {
    serde_json::from_str(text).map_err(|source| FixtureError::Parse { name, source })
}

fn load_one<T: DeserializeOwned>(
    dir: &Path,
    name: &'static str,
    embedded: &str,
) -> Result<T, FixtureError> {
    let path = dir.join(name);
    match std::fs::read_to_string(&path) {
        Ok(text) => {
            debug!(path = %path.display(), "loading fixture");
            parse(name, &text)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "fixture not found, using embedded copy");
            parse(name, embedded)
        }
        Err(source) => Err(FixtureError::Read { path, source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_fixtures_parse() {
        let set = FixtureSet::embedded().unwrap();
        assert!(!set.hour.is_empty());
        assert!(!set.day.is_empty());
        assert!(!set.stacked.is_empty());
        assert_eq!(set.pie.labels.len(), 5);
        assert_eq!(set.pie.values, vec![300.0, 50.0, 100.0, 40.0, 120.0]);
        assert!(set.hour.iter().all(|p| p.instant().is_some()));
    }

    #[test]
    fn test_series_shares_allocation() {
        let set = FixtureSet::embedded().unwrap();
        let a = set.series(SeriesSource::Hour);
        let b = set.series(SeriesSource::Hour);
        assert!(Arc::ptr_eq(&a, &b));
        assert!(!Arc::ptr_eq(&a, &set.series(SeriesSource::Day)));
    }

    #[test]
    fn test_directory_overrides_and_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(HOUR_FILE),
            r#"[{"date":"2024-01-01T00:00:00","value":7}]"#,
        )
        .unwrap();

        let set = FixtureSet::load(Some(dir.path())).unwrap();
        assert_eq!(
            set.hour.to_vec(),
            vec![TimestampedPoint::new("2024-01-01T00:00:00", 7.0)]
        );
        assert_eq!(set.pie, FixtureSet::embedded().unwrap().pie);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(PIE_FILE), "{ nope").unwrap();

        let err = FixtureSet::load(Some(dir.path())).unwrap_err();
        assert!(matches!(err, FixtureError::Parse { name: PIE_FILE, .. }));
    }
}
