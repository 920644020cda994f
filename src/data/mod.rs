//! Data module - fixtures, date parsing and range filtering

mod fixtures;
mod point;
mod range;

pub use fixtures::{FixtureSet, SeriesSource};
pub use point::{parse_instant, PieFixture, StackedPoint, TimestampedPoint};
pub use range::{filter_points, DateRange};
