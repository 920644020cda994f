//! Range Charts - date-range filtered chart models
//!
//! Filters timestamped series by an inclusive date range and projects fixture
//! records into chart models for line, bar, pie and stacked-area panels.

pub mod charts;
pub mod config;
pub mod data;
pub mod error;
pub mod view;

pub use view::RangeFilteredSeriesView;
