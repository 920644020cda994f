//! GUI module - User interface components

mod app;
mod chart_viewer;
mod range_picker;

pub use app::RangeChartsApp;
pub use chart_viewer::ChartViewer;
pub use range_picker::{RangePicker, RangePickerAction};
