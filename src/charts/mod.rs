//! Charts module - Chart models, styling and rendering

mod builder;
mod color;
mod model;
mod plotter;
mod style;

pub use builder::ChartModelBuilder;
pub use color::Rgba;
pub use model::{ChartModel, Dataset, DatasetStyle};
pub use plotter::{ChartKind, ChartPlotter};
pub use style::{
    ChartStyles, LegendPosition, PieStyle, SeriesStyle, StackedStyle, TimeAxisStyle, TimeUnit,
};
