//! Static chart styling records.
//!
//! These are plain immutable configuration values handed to the model
//! builder and the plotter. Nothing here is derived from data.

use super::color::Rgba;
use serde::Deserialize;

/// Where a legend sits relative to its chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    #[default]
    Top,
    Bottom,
    Hidden,
}

/// Granularity of the time axis; sets tick spacing and bar width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Minute,
    #[default]
    Hour,
    Day,
}

impl TimeUnit {
    pub fn seconds(self) -> f64 {
        match self {
            TimeUnit::Minute => 60.0,
            TimeUnit::Hour => 3_600.0,
            TimeUnit::Day => 86_400.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TimeAxisStyle {
    pub unit: TimeUnit,
    /// chrono strftime pattern for tick labels.
    pub display_format: String,
}

impl Default for TimeAxisStyle {
    fn default() -> Self {
        Self {
            unit: TimeUnit::Hour,
            display_format: "%b %d, %H:%M".to_string(),
        }
    }
}

/// Styling of one named numeric dataset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SeriesStyle {
    pub label: String,
    pub border_color: Rgba,
    pub background_color: Rgba,
    pub fill: bool,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            label: "Dataset of July-August 2024".to_string(),
            border_color: Rgba::with_alpha(75, 192, 192, 1.0),
            background_color: Rgba::with_alpha(75, 192, 192, 0.5),
            fill: false,
        }
    }
}

/// Stacked-area panel: two layers sharing one stacking key.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StackedStyle {
    pub stack: String,
    pub first: SeriesStyle,
    pub second: SeriesStyle,
    pub legend: LegendPosition,
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub begin_at_zero: bool,
    pub show_grid: bool,
}

impl Default for StackedStyle {
    fn default() -> Self {
        Self {
            stack: "stack1".to_string(),
            first: SeriesStyle {
                label: "Value 1".to_string(),
                border_color: Rgba::with_alpha(75, 192, 192, 1.0),
                background_color: Rgba::with_alpha(75, 192, 192, 0.9),
                fill: true,
            },
            second: SeriesStyle {
                label: "Value 2".to_string(),
                border_color: Rgba::with_alpha(255, 99, 132, 1.0),
                background_color: Rgba::with_alpha(255, 99, 132, 0.9),
                fill: true,
            },
            legend: LegendPosition::Top,
            responsive: true,
            maintain_aspect_ratio: false,
            begin_at_zero: true,
            show_grid: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PieStyle {
    pub label: String,
    pub palette: Vec<Rgba>,
    /// Pixels a hovered slice moves outwards.
    pub hover_offset: f32,
    pub legend: LegendPosition,
}

impl Default for PieStyle {
    fn default() -> Self {
        Self {
            label: "My First Dataset".to_string(),
            palette: vec![
                Rgba::rgb(0xFF, 0x63, 0x84),
                Rgba::rgb(0x36, 0xA2, 0xEB),
                Rgba::rgb(0xFF, 0xCE, 0x56),
                Rgba::rgb(0x4B, 0xC0, 0xC0),
                Rgba::rgb(0x99, 0x66, 0xFF),
            ],
            hover_offset: 4.0,
            legend: LegendPosition::Bottom,
        }
    }
}

/// Every style record the builder and plotter need.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartStyles {
    pub time_axis: TimeAxisStyle,
    pub series: SeriesStyle,
    pub stacked: StackedStyle,
    pub pie: PieStyle,
}
