//! Chart Model Builder
//! Projects fixture records into the labels/datasets shape of a `ChartModel`.

use super::model::{ChartModel, Dataset, DatasetStyle};
use super::style::{ChartStyles, SeriesStyle};
use crate::data::{PieFixture, StackedPoint, TimestampedPoint};

/// Builds chart models from records plus static styling.
///
/// Building never fails and never filters: whatever comes in is projected
/// as-is, including labels that will not parse as dates.
#[derive(Debug, Clone, Default)]
pub struct ChartModelBuilder {
    styles: ChartStyles,
}

impl ChartModelBuilder {
    pub fn new(styles: ChartStyles) -> Self {
        Self { styles }
    }

    pub fn styles(&self) -> &ChartStyles {
        &self.styles
    }

    /// One dataset of point values, labelled by the raw point dates.
    pub fn series_model(&self, points: &[TimestampedPoint]) -> ChartModel {
        ChartModel {
            labels: points.iter().map(|p| p.date.clone()).collect(),
            datasets: vec![Self::dataset(
                &self.styles.series,
                points.iter().map(|p| p.value).collect(),
                None,
            )],
        }
    }

    /// Two datasets (`value1`, `value2`) over one label sequence, stacked
    /// under the configured key.
    pub fn stacked_model(&self, points: &[StackedPoint]) -> ChartModel {
        let stacked = &self.styles.stacked;
        let key = Some(stacked.stack.clone());

        ChartModel {
            labels: points.iter().map(|p| p.date.clone()).collect(),
            datasets: vec![
                Self::dataset(
                    &stacked.first,
                    points.iter().map(|p| p.value1).collect(),
                    key.clone(),
                ),
                Self::dataset(
                    &stacked.second,
                    points.iter().map(|p| p.value2).collect(),
                    key,
                ),
            ],
        }
    }

    /// Passthrough of the pie fixture with one colour per slice.
    pub fn pie_model(&self, fixture: &PieFixture) -> ChartModel {
        let pie = &self.styles.pie;

        ChartModel {
            labels: fixture.labels.clone(),
            datasets: vec![Dataset {
                name: pie.label.clone(),
                values: fixture.values.clone(),
                style: DatasetStyle {
                    border_color: None,
                    background: pie.palette.clone(),
                    fill: true,
                    stack: None,
                    hover_offset: Some(pie.hover_offset),
                },
            }],
        }
    }

    fn dataset(style: &SeriesStyle, values: Vec<f64>, stack: Option<String>) -> Dataset {
        Dataset {
            name: style.label.clone(),
            values,
            style: DatasetStyle {
                border_color: Some(style.border_color),
                background: vec![style.background_color],
                fill: style.fill,
                stack,
                hover_offset: None,
            },
        }
    }
}
