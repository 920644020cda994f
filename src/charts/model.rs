//! Chart Model Module
//! Renderer-facing chart input: labels plus named, styled numeric datasets.

use super::color::Rgba;

/// Per-dataset display attributes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetStyle {
    pub border_color: Option<Rgba>,
    /// One colour for the whole dataset, or one per point (pie slices).
    pub background: Vec<Rgba>,
    pub fill: bool,
    /// Datasets with the same key are drawn as additive layers.
    pub stack: Option<String>,
    pub hover_offset: Option<f32>,
}

impl DatasetStyle {
    /// Background for point `index`, cycling through the palette.
    pub fn background_at(&self, index: usize) -> Option<Rgba> {
        if self.background.is_empty() {
            None
        } else {
            Some(self.background[index % self.background.len()])
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub name: String,
    pub values: Vec<f64>,
    pub style: DatasetStyle,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartModel {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartModel {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Every dataset has exactly one value per label.
    pub fn is_aligned(&self) -> bool {
        self.datasets
            .iter()
            .all(|ds| ds.values.len() == self.labels.len())
    }

    /// Lower and upper bound of every value once stacking is applied.
    ///
    /// Datasets sharing a stack key accumulate in dataset order; a dataset
    /// without a key sits on zero. Returned per dataset, per point.
    pub fn stacked_bounds(&self) -> Vec<Vec<(f64, f64)>> {
        let mut running: Vec<(&str, Vec<f64>)> = Vec::new();

        self.datasets
            .iter()
            .map(|ds| -> Vec<(f64, f64)> {
                let Some(key) = ds.style.stack.as_deref() else {
                    return ds.values.iter().map(|&v| (0.0, v)).collect();
                };

                let slot = running.iter().position(|(k, _)| *k == key);
                let slot = match slot {
                    Some(i) => i,
                    None => {
                        running.push((key, Vec::new()));
                        running.len() - 1
                    }
                };
                let base = &mut running[slot].1;
                if base.len() < ds.values.len() {
                    base.resize(ds.values.len(), 0.0);
                }

                ds.values
                    .iter()
                    .zip(base.iter_mut())
                    .map(|(&v, acc)| {
                        let lower = *acc;
                        *acc += v;
                        (lower, *acc)
                    })
                    .collect()
            })
            .collect()
    }
}
