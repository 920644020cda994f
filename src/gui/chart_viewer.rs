//! Chart Viewer Widget
//! Scrollable column of the four chart panels.

use egui::{ScrollArea, Vec2};
use range_charts::charts::{ChartKind, ChartModel, ChartModelBuilder, ChartPlotter, ChartStyles};
use range_charts::config::PanelConfig;
use range_charts::data::FixtureSet;

/// Panels top to bottom.
const PANELS: [(ChartKind, &str); 4] = [
    (ChartKind::Line, "line_chart"),
    (ChartKind::Bar, "bar_chart"),
    (ChartKind::Pie, "pie_chart"),
    (ChartKind::StackedArea, "stacked_area_chart"),
];

/// Renderer default width/height ratio when a panel keeps its aspect ratio.
const DEFAULT_ASPECT_RATIO: f32 = 2.0;

/// Holds the unfiltered pie and stacked models and lays out every panel.
pub struct ChartViewer {
    panel: PanelConfig,
    styles: ChartStyles,
    pie_model: ChartModel,
    stacked_model: ChartModel,
}

impl ChartViewer {
    /// Build the fixed pie and stacked models once; their inputs never change.
    pub fn new(panel: PanelConfig, builder: &ChartModelBuilder, fixtures: &FixtureSet) -> Self {
        Self {
            panel,
            styles: builder.styles().clone(),
            pie_model: builder.pie_model(&fixtures.pie),
            stacked_model: builder.stacked_model(&fixtures.stacked),
        }
    }

    /// Size of a panel given the width available to it.
    ///
    /// Only the stacked panel follows its `responsive` and
    /// `maintain_aspect_ratio` flags; the rest are fixed.
    pub fn panel_size(&self, kind: ChartKind, available_width: f32) -> Vec2 {
        let fixed = egui::vec2(self.panel.width, self.panel.height);
        if kind != ChartKind::StackedArea {
            return fixed;
        }

        let stacked = &self.styles.stacked;
        let width = if stacked.responsive {
            available_width.max(1.0)
        } else {
            fixed.x
        };
        let height = if stacked.maintain_aspect_ratio {
            width / DEFAULT_ASPECT_RATIO
        } else {
            fixed.y
        };
        egui::vec2(width, height)
    }

    /// Draw all panels; `series_model` feeds the line and bar charts.
    pub fn show(&self, ui: &mut egui::Ui, series_model: &ChartModel) {
        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for (kind, id) in PANELS {
                    let model = match kind {
                        ChartKind::Line | ChartKind::Bar => series_model,
                        ChartKind::Pie => &self.pie_model,
                        ChartKind::StackedArea => &self.stacked_model,
                    };
                    let size = self.panel_size(kind, ui.available_width());

                    ui.allocate_ui(size, |ui| {
                        ui.set_min_size(size);
                        ChartPlotter::draw(ui, id, kind, model, &self.styles, size);
                    });

                    ui.add_space(self.panel.spacing);
                }
            });
    }
}
