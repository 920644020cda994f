//! Range Charts Main Application
//! Date-range pickers on top, the chart column below.

use crate::gui::{ChartViewer, RangePicker, RangePickerAction};
use egui::TopBottomPanel;
use range_charts::charts::ChartModelBuilder;
use range_charts::config::AppConfig;
use range_charts::data::FixtureSet;
use range_charts::RangeFilteredSeriesView;
use tracing::info;

/// Main application window.
pub struct RangeChartsApp {
    view: RangeFilteredSeriesView,
    picker: RangePicker,
    viewer: ChartViewer,
}

impl RangeChartsApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig, fixtures: FixtureSet) -> Self {
        let builder = ChartModelBuilder::new(config.styles.clone());
        let picker = RangePicker::new(config.range.start, config.range.end);
        let viewer = ChartViewer::new(config.panel, &builder, &fixtures);
        let view = RangeFilteredSeriesView::new(
            fixtures.series(config.source),
            picker.range(),
            builder,
        );

        info!(
            source = ?config.source,
            points = view.source().len(),
            visible = view.filtered().len(),
            "chart view ready"
        );

        Self {
            view,
            picker,
            viewer,
        }
    }
}

impl eframe::App for RangeChartsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top panel - From/To pickers
        TopBottomPanel::top("range_picker").show(ctx, |ui| {
            ui.add_space(6.0);
            match self.picker.show(ui) {
                RangePickerAction::Changed(range) => self.view.set_range(range),
                RangePickerAction::None => {}
            }
            ui.add_space(6.0);
        });

        self.view.refresh();

        // Central panel - chart column
        egui::CentralPanel::default().show(ctx, |ui| {
            self.viewer.show(ui, self.view.series_model());
        });
    }
}
