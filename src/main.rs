//! Range Charts - Date-range filtered chart viewer
//!
//! Line, bar, pie and stacked-area panels over static sample datasets.

mod gui;

use anyhow::Context;
use eframe::egui;
use gui::RangeChartsApp;
use range_charts::config::AppConfig;
use range_charts::data::FixtureSet;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("range_charts=info")),
        )
        .with_target(true)
        .init();

    let config_path = AppConfig::resolve_path(std::env::args().nth(1));
    let config = AppConfig::load(config_path.as_deref()).context("loading configuration")?;
    let fixtures =
        FixtureSet::load(config.fixtures_dir.as_deref()).context("loading fixture data")?;

    info!(
        hour = fixtures.hour.len(),
        day = fixtures.day.len(),
        stacked = fixtures.stacked.len(),
        pie = fixtures.pie.labels.len(),
        "fixtures loaded"
    );

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window.inner_size)
            .with_min_inner_size(config.window.min_inner_size)
            .with_title(config.window.title.clone()),
        ..Default::default()
    };

    // Run the application
    let title = config.window.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(RangeChartsApp::new(cc, config, fixtures)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe failed: {e}"))
}
