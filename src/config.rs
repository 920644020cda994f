//! Application configuration, read from TOML with every field defaulted.

use crate::charts::ChartStyles;
use crate::data::{DateRange, SeriesSource};
use crate::error::ConfigError;
use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment variable naming a config file when no CLI argument is given.
pub const CONFIG_ENV: &str = "RANGE_CHARTS_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Range Charts".to_string(),
            inner_size: [1100.0, 900.0],
            min_inner_size: [800.0, 600.0],
        }
    }
}

/// Initial From/To selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RangeConfig {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap_or_default(),
            end: NaiveDate::from_ymd_opt(2024, 7, 4).unwrap_or_default(),
        }
    }
}

impl RangeConfig {
    pub fn date_range(&self) -> DateRange {
        DateRange::from_days(self.start, self.end)
    }
}

/// Size of each chart panel.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub width: f32,
    pub height: f32,
    pub spacing: f32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 400.0,
            spacing: 15.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub range: RangeConfig,
    pub source: SeriesSource,
    pub fixtures_dir: Option<PathBuf>,
    pub panel: PanelConfig,
    pub styles: ChartStyles,
}

impl AppConfig {
    /// Config path from the first CLI argument, else `RANGE_CHARTS_CONFIG`.
    pub fn resolve_path(cli_arg: Option<String>) -> Option<PathBuf> {
        cli_arg
            .map(PathBuf::from)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
    }

    /// Load from `path`, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            info!("no config file given, using defaults");
            return Ok(Self::default());
        };

        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml(&text)?;

        // Relative fixture directories are relative to the config file.
        if let (Some(dir), Some(base)) = (config.fixtures_dir.as_mut(), path.parent()) {
            if dir.is_relative() {
                *dir = base.join(&*dir);
            }
        }

        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let format = &self.styles.time_axis.display_format;
        if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::DisplayFormat(format.clone()));
        }

        let PanelConfig { width, height, .. } = self.panel;
        if !(width > 0.0 && height > 0.0) {
            return Err(ConfigError::PanelSize { width, height });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{LegendPosition, Rgba, TimeUnit};

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(AppConfig::from_toml("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_defaults_match_demo_setup() {
        let config = AppConfig::default();
        assert_eq!(config.range.start.to_string(), "2024-07-01");
        assert_eq!(config.range.end.to_string(), "2024-07-04");
        assert_eq!(config.source, SeriesSource::Hour);
        assert_eq!(config.panel.width, 1000.0);
        assert_eq!(config.panel.height, 400.0);
        assert_eq!(config.styles.stacked.stack, "stack1");
        assert!(config.styles.stacked.responsive);
        assert!(!config.styles.stacked.maintain_aspect_ratio);
        assert_eq!(config.styles.pie.legend, LegendPosition::Bottom);
        assert_eq!(config.styles.pie.palette.len(), 5);
    }

    #[test]
    fn test_partial_override() {
        let config = AppConfig::from_toml(
            r##"
            source = "day"

            [range]
            start = "2024-08-01"

            [styles.time_axis]
            unit = "day"
            display_format = "%Y-%m-%d"

            [styles.series]
            border_color = "#FF0000"

            [styles.pie]
            palette = ["rgb(1, 2, 3)", "rgba(4, 5, 6, 0.5)"]
            "##,
        )
        .unwrap();

        assert_eq!(config.source, SeriesSource::Day);
        assert_eq!(config.range.start.to_string(), "2024-08-01");
        assert_eq!(config.range.end.to_string(), "2024-07-04");
        assert_eq!(config.styles.time_axis.unit, TimeUnit::Day);
        assert_eq!(config.styles.series.border_color, Rgba::rgb(255, 0, 0));
        assert_eq!(config.styles.series.label, "Dataset of July-August 2024");
        assert_eq!(
            config.styles.pie.palette,
            vec![Rgba::rgb(1, 2, 3), Rgba::with_alpha(4, 5, 6, 0.5)]
        );
    }

    #[test]
    fn test_example_file_matches_defaults() {
        let config = AppConfig::from_toml(include_str!("../range_charts.example.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_bad_color_is_parse_error() {
        let err = AppConfig::from_toml("[styles.series]\nborder_color = \"blurple\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_bad_display_format_rejected() {
        let err =
            AppConfig::from_toml("[styles.time_axis]\ndisplay_format = \"%Q\"").unwrap_err();
        assert!(matches!(err, ConfigError::DisplayFormat(_)));
    }

    #[test]
    fn test_non_positive_panel_rejected() {
        let err = AppConfig::from_toml("[panel]\nheight = 0.0").unwrap_err();
        assert!(matches!(err, ConfigError::PanelSize { .. }));
    }

    #[test]
    fn test_load_resolves_fixture_dir_against_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("charts.toml");
        std::fs::write(&path, "fixtures_dir = \"data\"\n").unwrap();

        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(config.fixtures_dir, Some(dir.path().join("data")));
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let err = AppConfig::load(Some(Path::new("/nonexistent/charts.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
