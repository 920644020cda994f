//! Chart Plotter Module
//! Draws chart models with egui_plot (line, bar, stacked area) and the egui painter (pie).

use super::color::Rgba;
use super::model::ChartModel;
use super::style::{ChartStyles, LegendPosition, PieStyle, StackedStyle, TimeAxisStyle};
use crate::data::parse_instant;
use chrono::DateTime;
use egui::{Color32, RichText, Sense, Shape, Stroke, Vec2};
use egui_plot::{
    Bar, BarChart, Corner, GridInput, GridMark, Legend, Line, Plot, PlotPoint, PlotPoints,
    Polygon,
};
use std::f32::consts::{FRAC_PI_2, TAU};
use std::fmt::Write;

/// Bars take this share of one time-axis unit.
const BAR_WIDTH_RATIO: f64 = 0.8;
/// Upper bound on tick count along the time axis.
const MAX_TIME_TICKS: f64 = 8.0;
/// Hard cap on marks handed back to the plot, whatever the bounds.
const MAX_GRID_MARKS: f64 = 64.0;
/// Tick spacings tried, in time-axis units.
const TICK_MULTIPLES: [f64; 12] = [
    1.0, 2.0, 3.0, 4.0, 6.0, 12.0, 24.0, 48.0, 96.0, 168.0, 336.0, 720.0,
];
/// Widest arc painted as a single triangle.
const MAX_WEDGE: f32 = TAU / 128.0;
const PIE_LEGEND_HEIGHT: f32 = 28.0;
const GRAY: Color32 = Color32::from_rgb(150, 150, 150);

/// Panel kinds the viewer stacks vertically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
    StackedArea,
}

/// Draws `ChartModel`s.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Draw `model` as `kind` into a `size` panel.
    pub fn draw(
        ui: &mut egui::Ui,
        id: &str,
        kind: ChartKind,
        model: &ChartModel,
        styles: &ChartStyles,
        size: Vec2,
    ) {
        match kind {
            ChartKind::Line => Self::draw_line_chart(ui, id, model, &styles.time_axis, size),
            ChartKind::Bar => Self::draw_bar_chart(ui, id, model, &styles.time_axis, size),
            ChartKind::StackedArea => Self::draw_stacked_area_chart(
                ui,
                id,
                model,
                &styles.time_axis,
                &styles.stacked,
                size,
            ),
            ChartKind::Pie => Self::draw_pie_chart(ui, model, &styles.pie, size),
        }
    }

    /// X coordinate for a label: seconds since the epoch of its parsed instant.
    pub fn label_x(label: &str) -> Option<f64> {
        parse_instant(label).map(|t| t.and_utc().timestamp() as f64)
    }

    /// `[x, value]` pairs of one dataset, skipping labels that do not parse.
    pub fn dataset_points(model: &ChartModel, dataset: usize) -> Vec<[f64; 2]> {
        let Some(ds) = model.datasets.get(dataset) else {
            return Vec::new();
        };
        model
            .labels
            .iter()
            .zip(ds.values.iter())
            .filter_map(|(label, &v)| Self::label_x(label).map(|x| [x, v]))
            .collect()
    }

    /// Tick label for an x coordinate in epoch seconds.
    pub fn format_tick(x: f64, display_format: &str) -> String {
        let mut out = String::new();
        if let Some(dt) = DateTime::from_timestamp(x.round() as i64, 0) {
            // Formats are validated at config load; a failure leaves the label blank.
            let _ = write!(out, "{}", dt.naive_utc().format(display_format));
        }
        out
    }

    /// Evenly spaced time ticks, a whole number of units apart.
    pub fn time_grid_marks(bounds: (f64, f64), unit_seconds: f64) -> Vec<GridMark> {
        let (min, max) = bounds;
        let span = max - min;
        if !span.is_finite() || span <= 0.0 || unit_seconds <= 0.0 {
            return Vec::new();
        }

        let step = TICK_MULTIPLES
            .iter()
            .map(|m| m * unit_seconds)
            .find(|step| span / step <= MAX_TIME_TICKS)
            .unwrap_or_else(|| (span / MAX_TIME_TICKS / unit_seconds).ceil() * unit_seconds);

        let first = (min / step).ceil() * step;
        // Far from the origin a step can vanish into float spacing.
        if !first.is_finite() || first + step == first || first > max {
            return Vec::new();
        }

        let count = ((max - first) / step).floor().min(MAX_GRID_MARKS) as usize + 1;
        (0..count)
            .map(|i| GridMark {
                value: first + i as f64 * step,
                step_size: step,
            })
            .collect()
    }

    /// Start angle and sweep (radians, clockwise from 12 o'clock) of each slice.
    ///
    /// Non-positive or non-finite values get no slice.
    pub fn pie_slices(values: &[f64]) -> Vec<Option<(f32, f32)>> {
        let total: f64 = values
            .iter()
            .filter(|v| v.is_finite() && **v > 0.0)
            .sum();
        if total <= 0.0 {
            return vec![None; values.len()];
        }

        let mut start = -FRAC_PI_2;
        values
            .iter()
            .map(|&v| {
                if !v.is_finite() || v <= 0.0 {
                    return None;
                }
                let sweep = (v / total) as f32 * TAU;
                let slice = (start, sweep);
                start += sweep;
                Some(slice)
            })
            .collect()
    }

    /// Slice under `angle` (as returned by `atan2` in screen space).
    pub fn slice_at(slices: &[Option<(f32, f32)>], angle: f32) -> Option<usize> {
        let angle = if angle < -FRAC_PI_2 { angle + TAU } else { angle };
        slices.iter().position(|slice| {
            slice.is_some_and(|(start, sweep)| angle >= start && angle < start + sweep)
        })
    }

    fn legend(position: LegendPosition) -> Option<Legend> {
        match position {
            LegendPosition::Top => Some(Legend::default().position(Corner::LeftTop)),
            LegendPosition::Bottom => Some(Legend::default().position(Corner::LeftBottom)),
            LegendPosition::Hidden => None,
        }
    }

    fn time_plot(plot: Plot, display_format: String, unit: f64, size: Vec2) -> Plot {
        let hover_format = display_format.clone();

        plot.width(size.x)
            .height(size.y)
            .allow_scroll(false)
            .x_grid_spacer(move |input: GridInput| Self::time_grid_marks(input.bounds, unit))
            .x_axis_formatter(move |mark, _range| Self::format_tick(mark.value, &display_format))
            .label_formatter(move |name, value: &PlotPoint| {
                let when = Self::format_tick(value.x, &hover_format);
                if name.is_empty() {
                    format!("{}\n{:.2}", when, value.y)
                } else {
                    format!("{}\n{}: {:.2}", when, name, value.y)
                }
            })
    }

    /// Line chart over a time axis.
    pub fn draw_line_chart(
        ui: &mut egui::Ui,
        id: &str,
        model: &ChartModel,
        axis: &TimeAxisStyle,
        size: Vec2,
    ) {
        let plot = Self::time_plot(
            Plot::new(id),
            axis.display_format.clone(),
            axis.unit.seconds(),
            size,
        )
        .legend(Legend::default().position(Corner::LeftTop));

        plot.show(ui, |plot_ui| {
            for (i, ds) in model.datasets.iter().enumerate() {
                let points: PlotPoints = Self::dataset_points(model, i).into_iter().collect();
                let color = ds.style.border_color.map(Rgba::to_color32).unwrap_or(GRAY);
                let mut line = Line::new(points).color(color).width(2.0).name(&ds.name);
                if ds.style.fill {
                    line = line.fill(0.0_f32);
                }
                plot_ui.line(line);
            }
        });
    }

    /// Bar chart over a time axis, one bar per point.
    pub fn draw_bar_chart(
        ui: &mut egui::Ui,
        id: &str,
        model: &ChartModel,
        axis: &TimeAxisStyle,
        size: Vec2,
    ) {
        let width = axis.unit.seconds() * BAR_WIDTH_RATIO;
        let plot = Self::time_plot(
            Plot::new(id),
            axis.display_format.clone(),
            axis.unit.seconds(),
            size,
        )
        .legend(Legend::default().position(Corner::LeftTop));

        plot.show(ui, |plot_ui| {
            for (i, ds) in model.datasets.iter().enumerate() {
                let border = ds.style.border_color.map(Rgba::to_color32).unwrap_or(GRAY);
                let fill = ds
                    .style
                    .background_at(0)
                    .map(Rgba::to_color32)
                    .unwrap_or(border);

                let bars: Vec<Bar> = Self::dataset_points(model, i)
                    .into_iter()
                    .map(|[x, v]| {
                        Bar::new(x, v)
                            .width(width)
                            .fill(fill)
                            .stroke(Stroke::new(1.0, border))
                    })
                    .collect();

                plot_ui.bar_chart(BarChart::new(bars).color(fill).name(&ds.name));
            }
        });
    }

    /// Stacked-area chart: filled bands between cumulative bounds.
    pub fn draw_stacked_area_chart(
        ui: &mut egui::Ui,
        id: &str,
        model: &ChartModel,
        axis: &TimeAxisStyle,
        style: &StackedStyle,
        size: Vec2,
    ) {
        let xs: Vec<Option<f64>> = model.labels.iter().map(|l| Self::label_x(l)).collect();
        let bounds = model.stacked_bounds();

        let mut plot = Self::time_plot(
            Plot::new(id),
            axis.display_format.clone(),
            axis.unit.seconds(),
            size,
        )
        .show_grid(style.show_grid);
        if style.begin_at_zero {
            plot = plot.include_y(0.0);
        }
        if let Some(legend) = Self::legend(style.legend) {
            plot = plot.legend(legend);
        }

        plot.show(ui, |plot_ui| {
            for (ds, band) in model.datasets.iter().zip(bounds.iter()) {
                let border = ds.style.border_color.map(Rgba::to_color32).unwrap_or(GRAY);
                let fill = ds
                    .style
                    .background_at(0)
                    .map(Rgba::to_color32)
                    .unwrap_or(border);

                let edge: Vec<[f64; 2]> = xs
                    .iter()
                    .zip(band.iter())
                    .filter_map(|(x, &(_, upper))| x.map(|x| [x, upper]))
                    .collect();

                if ds.style.fill {
                    // One quad per segment keeps every polygon convex.
                    let segments = xs
                        .iter()
                        .zip(band.iter())
                        .filter_map(|(x, b)| x.map(|x| (x, *b)));
                    let mut prev: Option<(f64, (f64, f64))> = None;
                    for (x1, (lo1, hi1)) in segments {
                        if let Some((x0, (lo0, hi0))) = prev {
                            let quad: PlotPoints =
                                vec![[x0, lo0], [x0, hi0], [x1, hi1], [x1, lo1]].into();
                            plot_ui.polygon(
                                Polygon::new(quad)
                                    .fill_color(fill)
                                    .stroke(Stroke::NONE)
                                    .name(&ds.name),
                            );
                        }
                        prev = Some((x1, (lo1, hi1)));
                    }
                }

                plot_ui.line(
                    Line::new(PlotPoints::from(edge))
                        .color(border)
                        .width(1.5)
                        .name(&ds.name),
                );
            }
        });
    }

    /// Pie chart painted directly; the hovered slice moves out by the hover offset.
    pub fn draw_pie_chart(ui: &mut egui::Ui, model: &ChartModel, style: &PieStyle, size: Vec2) {
        let Some(ds) = model.datasets.first() else {
            return;
        };
        let count = model.labels.len().min(ds.values.len());
        let slices = Self::pie_slices(&ds.values[..count]);
        let hover_offset = ds.style.hover_offset.unwrap_or(0.0);
        let legend_height = match style.legend {
            LegendPosition::Hidden => 0.0,
            _ => PIE_LEGEND_HEIGHT,
        };

        ui.vertical(|ui| {
            if style.legend == LegendPosition::Top {
                Self::draw_pie_legend(ui, model, count);
            }

            let (response, painter) = ui.allocate_painter(
                egui::vec2(size.x, (size.y - legend_height).max(0.0)),
                Sense::hover(),
            );
            let center = response.rect.center();
            let radius = (response.rect.width().min(response.rect.height()) / 2.0
                - hover_offset
                - 2.0)
                .max(0.0);

            let hovered = response.hover_pos().and_then(|pos| {
                let d = pos - center;
                if d.length() > radius + hover_offset {
                    None
                } else {
                    Self::slice_at(&slices, d.y.atan2(d.x))
                }
            });

            for (i, slice) in slices.iter().enumerate() {
                let Some((start, sweep)) = *slice else {
                    continue;
                };
                let color = ds
                    .style
                    .background_at(i)
                    .map(Rgba::to_color32)
                    .unwrap_or(GRAY);
                let mid = start + sweep / 2.0;
                let shift = if hovered == Some(i) {
                    egui::vec2(mid.cos(), mid.sin()) * hover_offset
                } else {
                    Vec2::ZERO
                };
                Self::paint_slice(&painter, center + shift, radius, start, sweep, color);
            }

            if let Some(i) = hovered {
                response.on_hover_text(format!("{}: {}", model.labels[i], ds.values[i]));
            }

            if style.legend == LegendPosition::Bottom {
                Self::draw_pie_legend(ui, model, count);
            }
        });
    }

    fn paint_slice(
        painter: &egui::Painter,
        center: egui::Pos2,
        radius: f32,
        start: f32,
        sweep: f32,
        color: Color32,
    ) {
        let at = |angle: f32| center + egui::vec2(angle.cos(), angle.sin()) * radius;
        let steps = ((sweep / MAX_WEDGE).ceil() as usize).max(1);

        for k in 0..steps {
            let a0 = start + sweep * k as f32 / steps as f32;
            let a1 = start + sweep * (k + 1) as f32 / steps as f32;
            painter.add(Shape::convex_polygon(
                vec![center, at(a0), at(a1)],
                color,
                Stroke::NONE,
            ));
        }

        let edge = Stroke::new(1.5, Color32::WHITE);
        painter.line_segment([center, at(start)], edge);
        painter.line_segment([center, at(start + sweep)], edge);
    }

    fn draw_pie_legend(ui: &mut egui::Ui, model: &ChartModel, count: usize) {
        let Some(ds) = model.datasets.first() else {
            return;
        };
        ui.horizontal_wrapped(|ui| {
            for (i, label) in model.labels.iter().take(count).enumerate() {
                let color = ds
                    .style
                    .background_at(i)
                    .map(Rgba::to_color32)
                    .unwrap_or(GRAY);
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(16.0, 16.0), Sense::hover());
                ui.painter().rect_filled(rect, 3.0, color);
                ui.label(RichText::new(label).size(13.0));
                ui.add_space(12.0);
            }
        });
    }
}
