use std::ops::RangeInclusive;

use eframe::egui::{self, Color32, Pos2, Ui};
use egui_plot::{Bar, BarChart, GridMark, Line, Plot, PlotPoints, Points};

use crate::color::{ColorMap, generate_palette};
use crate::data::filter::{rating_points, timing_points};
use crate::data::model::MovieDataset;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Dashboard layout (central panel)
// ---------------------------------------------------------------------------

/// Render the three charts: line and bar side by side, pie below.
pub fn dashboard(ui: &mut Ui, state: &AppState) {
    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a movie file to view the dashboard  (File → Open…)");
            });
            return;
        }
    };

    let charts = state.charts;
    if !charts.any() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("All charts hidden — re-enable them in the top bar");
        });
        return;
    }

    let top_row = charts.line || charts.bar;
    let chart_height = if top_row && charts.pie {
        ((ui.available_height() - 60.0) * 0.5).max(120.0)
    } else {
        (ui.available_height() - 40.0).max(120.0)
    };

    match (charts.line, charts.bar) {
        (true, true) => {
            ui.columns(2, |cols: &mut [Ui]| {
                line_chart(&mut cols[0], dataset, &state.visible_indices, chart_height);
                bar_chart(&mut cols[1], dataset, &state.visible_indices, chart_height);
            });
        }
        (true, false) => line_chart(ui, dataset, &state.visible_indices, chart_height),
        (false, true) => bar_chart(ui, dataset, &state.visible_indices, chart_height),
        (false, false) => {}
    }

    if charts.pie {
        if top_row {
            ui.add_space(8.0);
        }
        pie_chart(ui, &state.genre_tally, &state.genre_colors);
    }
}

// ---------------------------------------------------------------------------
// Line chart: Movie Name vs Rating(10)
// ---------------------------------------------------------------------------

fn line_chart(ui: &mut Ui, dataset: &MovieDataset, indices: &[usize], height: f32) {
    ui.strong("Movie Name vs Rating(10)");

    let pairs = rating_points(dataset, indices);
    let names: Vec<String> = pairs.iter().map(|(name, _)| name.clone()).collect();

    let line_points: PlotPoints = pairs
        .iter()
        .enumerate()
        .map(|(i, &(_, rating))| [i as f64, rating])
        .collect();
    let marker_points: PlotPoints = pairs
        .iter()
        .enumerate()
        .map(|(i, &(_, rating))| [i as f64, rating])
        .collect();

    Plot::new("rating_line")
        .height(height)
        .y_axis_label("Rating(10)")
        .x_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            axis_name(&names, mark.value)
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(line_points).color(Color32::RED).width(1.5));
            plot_ui.points(Points::new(marker_points).color(Color32::RED).radius(3.0));
        });
}

// ---------------------------------------------------------------------------
// Bar chart: Movie Name vs Timing(min)
// ---------------------------------------------------------------------------

fn bar_chart(ui: &mut Ui, dataset: &MovieDataset, indices: &[usize], height: f32) {
    ui.strong("Movie Name vs Timing(min)");

    let pairs = timing_points(dataset, indices);
    let names: Vec<String> = pairs.iter().map(|(name, _)| name.clone()).collect();

    // One distinct colour per bar, as the source dashboard does.
    let palette = generate_palette(pairs.len());
    let bars: Vec<Bar> = pairs
        .iter()
        .zip(palette)
        .enumerate()
        .map(|(i, ((name, timing), color))| {
            Bar::new(i as f64, *timing)
                .name(name)
                .fill(color)
                .width(0.7)
        })
        .collect();

    Plot::new("timing_bars")
        .height(height)
        .y_axis_label("Timing(min)")
        .x_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            axis_name(&names, mark.value)
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

/// Label an integer axis position with the movie at that filtered index.
fn axis_name(names: &[String], value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    match names.get(rounded as usize) {
        Some(name) => truncate_label(name, 14),
        None => String::new(),
    }
}

fn truncate_label(name: &str, max_chars: usize) -> String {
    if name.chars().count() <= max_chars {
        name.to_string()
    } else {
        let head: String = name.chars().take(max_chars - 1).collect();
        format!("{head}…")
    }
}

// ---------------------------------------------------------------------------
// Pie chart: Genre Distribution
// ---------------------------------------------------------------------------

/// Donut chart of the genre tally, painted directly (egui_plot has no pie).
///
/// The tally always has at least the "No Data" sentinel entry, so the
/// chart never disappears when filters match nothing.
fn pie_chart(ui: &mut Ui, tally: &[(String, usize)], colors: &ColorMap) {
    ui.strong("Genre Distribution");

    let total: f64 = tally.iter().map(|&(_, n)| n as f64).sum();
    if total <= 0.0 {
        return;
    }

    let (rect, _) = ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }
    let painter = ui.painter_at(rect);

    let radius = (rect.height().min(rect.width() * 0.5) * 0.5 - 10.0).max(10.0);
    let center = egui::pos2(rect.left() + rect.width() * 0.3, rect.center().y);

    // Slices start at 12 o'clock and run clockwise.
    let mut angle = -std::f64::consts::FRAC_PI_2;
    for (label, count) in tally {
        let sweep = (*count as f64 / total) * std::f64::consts::TAU;
        fill_slice(&painter, center, radius, angle, angle + sweep, colors.color_for(label));
        angle += sweep;
    }

    // Donut hole at 0.4 of the radius, like the source's hole=0.4.
    painter.circle_filled(center, radius * 0.4, ui.visuals().panel_fill);

    // Legend to the right of the donut, capped to the rows that fit.
    let row_height = 18.0;
    let legend_x = center.x + radius + 24.0;
    let (shown, hidden) = legend_layout(tally.len(), rect.height() - 8.0, row_height);
    let total_rows = shown + usize::from(hidden > 0);
    let mut y = (rect.center().y - total_rows as f32 * row_height * 0.5).max(rect.top() + 4.0);

    for (label, count) in &tally[..shown] {
        let swatch = egui::Rect::from_min_size(
            egui::pos2(legend_x, y + 3.0),
            egui::vec2(12.0, 12.0),
        );
        painter.rect_filled(swatch, egui::CornerRadius::same(2), colors.color_for(label));
        painter.text(
            egui::pos2(legend_x + 18.0, y + 9.0),
            egui::Align2::LEFT_CENTER,
            format!("{label} ({count})"),
            egui::FontId::proportional(13.0),
            ui.visuals().text_color(),
        );
        y += row_height;
    }

    if hidden > 0 {
        painter.text(
            egui::pos2(legend_x + 18.0, y + 9.0),
            egui::Align2::LEFT_CENTER,
            format!("… {hidden} more"),
            egui::FontId::proportional(13.0),
            ui.visuals().weak_text_color(),
        );
    }
}

/// How many tally entries the legend can show in `available_height`.
///
/// Returns `(shown, hidden)`; when not everything fits, one row is
/// reserved for the "… N more" overflow marker.
fn legend_layout(n_entries: usize, available_height: f32, row_height: f32) -> (usize, usize) {
    let max_rows = (available_height / row_height).floor().max(1.0) as usize;
    if n_entries <= max_rows {
        (n_entries, 0)
    } else {
        let shown = max_rows.saturating_sub(1);
        (shown, n_entries - shown)
    }
}

/// Fill one pie slice, subdividing wide arcs so every painted polygon
/// stays convex (a 100% slice is a full circle).
fn fill_slice(
    painter: &egui::Painter,
    center: Pos2,
    radius: f32,
    a0: f64,
    a1: f64,
    color: Color32,
) {
    const MAX_SEGMENT: f64 = std::f64::consts::FRAC_PI_2;
    const ARC_STEP: f64 = 0.05;

    let mut start = a0;
    while start < a1 - 1e-9 {
        let end = (start + MAX_SEGMENT).min(a1);
        let steps = ((end - start) / ARC_STEP).ceil().max(1.0) as usize;

        let mut points = Vec::with_capacity(steps + 2);
        points.push(center);
        for s in 0..=steps {
            let t = start + (end - start) * s as f64 / steps as f64;
            points.push(center + radius * egui::vec2(t.cos() as f32, t.sin() as f32));
        }
        painter.add(egui::Shape::convex_polygon(points, color, egui::Stroke::NONE));

        start = end;
    }
}
