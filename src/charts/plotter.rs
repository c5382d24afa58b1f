//! Trend Plotter Module
//! Draws the quarterly registration line chart using egui_plot.
//! Line color is keyed by manufacturer, dash pattern by vehicle category.

use crate::analysis::AggregatedRow;
use egui::{Color32, RichText};
use egui_plot::{Legend, Line, LineStyle, Plot, PlotPoints, Points};

/// Color palette for manufacturers
pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(52, 152, 219),  // Blue
    Color32::from_rgb(231, 76, 60),   // Red
    Color32::from_rgb(46, 204, 113),  // Green
    Color32::from_rgb(155, 89, 182),  // Purple
    Color32::from_rgb(243, 156, 18),  // Orange
    Color32::from_rgb(26, 188, 156),  // Teal
    Color32::from_rgb(233, 30, 99),   // Pink
    Color32::from_rgb(0, 188, 212),   // Cyan
    Color32::from_rgb(255, 87, 34),   // Deep Orange
    Color32::from_rgb(96, 125, 139),  // Blue Grey
];

/// Creates the registration trend visualization using egui_plot.
pub struct TrendPlotter;

impl TrendPlotter {
    /// Get color for a manufacturer by its index in the sorted manufacturer list.
    pub fn manufacturer_color(index: usize) -> Color32 {
        PALETTE[index % PALETTE.len()]
    }

    /// Get line style for a category by its index in the sorted category list.
    pub fn category_style(index: usize) -> LineStyle {
        match index % 3 {
            0 => LineStyle::Solid,
            1 => LineStyle::Dashed { length: 8.0 },
            _ => LineStyle::Dotted { spacing: 6.0 },
        }
    }

    /// Quarter labels forming the x-axis, oldest first.
    pub fn quarter_axis(rows: &[AggregatedRow]) -> Vec<String> {
        let mut quarters: Vec<String> = rows.iter().map(|r| r.quarter_label.clone()).collect();
        quarters.sort();
        quarters.dedup();
        quarters
    }

    /// Draw the registration trend chart, one marked line per
    /// (manufacturer, category) series.
    pub fn draw_trend_chart(ui: &mut egui::Ui, rows: &[AggregatedRow]) {
        if rows.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        }

        let quarters = Self::quarter_axis(rows);

        let mut manufacturers: Vec<String> =
            rows.iter().map(|r| r.manufacturer.clone()).collect();
        manufacturers.sort();
        manufacturers.dedup();

        let mut categories: Vec<String> =
            rows.iter().map(|r| r.vehicle_category.clone()).collect();
        categories.sort();
        categories.dedup();

        // One point series per (manufacturer, category), x = quarter index.
        let mut series: Vec<(String, Color32, LineStyle, Vec<[f64; 2]>)> = Vec::new();
        for row in rows {
            let x = quarters
                .iter()
                .position(|q| q == &row.quarter_label)
                .unwrap_or(0) as f64;
            let point = [x, row.total_registrations as f64];

            let label = row.series_label();
            match series.iter_mut().find(|(name, ..)| name == &label) {
                Some((_, _, _, points)) => points.push(point),
                None => {
                    let color_idx = manufacturers
                        .iter()
                        .position(|m| m == &row.manufacturer)
                        .unwrap_or(0);
                    let style_idx = categories
                        .iter()
                        .position(|c| c == &row.vehicle_category)
                        .unwrap_or(0);
                    series.push((
                        label,
                        Self::manufacturer_color(color_idx),
                        Self::category_style(style_idx),
                        vec![point],
                    ));
                }
            }
        }

        let x_labels = quarters.clone();
        Plot::new("registration_trend")
            .height(340.0)
            .legend(Legend::default())
            .allow_scroll(false)
            .x_axis_label("Quarter")
            .y_axis_label("Registrations")
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round() as usize;
                if (mark.value - idx as f64).abs() < 1e-6 && idx < x_labels.len() {
                    x_labels[idx].clone()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                for (name, color, style, points) in &series {
                    plot_ui.line(
                        Line::new(PlotPoints::from_iter(points.iter().copied()))
                            .color(*color)
                            .style(*style)
                            .width(2.0)
                            .name(name),
                    );
                    plot_ui.points(
                        Points::new(PlotPoints::from_iter(points.iter().copied()))
                            .radius(3.5)
                            .color(*color)
                            .name(name),
                    );
                }
            });
    }
}
