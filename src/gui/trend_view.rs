//! Trend View Widget
//! Central panel with the trend chart, the sortable growth table and the
//! investor insight caption.

use crate::analysis::AggregatedRow;
use crate::charts::TrendPlotter;
use egui::{Color32, RichText, ScrollArea};
use std::cmp::Ordering;

const SUCCESS_COLOR: Color32 = Color32::from_rgb(40, 167, 69);
const NEGATIVE_COLOR: Color32 = Color32::from_rgb(220, 53, 69);

/// The manufacturer the insight caption keys on.
pub const INSIGHT_MANUFACTURER: &str = "Ola";

const INSIGHT_SUCCESS: &str = "Ola has shown the highest QoQ growth in the 2W segment, \
indicating a strong upward trend in EV adoption.";
const INSIGHT_PROMPT: &str = "Select Ola to observe strong EV growth trends.";

/// Table sort column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Quarter,
    Manufacturer,
    Category,
    Registrations,
    QoqGrowth,
    YoyGrowth,
}

/// Pick the insight caption for the current selection.
pub fn insight_message(insight_manufacturer_selected: bool) -> (&'static str, Color32) {
    if insight_manufacturer_selected {
        (INSIGHT_SUCCESS, SUCCESS_COLOR)
    } else {
        (INSIGHT_PROMPT, Color32::GRAY)
    }
}

/// Central display area: chart on top, growth table below, insight last.
pub struct TrendView {
    rows: Vec<AggregatedRow>,
    sort_column: SortColumn,
    sort_ascending: bool,
    insight_manufacturer_selected: bool,
}

impl Default for TrendView {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            // Newest quarters first, matching the default table order.
            sort_column: SortColumn::Quarter,
            sort_ascending: false,
            insight_manufacturer_selected: false,
        }
    }
}

impl TrendView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the displayed rows after a recomputation.
    pub fn set_rows(&mut self, rows: Vec<AggregatedRow>, insight_manufacturer_selected: bool) {
        self.rows = rows;
        self.insight_manufacturer_selected = insight_manufacturer_selected;
        self.sort_rows();
    }

    pub fn rows(&self) -> &[AggregatedRow] {
        &self.rows
    }

    /// Toggle direction when the active column is clicked again, otherwise
    /// switch column keeping the direction natural for it.
    fn set_sort(&mut self, column: SortColumn) {
        if self.sort_column == column {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_column = column;
            self.sort_ascending = column != SortColumn::Quarter;
        }
        self.sort_rows();
    }

    fn sort_rows(&mut self) {
        let column = self.sort_column;
        self.rows.sort_by(|a, b| {
            let ord = match column {
                SortColumn::Quarter => a.quarter_label.cmp(&b.quarter_label),
                SortColumn::Manufacturer => a.manufacturer.cmp(&b.manufacturer),
                SortColumn::Category => a.vehicle_category.cmp(&b.vehicle_category),
                SortColumn::Registrations => a.total_registrations.cmp(&b.total_registrations),
                SortColumn::QoqGrowth => Self::cmp_growth(a.qoq_growth_pct, b.qoq_growth_pct),
                SortColumn::YoyGrowth => Self::cmp_growth(a.yoy_growth_pct, b.yoy_growth_pct),
            };
            // Stable tie-break so equal keys keep a deterministic order.
            ord.then_with(|| a.quarter_label.cmp(&b.quarter_label))
                .then_with(|| a.manufacturer.cmp(&b.manufacturer))
                .then_with(|| a.vehicle_category.cmp(&b.vehicle_category))
        });
        if !self.sort_ascending {
            self.rows.reverse();
        }
    }

    /// Undefined growth sorts before every defined value.
    fn cmp_growth(a: Option<f64>, b: Option<f64>) -> Ordering {
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        }
    }

    /// Draw chart, table and insight.
    pub fn show(&mut self, ui: &mut egui::Ui) {
        ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            ui.label(
                RichText::new("📈 Registration Trend Over Time")
                    .size(16.0)
                    .strong(),
            );
            ui.add_space(5.0);
            TrendPlotter::draw_trend_chart(ui, &self.rows);

            ui.add_space(15.0);
            ui.separator();
            ui.add_space(10.0);

            ui.label(RichText::new("📋 Growth Table (QoQ & YoY)").size(16.0).strong());
            ui.add_space(5.0);
            self.draw_growth_table(ui);

            ui.add_space(15.0);
            ui.separator();
            ui.add_space(10.0);

            ui.label(RichText::new("💡 Investor Insight").size(14.0).strong());
            let (message, color) = insight_message(self.insight_manufacturer_selected);
            ui.label(RichText::new(message).size(12.0).color(color));
        });
    }

    fn draw_growth_table(&mut self, ui: &mut egui::Ui) {
        if self.rows.is_empty() {
            ui.label(RichText::new("No Data").size(14.0).color(Color32::GRAY));
            return;
        }

        let mut clicked: Option<SortColumn> = None;

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                egui::Grid::new("growth_table")
                    .striped(true)
                    .min_col_width(80.0)
                    .spacing([12.0, 4.0])
                    .show(ui, |ui| {
                        // Clickable headers toggle the sort
                        let headers = [
                            (SortColumn::Quarter, "Quarter"),
                            (SortColumn::Manufacturer, "Manufacturer"),
                            (SortColumn::Category, "Category"),
                            (SortColumn::Registrations, "Registrations"),
                            (SortColumn::QoqGrowth, "QoQ Growth (%)"),
                            (SortColumn::YoyGrowth, "YoY Growth (%)"),
                        ];
                        for (column, title) in headers {
                            let marker = if self.sort_column == column {
                                if self.sort_ascending {
                                    " ⏶"
                                } else {
                                    " ⏷"
                                }
                            } else {
                                ""
                            };
                            let label = RichText::new(format!("{}{}", title, marker))
                                .strong()
                                .size(12.0);
                            if ui.selectable_label(self.sort_column == column, label).clicked() {
                                clicked = Some(column);
                            }
                        }
                        ui.end_row();

                        for row in &self.rows {
                            ui.label(RichText::new(&row.quarter_label).size(12.0));
                            ui.label(RichText::new(&row.manufacturer).size(12.0));
                            ui.label(RichText::new(&row.vehicle_category).size(12.0));
                            ui.label(
                                RichText::new(row.total_registrations.to_string()).size(12.0),
                            );
                            Self::growth_cell(ui, row.qoq_growth_pct);
                            Self::growth_cell(ui, row.yoy_growth_pct);
                            ui.end_row();
                        }
                    });
            });

        if let Some(column) = clicked {
            self.set_sort(column);
        }
    }

    /// Growth cell: "-" for undefined, colored by sign otherwise.
    fn growth_cell(ui: &mut egui::Ui, value: Option<f64>) {
        match value {
            Some(pct) => {
                let color = if pct < 0.0 {
                    NEGATIVE_COLOR
                } else {
                    SUCCESS_COLOR
                };
                ui.label(RichText::new(format!("{:+.2}", pct)).size(12.0).color(color));
            }
            None => {
                ui.label(RichText::new("-").size(12.0));
            }
        }
    }
}
