//! Dashboard Main Application
//! Main window with filter panel and trend view. Every filter change triggers
//! a full synchronous recomputation of the aggregation pipeline.

use crate::analysis::GrowthAggregator;
use crate::data::{Dataset, DatasetError};
use crate::gui::{FilterPanel, FilterPanelAction, TrendView};
use crate::gui::trend_view::INSIGHT_MANUFACTURER;
use egui::{Color32, RichText, SidePanel};

/// Main application window.
pub struct DashboardApp {
    dataset: Option<Dataset>,
    load_error: Option<String>,
    filter_panel: FilterPanel,
    trend_view: TrendView,
}

impl DashboardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = match Dataset::from_embedded() {
            Ok(dataset) => {
                let filter_panel =
                    FilterPanel::new(dataset.manufacturers(), dataset.categories());
                Self {
                    dataset: Some(dataset),
                    load_error: None,
                    filter_panel,
                    trend_view: TrendView::new(),
                }
            }
            Err(e) => Self::with_load_error(e),
        };
        app.recompute();
        app
    }

    fn with_load_error(error: DatasetError) -> Self {
        Self {
            dataset: None,
            load_error: Some(error.to_string()),
            filter_panel: FilterPanel::new(Vec::new(), Vec::new()),
            trend_view: TrendView::new(),
        }
    }

    /// Re-run filter, aggregation and growth from scratch.
    fn recompute(&mut self) {
        let Some(dataset) = &self.dataset else {
            return;
        };

        let manufacturers = self.filter_panel.selected_manufacturers();
        let categories = self.filter_panel.selected_categories();
        let rows = GrowthAggregator::aggregate(dataset.records(), &manufacturers, &categories);

        self.filter_panel.set_status(&format!(
            "{} records · {} aggregated rows",
            dataset.row_count(),
            rows.len()
        ));
        self.trend_view.set_rows(
            rows,
            self.filter_panel.is_manufacturer_selected(INSIGHT_MANUFACTURER),
        );
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - Filters
        SidePanel::left("filter_panel")
            .min_width(240.0)
            .max_width(300.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    match self.filter_panel.show(ui) {
                        FilterPanelAction::SelectionChanged => self.recompute(),
                        FilterPanelAction::None => {}
                    }
                });
            });

        // Central panel - Trend View (or the fatal load error)
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(error) = &self.load_error {
                ui.centered_and_justified(|ui| {
                    ui.label(
                        RichText::new(format!("Failed to load dataset: {}", error))
                            .size(16.0)
                            .color(Color32::from_rgb(220, 53, 69)),
                    );
                });
            } else {
                self.trend_view.show(ui);
            }
        });
    }
}
