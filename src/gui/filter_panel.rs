//! Filter Panel Widget
//! Left side panel with manufacturer and vehicle category multi-selects.

use egui::{Color32, RichText};

/// Left side panel holding the current filter selection. Both lists default
/// to everything selected.
pub struct FilterPanel {
    pub manufacturers: Vec<String>,
    pub selected_manufacturers: Vec<bool>,
    pub categories: Vec<String>,
    pub selected_categories: Vec<bool>,
    pub status: String,
}

impl FilterPanel {
    pub fn new(manufacturers: Vec<String>, categories: Vec<String>) -> Self {
        let selected_manufacturers = vec![true; manufacturers.len()];
        let selected_categories = vec![true; categories.len()];
        Self {
            manufacturers,
            selected_manufacturers,
            categories,
            selected_categories,
            status: "Ready".to_string(),
        }
    }

    /// Currently selected manufacturer names.
    pub fn selected_manufacturers(&self) -> Vec<String> {
        Self::selected_values(&self.manufacturers, &self.selected_manufacturers)
    }

    /// Currently selected vehicle categories.
    pub fn selected_categories(&self) -> Vec<String> {
        Self::selected_values(&self.categories, &self.selected_categories)
    }

    /// Whether a manufacturer is in the current selection.
    pub fn is_manufacturer_selected(&self, name: &str) -> bool {
        self.manufacturers
            .iter()
            .zip(self.selected_manufacturers.iter())
            .any(|(m, &selected)| selected && m == name)
    }

    fn selected_values(values: &[String], selected: &[bool]) -> Vec<String> {
        values
            .iter()
            .zip(selected.iter())
            .filter(|(_, &selected)| selected)
            .map(|(v, _)| v.clone())
            .collect()
    }

    /// Draw the filter panel.
    pub fn show(&mut self, ui: &mut egui::Ui) -> FilterPanelAction {
        let mut action = FilterPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("📊 Vahan Dash")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("Vehicle registration trends for investors")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Manufacturer Section =====
        ui.label(RichText::new("🏭 Manufacturer").size(14.0).strong());
        ui.add_space(5.0);
        if Self::draw_checkbox_list(ui, "manufacturers", &self.manufacturers, &mut self.selected_manufacturers)
        {
            action = FilterPanelAction::SelectionChanged;
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Vehicle Category Section =====
        ui.label(RichText::new("🚗 Vehicle Category").size(14.0).strong());
        ui.add_space(5.0);
        if Self::draw_checkbox_list(ui, "categories", &self.categories, &mut self.selected_categories) {
            action = FilterPanelAction::SelectionChanged;
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Status Section =====
        ui.label(RichText::new(&self.status).size(11.0).color(Color32::GRAY));

        action
    }

    /// Checkbox list with Select All / Clear All. Returns true when the
    /// selection changed this frame.
    fn draw_checkbox_list(
        ui: &mut egui::Ui,
        id: &str,
        values: &[String],
        selected: &mut [bool],
    ) -> bool {
        let mut changed = false;

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(5.0)
            .show(ui, |ui| {
                for (i, value) in values.iter().enumerate() {
                    if i < selected.len() && ui.checkbox(&mut selected[i], value).changed() {
                        changed = true;
                    }
                }
            });

        ui.add_space(5.0);
        ui.push_id(id, |ui| {
            ui.horizontal(|ui| {
                if ui.small_button("Select All").clicked() {
                    selected.iter_mut().for_each(|v| *v = true);
                    changed = true;
                }
                if ui.small_button("Clear All").clicked() {
                    selected.iter_mut().for_each(|v| *v = false);
                    changed = true;
                }
            });
        });

        changed
    }

    /// Set the status line under the filters.
    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }
}

/// Actions triggered by the filter panel
#[derive(Debug, Clone, PartialEq)]
pub enum FilterPanelAction {
    None,
    SelectionChanged,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel() -> FilterPanel {
        FilterPanel::new(
            vec!["Hero".into(), "Ola".into(), "Tata".into()],
            vec!["2W".into(), "4W".into()],
        )
    }

    #[test]
    fn defaults_to_everything_selected() {
        let panel = panel();
        assert_eq!(panel.selected_manufacturers(), vec!["Hero", "Ola", "Tata"]);
        assert_eq!(panel.selected_categories(), vec!["2W", "4W"]);
    }

    #[test]
    fn deselection_is_reflected() {
        let mut panel = panel();
        panel.selected_manufacturers[1] = false;
        assert_eq!(panel.selected_manufacturers(), vec!["Hero", "Tata"]);
        assert!(!panel.is_manufacturer_selected("Ola"));
        assert!(panel.is_manufacturer_selected("Hero"));
    }
}
