//! Vahan Dash - Vehicle Registration Trends & Growth Dashboard
//!
//! A Rust application for exploring quarterly vehicle registration data
//! with QoQ/YoY growth analysis.

mod analysis;
mod charts;
mod data;
mod gui;

use eframe::egui;
use gui::DashboardApp;

fn main() -> eframe::Result<()> {
    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([1000.0, 640.0])
            .with_title("Vehicle Registration Dashboard"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Vahan Dash",
        options,
        Box::new(|cc| Ok(Box::new(DashboardApp::new(cc)))),
    )
}
