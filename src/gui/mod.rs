//! GUI module - User interface components

mod app;
mod filter_panel;
mod trend_view;

pub use app::DashboardApp;
pub use filter_panel::{FilterPanel, FilterPanelAction};
pub use trend_view::TrendView;
