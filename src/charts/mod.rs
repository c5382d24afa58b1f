//! Charts module - trend chart rendering

mod plotter;

pub use plotter::TrendPlotter;
