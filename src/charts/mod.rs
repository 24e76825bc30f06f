//! Charts module - Chart description and rendering

mod plotter;
mod spec;

pub use plotter::ChartPlotter;
pub use spec::{render, ChartSpec};
