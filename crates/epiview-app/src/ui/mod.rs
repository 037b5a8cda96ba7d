//! UI components.

mod chart;
mod parameters;
mod population;
mod results;
mod toolbar;

pub use chart::render_chart;
pub use parameters::render_parameters;
pub use population::render_population;
pub use results::render_results;
pub use toolbar::render_toolbar;

use epiview_types::Color;

/// Convert a palette color to an egui color.
pub(crate) fn to_color32(color: Color) -> egui::Color32 {
    egui::Color32::from_rgb(color.0, color.1, color.2)
}
