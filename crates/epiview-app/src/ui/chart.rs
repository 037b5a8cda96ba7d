//! Chart UI component.

use egui::Ui;
use egui_plot::{Line, Plot, PlotPoints};

use super::to_color32;
use crate::state::AppState;

/// Render the time-series chart: one line per compartment over step index.
pub fn render_chart(ui: &mut Ui, state: &mut AppState) {
    if state.chart.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label("Run the model to see the time series");
        });
        return;
    }

    let options = &state.model.options.chart;

    // The generation salts the plot id, so a restarted run gets a fresh
    // widget with no memory of the previous chart
    let mut plot = Plot::new(("compartment_chart", state.chart.generation))
        .height(ui.available_height() - 10.0)
        .show_axes(true)
        .show_grid(options.show_grid)
        .include_x(0.0)
        .include_x(state.chart.total_iterations as f64);

    if options.legend {
        plot = plot.legend(egui_plot::Legend::default());
    }

    plot.show(ui, |plot_ui| {
        for series in &state.chart.series {
            let points: PlotPoints = series
                .points
                .iter()
                .enumerate()
                .map(|(i, &y)| [i as f64, y])
                .collect();

            let line = Line::new(points)
                .name(&series.label)
                .color(to_color32(series.color))
                .width(2.0);

            plot_ui.line(line);
        }
    });
}
