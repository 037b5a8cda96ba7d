//! Results table UI component.

use egui::Ui;

use crate::state::AppState;

/// Render the results table
pub fn render_results(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.heading("Results");
        ui.separator();
        ui.label(format!("{} rows", state.table.rows.len()));
    });

    ui.separator();

    if state.table.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label("Run the model to see results");
        });
        return;
    }

    egui::ScrollArea::both()
        .stick_to_bottom(true)
        .show(ui, |ui| {
            egui::Grid::new("results_table")
                .striped(true)
                .min_col_width(48.0)
                .show(ui, |ui| {
                    for column in &state.table.columns {
                        ui.strong(column.as_str());
                    }
                    ui.end_row();

                    for row in &state.table.rows {
                        for cell in row {
                            ui.monospace(cell.as_str());
                        }
                        ui.end_row();
                    }
                });
        });
}
