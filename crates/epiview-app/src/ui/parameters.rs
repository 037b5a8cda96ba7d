//! Parameter panel UI component.

use egui::Ui;

use crate::state::AppState;

/// Render the parameter panel: one numeric input per compartment and per
/// parameter, writing back into the live template model on change.
///
/// Edits take effect on the next run; the run in progress keeps its clone.
pub fn render_parameters(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Parameters");
    ui.separator();

    let model = &mut state.model;
    let names = &model.names;

    egui::ScrollArea::vertical().show(ui, |ui| {
        egui::CollapsingHeader::new("Compartments")
            .default_open(true)
            .show(ui, |ui| {
                egui::Grid::new("compartment_inputs")
                    .num_columns(2)
                    .show(ui, |ui| {
                        for (key, value) in model.compartments.iter_mut() {
                            let label = names.get(key).map(String::as_str).unwrap_or(key);
                            ui.label(label);
                            ui.add(egui::DragValue::new(value).speed(1.0));
                            ui.end_row();
                        }
                    });
            });

        egui::CollapsingHeader::new("Model parameters")
            .default_open(true)
            .show(ui, |ui| {
                egui::Grid::new("parameter_inputs")
                    .num_columns(2)
                    .show(ui, |ui| {
                        for (key, value) in model.parameters.iter_mut() {
                            let label = names.get(key).map(String::as_str).unwrap_or(key);
                            ui.label(label);
                            ui.add(egui::DragValue::new(value).speed(0.01));
                            ui.end_row();
                        }
                    });
            });
    });
}
