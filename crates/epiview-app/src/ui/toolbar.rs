//! Toolbar UI component.

use egui::Ui;

use crate::examples;
use crate::state::{AppState, RunPhase};

/// Render the top toolbar
pub fn render_toolbar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal_centered(|ui| {
        ui.add_space(8.0);

        // Model selection
        let mut selected: Option<&'static str> = None;
        egui::ComboBox::from_id_salt("example")
            .selected_text(state.example.clone())
            .show_ui(ui, |ui| {
                for (name, description) in examples::list_examples() {
                    if ui
                        .selectable_label(state.example == name, name)
                        .on_hover_text(description)
                        .clicked()
                    {
                        selected = Some(name);
                    }
                }
            });
        if let Some(name) = selected {
            state.load_example(name);
        }

        ui.separator();

        // Run control
        let now = ui.input(|i| i.time);
        if state.is_running() {
            if ui
                .button("⏹ Stop")
                .on_hover_text("Stop at the next update (Esc)")
                .clicked()
            {
                state.run.request_stop();
            }
        } else if ui
            .button("▶ Run")
            .on_hover_text("Run the model (Enter)")
            .clicked()
        {
            state.start_run(now);
        }

        ui.separator();

        // Status display
        match state.run.phase {
            RunPhase::Idle => {
                ui.label("Ready");
            }
            RunPhase::Running => {
                ui.spinner();
                ui.label(format!("step {} / {}", state.run.cursor, state.run.total));
                ui.add(
                    egui::ProgressBar::new(state.run.progress())
                        .desired_width(120.0),
                );
            }
            RunPhase::Stopped => {
                ui.label(format!(
                    "Stopped at step {} / {}",
                    state.run.cursor, state.run.total
                ));
            }
            RunPhase::Finished => {
                ui.label(format!("Finished ({} steps)", state.run.cursor));
            }
        }

        if let Some(message) = &state.status {
            ui.separator();
            ui.colored_label(egui::Color32::RED, message);
        }

        // Export (right side)
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add_space(8.0);
            #[cfg(not(target_arch = "wasm32"))]
            if ui
                .button("💾 Export")
                .on_hover_text("Write the model as JSON")
                .clicked()
            {
                state.export_model();
            }
        });
    });
}
