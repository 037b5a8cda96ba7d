//! Main application structure.

use eframe::egui;

use epiview_types::ParameterPanelMode;

use crate::state::AppState;
use crate::ui::{render_parameters, render_population, render_results, render_toolbar};

/// Main application
pub struct EpiViewApp {
    /// Application state
    state: AppState,

    /// UI visibility flags
    show_parameters: bool,
    show_results: bool,

    /// Panel sizes (for resizing)
    parameters_width: f32,
    results_height: f32,
    population_width: f32,
}

impl EpiViewApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        Self::configure_style(&cc.egui_ctx);

        Self {
            state: AppState::new(),
            show_parameters: true,
            show_results: true,
            parameters_width: 220.0,
            results_height: 180.0,
            population_width: 340.0,
        }
    }

    fn configure_style(ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();

        style.visuals.window_rounding = egui::Rounding::same(8.0);
        style.visuals.menu_rounding = egui::Rounding::same(4.0);
        style.visuals.popup_shadow = egui::epaint::Shadow::NONE;

        ctx.set_style(style);
    }

    fn handle_keyboard(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }

        let (now, run_pressed, stop_pressed) = ctx.input(|input| {
            (
                input.time,
                input.key_pressed(egui::Key::Enter),
                input.key_pressed(egui::Key::Escape),
            )
        });
        if run_pressed {
            self.state.toggle_run(now);
        }
        if stop_pressed && self.state.is_running() {
            self.state.run.request_stop();
        }
    }

    fn show_inspector(&mut self, ctx: &egui::Context) {
        let Some(info) = self.state.inspector.clone() else {
            return;
        };

        let mut open = true;
        egui::Window::new("Agent inspector")
            .id(egui::Id::new("agent_inspector"))
            .open(&mut open)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(format!("ID: {}", info.id));
                ui.label(format!("Compartment: {}", info.compartment));
                ui.label(format!("Position: ({:.1}, {:.1})", info.x, info.y));
            });

        if !open {
            self.state.inspector = None;
        }
    }
}

impl eframe::App for EpiViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Handle keyboard shortcuts
        self.handle_keyboard(ctx);

        // Top toolbar
        egui::TopBottomPanel::top("toolbar")
            .exact_height(40.0)
            .show(ctx, |ui| {
                render_toolbar(ui, &mut self.state);
            });

        // Left panel - Parameters
        let parameters_visible =
            self.show_parameters && self.state.model.options.parameters == ParameterPanelMode::All;
        if parameters_visible {
            egui::SidePanel::left("parameters")
                .resizable(true)
                .default_width(self.parameters_width)
                .min_width(160.0)
                .max_width(400.0)
                .show(ctx, |ui| {
                    self.parameters_width = ui.available_width();
                    render_parameters(ui, &mut self.state);
                });
        }

        // Right panel - Population view
        egui::SidePanel::right("population")
            .resizable(true)
            .default_width(self.population_width)
            .min_width(200.0)
            .show(ctx, |ui| {
                self.population_width = ui.available_width();
                render_population(ui, &mut self.state);
            });

        // Bottom panel - Results table
        if self.show_results {
            egui::TopBottomPanel::bottom("results")
                .resizable(true)
                .default_height(self.results_height)
                .min_height(80.0)
                .max_height(400.0)
                .show(ctx, |ui| {
                    self.results_height = ui.available_height();
                    render_results(ui, &mut self.state);
                });
        }

        // Central panel - Chart
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(&self.state.model.name);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .selectable_label(self.show_results, "Results")
                        .clicked()
                    {
                        self.show_results = !self.show_results;
                    }
                    if ui
                        .selectable_label(self.show_parameters, "Parameters")
                        .clicked()
                    {
                        self.show_parameters = !self.show_parameters;
                    }
                });
            });

            ui.separator();

            crate::ui::render_chart(ui, &mut self.state);
        });

        // Agent inspector window (shown on dot click)
        self.show_inspector(ctx);

        // Advance the run when due
        if self.state.is_running() {
            let now = ctx.input(|i| i.time);
            self.state.tick_if_due(now);

            // Request continuous repaint while running
            ctx.request_repaint();
        }
    }
}
