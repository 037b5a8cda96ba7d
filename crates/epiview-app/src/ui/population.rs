//! Population view UI component.

use egui::{vec2, Sense, Ui};

use super::to_color32;
use crate::state::{
    hit_test, layout_agents, layout_aggregate, AgentInfo, AppState, PopulationSnapshot,
};

/// Margin left around the canvas when sizing from the panel
const CANVAS_MARGIN: f32 = 12.0;

/// Render the population view: packed circles for aggregate models, agent
/// dots with click-to-inspect for agent-based models.
pub fn render_population(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Population");
    ui.separator();

    let Some(snapshot) = state.population.snapshot.clone() else {
        ui.centered_and_justified(|ui| {
            ui.label("Run the model to see the population");
        });
        return;
    };

    // Canvas size: fixed from options when present, else the panel's
    // available space minus a small margin
    let available = ui.available_size();
    let size = vec2(
        state
            .model
            .options
            .canvas_width
            .unwrap_or(available.x - CANVAS_MARGIN)
            .max(0.0),
        state
            .model
            .options
            .canvas_height
            .unwrap_or(available.y - CANVAS_MARGIN)
            .max(0.0),
    );

    let (response, painter) = ui.allocate_painter(size, Sense::click());
    let origin = response.rect.min;

    painter.rect_filled(response.rect, 4.0, ui.visuals().extreme_bg_color);

    match &snapshot {
        PopulationSnapshot::Aggregate(compartments) => {
            let palette = &state.population.palette;
            for circle in layout_aggregate(size, compartments, palette.len()) {
                painter.circle_filled(
                    origin + circle.center.to_vec2(),
                    circle.radius,
                    to_color32(palette[circle.color]),
                );
            }
        }
        PopulationSnapshot::Agents { agents, world } => {
            let palette = &state.population.palette;
            let dots = layout_agents(size, agents, world);

            for dot in &dots {
                let color = palette
                    .get(dot.color)
                    .copied()
                    .unwrap_or(epiview_types::BLACK);
                painter.circle_filled(origin + dot.center.to_vec2(), dot.radius, to_color32(color));
            }

            if response.clicked() {
                if let Some(pointer) = response.interact_pointer_pos() {
                    let local = pointer - origin.to_vec2();
                    state.inspector = hit_test(&dots, local).map(|dot| AgentInfo {
                        id: dot.id,
                        compartment: dot.compartment.clone(),
                        x: dot.world_pos.0,
                        y: dot.world_pos.1,
                    });
                }
            }
        }
    }
}
