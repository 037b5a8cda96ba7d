//! Agents and world geometry for agent-based models.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One tracked individual in an agent-based model.
///
/// Positions are in simulation space; the population view scales them into
/// canvas space every frame. Screen-space bounding boxes are renderer state,
/// not stored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub compartment: String,
}

impl Agent {
    pub fn new(id: u32, x: f64, y: f64, compartment: impl Into<String>) -> Self {
        Self {
            id,
            x,
            y,
            compartment: compartment.into(),
        }
    }
}

/// Simulation-space geometry and display hints for an agent population.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentWorld {
    /// Width of the simulation space agents move in
    pub width: f64,

    /// Height of the simulation space
    pub height: f64,

    /// Dot radius used when drawing agents, in canvas pixels
    pub radius: f32,

    /// Compartment name to palette index, supplied by the engine
    pub color_map: HashMap<String, usize>,
}

impl AgentWorld {
    pub fn new(width: f64, height: f64, radius: f32) -> Self {
        Self {
            width,
            height,
            radius,
            color_map: HashMap::new(),
        }
    }

    /// Palette index for a compartment; unmapped compartments get index 0.
    pub fn color_index(&self, compartment: &str) -> usize {
        self.color_map.get(compartment).copied().unwrap_or(0)
    }
}
