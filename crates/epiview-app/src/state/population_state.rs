//! Population view state - pure circle/dot layout, separated from painting.

use egui::{pos2, Pos2, Rect, Vec2};

use epiview_types::{Agent, AgentWorld, Color, Compartments, Model, Population};

/// A packed circle of the aggregate view, in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Pos2,
    pub radius: f32,
    /// Palette index of the owning compartment
    pub color: usize,
}

/// One drawn agent with its screen-space bounding box for hit testing.
///
/// Bounding boxes are rebuilt on every layout; they are never stored on the
/// agent itself.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentDot {
    pub index: usize,
    pub id: u32,
    pub compartment: String,
    /// Simulation-space position, for the inspector readout
    pub world_pos: (f64, f64),
    pub center: Pos2,
    pub radius: f32,
    pub bounds: Rect,
    /// Palette index from the world color map
    pub color: usize,
}

/// Snapshot of what the population view draws, refreshed after every chunk.
#[derive(Debug, Clone, PartialEq)]
pub enum PopulationSnapshot {
    Aggregate(Compartments),
    Agents {
        agents: Vec<Agent>,
        world: AgentWorld,
    },
}

/// State for the population view.
pub struct PopulationState {
    pub snapshot: Option<PopulationSnapshot>,
    pub palette: Vec<Color>,
}

impl PopulationState {
    pub fn new() -> Self {
        Self {
            snapshot: None,
            palette: Vec::new(),
        }
    }

    /// Snapshot the working model's population for drawing.
    pub fn refresh(&mut self, model: &Model) {
        self.palette = model
            .options
            .palette(model.compartments.len())
            .to_vec();
        self.snapshot = Some(match &model.population {
            Population::Aggregate => PopulationSnapshot::Aggregate(model.compartments.clone()),
            Population::AgentBased { agents, world } => PopulationSnapshot::Agents {
                agents: agents.clone(),
                world: world.clone(),
            },
        });
    }

    pub fn clear(&mut self) {
        self.snapshot = None;
        self.palette.clear();
    }
}

impl Default for PopulationState {
    fn default() -> Self {
        Self::new()
    }
}

/// Lay out N circles representing aggregate compartment counts.
///
/// The uniform radius is chosen so N circles roughly tile the canvas area
/// (`r = sqrt(area / 4πN)`), then circles are packed in raster order, wrapping
/// to the next row when one would overflow the width. The first
/// `count[c0]` circles take palette index 0, the next `count[c1]` index 1,
/// and so on. A fractional count claims a slot for its remainder.
///
/// Zero or negative population, canvas area or palette size yields an empty
/// layout; no NaN or infinite geometry is ever produced.
pub fn layout_aggregate(
    size: Vec2,
    compartments: &Compartments,
    palette_len: usize,
) -> Vec<Circle> {
    let n = compartments.total();
    if n <= 0.0 || size.x <= 0.0 || size.y <= 0.0 || palette_len == 0 {
        return Vec::new();
    }

    let area = (size.x * size.y) as f64;
    let radius = (area / (n * 4.0 * std::f64::consts::PI)).sqrt() as f32;
    let gap = 2.0 * radius;
    let step = gap + radius;

    // Start past the right edge so the first circle wraps to the first row
    let mut x = size.x;
    let mut y = 0.0;
    let mut circles = Vec::new();
    let mut cumulative = 0.0;

    for (c, (_, count)) in compartments.iter().enumerate() {
        cumulative += count;
        while (circles.len() as f64) < cumulative {
            x += step;
            if x >= size.x - gap {
                x = gap;
                y += step;
            }
            circles.push(Circle {
                center: pos2(x, y),
                radius,
                color: c % palette_len,
            });
        }
    }
    circles
}

/// Lay out agent dots by scaling simulation-space positions into canvas
/// space, computing a fresh bounding box per dot for hit testing.
///
/// A nonpositive canvas or world size yields an empty layout.
pub fn layout_agents(size: Vec2, agents: &[Agent], world: &AgentWorld) -> Vec<AgentDot> {
    if size.x <= 0.0 || size.y <= 0.0 || world.width <= 0.0 || world.height <= 0.0 {
        return Vec::new();
    }

    let width_ratio = size.x as f64 / world.width;
    let height_ratio = size.y as f64 / world.height;
    let radius = world.radius;

    agents
        .iter()
        .enumerate()
        .map(|(index, agent)| {
            let center = pos2((agent.x * width_ratio) as f32, (agent.y * height_ratio) as f32);
            AgentDot {
                index,
                id: agent.id,
                compartment: agent.compartment.clone(),
                world_pos: (agent.x, agent.y),
                center,
                radius,
                bounds: Rect::from_center_size(center, Vec2::splat(2.0 * radius)),
                color: world.color_index(&agent.compartment),
            }
        })
        .collect()
}

/// First dot whose bounding box contains `pos`, in agent order.
///
/// Overlapping dots resolve to the earliest agent, matching draw order.
pub fn hit_test(dots: &[AgentDot], pos: Pos2) -> Option<&AgentDot> {
    dots.iter().find(|dot| dot.bounds.contains(pos))
}
