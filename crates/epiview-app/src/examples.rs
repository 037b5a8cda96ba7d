//! Bundled example models and their demo engines.
//!
//! The engines here exist so the app runs out of the box; they are
//! deliberately simple. Production simulations plug in through the
//! [`Engine`] trait.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use epiview_types::{
    Agent, AgentWorld, Engine, Model, Population, ResultRecord,
};

/// List of available examples with descriptions
pub fn list_examples() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "SIR (aggregate)",
            "Deterministic susceptible-infectious-recovered compartment model",
        ),
        (
            "SIR (agent-based)",
            "Stochastic SIR over individual agents drifting in a 2D world",
        ),
    ]
}

/// Load an example by name
pub fn load_example(name: &str) -> Option<(Model, Box<dyn Engine>)> {
    match name {
        "SIR (aggregate)" => Some((sir_model(), Box::new(SirEngine))),
        "SIR (agent-based)" => Some((agent_sir_model(), Box::new(AgentSirEngine::new(7)))),
        _ => None,
    }
}

fn sir_model() -> Model {
    let mut model = Model::new("SIR (aggregate)");
    model.compartments.push("S", 980.0);
    model.compartments.push("I", 20.0);
    model.compartments.push("R", 0.0);
    model.parameters.push("iterations", 365.0);
    model.parameters.push("updates", 10.0);
    model.parameters.push("interval", 20.0);
    model.parameters.push("beta", 0.3);
    model.parameters.push("gamma", 0.1);
    model
        .names
        .insert("beta".into(), "β (effective contacts)".into());
    model.names.insert("gamma".into(), "γ (recovery rate)".into());
    model
}

/// Deterministic difference-equation SIR engine.
struct SirEngine;

impl Engine for SirEngine {
    fn initialize(&mut self, _model: &mut Model) {}

    fn step(&mut self, model: &mut Model, steps: u64) -> Vec<ResultRecord> {
        let beta = model.parameters.get("beta").unwrap_or(0.3);
        let gamma = model.parameters.get("gamma").unwrap_or(0.1);

        let mut records = Vec::with_capacity(steps as usize);
        for _ in 0..steps {
            let n = model.compartments.total();
            let s = model.compartments.get("S").unwrap_or(0.0);
            let i = model.compartments.get("I").unwrap_or(0.0);

            let infections = if n > 0.0 { beta * s * i / n } else { 0.0 };
            let recoveries = gamma * i;

            model.compartments.add("S", -infections);
            model.compartments.add("I", infections - recoveries);
            model.compartments.add("R", recoveries);

            records.push(model.compartments.to_record());
        }
        records
    }
}

const AGENT_WORLD_SIZE: f64 = 100.0;
const AGENT_COUNT: u32 = 400;
const AGENT_SEED: u64 = 11;

fn agent_sir_model() -> Model {
    let mut rng = StdRng::seed_from_u64(AGENT_SEED);

    let infected = 10u32;
    let agents: Vec<Agent> = (0..AGENT_COUNT)
        .map(|id| {
            let compartment = if id < infected { "I" } else { "S" };
            Agent::new(
                id,
                rng.gen_range(0.0..AGENT_WORLD_SIZE),
                rng.gen_range(0.0..AGENT_WORLD_SIZE),
                compartment,
            )
        })
        .collect();

    let mut model = Model::new("SIR (agent-based)");
    model.compartments.push("S", (AGENT_COUNT - infected) as f64);
    model.compartments.push("I", infected as f64);
    model.compartments.push("R", 0.0);
    model.parameters.push("iterations", 200.0);
    model.parameters.push("updates", 20.0);
    model.parameters.push("interval", 40.0);
    model.parameters.push("beta", 0.4);
    model.parameters.push("gamma", 0.05);
    model
        .names
        .insert("beta".into(), "β (infection risk)".into());
    model.names.insert("gamma".into(), "γ (recovery risk)".into());
    model.population = Population::AgentBased {
        agents,
        world: AgentWorld::new(AGENT_WORLD_SIZE, AGENT_WORLD_SIZE, 3.0),
    };
    model
}

/// Stochastic agent-based SIR with random mixing; agents drift for display.
struct AgentSirEngine {
    seed: u64,
    rng: StdRng,
}

impl AgentSirEngine {
    fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Recount compartments from agent membership, preserving key order.
    fn recount(model: &mut Model) {
        let counts: Vec<(String, f64)> = model
            .compartments
            .keys()
            .map(|key| {
                let count = match &model.population {
                    Population::AgentBased { agents, .. } => {
                        agents.iter().filter(|a| a.compartment == key).count() as f64
                    }
                    Population::Aggregate => 0.0,
                };
                (key.to_string(), count)
            })
            .collect();
        for (key, count) in counts {
            model.compartments.set(&key, count);
        }
    }
}

impl Engine for AgentSirEngine {
    fn before_run(&mut self, model: &mut Model) {
        // Reseed so every run of the same template is reproducible
        self.rng = StdRng::seed_from_u64(self.seed);

        if let Population::AgentBased { world, .. } = &mut model.population {
            world.color_map = [("S", 0), ("I", 1), ("R", 2)]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect();
        }
    }

    fn initialize(&mut self, model: &mut Model) {
        Self::recount(model);
    }

    fn step(&mut self, model: &mut Model, steps: u64) -> Vec<ResultRecord> {
        let beta = model.parameters.get("beta").unwrap_or(0.4);
        let gamma = model.parameters.get("gamma").unwrap_or(0.05);

        let mut records = Vec::with_capacity(steps as usize);
        for _ in 0..steps {
            if let Population::AgentBased { agents, world } = &mut model.population {
                let total = agents.len() as f64;
                let infectious = agents.iter().filter(|a| a.compartment == "I").count() as f64;
                let infection_risk = if total > 0.0 {
                    beta * infectious / total
                } else {
                    0.0
                };

                for agent in agents.iter_mut() {
                    agent.x = (agent.x + self.rng.gen_range(-1.0..1.0)).clamp(0.0, world.width);
                    agent.y = (agent.y + self.rng.gen_range(-1.0..1.0)).clamp(0.0, world.height);

                    match agent.compartment.as_str() {
                        "S" if self.rng.gen::<f64>() < infection_risk => {
                            agent.compartment = "I".into();
                        }
                        "I" if self.rng.gen::<f64>() < gamma => {
                            agent.compartment = "R".into();
                        }
                        _ => {}
                    }
                }
            }
            Self::recount(model);
            records.push(model.compartments.to_record());
        }
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use epiview_types::ModelKind;

    #[test]
    fn all_listed_examples_load() {
        for (name, _) in list_examples() {
            let (model, _) = load_example(name).expect("example loads");
            assert!(model.validate().is_ok(), "{name} validates");
        }
    }

    #[test]
    fn aggregate_sir_conserves_population() {
        let (mut model, mut engine) = load_example("SIR (aggregate)").unwrap();
        let n = model.compartments.total();
        engine.initialize(&mut model);
        let records = engine.step(&mut model, 50);
        assert_eq!(records.len(), 50);
        let last: f64 = records.last().unwrap().values().sum();
        approx::assert_abs_diff_eq!(last, n, epsilon = 1e-6);
    }

    #[test]
    fn agent_sir_counts_track_agents() {
        let (mut model, mut engine) = load_example("SIR (agent-based)").unwrap();
        assert_eq!(model.kind(), ModelKind::AgentBased);
        engine.before_run(&mut model);
        engine.initialize(&mut model);
        let records = engine.step(&mut model, 10);
        assert_eq!(records.len(), 10);
        for record in &records {
            let total: f64 = record.values().sum();
            assert_eq!(total, AGENT_COUNT as f64);
        }
    }
}
