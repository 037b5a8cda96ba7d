//! The model descriptor driven by the presentation layer.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::agent::{Agent, AgentWorld};
use crate::error::ModelError;
use crate::options::DisplayOptions;
use crate::record::ResultRecord;
use crate::{DEFAULT_INTERVAL_MS, DEFAULT_ITERATIONS, DEFAULT_UPDATES};

/// Insertion-ordered compartment counts.
///
/// Order is significant: it fixes the column order of the results table, the
/// series order of the chart and the color assignment of the population view.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Compartments(Vec<(String, f64)>);

impl Compartments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, count: f64) {
        self.0.push((name.into(), count));
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.iter().find(|(k, _)| k == name).map(|(_, v)| *v)
    }

    pub fn set(&mut self, name: &str, count: f64) {
        if let Some(entry) = self.0.iter_mut().find(|(k, _)| k == name) {
            entry.1 = count;
        }
    }

    pub fn add(&mut self, name: &str, delta: f64) {
        if let Some(entry) = self.0.iter_mut().find(|(k, _)| k == name) {
            entry.1 += delta;
        }
    }

    /// Total population size: the sum over all compartment counts.
    pub fn total(&self) -> f64 {
        self.0.iter().map(|(_, v)| v).sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut f64)> {
        self.0.iter_mut().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    /// Snapshot the current counts as a result record (row zero of a run).
    pub fn to_record(&self) -> ResultRecord {
        self.iter().map(|(k, v)| (k.to_string(), v)).collect()
    }
}

impl FromIterator<(String, f64)> for Compartments {
    fn from_iter<T: IntoIterator<Item = (String, f64)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Insertion-ordered numeric model parameters.
///
/// Besides model-specific rates, three well-known keys control the run loop:
/// `iterations`, `interval` (milliseconds between display updates) and
/// `updates` (number of display updates per run). Missing or nonpositive
/// values fall back to defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Parameters(Vec<(String, f64)>);

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: f64) {
        self.0.push((name.into(), value));
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.iter().find(|(k, _)| k == name).map(|(_, v)| *v)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut f64)> {
        self.0.iter_mut().map(|(k, v)| (k.as_str(), v))
    }

    fn positive(&self, name: &str, default: u64) -> u64 {
        match self.get(name) {
            Some(v) if v >= 1.0 => v as u64,
            _ => default,
        }
    }

    /// Total iterations for one run
    pub fn iterations(&self) -> u64 {
        self.positive("iterations", DEFAULT_ITERATIONS)
    }

    /// Delay between display updates, in milliseconds
    pub fn interval_ms(&self) -> u64 {
        match self.get("interval") {
            Some(v) if v > 0.0 => v as u64,
            _ => DEFAULT_INTERVAL_MS,
        }
    }

    /// Number of display updates per run
    pub fn updates(&self) -> u64 {
        self.positive("updates", DEFAULT_UPDATES)
    }
}

impl FromIterator<(String, f64)> for Parameters {
    fn from_iter<T: IntoIterator<Item = (String, f64)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Population variant, fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Population {
    /// Only aggregate counts per compartment exist
    Aggregate,
    /// Individual agents with positions and compartment membership
    AgentBased {
        agents: Vec<Agent>,
        world: AgentWorld,
    },
}

/// Model kind derived from the population variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    Aggregate,
    AgentBased,
}

/// Descriptor for one simulation instance.
///
/// `Clone` produces the deep, alias-free copy the run loop works on, leaving
/// the template reusable for a fresh run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub name: String,
    pub compartments: Compartments,
    pub parameters: Parameters,
    pub population: Population,
    /// Display-label overrides for compartment and parameter keys
    pub names: HashMap<String, String>,
    pub options: DisplayOptions,
}

impl Model {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            compartments: Compartments::new(),
            parameters: Parameters::new(),
            population: Population::Aggregate,
            names: HashMap::new(),
            options: DisplayOptions::default(),
        }
    }

    pub fn kind(&self) -> ModelKind {
        match self.population {
            Population::Aggregate => ModelKind::Aggregate,
            Population::AgentBased { .. } => ModelKind::AgentBased,
        }
    }

    /// Display label for a compartment or parameter key.
    pub fn label<'a>(&'a self, key: &'a str) -> &'a str {
        self.names.get(key).map(String::as_str).unwrap_or(key)
    }

    /// Fail-fast checks performed before a run starts.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.compartments.is_empty() {
            return Err(ModelError::InvalidModel(
                "model has no compartments".into(),
            ));
        }
        if matches!(self.options.colors.as_deref(), Some([])) {
            return Err(ModelError::Render("palette override is empty".into()));
        }
        if let Population::AgentBased { world, .. } = &self.population {
            if world.width <= 0.0 || world.height <= 0.0 {
                return Err(ModelError::Render(format!(
                    "agent world has nonpositive size {}x{}",
                    world.width, world.height
                )));
            }
        }
        Ok(())
    }
}
