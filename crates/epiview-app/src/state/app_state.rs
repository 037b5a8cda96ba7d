//! Main application state combining all state modules and driving the run.

use epiview_types::{Engine, Model, ModelError};

use super::{ChartState, PopulationState, RunPhase, RunState, TableState};
use crate::examples;

/// Agent picked in the population view, shown in the inspector.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentInfo {
    pub id: u32,
    pub compartment: String,
    pub x: f64,
    pub y: f64,
}

/// Unified application state
pub struct AppState {
    /// Template model, edited live by the parameter panel
    pub model: Model,

    /// Simulation engine for the current model
    pub engine: Box<dyn Engine>,

    /// Name of the loaded example
    pub example: String,

    /// Run loop state (phase, working clone, chunk bookkeeping)
    pub run: RunState,

    /// Results table state
    pub table: TableState,

    /// Chart state
    pub chart: ChartState,

    /// Population view state
    pub population: PopulationState,

    /// Agent selected by clicking the population view
    pub inspector: Option<AgentInfo>,

    /// Last run-start error, shown in the toolbar
    pub status: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        let (name, _) = examples::list_examples()[0];
        let (model, engine) =
            examples::load_example(name).expect("built-in example must load");

        Self {
            model,
            engine,
            example: name.to_string(),
            run: RunState::new(),
            table: TableState::new(),
            chart: ChartState::new(),
            population: PopulationState::new(),
            inspector: None,
            status: None,
        }
    }

    /// Load a bundled example by name, discarding any run in progress.
    pub fn load_example(&mut self, name: &str) {
        if let Some((model, engine)) = examples::load_example(name) {
            self.model = model;
            self.engine = engine;
            self.example = name.to_string();
            self.run.reset();
            self.table.clear();
            self.chart.clear();
            self.population.clear();
            self.inspector = None;
            self.status = None;
        }
    }

    pub fn is_running(&self) -> bool {
        self.run.is_running()
    }

    /// Run button behavior: stop a running run, otherwise start a fresh one.
    pub fn toggle_run(&mut self, now: f64) {
        if self.is_running() {
            self.run.request_stop();
        } else {
            self.start_run(now);
        }
    }

    /// Start a fresh run from a clone of the template model.
    ///
    /// Validation failures are fatal at start: the run stays idle and the
    /// message is surfaced in the toolbar.
    pub fn start_run(&mut self, now: f64) {
        match self.try_start(now) {
            Ok(()) => {
                self.status = None;
                log::info!(
                    "run started: {} ({} iterations, {} per update)",
                    self.model.name,
                    self.run.total,
                    self.run.iterations_per_update
                );
            }
            Err(err) => {
                self.status = Some(err.to_string());
                log::error!("run rejected: {err}");
            }
        }
    }

    fn try_start(&mut self, now: f64) -> Result<(), ModelError> {
        self.model.validate()?;

        let mut working = self.model.clone();
        self.engine.before_run(&mut working);

        let initial = working.compartments.to_record();
        let total = working.parameters.iterations();
        let palette = working.options.palette(initial.len());

        self.table.init(&initial, working.options.decimals);
        self.chart.init(&initial, total, palette);
        self.population.refresh(&working);
        self.inspector = None;

        // Displays are seeded from the initial state before the engine
        // prepares its internal stepping state
        self.engine.initialize(&mut working);

        self.run.start(working, now);
        Ok(())
    }

    /// Advance one chunk if the run is active and the interval has elapsed.
    ///
    /// All of a chunk's records are fanned out to the table, chart and
    /// population view before any phase transition, so stopping never
    /// truncates a chunk. A record whose keys no longer match the schema
    /// fixed at init is logged and skipped, preserving the rows already
    /// rendered.
    pub fn tick_if_due(&mut self, now: f64) {
        if !self.run.is_running() || !self.run.due(now) {
            return;
        }

        let steps = self.run.chunk_len();
        let Some(working) = self.run.working.as_mut() else {
            return;
        };
        let records = self.engine.step(working, steps);

        for (i, record) in records.iter().enumerate() {
            if let Err(err) = self.chart.check_schema(record) {
                log::warn!("skipping step {}: {err}", self.run.cursor + 1 + i as u64);
                continue;
            }
            self.table.push_result(self.run.cursor + 1 + i as u64, record);
            self.chart.push_record(record);
        }

        self.run.advance(steps, now);
        if let Some(working) = self.run.working.as_ref() {
            self.population.refresh(working);
        }

        if self.run.cursor >= self.run.total {
            self.finish(RunPhase::Finished);
        } else if self.run.stop_requested {
            self.finish(RunPhase::Stopped);
        }
    }

    fn finish(&mut self, phase: RunPhase) {
        if let Some(working) = self.run.working.as_mut() {
            self.engine.after_run(working);
        }
        self.run.phase = phase;
        log::info!(
            "run {}: {} of {} steps",
            if phase == RunPhase::Finished {
                "finished"
            } else {
                "stopped"
            },
            self.run.cursor,
            self.run.total
        );
    }

    /// Write the template model as JSON next to the executable.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn export_model(&mut self) {
        let file = format!(
            "{}.json",
            self.model.name.to_lowercase().replace(char::is_whitespace, "-")
        );
        match serde_json::to_string_pretty(&self.model) {
            Ok(json) => match std::fs::write(&file, json) {
                Ok(()) => log::info!("model exported to {file}"),
                Err(err) => log::error!("export failed: {err}"),
            },
            Err(err) => log::error!("export failed: {err}"),
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn export_model(&mut self) {
        // No file system on WASM
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
