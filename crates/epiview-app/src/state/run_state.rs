//! Run loop state machine - chunked stepping bookkeeping for one run.

use epiview_types::Model;

/// Phase of the run loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    /// No run in progress
    Idle,
    /// A run is advancing in chunks
    Running,
    /// The user stopped the run at a chunk boundary
    Stopped,
    /// The configured iteration total was reached
    Finished,
}

/// State for one run of the simulation.
///
/// The working model is a deep clone of the template taken at start, so the
/// template stays reusable. Stopping is cooperative: a stop request is
/// observed at the next chunk boundary and never truncates a chunk that has
/// already been stepped.
pub struct RunState {
    pub phase: RunPhase,

    /// Clone of the template model, exclusively owned by this run
    pub working: Option<Model>,

    /// Cumulative steps simulated so far
    pub cursor: u64,

    /// Total iterations for this run
    pub total: u64,

    /// Steps per display update chunk (ceiling of total / updates)
    pub iterations_per_update: u64,

    /// Seconds between chunks
    pub interval: f64,

    /// Earliest time (in UI seconds) the next chunk may run
    pub next_due: f64,

    /// Set by the user; observed at the next chunk boundary
    pub stop_requested: bool,
}

impl RunState {
    pub fn new() -> Self {
        Self {
            phase: RunPhase::Idle,
            working: None,
            cursor: 0,
            total: 0,
            iterations_per_update: 0,
            interval: 0.0,
            next_due: 0.0,
            stop_requested: false,
        }
    }

    /// Begin a run over `working` at time `now`.
    ///
    /// The chunk size is the ceiling of total / updates so the loop always
    /// terminates after at most `updates` chunks, the last one clamped.
    pub fn start(&mut self, working: Model, now: f64) {
        let total = working.parameters.iterations();
        let updates = working.parameters.updates();

        self.total = total;
        self.iterations_per_update = total.div_ceil(updates);
        self.interval = working.parameters.interval_ms() as f64 / 1000.0;
        self.working = Some(working);
        self.cursor = 0;
        self.next_due = now + self.interval;
        self.stop_requested = false;
        self.phase = RunPhase::Running;
    }

    pub fn is_running(&self) -> bool {
        self.phase == RunPhase::Running
    }

    /// True when the next chunk may run at time `now`.
    pub fn due(&self, now: f64) -> bool {
        now >= self.next_due
    }

    /// Steps the next chunk should simulate.
    pub fn chunk_len(&self) -> u64 {
        self.iterations_per_update.min(self.total - self.cursor)
    }

    /// Record a completed chunk of `steps` and re-arm the interval timer.
    pub fn advance(&mut self, steps: u64, now: f64) {
        self.cursor += steps;
        self.next_due = now + self.interval;
    }

    /// Ask the run to stop at the next chunk boundary.
    pub fn request_stop(&mut self) {
        if self.phase == RunPhase::Running {
            self.stop_requested = true;
        }
    }

    /// Fraction of the run completed, in 0..=1.
    pub fn progress(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.cursor as f32 / self.total as f32
        }
    }

    /// Drop the working model and return to idle.
    pub fn reset(&mut self) {
        self.phase = RunPhase::Idle;
        self.working = None;
        self.cursor = 0;
        self.total = 0;
        self.stop_requested = false;
    }
}

impl Default for RunState {
    fn default() -> Self {
        Self::new()
    }
}
