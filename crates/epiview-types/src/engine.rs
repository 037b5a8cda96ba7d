//! The boundary between the presentation layer and a simulation engine.

use crate::model::Model;
use crate::record::ResultRecord;

/// A simulation engine driving one model.
///
/// The run loop controller clones the template model, calls [`before_run`]
/// and [`initialize`] once, then calls [`step`] in chunks until the
/// configured iteration total is reached or the user stops the run, after
/// which [`after_run`] fires once.
///
/// `step` must return one record per simulated step, in step order, with the
/// record keys matching the model's compartment order. Records that violate
/// this are logged and skipped by the caller.
///
/// [`before_run`]: Engine::before_run
/// [`initialize`]: Engine::initialize
/// [`step`]: Engine::step
/// [`after_run`]: Engine::after_run
pub trait Engine {
    /// Prepare internal simulation state before stepping begins.
    fn initialize(&mut self, model: &mut Model);

    /// Advance the simulation `steps` steps, returning one record per step.
    fn step(&mut self, model: &mut Model, steps: u64) -> Vec<ResultRecord>;

    /// Lifecycle hook invoked once before a run starts.
    fn before_run(&mut self, _model: &mut Model) {}

    /// Lifecycle hook invoked once when a run stops or finishes.
    fn after_run(&mut self, _model: &mut Model) {}
}
