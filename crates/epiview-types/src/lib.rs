//! Shared types for EpiView compartment-model visualizations.
//!
//! This crate defines the data structures used across all EpiView components:
//! - The model descriptor (compartments, parameters, population variants)
//! - Per-step result records produced by simulation engines
//! - Display options and the fixed color palettes
//! - The `Engine` trait implemented by simulation collaborators

mod agent;
mod engine;
mod error;
mod model;
mod options;
mod palette;
mod record;

pub use agent::*;
pub use engine::*;
pub use error::*;
pub use model::*;
pub use options::*;
pub use palette::*;
pub use record::*;

/// Default number of iterations when the model does not specify one
pub const DEFAULT_ITERATIONS: u64 = 1000;

/// Default delay between display updates, in milliseconds
pub const DEFAULT_INTERVAL_MS: u64 = 0;

/// Default number of display updates per run
pub const DEFAULT_UPDATES: u64 = 10;

/// Default number of decimals shown in the results table
pub const DEFAULT_DECIMALS: usize = 2;
