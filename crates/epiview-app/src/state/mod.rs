//! Application state management.

mod app_state;
mod chart_state;
mod population_state;
mod run_state;
mod table_state;

pub use app_state::*;
pub use chart_state::*;
pub use population_state::*;
pub use run_state::*;
pub use table_state::*;

#[cfg(test)]
mod tests;
