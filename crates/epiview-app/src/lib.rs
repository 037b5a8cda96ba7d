//! EpiView application library

pub mod app;
pub mod examples;
pub mod state;
pub mod ui;

// Re-export commonly used items
pub use app::EpiViewApp;
pub use examples::{list_examples, load_example};
pub use state::AppState;
