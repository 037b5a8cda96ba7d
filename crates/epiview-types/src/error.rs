//! Error taxonomy for model validation and rendering.

use thiserror::Error;

/// Errors surfaced by the presentation layer.
///
/// Policy: configuration and schema errors are fatal at run start (the run
/// stays idle and the message is shown); a malformed record mid-run is logged
/// and the frame skipped, preserving the results already rendered.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("invalid model: {0}")]
    InvalidModel(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("result record schema mismatch: expected [{expected}], got [{got}]")]
    SchemaMismatch { expected: String, got: String },
}
