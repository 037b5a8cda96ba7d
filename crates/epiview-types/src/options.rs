//! Display options recognized on a model.

use serde::{Deserialize, Serialize};

use crate::palette::{palette_for, Color};
use crate::DEFAULT_DECIMALS;

/// Parameter panel visibility.
///
/// Exactly two variants: show both the compartment and parameter groups, or
/// show nothing. There is no partial-group selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParameterPanelMode {
    All,
    Hidden,
}

impl Default for ParameterPanelMode {
    fn default() -> Self {
        ParameterPanelMode::All
    }
}

/// Chart display settings passed through to the plot layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartOptions {
    pub legend: bool,
    pub show_grid: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            legend: true,
            show_grid: true,
        }
    }
}

/// Per-model display configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayOptions {
    /// Palette override; `None` selects a built-in palette by compartment count
    pub colors: Option<Vec<Color>>,

    /// Decimals shown in the results table
    pub decimals: usize,

    /// Parameter panel visibility
    pub parameters: ParameterPanelMode,

    /// Chart settings
    pub chart: ChartOptions,

    /// Fixed population canvas width; `None` sizes from the panel
    pub canvas_width: Option<f32>,

    /// Fixed population canvas height; `None` sizes from the panel
    pub canvas_height: Option<f32>,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            colors: None,
            decimals: DEFAULT_DECIMALS,
            parameters: ParameterPanelMode::default(),
            chart: ChartOptions::default(),
            canvas_width: None,
            canvas_height: None,
        }
    }
}

impl DisplayOptions {
    /// Active palette for `n` compartments: the override when one is set and
    /// non-empty, otherwise the smallest built-in palette that fits.
    pub fn palette(&self, n: usize) -> &[Color] {
        match &self.colors {
            Some(colors) if !colors.is_empty() => colors,
            _ => palette_for(n),
        }
    }
}
