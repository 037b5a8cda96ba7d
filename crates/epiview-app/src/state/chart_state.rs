//! Chart state - one line series per compartment, rebuilt on every run.

use epiview_types::{color_at, Color, ModelError, ResultRecord};

/// One named series of values, one value per simulated step.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub color: Color,
    pub points: Vec<f64>,
}

/// State for the time-series chart.
///
/// `init` replaces the previous chart wholesale rather than reusing it, so a
/// restarted run never accumulates stale series. The generation counter lets
/// the plot widget (and tests) observe the replacement.
pub struct ChartState {
    /// Incremented on every init; salts the plot id so no widget memory
    /// survives a re-init
    pub generation: u64,

    pub series: Vec<Series>,

    /// X-axis upper bound: iterations configured for the run
    pub total_iterations: u64,
}

impl ChartState {
    pub fn new() -> Self {
        Self {
            generation: 0,
            series: Vec::new(),
            total_iterations: 0,
        }
    }

    /// Build one series per key of `initial`, seeded with its single point,
    /// colored by palette position.
    pub fn init(&mut self, initial: &ResultRecord, total_iterations: u64, palette: &[Color]) {
        self.generation += 1;
        self.total_iterations = total_iterations;
        self.series = initial
            .iter()
            .enumerate()
            .map(|(i, (label, value))| Series {
                label: label.to_string(),
                color: color_at(palette, i),
                points: vec![value],
            })
            .collect();
    }

    /// Check `record` against the series labels fixed at init.
    pub fn check_schema(&self, record: &ResultRecord) -> Result<(), ModelError> {
        if record.matches_labels(self.series.iter().map(|s| s.label.as_str())) {
            Ok(())
        } else {
            Err(ModelError::SchemaMismatch {
                expected: self
                    .series
                    .iter()
                    .map(|s| s.label.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
                got: record.keys().collect::<Vec<_>>().join(", "),
            })
        }
    }

    /// Append one value per series from `record`, matched by label order.
    ///
    /// Callers check the schema first; values are appended positionally.
    pub fn push_record(&mut self, record: &ResultRecord) {
        for (series, (_, value)) in self.series.iter_mut().zip(record.iter()) {
            series.points.push(value);
        }
    }

    pub fn clear(&mut self) {
        self.series.clear();
        self.total_iterations = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

impl Default for ChartState {
    fn default() -> Self {
        Self::new()
    }
}
