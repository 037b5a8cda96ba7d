//! Results table state - columns fixed at init, one row per simulated step.

use epiview_types::{ResultRecord, DEFAULT_DECIMALS};

/// State for the results table.
///
/// Column order is fixed at init time from the first record's key order; the
/// caller checks schema stability before pushing later records.
pub struct TableState {
    /// Column headers: a row-index column followed by the record keys
    pub columns: Vec<String>,

    /// Formatted rows, including row zero (the initial state)
    pub rows: Vec<Vec<String>>,

    /// Decimals used when formatting values
    pub decimals: usize,
}

impl TableState {
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            decimals: DEFAULT_DECIMALS,
        }
    }

    /// Fix the columns from `initial` and append row zero.
    pub fn init(&mut self, initial: &ResultRecord, decimals: usize) {
        self.decimals = decimals;
        self.columns = std::iter::once("#".to_string())
            .chain(initial.keys().map(str::to_string))
            .collect();
        self.rows.clear();
        self.push_result(0, initial);
    }

    /// Append one row for `record` at row index `row`.
    pub fn push_result(&mut self, row: u64, record: &ResultRecord) {
        let mut cells = Vec::with_capacity(record.len() + 1);
        cells.push(row.to_string());
        for value in record.values() {
            cells.push(format!("{:.*}", self.decimals, value));
        }
        self.rows.push(cells);
    }

    pub fn clear(&mut self) {
        self.columns.clear();
        self.rows.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Default for TableState {
    fn default() -> Self {
        Self::new()
    }
}
