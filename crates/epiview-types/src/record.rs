//! Per-step simulation results.

use serde::{Deserialize, Serialize};

/// One simulated step's compartment values, in compartment order.
///
/// Key order is significant: the results table and chart fix their column and
/// series order from the first record of a run, and later records must carry
/// the same keys in the same order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResultRecord {
    entries: Vec<(String, f64)>,
}

impl ResultRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, label: impl Into<String>, value: f64) {
        self.entries.push((label.into(), value));
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(k, _)| k == label)
            .map(|(_, v)| *v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when this record carries exactly `labels`, in order.
    pub fn matches_labels<'a>(&self, labels: impl ExactSizeIterator<Item = &'a str>) -> bool {
        self.len() == labels.len() && self.keys().zip(labels).all(|(a, b)| a == b)
    }
}

impl FromIterator<(String, f64)> for ResultRecord {
    fn from_iter<T: IntoIterator<Item = (String, f64)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, f64)]) -> ResultRecord {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect()
    }

    #[test]
    fn preserves_insertion_order() {
        let r = record(&[("S", 10.0), ("I", 2.0), ("R", 0.0)]);
        assert_eq!(r.keys().collect::<Vec<_>>(), ["S", "I", "R"]);
        assert_eq!(r.get("I"), Some(2.0));
        assert_eq!(r.get("X"), None);
    }

    #[test]
    fn matches_labels_is_order_sensitive() {
        let r = record(&[("S", 1.0), ("I", 2.0)]);
        assert!(r.matches_labels(["S", "I"].into_iter()));
        assert!(!r.matches_labels(["I", "S"].into_iter()));
        assert!(!r.matches_labels(["S"].into_iter()));
    }
}
