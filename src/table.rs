//! @ai:module:intent The scored result table and its lookups
//! @ai:module:layer domain
//! @ai:module:public_api ResultTable
//! @ai:module:stateless false

use serde::{Deserialize, Serialize};

use crate::metrics::prioritization::Prioritization;
use crate::metrics::types::ScoredEntry;

/// @ai:intent Ordered collection of scored rows, grouped by prioritization
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultTable {
    entries: Vec<ScoredEntry>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, entries: Vec<ScoredEntry>) {
        self.entries.extend(entries);
    }

    pub fn entries(&self) -> &[ScoredEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// @ai:intent Rows of one prioritization group, in table order
    /// @ai:effects pure
    pub fn for_prioritization<'a>(
        &'a self,
        prioritization: &'a Prioritization,
    ) -> impl Iterator<Item = &'a ScoredEntry> + 'a {
        self.entries
            .iter()
            .filter(move |e| e.prioritization().identical(prioritization))
    }

    /// @ai:intent Exact lookup by prioritization and algorithm
    /// @ai:effects pure
    pub fn find(&self, prioritization: &Prioritization, algorithm: &str) -> Option<&ScoredEntry> {
        self.entries
            .iter()
            .find(|e| e.prioritization().identical(prioritization) && e.algorithm() == algorithm)
    }

    /// @ai:intent First row of an algorithm across all groups
    /// @ai:effects pure
    pub fn find_algorithm(&self, algorithm: &str) -> Option<&ScoredEntry> {
        self.entries.iter().find(|e| e.algorithm() == algorithm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::cell::MetricCell;
    use crate::metrics::types::AlgorithmAverage;

    fn entry(prioritization: Prioritization, algorithm: &str) -> ScoredEntry {
        ScoredEntry::new(AlgorithmAverage {
            prioritization,
            algorithm: algorithm.to_string(),
            size: MetricCell::Value(1.0),
            time: MetricCell::Value(1.0),
            coverage: MetricCell::Value(1.0),
            similarity: MetricCell::Value(1.0),
            memory: MetricCell::Value(1.0),
            normalized_size: MetricCell::Value(1.0),
            normalized_time: MetricCell::Value(1.0),
            normalized_memory: MetricCell::Value(1.0),
        })
    }

    #[test]
    fn test_group_lookup_is_exact() {
        let default = Prioritization::default();
        let other = Prioritization::new(1.0, 1.0, 1.0, 0.0, 1e-9);
        let mut table = ResultTable::new();
        table.extend(vec![
            entry(default.clone(), "yasa"),
            entry(other.clone(), "yasa"),
        ]);

        assert_eq!(table.for_prioritization(&default).count(), 1);
        assert_eq!(table.for_prioritization(&other).count(), 1);
        assert!(table.find(&default, "yasa").is_some());
        assert!(table.find(&default, "incling").is_none());
    }

    #[test]
    fn test_find_algorithm_takes_first_group() {
        let first = Prioritization::new(1.0, 0.0, 0.0, 0.0, 0.0);
        let mut table = ResultTable::new();
        table.extend(vec![
            entry(first.clone(), "yasa"),
            entry(Prioritization::default(), "yasa"),
        ]);

        let found = table.find_algorithm("yasa").unwrap();
        assert!(found.prioritization().identical(&first));
    }
}
