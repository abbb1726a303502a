//! @ai:module:intent Facade tying store, scoring engine, and result table together
//! @ai:module:layer application
//! @ai:module:public_api Evaluator
//! @ai:module:stateless false

use std::path::Path;

use crate::error::Result;
use crate::metrics::prioritization::Prioritization;
use crate::scoring::{ScoringEngine, ScoringEngineTrait};
use crate::store::observation::Observation;
use crate::store::RecordStore;
use crate::table::ResultTable;

/// @ai:intent Owns the loaded observations and the last computed result table
pub struct Evaluator {
    store: RecordStore,
    table: ResultTable,
    engine: Box<dyn ScoringEngineTrait>,
}

impl Evaluator {
    pub fn new() -> Self {
        Self {
            store: RecordStore::new(),
            table: ResultTable::new(),
            engine: Box::new(ScoringEngine::new()),
        }
    }

    /// @ai:intent Replace the loaded observations from a file or directory
    /// @ai:effects fs:read
    pub fn load(&mut self, source: &Path) -> Result<usize> {
        self.store.load(source)
    }

    /// @ai:intent Recompute the result table for the given weight vectors;
    /// the previous table is discarded
    /// @ai:effects pure
    pub fn compute_scores(&mut self, prioritizations: &[Prioritization]) -> &ResultTable {
        self.table = self.engine.compute_scores(&self.store, prioritizations);
        &self.table
    }

    pub fn data(&self) -> &[Observation] {
        self.store.observations()
    }

    pub fn average_data(&self) -> &ResultTable {
        &self.table
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_then_score() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.csv");
        std::fs::write(
            &path,
            "Author;AlgorithmID;T-Value;ModelName;Model_Features;Model_Constraints;SystemIteration;Valid Conditions;Timeout;Throughput;TotalCreatedBytes;Size;Time;Coverage;FIMD;ROIC;MSOC;ICST\n\
             a1;yasa;2;m;10;5;1;100;50;1;512;40;10;0.9;0.5;-1;-1;-1\n",
        )
        .unwrap();

        let mut evaluator = Evaluator::new();
        assert_eq!(evaluator.load(&path).unwrap(), 1);
        assert!(evaluator.average_data().is_empty());

        let table = evaluator.compute_scores(&[Prioritization::default()]);
        assert_eq!(table.len(), 1);
        assert_eq!(evaluator.data().len(), 1);
    }
}
