//! @ai:module:intent Scoring models and the engine driving them per group
//! @ai:module:layer domain
//! @ai:module:public_api ScoreModel, ScoringEngine, ScoringEngineTrait
//! @ai:module:stateless true

pub mod normalized_sum;
pub mod rank;
pub mod rank_sum;
pub mod ratio;

use tracing::info;

use crate::metrics::aggregator::{Aggregator, AggregatorTrait};
use crate::metrics::prioritization::Prioritization;
use crate::metrics::types::ScoredEntry;
use crate::store::RecordStore;
use crate::table::ResultTable;

/// @ai:intent The four scoring models of the result table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreModel {
    Nbs,
    Srbs,
    Wrbs,
    Iwrbs,
}

impl ScoreModel {
    pub const ALL: [ScoreModel; 4] = [
        ScoreModel::Nbs,
        ScoreModel::Srbs,
        ScoreModel::Wrbs,
        ScoreModel::Iwrbs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreModel::Nbs => "NBS",
            ScoreModel::Srbs => "SRBS",
            ScoreModel::Wrbs => "WRBS",
            ScoreModel::Iwrbs => "IWRBS",
        }
    }
}

impl std::fmt::Display for ScoreModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// @ai:intent Seam for score computation, mockable in tests
pub trait ScoringEngineTrait: Send + Sync {
    fn compute_scores(
        &self,
        store: &RecordStore,
        prioritizations: &[Prioritization],
    ) -> ResultTable;
}

/// @ai:intent Aggregates per prioritization, then runs all four models on
/// each group
pub struct ScoringEngine {
    aggregator: Box<dyn AggregatorTrait>,
}

impl ScoringEngine {
    pub fn new() -> Self {
        Self {
            aggregator: Box::new(Aggregator::new()),
        }
    }

    pub fn with_aggregator(aggregator: Box<dyn AggregatorTrait>) -> Self {
        Self { aggregator }
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoringEngineTrait for ScoringEngine {
    /// @ai:intent Build a fresh result table: one scored row per
    /// (prioritization, algorithm) pair, groups in input order
    /// @ai:effects pure
    fn compute_scores(
        &self,
        store: &RecordStore,
        prioritizations: &[Prioritization],
    ) -> ResultTable {
        let mut table = ResultTable::new();
        for prioritization in prioritizations {
            let mut entries: Vec<ScoredEntry> = self
                .aggregator
                .averages_for(store, prioritization)
                .into_iter()
                .map(ScoredEntry::new)
                .collect();

            normalized_sum::apply(&mut entries, prioritization);
            rank_sum::apply(&mut entries, prioritization);
            ratio::apply_weighted(&mut entries, prioritization);
            ratio::apply_inverse_weighted(&mut entries, prioritization);

            table.extend(entries);
        }
        info!(
            prioritizations = prioritizations.len(),
            rows = table.len(),
            "computed scores"
        );
        table
    }
}
