//! @ai:module:intent Aggregated rows and per-model score sets
//! @ai:module:layer domain
//! @ai:module:public_api AlgorithmAverage, Subscores, ModelScores, ScoredEntry
//! @ai:module:stateless true

use serde::{Deserialize, Serialize};

use crate::metrics::cell::{Metric, MetricCell};
use crate::metrics::prioritization::Prioritization;
use crate::scoring::ScoreModel;

/// @ai:intent Mean of every metric for one (prioritization, algorithm) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmAverage {
    pub prioritization: Prioritization,
    pub algorithm: String,
    pub size: MetricCell,
    pub time: MetricCell,
    pub coverage: MetricCell,
    pub similarity: MetricCell,
    pub memory: MetricCell,
    pub normalized_size: MetricCell,
    pub normalized_time: MetricCell,
    pub normalized_memory: MetricCell,
}

impl AlgorithmAverage {
    /// @ai:intent Look up the raw average of a metric
    /// @ai:effects pure
    pub fn raw(&self, metric: Metric) -> MetricCell {
        match metric {
            Metric::Size => self.size,
            Metric::Time => self.time,
            Metric::Coverage => self.coverage,
            Metric::Similarity => self.similarity,
            Metric::Memory => self.memory,
        }
    }
}

/// @ai:intent Per-metric subscores of one scoring model; unset subscores
/// render as empty table cells
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Subscores {
    pub size: MetricCell,
    pub time: MetricCell,
    pub coverage: MetricCell,
    pub similarity: MetricCell,
    pub memory: MetricCell,
}

impl Subscores {
    /// @ai:effects pure
    pub fn get(&self, metric: Metric) -> MetricCell {
        match metric {
            Metric::Size => self.size,
            Metric::Time => self.time,
            Metric::Coverage => self.coverage,
            Metric::Similarity => self.similarity,
            Metric::Memory => self.memory,
        }
    }

    /// @ai:effects pure
    pub fn set(&mut self, metric: Metric, cell: MetricCell) {
        match metric {
            Metric::Size => self.size = cell,
            Metric::Time => self.time = cell,
            Metric::Coverage => self.coverage = cell,
            Metric::Similarity => self.similarity = cell,
            Metric::Memory => self.memory = cell,
        }
    }
}

/// @ai:intent Subscores, composite, and dense rank of one model for one row
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ModelScores {
    pub subscores: Subscores,
    pub composite: MetricCell,
    pub rank: Option<u32>,
}

/// @ai:intent One fully scored result-table row; created fresh per
/// compute_scores call and superseded, never merged, on the next one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredEntry {
    pub average: AlgorithmAverage,
    pub nbs: ModelScores,
    pub srbs: ModelScores,
    pub wrbs: ModelScores,
    pub iwrbs: ModelScores,
}

impl ScoredEntry {
    /// @ai:intent Wrap an aggregated row with empty score sets
    /// @ai:effects pure
    pub fn new(average: AlgorithmAverage) -> Self {
        Self {
            average,
            nbs: ModelScores::default(),
            srbs: ModelScores::default(),
            wrbs: ModelScores::default(),
            iwrbs: ModelScores::default(),
        }
    }

    /// @ai:intent Score set of one model
    /// @ai:effects pure
    pub fn scores(&self, model: ScoreModel) -> &ModelScores {
        match model {
            ScoreModel::Nbs => &self.nbs,
            ScoreModel::Srbs => &self.srbs,
            ScoreModel::Wrbs => &self.wrbs,
            ScoreModel::Iwrbs => &self.iwrbs,
        }
    }

    /// @ai:effects pure
    pub fn scores_mut(&mut self, model: ScoreModel) -> &mut ModelScores {
        match model {
            ScoreModel::Nbs => &mut self.nbs,
            ScoreModel::Srbs => &mut self.srbs,
            ScoreModel::Wrbs => &mut self.wrbs,
            ScoreModel::Iwrbs => &mut self.iwrbs,
        }
    }

    pub fn algorithm(&self) -> &str {
        &self.average.algorithm
    }

    pub fn prioritization(&self) -> &Prioritization {
        &self.average.prioritization
    }
}
