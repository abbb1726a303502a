//! @ai:module:intent One benchmark observation with load-time derived metrics
//! @ai:module:layer domain
//! @ai:module:public_api Observation, columns
//! @ai:module:stateless true

use serde::{Deserialize, Serialize};

use crate::metrics::cell::Metric;

/// Fixed column schema of a delimited run file.
pub mod columns {
    pub const AUTHOR: &str = "Author";
    pub const ALGORITHM_ID: &str = "AlgorithmID";
    pub const T_VALUE: &str = "T-Value";
    pub const MODEL_NAME: &str = "ModelName";
    pub const MODEL_FEATURES: &str = "Model_Features";
    pub const MODEL_CONSTRAINTS: &str = "Model_Constraints";
    pub const SYSTEM_ITERATION: &str = "SystemIteration";
    pub const VALID_CONDITIONS: &str = "Valid Conditions";
    pub const TIMEOUT: &str = "Timeout";
    pub const THROUGHPUT: &str = "Throughput";
    pub const TOTAL_CREATED_BYTES: &str = "TotalCreatedBytes";
    pub const SIZE: &str = "Size";
    pub const TIME: &str = "Time";
    pub const COVERAGE: &str = "Coverage";
    pub const FIMD: &str = "FIMD";
    pub const ROIC: &str = "ROIC";
    pub const MSOC: &str = "MSOC";
    pub const ICST: &str = "ICST";

    pub const ALL: [&str; 18] = [
        AUTHOR,
        ALGORITHM_ID,
        T_VALUE,
        MODEL_NAME,
        MODEL_FEATURES,
        MODEL_CONSTRAINTS,
        SYSTEM_ITERATION,
        VALID_CONDITIONS,
        TIMEOUT,
        THROUGHPUT,
        TOTAL_CREATED_BYTES,
        SIZE,
        TIME,
        COVERAGE,
        FIMD,
        ROIC,
        MSOC,
        ICST,
    ];
}

/// @ai:intent One (author, algorithm, model, iteration) benchmark run.
/// Metric fields are `None` when the source marked them as not measured
/// (negative sentinel in the delimited input). Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub author: String,
    pub algorithm: String,
    pub t_wise: f64,
    pub model_name: String,
    pub model_features: f64,
    pub model_constraints: f64,
    pub system_iteration: f64,
    pub valid_interactions: f64,
    pub timeout: f64,
    pub throughput: f64,
    /// TotalCreatedBytes; doubles as the raw memory metric below.
    pub memory_bytes: f64,
    pub size: Option<f64>,
    pub time: Option<f64>,
    pub coverage: Option<f64>,
    /// FIMD; used interchangeably with "similarity".
    pub similarity: Option<f64>,
    pub memory: Option<f64>,
    pub roic: Option<f64>,
    pub msoc: Option<f64>,
    pub icst: Option<f64>,
    pub normalized_size: Option<f64>,
    pub normalized_time: Option<f64>,
    pub normalized_memory: Option<f64>,
}

impl Observation {
    /// @ai:intent Compute the three normalized metrics; undefined when
    /// valid_interactions or timeout make the divisor non-positive.
    /// Normalized memory is clamped to 0 from below.
    /// @ai:effects pure
    pub fn with_derived(mut self) -> Self {
        self.normalized_size = match (self.size, self.valid_interactions) {
            (Some(size), valid) if valid > 0.0 => Some(1.0 - size / valid),
            _ => None,
        };
        self.normalized_time = match (self.time, self.timeout) {
            (Some(time), timeout) if timeout > 0.0 => Some(1.0 - time / timeout),
            _ => None,
        };
        self.normalized_memory = match (self.memory, self.valid_interactions) {
            (Some(memory), valid) if valid > 0.0 => Some((1.0 - memory / valid).max(0.0)),
            _ => None,
        };
        self
    }

    /// @ai:intent Look up a raw metric value
    /// @ai:effects pure
    pub fn metric(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Size => self.size,
            Metric::Time => self.time,
            Metric::Coverage => self.coverage,
            Metric::Similarity => self.similarity,
            Metric::Memory => self.memory,
        }
    }
}
