//! @ai:module:intent Metric axes, weights, and aggregation
//! @ai:module:layer domain
//! @ai:module:public_api Metric, MetricCell, Prioritization, Aggregator
//! @ai:module:stateless true

pub mod aggregator;
pub mod cell;
pub mod prioritization;
pub mod types;

pub use aggregator::{Aggregator, AggregatorTrait};
pub use cell::{weighted_sum, Metric, MetricCell};
pub use prioritization::Prioritization;
pub use types::{AlgorithmAverage, ModelScores, ScoredEntry, Subscores};
