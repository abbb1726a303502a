//! @ai:module:intent Sampling algorithm evaluation library
//! @ai:module:layer application
//! @ai:module:public_api config, store, metrics, scoring, table, evaluator, report

pub mod config;
pub mod error;
pub mod evaluator;
pub mod metrics;
pub mod report;
pub mod scoring;
pub mod store;
pub mod table;

pub use config::EvalConfig;
pub use error::{Error, Result};
pub use evaluator::Evaluator;
pub use metrics::{Aggregator, Metric, MetricCell, Prioritization, ScoredEntry};
pub use report::{CsvReporter, JsonReporter, MeasuresReporter, ReportGenerator};
pub use scoring::{ScoreModel, ScoringEngine, ScoringEngineTrait};
pub use store::RecordStore;
pub use table::ResultTable;
