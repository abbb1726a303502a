//! @ai:module:intent Average observations per algorithm under one prioritization
//! @ai:module:layer domain
//! @ai:module:public_api Aggregator, AggregatorTrait
//! @ai:module:stateless true

use tracing::debug;

use crate::metrics::cell::MetricCell;
use crate::metrics::prioritization::Prioritization;
use crate::metrics::types::AlgorithmAverage;
use crate::store::observation::Observation;
use crate::store::RecordStore;

/// @ai:intent Seam for aggregation, mockable in tests
pub trait AggregatorTrait: Send + Sync {
    fn averages_for(
        &self,
        store: &RecordStore,
        prioritization: &Prioritization,
    ) -> Vec<AlgorithmAverage>;
}

/// @ai:intent Default mean-based aggregator
pub struct Aggregator;

impl Aggregator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new()
    }
}

/// Mean over measured, non-negative values; no qualifying values means no data.
fn mean<F>(observations: &[&Observation], field: F) -> MetricCell
where
    F: Fn(&Observation) -> Option<f64>,
{
    let mut total = 0.0;
    let mut count = 0usize;
    for obs in observations {
        if let Some(value) = field(obs) {
            if value >= 0.0 {
                total += value;
                count += 1;
            }
        }
    }
    if count == 0 {
        MetricCell::NoData
    } else {
        MetricCell::Value(total / count as f64)
    }
}

impl AggregatorTrait for Aggregator {
    /// @ai:intent One averaged row per algorithm, in the store's first-seen order
    /// @ai:effects pure
    fn averages_for(
        &self,
        store: &RecordStore,
        prioritization: &Prioritization,
    ) -> Vec<AlgorithmAverage> {
        let mut averages = Vec::with_capacity(store.algorithms().len());
        for algorithm in store.algorithms() {
            let observations: Vec<&Observation> = store.of_algorithm(algorithm).collect();
            averages.push(AlgorithmAverage {
                prioritization: prioritization.clone(),
                algorithm: algorithm.clone(),
                size: mean(&observations, |o| o.size),
                time: mean(&observations, |o| o.time),
                coverage: mean(&observations, |o| o.coverage),
                similarity: mean(&observations, |o| o.similarity),
                memory: mean(&observations, |o| o.memory),
                normalized_size: mean(&observations, |o| o.normalized_size),
                normalized_time: mean(&observations, |o| o.normalized_time),
                normalized_memory: mean(&observations, |o| o.normalized_memory),
            });
        }
        debug!(
            prioritization = %prioritization.label(),
            algorithms = averages.len(),
            "aggregated averages"
        );
        averages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observation(algorithm: &str, size: Option<f64>, coverage: Option<f64>) -> Observation {
        Observation {
            author: "a1".to_string(),
            algorithm: algorithm.to_string(),
            t_wise: 2.0,
            model_name: "model".to_string(),
            model_features: 10.0,
            model_constraints: 5.0,
            system_iteration: 1.0,
            valid_interactions: 100.0,
            timeout: 50.0,
            throughput: 1.0,
            memory_bytes: 0.0,
            size,
            time: Some(10.0),
            coverage,
            similarity: Some(0.5),
            memory: Some(8.0),
            roic: None,
            msoc: None,
            icst: None,
            normalized_size: None,
            normalized_time: None,
            normalized_memory: None,
        }
        .with_derived()
    }

    fn store_of(observations: Vec<Observation>) -> RecordStore {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.csv");
        let mut text = String::from(
            "Author;AlgorithmID;T-Value;ModelName;Model_Features;Model_Constraints;SystemIteration;Valid Conditions;Timeout;Throughput;TotalCreatedBytes;Size;Time;Coverage;FIMD;ROIC;MSOC;ICST\n",
        );
        for obs in &observations {
            text.push_str(&format!(
                "{};{};2;model;10;5;1;100;50;1;{};{};{};{};{};-1;-1;-1\n",
                obs.author,
                obs.algorithm,
                obs.memory.unwrap_or(-1.0),
                obs.size.unwrap_or(-1.0),
                obs.time.unwrap_or(-1.0),
                obs.coverage.unwrap_or(-1.0),
                obs.similarity.unwrap_or(-1.0),
            ));
        }
        std::fs::write(&path, text).unwrap();
        let mut store = RecordStore::new();
        store.load(&path).unwrap();
        store
    }

    #[test]
    fn test_mean_skips_missing_values() {
        let store = store_of(vec![
            observation("yasa", Some(10.0), Some(0.8)),
            observation("yasa", Some(20.0), None),
        ]);
        let averages = Aggregator::new().averages_for(&store, &Prioritization::default());
        assert_eq!(averages.len(), 1);
        assert_eq!(averages[0].size, MetricCell::Value(15.0));
        assert_eq!(averages[0].coverage, MetricCell::Value(0.8));
    }

    #[test]
    fn test_all_missing_is_no_data() {
        let store = store_of(vec![
            observation("yasa", None, Some(0.8)),
            observation("yasa", None, Some(0.9)),
        ]);
        let averages = Aggregator::new().averages_for(&store, &Prioritization::default());
        assert_eq!(averages[0].size, MetricCell::NoData);
        assert_eq!(averages[0].normalized_size, MetricCell::NoData);
    }

    #[test]
    fn test_rows_follow_first_seen_order() {
        let store = store_of(vec![
            observation("incling", Some(5.0), Some(0.7)),
            observation("yasa", Some(10.0), Some(0.8)),
            observation("incling", Some(7.0), Some(0.9)),
        ]);
        let averages = Aggregator::new().averages_for(&store, &Prioritization::default());
        let names: Vec<_> = averages.iter().map(|a| a.algorithm.as_str()).collect();
        assert_eq!(names, ["incling", "yasa"]);
        assert_eq!(averages[0].size, MetricCell::Value(6.0));
    }
}
