//! @ai:module:intent SRBS: weighted sum of per-metric ranks, lower is better
//! @ai:module:layer domain
//! @ai:module:public_api apply
//! @ai:module:stateless true

use crate::metrics::cell::{weighted_sum, Metric, MetricCell};
use crate::metrics::prioritization::Prioritization;
use crate::metrics::types::ScoredEntry;
use crate::scoring::rank::{dense_rank, Direction};

/// @ai:intent Fill the SRBS subscores, composites, and ranks of one
/// prioritization group. Each subscore is the algorithm's dense rank on the
/// raw average of that metric.
/// @ai:effects pure
pub fn apply(entries: &mut [ScoredEntry], prioritization: &Prioritization) {
    for metric in Metric::ALL {
        let direction = if metric.lower_is_better() {
            Direction::Ascending
        } else {
            Direction::Descending
        };
        let averages: Vec<_> = entries.iter().map(|e| e.average.raw(metric)).collect();
        let ranks = dense_rank(&averages, direction);
        for (entry, rank) in entries.iter_mut().zip(ranks) {
            let subscore = match rank {
                Some(rank) => MetricCell::Value(rank as f64),
                None => entry.average.raw(metric),
            };
            entry.srbs.subscores.set(metric, subscore);
        }
    }

    for entry in entries.iter_mut() {
        entry.srbs.composite = weighted_sum(&[
            (prioritization.size, entry.srbs.subscores.size),
            (prioritization.time, entry.srbs.subscores.time),
            (prioritization.coverage, entry.srbs.subscores.coverage),
            (prioritization.similarity, entry.srbs.subscores.similarity),
            (prioritization.memory, entry.srbs.subscores.memory),
        ]);
    }

    let composites: Vec<_> = entries.iter().map(|e| e.srbs.composite).collect();
    let ranks = dense_rank(&composites, Direction::Ascending);
    for (entry, rank) in entries.iter_mut().zip(ranks) {
        entry.srbs.rank = rank;
    }
}
