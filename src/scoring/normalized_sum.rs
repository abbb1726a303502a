//! @ai:module:intent NBS: weighted sum of normalized metrics, higher is better
//! @ai:module:layer domain
//! @ai:module:public_api apply
//! @ai:module:stateless true

use crate::metrics::cell::weighted_sum;
use crate::metrics::prioritization::Prioritization;
use crate::metrics::types::{ScoredEntry, Subscores};
use crate::scoring::rank::{dense_rank, Direction};

/// @ai:intent Fill the NBS subscores, composites, and ranks of one
/// prioritization group. Size, time, and memory enter through their
/// normalized averages; coverage and similarity through their raw averages.
/// @ai:effects pure
pub fn apply(entries: &mut [ScoredEntry], prioritization: &Prioritization) {
    for entry in entries.iter_mut() {
        let subscores = Subscores {
            size: entry.average.normalized_size,
            time: entry.average.normalized_time,
            coverage: entry.average.coverage,
            similarity: entry.average.similarity,
            memory: entry.average.normalized_memory,
        };
        // The memory term carries the similarity weight, as in every
        // previously published result table.
        entry.nbs.composite = weighted_sum(&[
            (prioritization.size, subscores.size),
            (prioritization.time, subscores.time),
            (prioritization.coverage, subscores.coverage),
            (prioritization.similarity, subscores.similarity),
            (prioritization.similarity, subscores.memory),
        ]);
        entry.nbs.subscores = subscores;
    }

    let composites: Vec<_> = entries.iter().map(|e| e.nbs.composite).collect();
    let ranks = dense_rank(&composites, Direction::Descending);
    for (entry, rank) in entries.iter_mut().zip(ranks) {
        entry.nbs.rank = rank;
    }
}
