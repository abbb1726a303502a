//! @ai:module:intent WRBS and IWRBS: ratio-to-best and ratio-to-worst scores
//! @ai:module:layer domain
//! @ai:module:public_api apply_weighted, apply_inverse_weighted
//! @ai:module:stateless true

use crate::metrics::cell::{weighted_sum, Metric, MetricCell};
use crate::metrics::prioritization::Prioritization;
use crate::metrics::types::ScoredEntry;
use crate::scoring::rank::{dense_rank, Direction};

enum RatioModel {
    /// Ratio to the best value; 1.0 is best, lower composite wins.
    Weighted,
    /// Ratio to the worst value; higher composite wins.
    InverseWeighted,
}

/// A zero denominator has no meaningful ratio; the cell turns degenerate
/// instead of infinite.
fn ratio(numerator: MetricCell, denominator: MetricCell) -> MetricCell {
    match (numerator, denominator) {
        (MetricCell::Value(_), MetricCell::Value(d)) if d == 0.0 => MetricCell::Degenerate,
        (MetricCell::Value(n), MetricCell::Value(d)) => MetricCell::Value(n / d),
        (MetricCell::NoData, _) | (_, MetricCell::NoData) => MetricCell::NoData,
        _ => MetricCell::Degenerate,
    }
}

fn extreme(entries: &[ScoredEntry], metric: Metric, want_min: bool) -> MetricCell {
    let values = entries.iter().filter_map(|e| e.average.raw(metric).value());
    let found = if want_min {
        values.fold(None, |best: Option<f64>, v| {
            Some(best.map_or(v, |b| b.min(v)))
        })
    } else {
        values.fold(None, |best: Option<f64>, v| {
            Some(best.map_or(v, |b| b.max(v)))
        })
    };
    MetricCell::from_option(found)
}

fn apply_model(entries: &mut [ScoredEntry], prioritization: &Prioritization, model: RatioModel) {
    // Only weighted metrics take part; the others stay out of the composite
    // entirely rather than contributing zero.
    let participating: Vec<Metric> = Metric::ALL
        .into_iter()
        .filter(|m| prioritization.weight(*m) != 0.0)
        .collect();

    for metric in &participating {
        // Weighted compares against the best value in the group, inverse
        // weighted against the worst.
        let best_is_reference = matches!(model, RatioModel::Weighted);
        let reference = extreme(
            entries,
            *metric,
            metric.lower_is_better() == best_is_reference,
        );
        let reference_divides = metric.lower_is_better() == best_is_reference;
        for entry in entries.iter_mut() {
            let average = entry.average.raw(*metric);
            let subscore = if reference_divides {
                ratio(average, reference)
            } else {
                ratio(reference, average)
            };
            match model {
                RatioModel::Weighted => entry.wrbs.subscores.set(*metric, subscore),
                RatioModel::InverseWeighted => entry.iwrbs.subscores.set(*metric, subscore),
            }
        }
    }

    for entry in entries.iter_mut() {
        let scores = match model {
            RatioModel::Weighted => &mut entry.wrbs,
            RatioModel::InverseWeighted => &mut entry.iwrbs,
        };
        let terms: Vec<(f64, MetricCell)> = participating
            .iter()
            .map(|m| (prioritization.weight(*m), scores.subscores.get(*m)))
            .collect();
        scores.composite = weighted_sum(&terms);
    }

    let direction = match model {
        RatioModel::Weighted => Direction::Ascending,
        RatioModel::InverseWeighted => Direction::Descending,
    };
    let composites: Vec<_> = entries
        .iter()
        .map(|e| match model {
            RatioModel::Weighted => e.wrbs.composite,
            RatioModel::InverseWeighted => e.iwrbs.composite,
        })
        .collect();
    let ranks = dense_rank(&composites, direction);
    for (entry, rank) in entries.iter_mut().zip(ranks) {
        match model {
            RatioModel::Weighted => entry.wrbs.rank = rank,
            RatioModel::InverseWeighted => entry.iwrbs.rank = rank,
        }
    }
}

/// @ai:intent Fill the WRBS scores of one prioritization group. Lower-is-better
/// metrics score value over group minimum, the others group maximum over value.
/// @ai:effects pure
pub fn apply_weighted(entries: &mut [ScoredEntry], prioritization: &Prioritization) {
    apply_model(entries, prioritization, RatioModel::Weighted);
}

/// @ai:intent Fill the IWRBS scores of one prioritization group, mirroring
/// WRBS: group maximum over value, and value over group minimum.
/// @ai:effects pure
pub fn apply_inverse_weighted(entries: &mut [ScoredEntry], prioritization: &Prioritization) {
    apply_model(entries, prioritization, RatioModel::InverseWeighted);
}
