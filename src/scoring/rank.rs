//! @ai:module:intent Dense ranking of composite score columns
//! @ai:module:layer domain
//! @ai:module:public_api Direction, dense_rank
//! @ai:module:stateless true

use crate::metrics::cell::MetricCell;

/// @ai:intent Which end of the composite scale wins rank 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Smallest value ranks first.
    Ascending,
    /// Largest value ranks first.
    Descending,
}

/// @ai:intent Dense ranks per cell: exactly equal values share a rank and the
/// next distinct value takes the following integer. Non-numeric cells stay
/// unranked.
/// @ai:effects pure
pub fn dense_rank(values: &[MetricCell], direction: Direction) -> Vec<Option<u32>> {
    let mut ranked: Vec<(usize, f64)> = values
        .iter()
        .enumerate()
        .filter_map(|(index, cell)| cell.value().map(|v| (index, v)))
        .collect();

    ranked.sort_by(|a, b| {
        let ordering = a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal);
        match direction {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    });

    let mut ranks = vec![None; values.len()];
    let mut current_rank = 0u32;
    let mut previous: Option<f64> = None;
    for (index, value) in ranked {
        if previous != Some(value) {
            current_rank += 1;
            previous = Some(value);
        }
        ranks[index] = Some(current_rank);
    }
    ranks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascending_ranks() {
        let ranks = dense_rank(
            &[
                MetricCell::Value(3.0),
                MetricCell::Value(1.0),
                MetricCell::Value(2.0),
            ],
            Direction::Ascending,
        );
        assert_eq!(ranks, vec![Some(3), Some(1), Some(2)]);
    }

    #[test]
    fn test_descending_ranks() {
        let ranks = dense_rank(
            &[MetricCell::Value(3.0), MetricCell::Value(1.0)],
            Direction::Descending,
        );
        assert_eq!(ranks, vec![Some(1), Some(2)]);
    }

    #[test]
    fn test_ties_share_without_gaps() {
        let ranks = dense_rank(
            &[
                MetricCell::Value(1.0),
                MetricCell::Value(1.0),
                MetricCell::Value(2.0),
                MetricCell::Value(3.0),
            ],
            Direction::Ascending,
        );
        assert_eq!(ranks, vec![Some(1), Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn test_non_numeric_cells_unranked() {
        let ranks = dense_rank(
            &[
                MetricCell::Value(2.0),
                MetricCell::NoData,
                MetricCell::Degenerate,
                MetricCell::Value(1.0),
            ],
            Direction::Ascending,
        );
        assert_eq!(ranks, vec![Some(2), None, None, Some(1)]);
    }
}
