//! @ai:module:intent Metric axes and the tri-state table cell value
//! @ai:module:layer domain
//! @ai:module:public_api Metric, MetricCell, weighted_sum
//! @ai:module:stateless true

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// @ai:intent One of the five competing sampling criteria
/// @ai:effects pure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Size,
    Time,
    Coverage,
    Similarity,
    Memory,
}

impl Metric {
    pub const ALL: [Metric; 5] = [
        Metric::Size,
        Metric::Time,
        Metric::Coverage,
        Metric::Similarity,
        Metric::Memory,
    ];

    /// @ai:intent Convert metric to string representation
    /// @ai:effects pure
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Size => "size",
            Metric::Time => "time",
            Metric::Coverage => "coverage",
            Metric::Similarity => "similarity",
            Metric::Memory => "memory",
        }
    }

    /// @ai:intent Whether a smaller raw value is the better one for this metric
    /// @ai:effects pure
    pub fn lower_is_better(&self) -> bool {
        match self {
            Metric::Size | Metric::Time | Metric::Memory => true,
            Metric::Coverage | Metric::Similarity => false,
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// @ai:intent One cell of the averaged/scored table: a number, an explicit
/// "no qualifying observations" marker, or an undefined-ratio marker
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricCell {
    Value(f64),
    NoData,
    Degenerate,
}

impl Default for MetricCell {
    /// An unset cell renders as an empty delimited-table field.
    fn default() -> Self {
        MetricCell::NoData
    }
}

impl MetricCell {
    /// @ai:intent Extract the numeric value if the cell holds one
    /// @ai:effects pure
    pub fn value(self) -> Option<f64> {
        match self {
            MetricCell::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_value(self) -> bool {
        matches!(self, MetricCell::Value(_))
    }

    /// @ai:intent Build a cell from an optional mean
    /// @ai:effects pure
    pub fn from_option(value: Option<f64>) -> Self {
        match value {
            Some(v) => MetricCell::Value(v),
            None => MetricCell::NoData,
        }
    }

    /// @ai:intent Render the cell for the delimited table and the measures report
    /// @ai:effects pure
    pub fn render(&self) -> String {
        match self {
            MetricCell::Value(v) => format!("{v}"),
            MetricCell::NoData => String::new(),
            MetricCell::Degenerate => "undefined".to_string(),
        }
    }

    /// @ai:intent Parse a cell back from its delimited-table rendering
    /// @ai:effects pure
    pub fn parse(column: &str, text: &str) -> Result<Self, Error> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(MetricCell::NoData);
        }
        if trimmed == "undefined" {
            return Ok(MetricCell::Degenerate);
        }
        trimmed
            .parse::<f64>()
            .map(MetricCell::Value)
            .map_err(|_| Error::InvalidCell {
                column: column.to_string(),
                value: text.to_string(),
            })
    }
}

/// @ai:intent Weighted sum of subscore cells with marker propagation: any
/// no-data term poisons the composite, otherwise any degenerate term does
/// @ai:effects pure
pub fn weighted_sum(terms: &[(f64, MetricCell)]) -> MetricCell {
    let mut total = 0.0;
    let mut no_data = false;
    let mut degenerate = false;

    for (weight, cell) in terms {
        match cell {
            MetricCell::Value(v) => total += weight * v,
            MetricCell::NoData => no_data = true,
            MetricCell::Degenerate => degenerate = true,
        }
    }

    if no_data {
        MetricCell::NoData
    } else if degenerate {
        MetricCell::Degenerate
    } else {
        MetricCell::Value(total)
    }
}
