//! @ai:module:intent Immutable weight vector over the five sampling criteria
//! @ai:module:layer domain
//! @ai:module:public_api Prioritization
//! @ai:module:stateless true

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::metrics::cell::Metric;

/// @ai:intent User emphasis per criterion; the canonical label doubles as the
/// grouping key of the result table, so its formatting is part of the contract
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prioritization {
    pub size: f64,
    pub time: f64,
    pub coverage: f64,
    pub similarity: f64,
    pub memory: f64,
}

impl Default for Prioritization {
    fn default() -> Self {
        Self {
            size: 1.0,
            time: 1.0,
            coverage: 1.0,
            similarity: 0.0,
            memory: 0.0,
        }
    }
}

impl Prioritization {
    /// @ai:intent Create a prioritization from the five weights
    /// @ai:effects pure
    pub fn new(size: f64, time: f64, coverage: f64, similarity: f64, memory: f64) -> Self {
        Self {
            size,
            time,
            coverage,
            similarity,
            memory,
        }
    }

    /// @ai:intent Look up the weight of a single metric
    /// @ai:effects pure
    pub fn weight(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Size => self.size,
            Metric::Time => self.time,
            Metric::Coverage => self.coverage,
            Metric::Similarity => self.similarity,
            Metric::Memory => self.memory,
        }
    }

    /// @ai:intent Exact field-wise comparison; no floating tolerance
    /// @ai:effects pure
    pub fn identical(&self, other: &Prioritization) -> bool {
        self.size == other.size
            && self.time == other.time
            && self.coverage == other.coverage
            && self.similarity == other.similarity
            && self.memory == other.memory
    }

    /// @ai:intent Canonical bracketed label used as a grouping key
    /// @ai:effects pure
    pub fn label(&self) -> String {
        format!(
            "[S-{},T-{},C-{},Sim-{},M-{}]",
            self.size, self.time, self.coverage, self.similarity, self.memory
        )
    }

    /// @ai:intent Label with one axis omitted, for per-axis tables
    /// @ai:effects pure
    pub fn label_excluding(&self, excluded: Metric) -> String {
        let parts: Vec<String> = Metric::ALL
            .iter()
            .filter(|m| **m != excluded)
            .map(|m| format!("{}-{}", Self::axis_tag(*m), self.weight(*m)))
            .collect();
        format!("[{}]", parts.join(","))
    }

    fn axis_tag(metric: Metric) -> &'static str {
        match metric {
            Metric::Size => "S",
            Metric::Time => "T",
            Metric::Coverage => "C",
            Metric::Similarity => "Sim",
            Metric::Memory => "M",
        }
    }
}

impl std::fmt::Display for Prioritization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Prioritization {
    type Err = Error;

    /// @ai:intent Parse the canonical label back into a weight vector
    /// @ai:effects pure
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidPrioritization(s.to_string());

        let inner = s
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or_else(invalid)?;

        let mut weights = [0.0f64; 5];
        let mut seen = 0usize;
        for part in inner.split(',') {
            let (tag, value) = part.split_once('-').ok_or_else(invalid)?;
            let slot = match tag {
                "S" => 0,
                "T" => 1,
                "C" => 2,
                "Sim" => 3,
                "M" => 4,
                _ => return Err(invalid()),
            };
            weights[slot] = value.parse::<f64>().map_err(|_| invalid())?;
            seen += 1;
        }
        if seen != 5 {
            return Err(invalid());
        }

        Ok(Prioritization::new(
            weights[0], weights[1], weights[2], weights[3], weights[4],
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_weights() {
        let p = Prioritization::default();
        assert_eq!(p.label(), "[S-1,T-1,C-1,Sim-0,M-0]");
    }

    #[test]
    fn test_identical_is_exact() {
        let a = Prioritization::new(1.0, 1.0, 1.0, 0.0, 0.0);
        let b = a.clone();
        assert!(a.identical(&b));

        let c = Prioritization::new(1.0 + 1e-9, 1.0, 1.0, 0.0, 0.0);
        assert!(!a.identical(&c));
    }

    #[test]
    fn test_copies_are_independent() {
        let a = Prioritization::new(1.0, 2.0, 3.0, 4.0, 5.0);
        let mut b = a.clone();
        b.memory = 9.0;
        assert_eq!(a.memory, 5.0);
    }

    #[test]
    fn test_label_round_trip() {
        let p = Prioritization::new(2.0, 0.5, 1.0, 0.0, 3.0);
        let parsed: Prioritization = p.label().parse().unwrap();
        assert!(p.identical(&parsed));
    }

    #[test]
    fn test_label_excluding() {
        let p = Prioritization::default();
        assert_eq!(p.label_excluding(Metric::Size), "[T-1,C-1,Sim-0,M-0]");
        assert_eq!(p.label_excluding(Metric::Memory), "[S-1,T-1,C-1,Sim-0]");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!("S-1,T-1,C-1,Sim-0,M-0".parse::<Prioritization>().is_err());
        assert!("[S-1,T-1,C-1,Sim-0]".parse::<Prioritization>().is_err());
        assert!("[S-x,T-1,C-1,Sim-0,M-0]".parse::<Prioritization>().is_err());
    }
}
