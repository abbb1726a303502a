//! @ai:module:intent Configuration structs for the evaluation runs
//! @ai:module:layer infrastructure
//! @ai:module:public_api EvalConfig, PathConfig, WeightsConfig
//! @ai:module:stateless true

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::metrics::prioritization::Prioritization;

/// @ai:intent Main configuration for an evaluation run
/// @ai:effects pure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvalConfig {
    #[serde(default)]
    pub paths: PathConfig,
    #[serde(default)]
    pub prioritizations: Vec<WeightsConfig>,
}

/// @ai:intent Path configuration for input/output directories
/// @ai:effects pure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathConfig {
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

/// @ai:intent One weight vector as it appears in the TOML file
/// @ai:effects pure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_weight")]
    pub size: f64,
    #[serde(default = "default_weight")]
    pub time: f64,
    #[serde(default = "default_weight")]
    pub coverage: f64,
    #[serde(default)]
    pub similarity: f64,
    #[serde(default)]
    pub memory: f64,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            output_dir: default_output_dir(),
        }
    }
}

impl Default for WeightsConfig {
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

fn default_input_dir() -> PathBuf {
    PathBuf::from("runs")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("results")
}

fn default_weight() -> f64 {
    1.0
}

impl EvalConfig {
    /// @ai:intent Load configuration from a TOML file
    /// @ai:pre path exists and is readable
    /// @ai:effects fs:read
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// @ai:intent Save configuration to a TOML file
    /// @ai:effects fs:write
    pub fn save(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// @ai:intent Weight vectors to score, defaulting to the standard one
    /// @ai:effects pure
    pub fn prioritizations(&self) -> Vec<Prioritization> {
        if self.prioritizations.is_empty() {
            return vec![Prioritization::default()];
        }
        self.prioritizations
            .iter()
            .map(|w| Prioritization::new(w.size, w.time, w.coverage, w.similarity, w.memory))
            .collect()
    }
}
