//! @ai:module:intent Key/value measures file for one algorithm's scored row
//! @ai:module:layer infrastructure
//! @ai:module:public_api MeasuresReporter, MeasuresReporterTrait, MEASURES_FILE
//! @ai:module:stateless true

use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::metrics::types::ScoredEntry;

pub const MEASURES_FILE: &str = "evaluation.prototext";

/// @ai:intent Seam for the measures report, mockable in tests
pub trait MeasuresReporterTrait: Send + Sync {
    fn write(&self, entry: &ScoredEntry, output_dir: &Path) -> Result<()>;
}

/// @ai:intent Writes one scored row as a block-per-measure text file
pub struct MeasuresReporter;

impl MeasuresReporter {
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Render the measure blocks for one row
    /// @ai:effects pure
    pub fn render(&self, entry: &ScoredEntry) -> String {
        let mut out = String::new();
        let mut push = |key: &str, value: String| {
            out.push_str("measure {\n");
            out.push_str(&format!("  key : \"{key}\"\n"));
            out.push_str(&format!("  value : \"{value}\"\n"));
            out.push_str("}\n");
        };

        let rank = |rank: Option<u32>| rank.map(|r| r.to_string()).unwrap_or_default();

        push("Prioritization", entry.prioritization().label());
        push("NBS", entry.nbs.composite.render());
        push("NBS Rank", rank(entry.nbs.rank));
        push("SRBS", entry.srbs.composite.render());
        push("SRBS Rank", rank(entry.srbs.rank));
        push("WRBS", entry.wrbs.composite.render());
        push("WRBS Rank", rank(entry.wrbs.rank));
        // The consuming harness looks this key up with the trailing space.
        push("IWRBS ", entry.iwrbs.composite.render());
        push("IWRBS Rank", rank(entry.iwrbs.rank));
        push("Avg. Sample Size", entry.average.size.render());
        push("Avg. Sample Time", entry.average.time.render());
        push("Avg. Sample Coverage", entry.average.coverage.render());
        push("Avg. Sample Similarity", entry.average.similarity.render());
        push("Avg. Sample Memory", entry.average.memory.render());
        out
    }
}

impl Default for MeasuresReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl MeasuresReporterTrait for MeasuresReporter {
    /// @ai:effects fs:write
    fn write(&self, entry: &ScoredEntry, output_dir: &Path) -> Result<()> {
        let path = output_dir.join(MEASURES_FILE);
        std::fs::write(&path, self.render(entry))?;
        info!(
            path = %path.display(),
            algorithm = entry.algorithm(),
            "wrote measures file"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::cell::MetricCell;
    use crate::metrics::prioritization::Prioritization;
    use crate::metrics::types::AlgorithmAverage;

    fn entry() -> ScoredEntry {
        let mut entry = ScoredEntry::new(AlgorithmAverage {
            prioritization: Prioritization::default(),
            algorithm: "yasa".to_string(),
            size: MetricCell::Value(40.0),
            time: MetricCell::Value(10.0),
            coverage: MetricCell::Value(0.9),
            similarity: MetricCell::NoData,
            memory: MetricCell::Value(512.0),
            normalized_size: MetricCell::Value(0.6),
            normalized_time: MetricCell::Value(0.8),
            normalized_memory: MetricCell::Value(0.5),
        });
        entry.nbs.composite = MetricCell::Value(2.3);
        entry.nbs.rank = Some(1);
        entry.iwrbs.composite = MetricCell::Value(3.0);
        entry
    }

    #[test]
    fn test_block_format() {
        let rendered = MeasuresReporter::new().render(&entry());
        assert!(rendered.starts_with(
            "measure {\n  key : \"Prioritization\"\n  value : \"[S-1,T-1,C-1,Sim-0,M-0]\"\n}\n"
        ));
        assert!(rendered.contains("  key : \"NBS\"\n  value : \"2.3\"\n"));
        assert!(rendered.contains("  key : \"NBS Rank\"\n  value : \"1\"\n"));
    }

    #[test]
    fn test_iwrbs_key_keeps_trailing_space() {
        let rendered = MeasuresReporter::new().render(&entry());
        assert!(rendered.contains("  key : \"IWRBS \"\n  value : \"3\"\n"));
    }

    #[test]
    fn test_missing_values_render_empty() {
        let rendered = MeasuresReporter::new().render(&entry());
        assert!(rendered.contains("  key : \"Avg. Sample Similarity\"\n  value : \"\"\n"));
        assert!(rendered.contains("  key : \"SRBS Rank\"\n  value : \"\"\n"));
    }

    #[test]
    fn test_write_places_fixed_file_name() {
        let dir = tempfile::tempdir().unwrap();
        MeasuresReporter::new().write(&entry(), dir.path()).unwrap();
        assert!(dir.path().join(MEASURES_FILE).exists());
    }
}
