//! @ai:module:intent Report generation for scored result tables
//! @ai:module:layer infrastructure
//! @ai:module:public_api ReportGenerator, CsvReporter, JsonReporter, MeasuresReporter

pub mod csv_report;
pub mod json_report;
pub mod measures_report;

pub use csv_report::{CsvReporter, CsvReporterTrait, AVERAGED_HEADER};
pub use json_report::{JsonReporter, JsonReporterTrait};
pub use measures_report::{MeasuresReporter, MeasuresReporterTrait, MEASURES_FILE};

use std::path::Path;

use crate::error::Result;
use crate::table::ResultTable;

pub const AVERAGED_FILE: &str = "averaged.csv";
pub const JSON_FILE: &str = "results.json";

/// @ai:intent Combined report generator
pub struct ReportGenerator {
    csv: CsvReporter,
    json: JsonReporter,
}

impl ReportGenerator {
    /// @ai:intent Create a new report generator
    /// @ai:effects pure
    pub fn new() -> Self {
        Self {
            csv: CsvReporter::new(),
            json: JsonReporter::new(),
        }
    }

    /// @ai:intent Write the delimited table and the JSON report
    /// @ai:effects fs:write
    pub fn generate_all(&self, table: &ResultTable, output_dir: &Path) -> Result<()> {
        std::fs::create_dir_all(output_dir)?;

        self.csv.write(table, &output_dir.join(AVERAGED_FILE))?;
        self.json.write(table, &output_dir.join(JSON_FILE))?;

        tracing::info!("Reports generated in {}", output_dir.display());
        Ok(())
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_all_creates_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("results");
        ReportGenerator::new()
            .generate_all(&ResultTable::new(), &output)
            .unwrap();
        assert!(output.join(AVERAGED_FILE).exists());
        assert!(output.join(JSON_FILE).exists());
    }
}
