//! @ai:module:intent JSON dump of the scored result table
//! @ai:module:layer infrastructure
//! @ai:module:public_api JsonReporter, JsonReporterTrait
//! @ai:module:stateless true

use std::path::Path;

use chrono::Utc;
use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::table::ResultTable;

/// @ai:intent Seam for the JSON report, mockable in tests
pub trait JsonReporterTrait: Send + Sync {
    fn write(&self, table: &ResultTable, path: &Path) -> Result<()>;
}

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    rows: usize,
    table: &'a ResultTable,
}

/// @ai:intent Pretty-printed JSON writer for the result table
pub struct JsonReporter;

impl JsonReporter {
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Render the report document without touching the filesystem
    /// @ai:effects pure
    pub fn render(&self, table: &ResultTable) -> Result<String> {
        let report = JsonReport {
            generated_at: Utc::now().to_rfc3339(),
            rows: table.len(),
            table,
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReporterTrait for JsonReporter {
    /// @ai:effects fs:write
    fn write(&self, table: &ResultTable, path: &Path) -> Result<()> {
        let rendered = self.render(table)?;
        std::fs::write(path, rendered)?;
        info!(path = %path.display(), rows = table.len(), "wrote json report");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_contains_rows_and_table() {
        let reporter = JsonReporter::new();
        let rendered = reporter.render(&ResultTable::new()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["rows"], 0);
        assert!(value["table"]["entries"].is_array());
        assert!(value["generated_at"].is_string());
    }

    #[test]
    fn test_write_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        JsonReporter::new().write(&ResultTable::new(), &path).unwrap();
        assert!(path.exists());
    }
}
