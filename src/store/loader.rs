//! @ai:module:intent Parse semicolon-delimited run files into observations
//! @ai:module:layer infrastructure
//! @ai:module:public_api RunLoader, RunLoaderTrait
//! @ai:module:stateless true

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{Error, Result};
use crate::store::observation::{columns, Observation};

/// @ai:intent Seam for reading run files, mockable in tests
pub trait RunLoaderTrait: Send + Sync {
    fn load_file(&self, path: &Path) -> Result<Vec<Observation>>;
    fn find_run_files(&self, dir: &Path) -> Result<Vec<PathBuf>>;
}

/// @ai:intent Default loader for the fixed 18-column schema
pub struct RunLoader;

impl RunLoader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RunLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Column index map built from the header row; every schema column must be present.
fn header_indices(headers: &csv::StringRecord, path: &Path) -> Result<HashMap<&'static str, usize>> {
    let mut indices = HashMap::new();
    for column in columns::ALL {
        let index = headers
            .iter()
            .position(|h| h.trim() == column)
            .ok_or_else(|| Error::MissingColumn {
                column,
                path: path.to_path_buf(),
            })?;
        indices.insert(column, index);
    }
    Ok(indices)
}

struct RecordView<'a> {
    record: &'a csv::StringRecord,
    indices: &'a HashMap<&'static str, usize>,
    line: u64,
    path: &'a Path,
}

impl RecordView<'_> {
    fn text(&self, column: &'static str) -> &str {
        self.record.get(self.indices[column]).unwrap_or("").trim()
    }

    fn number(&self, column: &'static str) -> Result<f64> {
        let text = self.text(column);
        text.parse::<f64>().map_err(|_| Error::InvalidNumber {
            column,
            line: self.line,
            value: text.to_string(),
            path: self.path.to_path_buf(),
        })
    }

    /// Negative values are the source's "not measured" sentinel.
    fn metric(&self, column: &'static str) -> Result<Option<f64>> {
        let value = self.number(column)?;
        Ok(if value < 0.0 { None } else { Some(value) })
    }
}

impl RunLoaderTrait for RunLoader {
    /// @ai:intent Parse a whole run file; fails without partial results
    /// @ai:effects fs:read
    fn load_file(&self, path: &Path) -> Result<Vec<Observation>> {
        let mut reader = ReaderBuilder::new()
            .delimiter(b';')
            .flexible(true)
            .from_path(path)
            .map_err(|source| Error::Csv {
                path: path.to_path_buf(),
                source,
            })?;

        let headers = reader
            .headers()
            .map_err(|source| Error::Csv {
                path: path.to_path_buf(),
                source,
            })?
            .clone();
        let indices = header_indices(&headers, path)?;

        let mut observations = Vec::new();
        for (row, record) in reader.records().enumerate() {
            let record = record.map_err(|source| Error::Csv {
                path: path.to_path_buf(),
                source,
            })?;
            if record.iter().all(|field| field.trim().is_empty()) {
                continue;
            }
            // Header occupies line 1.
            let view = RecordView {
                record: &record,
                indices: &indices,
                line: row as u64 + 2,
                path,
            };

            let memory_bytes = view.number(columns::TOTAL_CREATED_BYTES)?;
            let observation = Observation {
                author: view.text(columns::AUTHOR).to_string(),
                algorithm: view.text(columns::ALGORITHM_ID).to_string(),
                t_wise: view.number(columns::T_VALUE)?,
                model_name: view.text(columns::MODEL_NAME).to_string(),
                model_features: view.number(columns::MODEL_FEATURES)?,
                model_constraints: view.number(columns::MODEL_CONSTRAINTS)?,
                system_iteration: view.number(columns::SYSTEM_ITERATION)?,
                valid_interactions: view.number(columns::VALID_CONDITIONS)?,
                timeout: view.number(columns::TIMEOUT)?,
                throughput: view.number(columns::THROUGHPUT)?,
                memory_bytes,
                size: view.metric(columns::SIZE)?,
                time: view.metric(columns::TIME)?,
                coverage: view.metric(columns::COVERAGE)?,
                similarity: view.metric(columns::FIMD)?,
                memory: if memory_bytes < 0.0 {
                    None
                } else {
                    Some(memory_bytes)
                },
                roic: view.metric(columns::ROIC)?,
                msoc: view.metric(columns::MSOC)?,
                icst: view.metric(columns::ICST)?,
                normalized_size: None,
                normalized_time: None,
                normalized_memory: None,
            }
            .with_derived();
            observations.push(observation);
        }

        debug!(
            path = %path.display(),
            count = observations.len(),
            "loaded run file"
        );
        Ok(observations)
    }

    /// @ai:intent List delimited run files directly inside a directory, sorted
    /// @ai:effects fs:read
    fn find_run_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "csv") {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "Author;AlgorithmID;T-Value;ModelName;Model_Features;Model_Constraints;SystemIteration;Valid Conditions;Timeout;Throughput;TotalCreatedBytes;Size;Time;Coverage;FIMD;ROIC;MSOC;ICST";

    fn write_file(dir: &Path, name: &str, rows: &[&str]) -> PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "{}", HEADER).unwrap();
        for row in rows {
            writeln!(file, "{}", row).unwrap();
        }
        path
    }

    #[test]
    fn test_load_file_parses_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "run.csv",
            &["a1;yasa;2;busybox;100;40;1;200;60;5;1024;40;10;0.9;0.5;0.1;0.2;0.3"],
        );

        let loader = RunLoader::new();
        let observations = loader.load_file(&path).unwrap();
        assert_eq!(observations.len(), 1);
        let obs = &observations[0];
        assert_eq!(obs.algorithm, "yasa");
        assert_eq!(obs.size, Some(40.0));
        assert_eq!(obs.memory, Some(1024.0));
        assert_eq!(obs.normalized_size, Some(1.0 - 40.0 / 200.0));
    }

    #[test]
    fn test_negative_metric_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "run.csv",
            &["a1;yasa;2;busybox;100;40;1;200;60;5;1024;-1;10;-1;0.5;-1;-1;-1"],
        );

        let loader = RunLoader::new();
        let observations = loader.load_file(&path).unwrap();
        let obs = &observations[0];
        assert_eq!(obs.size, None);
        assert_eq!(obs.coverage, None);
        assert_eq!(obs.normalized_size, None);
        assert_eq!(obs.time, Some(10.0));
    }

    #[test]
    fn test_missing_column_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        std::fs::write(&path, "Author;AlgorithmID\na1;yasa\n").unwrap();

        let loader = RunLoader::new();
        let error = loader.load_file(&path).unwrap_err();
        assert!(matches!(error, Error::MissingColumn { .. }));
    }

    #[test]
    fn test_invalid_number_names_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "run.csv",
            &["a1;yasa;2;busybox;100;40;1;200;60;5;1024;forty;10;0.9;0.5;0.1;0.2;0.3"],
        );

        let loader = RunLoader::new();
        let error = loader.load_file(&path).unwrap_err();
        match error {
            Error::InvalidNumber { column, line, .. } => {
                assert_eq!(column, "Size");
                assert_eq!(line, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_find_run_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "b.csv", &[]);
        write_file(dir.path(), "a.csv", &[]);
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let loader = RunLoader::new();
        let files = loader.find_run_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.csv", "b.csv"]);
    }
}
