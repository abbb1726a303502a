//! @ai:module:intent In-memory store of benchmark observations
//! @ai:module:layer domain
//! @ai:module:public_api RecordStore
//! @ai:module:stateless false

pub mod loader;
pub mod observation;

use std::path::Path;

use tracing::info;

use crate::error::{Error, Result};
use crate::store::loader::{RunLoader, RunLoaderTrait};
use crate::store::observation::Observation;

/// @ai:intent Holds all loaded observations and the first-seen algorithm order
#[derive(Debug, Default)]
pub struct RecordStore {
    observations: Vec<Observation>,
    algorithm_order: Vec<String>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// @ai:intent Replace the store contents from a file or directory of run files.
    /// The existing contents survive when loading fails.
    /// @ai:effects fs:read
    pub fn load(&mut self, source: &Path) -> Result<usize> {
        let loader = RunLoader::new();
        let files = if source.is_dir() {
            loader.find_run_files(source)?
        } else if source.is_file() {
            vec![source.to_path_buf()]
        } else {
            return Err(Error::NoInput(source.to_path_buf()));
        };
        if files.is_empty() {
            return Err(Error::NoInput(source.to_path_buf()));
        }

        let mut loaded = Vec::new();
        for file in &files {
            loaded.extend(loader.load_file(file)?);
        }

        self.observations = loaded;
        self.algorithm_order.clear();
        for obs in &self.observations {
            if !self.algorithm_order.contains(&obs.algorithm) {
                self.algorithm_order.push(obs.algorithm.clone());
            }
        }

        info!(
            source = %source.display(),
            files = files.len(),
            observations = self.observations.len(),
            "loaded observations"
        );
        Ok(self.observations.len())
    }

    /// @ai:intent Append the observations of one run file to the store
    /// @ai:effects fs:read
    pub fn load_from_file(&mut self, path: &Path) -> Result<usize> {
        let loader = RunLoader::new();
        let loaded = loader.load_file(path)?;
        let count = loaded.len();
        for obs in &loaded {
            if !self.algorithm_order.contains(&obs.algorithm) {
                self.algorithm_order.push(obs.algorithm.clone());
            }
        }
        self.observations.extend(loaded);
        Ok(count)
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Algorithm names in first-seen order; this order carries through
    /// aggregation and into every report.
    pub fn algorithms(&self) -> &[String] {
        &self.algorithm_order
    }

    pub fn of_algorithm<'a>(
        &'a self,
        algorithm: &'a str,
    ) -> impl Iterator<Item = &'a Observation> + 'a {
        self.observations
            .iter()
            .filter(move |obs| obs.algorithm == algorithm)
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "Author;AlgorithmID;T-Value;ModelName;Model_Features;Model_Constraints;SystemIteration;Valid Conditions;Timeout;Throughput;TotalCreatedBytes;Size;Time;Coverage;FIMD;ROIC;MSOC;ICST";

    fn write_file(dir: &Path, name: &str, rows: &[&str]) {
        let mut file = std::fs::File::create(dir.join(name)).unwrap();
        writeln!(file, "{}", HEADER).unwrap();
        for row in rows {
            writeln!(file, "{}", row).unwrap();
        }
    }

    fn row(algorithm: &str) -> String {
        format!("a1;{algorithm};2;busybox;100;40;1;200;60;5;1024;40;10;0.9;0.5;-1;-1;-1")
    }

    #[test]
    fn test_load_directory_replaces_contents() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "one.csv", &[&row("yasa")]);
        write_file(dir.path(), "two.csv", &[&row("incling"), &row("yasa")]);

        let mut store = RecordStore::new();
        assert_eq!(store.load(dir.path()).unwrap(), 3);
        assert_eq!(store.load(dir.path()).unwrap(), 3);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_algorithms_first_seen_order() {
        let dir = tempfile::tempdir().unwrap();
        write_file(
            dir.path(),
            "one.csv",
            &[&row("yasa"), &row("incling"), &row("yasa")],
        );

        let mut store = RecordStore::new();
        store.load(dir.path()).unwrap();
        assert_eq!(store.algorithms(), ["yasa", "incling"]);
        assert_eq!(store.of_algorithm("yasa").count(), 2);
    }

    #[test]
    fn test_missing_source_is_error() {
        let mut store = RecordStore::new();
        let error = store.load(Path::new("/nonexistent/input")).unwrap_err();
        assert!(matches!(error, Error::NoInput(_)));
    }

    #[test]
    fn test_empty_directory_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = RecordStore::new();
        let error = store.load(dir.path()).unwrap_err();
        assert!(matches!(error, Error::NoInput(_)));
    }

    #[test]
    fn test_failed_load_keeps_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "one.csv", &[&row("yasa")]);

        let mut store = RecordStore::new();
        store.load(dir.path()).unwrap();

        let bad = tempfile::tempdir().unwrap();
        std::fs::write(bad.path().join("bad.csv"), "Author;AlgorithmID\na1;x\n").unwrap();
        assert!(store.load(bad.path()).is_err());
        assert_eq!(store.len(), 1);
    }
}
