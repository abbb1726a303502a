//! @ai:module:intent Delimited result-table writer and reader
//! @ai:module:layer infrastructure
//! @ai:module:public_api CsvReporter, CsvReporterTrait, AVERAGED_HEADER
//! @ai:module:stateless true

use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use tracing::info;

use crate::error::{Error, Result};
use crate::metrics::cell::{Metric, MetricCell};
use crate::metrics::prioritization::Prioritization;
use crate::metrics::types::{AlgorithmAverage, ModelScores, ScoredEntry};
use crate::scoring::ScoreModel;
use crate::table::ResultTable;

/// Column order of the averaged result table; stable because downstream
/// tooling addresses columns by name.
pub const AVERAGED_HEADER: [&str; 38] = [
    "Prioritization",
    "Algorithm",
    "NBS",
    "NBS Rank",
    "SRBS",
    "SRBS Rank",
    "WRBS",
    "WRBS Rank",
    "IWRBS",
    "IWRBS Rank",
    "Avg. Size",
    "Avg. Time",
    "Avg. Coverage",
    "Avg. Similarity",
    "Avg. Memory",
    "Avg. Normalized Size",
    "Avg. Normalized Time",
    "Avg. Normalized Memory",
    "NBS Subscore Size",
    "NBS Subscore Time",
    "NBS Subscore Coverage",
    "NBS Subscore Similarity",
    "NBS Subscore Memory",
    "SRBS Subscore Size",
    "SRBS Subscore Time",
    "SRBS Subscore Coverage",
    "SRBS Subscore Similarity",
    "SRBS Subscore Memory",
    "WRBS Subscore Size",
    "WRBS Subscore Time",
    "WRBS Subscore Coverage",
    "WRBS Subscore Similarity",
    "WRBS Subscore Memory",
    "IWRBS Subscore Size",
    "IWRBS Subscore Time",
    "IWRBS Subscore Coverage",
    "IWRBS Subscore Similarity",
    "IWRBS Subscore Memory",
];

/// @ai:intent Seam for the delimited report, mockable in tests
pub trait CsvReporterTrait: Send + Sync {
    fn write(&self, table: &ResultTable, path: &Path) -> Result<()>;
    fn read(&self, path: &Path) -> Result<ResultTable>;
}

/// @ai:intent Semicolon-delimited writer/reader for the averaged table
pub struct CsvReporter;

impl CsvReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CsvReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn rank_field(rank: Option<u32>) -> String {
    rank.map(|r| r.to_string()).unwrap_or_default()
}

fn row_of(entry: &ScoredEntry) -> Vec<String> {
    let mut row = vec![
        entry.prioritization().label(),
        entry.algorithm().to_string(),
        entry.nbs.composite.render(),
        rank_field(entry.nbs.rank),
        entry.srbs.composite.render(),
        rank_field(entry.srbs.rank),
        entry.wrbs.composite.render(),
        rank_field(entry.wrbs.rank),
        entry.iwrbs.composite.render(),
        rank_field(entry.iwrbs.rank),
        entry.average.size.render(),
        entry.average.time.render(),
        entry.average.coverage.render(),
        entry.average.similarity.render(),
        entry.average.memory.render(),
        entry.average.normalized_size.render(),
        entry.average.normalized_time.render(),
        entry.average.normalized_memory.render(),
    ];
    for model in ScoreModel::ALL {
        for metric in Metric::ALL {
            row.push(entry.scores(model).subscores.get(metric).render());
        }
    }
    row
}

struct FieldReader<'a> {
    record: &'a csv::StringRecord,
    cursor: usize,
}

impl FieldReader<'_> {
    fn text(&mut self) -> &str {
        let field = self.record.get(self.cursor).unwrap_or("");
        self.cursor += 1;
        field
    }

    fn cell(&mut self) -> Result<MetricCell> {
        let column = AVERAGED_HEADER[self.cursor];
        let field = self.record.get(self.cursor).unwrap_or("");
        self.cursor += 1;
        MetricCell::parse(column, field)
    }

    fn rank(&mut self) -> Result<Option<u32>> {
        let column = AVERAGED_HEADER[self.cursor];
        let field = self.record.get(self.cursor).unwrap_or("").trim();
        self.cursor += 1;
        if field.is_empty() {
            return Ok(None);
        }
        field
            .parse::<u32>()
            .map(Some)
            .map_err(|_| Error::InvalidCell {
                column: column.to_string(),
                value: field.to_string(),
            })
    }

    fn model(&mut self) -> Result<(MetricCell, Option<u32>)> {
        Ok((self.cell()?, self.rank()?))
    }

    fn subscores(&mut self, scores: &mut ModelScores) -> Result<()> {
        for metric in Metric::ALL {
            scores.subscores.set(metric, self.cell()?);
        }
        Ok(())
    }
}

impl CsvReporterTrait for CsvReporter {
    /// @ai:intent Write the averaged table in the fixed column order
    /// @ai:effects fs:write
    fn write(&self, table: &ResultTable, path: &Path) -> Result<()> {
        let mut writer = WriterBuilder::new()
            .delimiter(b';')
            .from_path(path)
            .map_err(|source| Error::Csv {
                path: path.to_path_buf(),
                source,
            })?;

        writer
            .write_record(AVERAGED_HEADER)
            .and_then(|_| {
                for entry in table.entries() {
                    writer.write_record(row_of(entry))?;
                }
                writer.flush().map_err(csv::Error::from)
            })
            .map_err(|source| Error::Csv {
                path: path.to_path_buf(),
                source,
            })?;

        info!(path = %path.display(), rows = table.len(), "wrote averaged table");
        Ok(())
    }

    /// @ai:intent Read a previously written averaged table back
    /// @ai:effects fs:read
    fn read(&self, path: &Path) -> Result<ResultTable> {
        let mut reader = ReaderBuilder::new()
            .delimiter(b';')
            .from_path(path)
            .map_err(|source| Error::Csv {
                path: path.to_path_buf(),
                source,
            })?;

        let mut table = ResultTable::new();
        let mut entries = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|source| Error::Csv {
                path: path.to_path_buf(),
                source,
            })?;
            let mut fields = FieldReader {
                record: &record,
                cursor: 0,
            };

            let prioritization: Prioritization = fields.text().parse()?;
            let algorithm = fields.text().to_string();
            let mut composites = Vec::with_capacity(ScoreModel::ALL.len());
            for _ in ScoreModel::ALL {
                composites.push(fields.model()?);
            }

            let average = AlgorithmAverage {
                prioritization,
                algorithm,
                size: fields.cell()?,
                time: fields.cell()?,
                coverage: fields.cell()?,
                similarity: fields.cell()?,
                memory: fields.cell()?,
                normalized_size: fields.cell()?,
                normalized_time: fields.cell()?,
                normalized_memory: fields.cell()?,
            };

            let mut entry = ScoredEntry::new(average);
            for (model, (composite, rank)) in ScoreModel::ALL.into_iter().zip(composites) {
                let scores = entry.scores_mut(model);
                scores.composite = composite;
                scores.rank = rank;
            }
            for model in ScoreModel::ALL {
                fields.subscores(entry.scores_mut(model))?;
            }
            entries.push(entry);
        }
        table.extend(entries);

        info!(path = %path.display(), rows = table.len(), "read averaged table");
        Ok(table)
    }
}
