use std::{collections::HashMap, fs::File, io, path::Path};

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use tracing::debug;

use crate::StatsError;

/// One benchmark trial as emitted by the order processing benchmark.
///
/// Columns other than these three are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MeasurementRow {
    pub pattern: String,
    #[serde(rename = "impl")]
    pub implementation: String,
    pub ops_per_sec: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupKey {
    pub pattern: String,
    pub implementation: String,
}

impl GroupKey {
    pub fn new(pattern: impl Into<String>, implementation: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            implementation: implementation.into(),
        }
    }
}

/// Repeated trial measurements, grouped by (pattern, impl).
#[derive(Debug, Default, Clone)]
pub struct SampleGroups {
    groups: HashMap<GroupKey, Vec<f64>>,
    rows: usize,
}

impl SampleGroups {
    pub fn push(&mut self, row: MeasurementRow) {
        let key = GroupKey::new(row.pattern, row.implementation);
        self.groups.entry(key).or_default().push(row.ops_per_sec);
        self.rows += 1;
    }

    /// Samples of one group, empty if the pair never appeared.
    pub fn get(&self, pattern: &str, implementation: &str) -> &[f64] {
        self.groups
            .get(&GroupKey::new(pattern, implementation))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of distinct (pattern, impl) pairs seen.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of rows consumed.
    pub fn rows(&self) -> usize {
        self.rows
    }
}

impl FromIterator<MeasurementRow> for SampleGroups {
    fn from_iter<I: IntoIterator<Item = MeasurementRow>>(iter: I) -> Self {
        let mut groups = SampleGroups::default();
        for row in iter {
            groups.push(row);
        }
        groups
    }
}

/// Reads a headed CSV and groups `ops_per_sec` by (pattern, impl).
///
/// The first row that is missing a column or carries a non-numeric
/// `ops_per_sec` aborts ingestion. Fields past the header are ignored.
pub fn ingest<R: io::Read>(reader: R) -> Result<SampleGroups, StatsError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut groups = SampleGroups::default();
    for row in reader.deserialize::<MeasurementRow>() {
        groups.push(row.map_err(StatsError::parse)?);
    }

    debug!(rows = groups.rows(), groups = groups.len(), "ingested measurements");
    Ok(groups)
}

pub fn ingest_path(path: impl AsRef<Path>) -> Result<SampleGroups, StatsError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| StatsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    ingest(file)
}
