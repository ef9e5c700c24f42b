// File: crates/benchplot-core/src/record.rs
// Summary: Typed measurement records loaded from the benchmark CSV.

use std::fmt;
use std::path::Path;

use serde::Deserialize;

use crate::error::Error;
use crate::series::RecordSeries;

/// Columns the loader insists on; anything else in the file is ignored.
pub const REQUIRED_COLUMNS: [&str; 3] = ["operation", "node_count", "time_us"];

/// Operation label. The benchmark producer emits a small fixed vocabulary;
/// anything else passes through as an opaque label.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Insert,
    Delete,
    Other(String),
}

impl Operation {
    pub fn parse(label: &str) -> Self {
        match label {
            "insert" => Self::Insert,
            "delete" => Self::Delete,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Insert => "insert",
            Self::Delete => "delete",
            Self::Other(label) => label,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One parsed input row. Immutable once loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MeasurementRecord {
    pub operation: Operation,
    pub node_count: u64,
    pub time_us: u64,
}

/// Raw shape of one CSV row; signed so negative values get a precise
/// message instead of a generic parse failure.
#[derive(Debug, Deserialize)]
struct RawRow {
    operation: String,
    node_count: i64,
    time_us: i64,
}

impl RawRow {
    fn into_record(self, record: u64) -> crate::Result<MeasurementRecord> {
        Ok(MeasurementRecord {
            operation: Operation::parse(&self.operation),
            node_count: coerce(record, "node_count", self.node_count)?,
            time_us: coerce(record, "time_us", self.time_us)?,
        })
    }
}

fn coerce(record: u64, column: &str, value: i64) -> crate::Result<u64> {
    u64::try_from(value).map_err(|_| Error::DataFormat {
        record,
        message: format!("column `{column}` must be non-negative, got {value}"),
    })
}

fn csv_error(record: u64, e: csv::Error) -> Error {
    if e.is_io_error() {
        Error::Io(std::io::Error::other(e))
    } else {
        Error::DataFormat {
            record,
            message: e.to_string(),
        }
    }
}

/// Owns the full set of loaded measurements and hands out per-operation
/// series views.
#[derive(Clone, Debug, Default)]
pub struct RecordStore {
    records: Vec<MeasurementRecord>,
}

impl RecordStore {
    pub fn from_records(records: Vec<MeasurementRecord>) -> Self {
        Self { records }
    }

    /// Load the measurements file. The header must name every required
    /// column (extras are ignored); any row that fails to coerce aborts the
    /// load, so a format error surfaces before any chart is produced.
    pub fn load_csv(path: impl AsRef<Path>) -> crate::Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(path.as_ref())
            .map_err(|e| csv_error(0, e))?;

        let headers = rdr.headers().map_err(|e| csv_error(0, e))?.clone();
        for required in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == required) {
                return Err(Error::MissingColumn(required));
            }
        }

        let mut records = Vec::new();
        for (i, row) in rdr.deserialize::<RawRow>().enumerate() {
            let n = i as u64 + 1;
            let row = row.map_err(|e| csv_error(n, e))?;
            records.push(row.into_record(n)?);
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[MeasurementRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records matching `operation`, in their original relative order.
    /// Ordering is not meaningful until the series is prepared.
    pub fn series_for(&self, operation: &Operation) -> RecordSeries {
        let points = self
            .records
            .iter()
            .filter(|r| &r.operation == operation)
            .map(|r| (r.node_count, r.time_us))
            .collect();
        RecordSeries {
            operation: operation.clone(),
            points,
        }
    }
}
