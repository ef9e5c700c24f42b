// File: crates/benchplot-core/src/error.rs
// Summary: Error taxonomy for loading and rendering.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input header is missing one of the required columns.
    #[error("missing required column `{0}` in input header")]
    MissingColumn(&'static str),

    /// A row value could not be coerced to the expected type.
    #[error("malformed value in record {record}: {message}")]
    DataFormat { record: u64, message: String },

    /// A requested operation label matched zero records. Raised instead of
    /// writing a misleading empty chart.
    #[error("series `{0}` contains no points")]
    EmptySeries(String),

    /// A chart spec carried the wrong number of series for the requested
    /// rendering mode.
    #[error("chart `{title}` expected {expected} series, got {got}")]
    SeriesArity {
        title: String,
        expected: usize,
        got: usize,
    },

    /// Drawing or encoding failed for one output file. Sibling charts are
    /// unaffected.
    #[error("failed to render `{path}`: {message}")]
    Render { path: PathBuf, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
