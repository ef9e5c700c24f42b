// File: crates/benchplot-core/src/lib.rs
// Summary: Core library entry point; exports the record/series/chart API.

pub mod chart;
pub mod downsample;
pub mod error;
pub mod record;
pub mod series;
pub mod style;

pub use chart::{ChartRenderer, ChartSpec, SeriesSlot};
pub use downsample::{reduce, DOWNSAMPLE_THRESHOLD, TARGET_POINT_CAP};
pub use error::Error;
pub use record::{MeasurementRecord, Operation, RecordStore};
pub use series::{CumulativeSeries, PreparedSeries, RecordSeries};
pub use style::StyleConfig;

pub type Result<T> = std::result::Result<T, Error>;
