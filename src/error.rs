use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::core::TimeRangeMode;

pub type PickerResult<T> = Result<T, PickerError>;

#[derive(Debug, Error)]
pub enum PickerError {
    #[error("malformed timestamp {input:?}: expected YYYY-MM-DDTHH:mm:ssZ")]
    MalformedTimestamp {
        input: String,
        #[source]
        source: Option<chrono::ParseError>,
    },

    #[error("calendar arithmetic out of range: {instant} {delta:+} {unit}")]
    OutOfRange {
        instant: DateTime<Utc>,
        delta: i64,
        unit: TimeRangeMode,
    },

    #[error("custom mode has no calendar unit")]
    NoCalendarUnit,

    #[error("unknown range mode: {0:?}")]
    UnknownMode(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
