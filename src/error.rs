//! Error types shared by extraction and aggregation.

use std::num::ParseFloatError;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a single analysis run
#[derive(Debug, Error)]
pub enum JointLogError {
    /// The input log is missing or could not be read
    #[error("Failed to read log file {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A numeric capture from a matched line did not parse as a float
    #[error("Line {line}: field {field} has non-numeric value {value:?}")]
    MalformedCapture {
        line: usize,
        field: String,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    /// No follow-trajectory records were found, so there is no maximum to report
    #[error("Insufficient data: no follow trajectory state/target records found")]
    EmptyDataset,

    /// State and target sequences are not index-aligned
    #[error("State and target series differ in length ({states} vs {targets})")]
    MisalignedSeries { states: usize, targets: usize },

    #[error("Invalid timestamp {value:?}: {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

pub type Result<T> = std::result::Result<T, JointLogError>;
