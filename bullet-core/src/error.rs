//! Error types for the schedule pipeline.

use thiserror::Error;

use crate::event::UnknownStatus;

/// Errors that abort a pipeline run.
///
/// Per-row recoverable conditions (an unparseable date or time) never show up
/// here; those rows are skipped or defaulted by the schedule builder.
#[derive(Error, Debug)]
pub enum BulletError {
    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Row {row}: expected at least {expected} columns, found {found}")]
    ShortRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Row {row}: expected {expected} attendance cells for the roster, found {found}")]
    StatusCount {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Row {row}: {source}")]
    Status {
        row: usize,
        #[source]
        source: UnknownStatus,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BulletError {
    /// True for errors caused by the submitted document rather than the host.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            BulletError::Csv(_)
                | BulletError::ShortRow { .. }
                | BulletError::StatusCount { .. }
                | BulletError::Status { .. }
        )
    }
}

/// Result type alias for pipeline operations.
pub type BulletResult<T> = Result<T, BulletError>;
