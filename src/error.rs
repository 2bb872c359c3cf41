// src/error.rs

use thiserror::Error;

/// Failures of x-axis tick selection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TickError {
    #[error("Invalid tick range: end {end} is before start {start}")]
    InvalidRange { start: i64, end: i64 },

    #[error("Range {start}..{end} is too wide: no tick step up to {max_step} gives fewer than {max_ticks} ticks")]
    RangeTooWide {
        start: i64,
        end: i64,
        max_step: i64,
        max_ticks: usize,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenomePlotError {
    #[error("No data to plot")]
    EmptyData,

    #[error("Length mismatch: {what} has {found} entries, expected {expected}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Segment {index} ends before it starts ({start} > {end})")]
    InvalidSegment { index: usize, start: i64, end: i64 },

    #[error("Invalid plot region: {0}")]
    InvalidRegion(String),

    #[error("Tick selection failed: {0}")]
    Ticks(#[from] TickError),
}

pub type Result<T> = std::result::Result<T, GenomePlotError>;

// src/error.rs
