//! Error types for the lunaria-range crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the lunaria-range crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Returned when the interval spans more days than the configured cap.
    #[error("range of {days} days exceeds the cap of {cap} days")]
    RangeTooLarge {
        /// Number of days in the requested interval (inclusive).
        days: i64,
        /// The configured cap; retry with at most this many days.
        cap: u32,
    },

    /// Returned when the end date precedes the start date.
    #[error("range end {end} precedes start {start}")]
    InvertedRange {
        /// Requested start date.
        start: NaiveDate,
        /// Requested end date.
        end: NaiveDate,
    },

    /// Returned when the configured cap is zero.
    #[error("range cap must be >= 1, got {cap}")]
    InvalidCap {
        /// The invalid cap.
        cap: u32,
    },
}
