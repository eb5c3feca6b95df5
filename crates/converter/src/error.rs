//! Error types for the lunaria-converter crate.

/// Error type for all fallible operations in the lunaria-converter crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConvertError {
    /// Returned when an inverse query names a month outside 0..=12.
    #[error("invalid month index: {index} (must be 0..=12)")]
    InvalidMonthIndex {
        /// The invalid month index.
        index: u8,
    },

    /// Returned when an inverse query names a day outside 1..=28.
    #[error("invalid day number: {day} (must be 1..=28)")]
    InvalidDayNumber {
        /// The invalid day number.
        day: u8,
    },

    /// Returned when the Gregorian result falls outside the representable date range.
    #[error(
        "ritual date {ritual_year}/{month_index}/{day_number} is outside the representable Gregorian range"
    )]
    DateOutOfRange {
        /// Requested ritual year.
        ritual_year: i64,
        /// Requested month index.
        month_index: u8,
        /// Requested day number.
        day_number: u8,
    },

    /// Lunar model configuration error.
    #[error(transparent)]
    Moon(#[from] lunaria_moon::MoonError),

    /// Template error.
    #[error(transparent)]
    Calendar(#[from] lunaria_calendar::CalendarError),
}
