//! Error types for the lunaria-calendar crate.

/// Error type for all fallible operations in the lunaria-calendar crate.
///
/// Every variant describes a configuration problem: malformed patron tables
/// handed to the generator, or a template whose shape breaks the 13×28
/// invariant. None of them is recoverable per request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a patron has no activity phrases.
    #[error("patron '{patron}' (month {month}) has an empty activity list")]
    EmptyActivities {
        /// Month index the patron is bound to.
        month: u8,
        /// Name of the offending patron.
        patron: String,
    },

    /// Returned when a patron has no offering phrases.
    #[error("patron '{patron}' (month {month}) has an empty offerings list")]
    EmptyOfferings {
        /// Month index the patron is bound to.
        month: u8,
        /// Name of the offending patron.
        patron: String,
    },

    /// Returned when the patron table or a template does not hold exactly 13 months.
    #[error("expected 13 months, got {got}")]
    MonthCount {
        /// Number of months supplied.
        got: usize,
    },

    /// Returned when a month of a template does not hold exactly 28 days.
    #[error("month {month} has {got} days (expected 28)")]
    DayCount {
        /// Month index.
        month: u8,
        /// Number of days found.
        got: usize,
    },

    /// Returned when a month index does not match its position in the year.
    #[error("month at position {position} carries index {index}")]
    MonthOutOfOrder {
        /// Position within the template.
        position: usize,
        /// Index stored on the month.
        index: u8,
    },

    /// Returned when a day number does not match its position in the month.
    #[error("day at position {position} of month {month} carries number {day_number}")]
    DayOutOfOrder {
        /// Month index.
        month: u8,
        /// Position within the month.
        position: usize,
        /// Day number stored on the day.
        day_number: u8,
    },

    /// Returned when a month index is outside 0..=12.
    #[error("invalid month index: {index} (must be 0..=12)")]
    InvalidMonthIndex {
        /// The invalid month index.
        index: u8,
    },

    /// Returned when a day number is outside 1..=28.
    #[error("invalid day number: {day} (must be 1..=28)")]
    InvalidDayNumber {
        /// The invalid day number.
        day: u8,
    },
}
