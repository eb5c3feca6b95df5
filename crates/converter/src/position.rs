//! Epoch arithmetic between day offsets and ritual `(year, month, day)` triples.

use lunaria_calendar::{DAYS_PER_MONTH, DAYS_PER_YEAR, MONTHS_PER_YEAR};
use serde::Serialize;

use crate::error::ConvertError;

const YEAR: i64 = DAYS_PER_YEAR as i64;
const MONTH: i64 = DAYS_PER_MONTH as i64;

/// Rule for turning a day offset from the epoch into a day of the ritual year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DayCount {
    /// The epoch is day 1 of month 0; every 364 days starts a new year.
    ///
    /// Forward conversion is a bijection and [`days_since_epoch`] is its
    /// exact inverse.
    #[default]
    Ordinal,
    /// Treats the remainder of the offset modulo 364 as a 1-based day,
    /// forcing 0 to 364 without decrementing the year and clamping the
    /// month and day.
    ///
    /// Maps both the epoch and the following day to day 1 of month 0, and
    /// each 364-day boundary to day 28 of month 12 of the *next* year.
    Legacy,
}

/// A ritual `(year, month, day)` triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RitualPosition {
    /// Ritual year; may precede or follow the base year.
    pub ritual_year: i64,
    /// Month index (0..=12).
    pub month_index: u8,
    /// Day number within the month (1..=28).
    pub day_number: u8,
}

impl RitualPosition {
    /// Creates a position, validating the month index and day number.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidMonthIndex`] or
    /// [`ConvertError::InvalidDayNumber`] for out-of-range coordinates.
    pub fn new(ritual_year: i64, month_index: u8, day_number: u8) -> Result<Self, ConvertError> {
        if month_index >= MONTHS_PER_YEAR {
            return Err(ConvertError::InvalidMonthIndex { index: month_index });
        }
        if !(1..=DAYS_PER_MONTH).contains(&day_number) {
            return Err(ConvertError::InvalidDayNumber { day: day_number });
        }
        Ok(Self {
            ritual_year,
            month_index,
            day_number,
        })
    }

    /// Returns the day of the ritual year (1..=364).
    pub fn day_of_year(&self) -> u16 {
        u16::from(self.month_index) * u16::from(DAYS_PER_MONTH) + u16::from(self.day_number)
    }
}

/// Maps a day offset from the epoch to a ritual position.
pub fn locate(days_since_epoch: i64, base_year: i32, rule: DayCount) -> RitualPosition {
    match rule {
        DayCount::Ordinal => locate_ordinal(days_since_epoch, i64::from(base_year)),
        DayCount::Legacy => locate_legacy(days_since_epoch, i64::from(base_year)),
    }
}

fn locate_ordinal(days: i64, base_year: i64) -> RitualPosition {
    let offset = days.rem_euclid(YEAR);
    RitualPosition {
        ritual_year: base_year + days.div_euclid(YEAR),
        month_index: (offset / MONTH) as u8,
        day_number: (offset % MONTH + 1) as u8,
    }
}

fn locate_legacy(days: i64, base_year: i64) -> RitualPosition {
    let (adjusted, ritual_year) = if days < 0 {
        let years_before = (-days + YEAR - 1) / YEAR;
        (days + years_before * YEAR, base_year - years_before)
    } else {
        (days, base_year + days / YEAR)
    };

    let mut day_in_year = adjusted % YEAR;
    if day_in_year == 0 && adjusted > 0 {
        day_in_year = YEAR;
    }

    // Truncating remainder: a day_in_year of 0 yields day 0, clamped to 1.
    // `rem_euclid` here would move the epoch to day 28.
    let month_index = (day_in_year - 1)
        .div_euclid(MONTH)
        .clamp(0, i64::from(MONTHS_PER_YEAR) - 1);
    let day_number = ((day_in_year - 1) % MONTH + 1).clamp(1, MONTH);

    RitualPosition {
        ritual_year,
        month_index: month_index as u8,
        day_number: day_number as u8,
    }
}

/// Returns the day offset from the epoch for a ritual position.
///
/// Returns `None` if the offset overflows `i64`.
pub fn days_since_epoch(position: &RitualPosition, base_year: i32) -> Option<i64> {
    position
        .ritual_year
        .checked_sub(i64::from(base_year))?
        .checked_mul(YEAR)?
        .checked_add(i64::from(position.day_of_year()) - 1)
}
