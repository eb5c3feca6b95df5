//! Immutable ritual year template: 13 months of 28 days.

use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// Number of months in a ritual year.
pub const MONTHS_PER_YEAR: u8 = 13;

/// Number of days in every ritual month.
pub const DAYS_PER_MONTH: u8 = 28;

/// Number of days in a ritual year (13 × 28).
pub const DAYS_PER_YEAR: u16 = 364;

/// Names of the seven-day ritual week, cycled over each month.
pub const DAY_NAMES: [&str; 7] = [
    "Solday", "Moonday", "Emberday", "Tideday", "Rootday", "Windday", "Starday",
];

/// Returns the week-day name for a day number (1..=28).
pub fn day_name(day_number: u8) -> &'static str {
    DAY_NAMES[usize::from(day_number.saturating_sub(1)) % DAY_NAMES.len()]
}

/// One day of a ritual month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    day_number: u8,
    day_name: String,
    activity: String,
    offerings: Vec<String>,
    prayer: Option<String>,
}

impl Day {
    pub(crate) fn new(
        day_number: u8,
        activity: String,
        offerings: Vec<String>,
        prayer: Option<String>,
    ) -> Self {
        Self {
            day_number,
            day_name: day_name(day_number).to_string(),
            activity,
            offerings,
            prayer,
        }
    }

    /// Returns the day number (1..=28).
    pub fn day_number(&self) -> u8 {
        self.day_number
    }

    /// Returns the week-day name.
    pub fn day_name(&self) -> &str {
        &self.day_name
    }

    /// Returns the prescribed activity.
    pub fn activity(&self) -> &str {
        &self.activity
    }

    /// Returns the prescribed offerings.
    pub fn offerings(&self) -> &[String] {
        &self.offerings
    }

    /// Returns the precomputed prayer, if this day carries one.
    ///
    /// Only days 1, 15 and 28 are precomputed.
    pub fn prayer(&self) -> Option<&str> {
        self.prayer.as_deref()
    }
}

/// One month of the ritual year, bound to a patron.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Month {
    index: u8,
    name: String,
    patron: String,
    theme: String,
    color: String,
    taboos: Vec<String>,
    days: Vec<Day>,
}

impl Month {
    pub(crate) fn new(
        index: u8,
        name: String,
        patron: String,
        theme: String,
        color: String,
        taboos: Vec<String>,
        days: Vec<Day>,
    ) -> Self {
        Self {
            index,
            name,
            patron,
            theme,
            color,
            taboos,
            days,
        }
    }

    /// Returns the month index (0..=12).
    pub fn index(&self) -> u8 {
        self.index
    }

    /// Returns the month name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the patron entity.
    pub fn patron(&self) -> &str {
        &self.patron
    }

    /// Returns the theme.
    pub fn theme(&self) -> &str {
        &self.theme
    }

    /// Returns the color.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Returns the taboos.
    pub fn taboos(&self) -> &[String] {
        &self.taboos
    }

    /// Returns the 28 days in order.
    pub fn days(&self) -> &[Day] {
        &self.days
    }

    /// Returns the day with the given number (1..=28).
    pub fn day(&self, day_number: u8) -> Option<&Day> {
        let idx = usize::from(day_number).checked_sub(1)?;
        self.days.get(idx)
    }
}

/// The invariant shape of one ritual year.
///
/// Built by [`generate_template`](crate::generate_template) and never
/// mutated afterwards. Share it behind an `Arc` for concurrent readers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RitualYearTemplate {
    base_year: i32,
    months: Vec<Month>,
}

impl RitualYearTemplate {
    pub(crate) fn new(base_year: i32, months: Vec<Month>) -> Self {
        Self { base_year, months }
    }

    /// Returns the base year this template was generated for.
    pub fn base_year(&self) -> i32 {
        self.base_year
    }

    /// Returns the 13 months in order.
    pub fn months(&self) -> &[Month] {
        &self.months
    }

    /// Returns the month with the given index (0..=12).
    pub fn month(&self, index: u8) -> Option<&Month> {
        self.months.get(usize::from(index))
    }

    /// Looks up a day by month index and day number.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonthIndex`] or
    /// [`CalendarError::InvalidDayNumber`] when either coordinate is out of range.
    pub fn day(&self, month_index: u8, day_number: u8) -> Result<(&Month, &Day), CalendarError> {
        let month = self
            .month(month_index)
            .ok_or(CalendarError::InvalidMonthIndex { index: month_index })?;
        let day = month
            .day(day_number)
            .ok_or(CalendarError::InvalidDayNumber { day: day_number })?;
        Ok((month, day))
    }

    /// Returns the total number of days across all months.
    pub fn total_days(&self) -> usize {
        self.months.iter().map(|m| m.days.len()).sum()
    }

    /// Iterates over every `(month, day)` pair in year order.
    pub fn iter_days(&self) -> impl Iterator<Item = (&Month, &Day)> {
        self.months
            .iter()
            .flat_map(|m| m.days.iter().map(move |d| (m, d)))
    }

    /// Re-checks the 13×28 shape and positional numbering.
    ///
    /// Generated templates always pass; this guards templates loaded from
    /// external storage.
    pub fn validate(&self) -> Result<(), CalendarError> {
        if self.months.len() != usize::from(MONTHS_PER_YEAR) {
            return Err(CalendarError::MonthCount {
                got: self.months.len(),
            });
        }
        for (position, month) in self.months.iter().enumerate() {
            if usize::from(month.index) != position {
                return Err(CalendarError::MonthOutOfOrder {
                    position,
                    index: month.index,
                });
            }
            if month.days.len() != usize::from(DAYS_PER_MONTH) {
                return Err(CalendarError::DayCount {
                    month: month.index,
                    got: month.days.len(),
                });
            }
            for (pos, day) in month.days.iter().enumerate() {
                if usize::from(day.day_number) != pos + 1 {
                    return Err(CalendarError::DayOutOfOrder {
                        month: month.index,
                        position: pos,
                        day_number: day.day_number,
                    });
                }
            }
        }
        Ok(())
    }
}
