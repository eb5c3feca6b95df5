//! The fully enriched result of a forward conversion.

use chrono::NaiveDate;
use lunaria_moon::MoonPhase;
use serde::{Deserialize, Serialize};

use crate::position::RitualPosition;

/// A Gregorian date expressed in the ritual calendar with its day content.
///
/// Built fresh on every conversion and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RitualDate {
    /// The converted Gregorian date.
    pub gregorian_date: NaiveDate,
    /// Ritual year; may precede or follow the template's base year.
    pub ritual_year: i64,
    /// Month index (0..=12).
    pub month_index: u8,
    /// Day number within the month (1..=28).
    pub day_number: u8,
    /// Day of the ritual year (1..=364).
    pub day_of_ritual_year: u16,
    /// Month name.
    pub month_name: String,
    /// Week-day name.
    pub day_name: String,
    /// Patron entity of the month.
    pub patron: String,
    /// Theme of the month.
    pub theme: String,
    /// Color of the month.
    pub color: String,
    /// Taboos observed during the month.
    pub taboos: Vec<String>,
    /// Prescribed activity.
    pub activity: String,
    /// Prescribed offerings.
    pub offerings: Vec<String>,
    /// Moon phase at the conversion instant.
    pub moon_phase: MoonPhase,
    /// Precomputed prayer, or selected guidance when the day has none.
    pub prayer: String,
}

impl RitualDate {
    /// Returns the `(year, month, day)` triple.
    pub fn position(&self) -> RitualPosition {
        RitualPosition {
            ritual_year: self.ritual_year,
            month_index: self.month_index,
            day_number: self.day_number,
        }
    }
}
