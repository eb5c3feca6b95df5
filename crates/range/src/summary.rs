//! Output types for range analysis.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use lunaria_converter::RitualDate;
use lunaria_moon::MoonPhase;
use serde::Serialize;

/// Kind of festival day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FestivalKind {
    /// Day 1 of a month.
    MonthBeginning,
    /// Day 15 of a month.
    FullMoonPeak,
}

impl FestivalKind {
    /// Returns the festival kind for a day number, if that day is a festival.
    pub fn for_day(day_number: u8) -> Option<Self> {
        match day_number {
            1 => Some(Self::MonthBeginning),
            lunaria_calendar::FULL_MOON_PEAK_DAY => Some(Self::FullMoonPeak),
            _ => None,
        }
    }
}

/// A festival day found within a range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Festival {
    /// Gregorian date of the festival.
    pub date: NaiveDate,
    /// Festival kind.
    pub kind: FestivalKind,
    /// Display name, e.g. `"Beginning of Brume"`.
    pub name: String,
    /// Ritual year.
    pub ritual_year: i64,
    /// Month index (0..=12).
    pub month_index: u8,
    /// Day number (1 or 15).
    pub day_number: u8,
    /// Patron of the month.
    pub patron: String,
}

impl Festival {
    /// Builds the festival record for `date`, if it is a festival day.
    pub fn from_ritual_date(date: &RitualDate) -> Option<Self> {
        let kind = FestivalKind::for_day(date.day_number)?;
        let name = match kind {
            FestivalKind::MonthBeginning => format!("Beginning of {}", date.month_name),
            FestivalKind::FullMoonPeak => format!("Full-moon peak of {}", date.month_name),
        };
        Some(Self {
            date: date.gregorian_date,
            kind,
            name,
            ritual_year: date.ritual_year,
            month_index: date.month_index,
            day_number: date.day_number,
            patron: date.patron.clone(),
        })
    }
}

/// Result of a range query.
#[derive(Debug, Clone, Serialize)]
pub struct RangeSummary {
    /// First date of the interval.
    pub start: NaiveDate,
    /// Last date of the interval (inclusive).
    pub end: NaiveDate,
    /// One record per day, in chronological order.
    pub dates: Vec<RitualDate>,
    /// Number of days per patron.
    pub patron_counts: BTreeMap<String, usize>,
    /// Number of days per moon phase.
    pub moon_phase_counts: BTreeMap<MoonPhase, usize>,
    /// Most frequent patron; ties go to the one seen first.
    pub dominant_patron: Option<String>,
    /// Most frequent moon phase; ties go to the one seen first.
    pub dominant_moon_phase: Option<MoonPhase>,
    /// Festival days within the interval, in chronological order.
    pub festivals: Vec<Festival>,
}

impl RangeSummary {
    /// Returns the number of days covered.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns `true` if no day is covered.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn festival_kinds_by_day() {
        assert_eq!(FestivalKind::for_day(1), Some(FestivalKind::MonthBeginning));
        assert_eq!(FestivalKind::for_day(15), Some(FestivalKind::FullMoonPeak));
        for d in [2u8, 14, 16, 28] {
            assert_eq!(FestivalKind::for_day(d), None);
        }
    }
}
