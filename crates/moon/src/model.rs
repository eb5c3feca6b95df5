//! Single-parameter synodic model of the lunar cycle.

use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};

use crate::error::MoonError;
use crate::phase::MoonPhase;

/// Mean synodic month in days.
pub const SYNODIC_MONTH: f64 = 29.530_588_68;

/// Reference new moon, 2000-01-06 18:14 UTC, as Unix seconds.
pub const REFERENCE_NEW_MOON_UNIX: i64 = 947_182_440;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Lunar model: a reference new-moon instant plus a mean cycle length.
///
/// Instants are naive date-times interpreted as UTC.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use lunaria_moon::{LunarModel, MoonPhase};
///
/// let model = LunarModel::default();
/// let instant = NaiveDate::from_ymd_opt(2000, 1, 6)
///     .unwrap()
///     .and_hms_opt(18, 14, 0)
///     .unwrap();
/// assert_eq!(model.phase_at(instant), MoonPhase::NewMoon);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarModel {
    reference_new_moon: NaiveDateTime,
    synodic_month: f64,
}

/// Phase, cycle position and age of the moon at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonReading {
    /// Classified phase.
    pub phase: MoonPhase,
    /// Progress through the cycle, in `[0, 1)`.
    pub cycle_position: f64,
    /// Days since the most recent new moon of the model.
    pub age_days: f64,
}

impl LunarModel {
    /// Creates a model from a reference new moon and a cycle length in days.
    pub fn new(reference_new_moon: NaiveDateTime, synodic_month: f64) -> Self {
        Self {
            reference_new_moon,
            synodic_month,
        }
    }

    /// Sets the reference new-moon instant.
    pub fn with_reference_new_moon(mut self, instant: NaiveDateTime) -> Self {
        self.reference_new_moon = instant;
        self
    }

    /// Sets the synodic month length in days.
    pub fn with_synodic_month(mut self, days: f64) -> Self {
        self.synodic_month = days;
        self
    }

    /// Returns the reference new-moon instant.
    pub fn reference_new_moon(&self) -> NaiveDateTime {
        self.reference_new_moon
    }

    /// Returns the synodic month length in days.
    pub fn synodic_month(&self) -> f64 {
        self.synodic_month
    }

    /// Validates this model.
    ///
    /// Returns an error if the synodic month is non-finite or non-positive.
    pub fn validate(&self) -> Result<(), MoonError> {
        if !self.synodic_month.is_finite() || self.synodic_month <= 0.0 {
            return Err(MoonError::InvalidSynodicMonth {
                days: self.synodic_month,
            });
        }
        Ok(())
    }

    /// Returns the signed number of days between the reference and `instant`.
    pub fn elapsed_days(&self, instant: NaiveDateTime) -> f64 {
        (instant - self.reference_new_moon).num_milliseconds() as f64 / MILLIS_PER_DAY
    }

    /// Returns the days elapsed since the latest new moon, in `[0, synodic_month)`.
    ///
    /// The double remainder keeps instants before the reference in range.
    pub fn age_days(&self, instant: NaiveDateTime) -> f64 {
        let s = self.synodic_month;
        ((self.elapsed_days(instant) % s) + s) % s
    }

    /// Returns the cycle position of `instant`, in `[0, 1)`.
    pub fn cycle_position(&self, instant: NaiveDateTime) -> f64 {
        self.age_days(instant) / self.synodic_month
    }

    /// Classifies `instant` into one of the eight phases.
    pub fn phase_at(&self, instant: NaiveDateTime) -> MoonPhase {
        MoonPhase::from_cycle_position(self.cycle_position(instant))
    }

    /// Returns the full reading for `instant`.
    pub fn reading(&self, instant: NaiveDateTime) -> MoonReading {
        let age_days = self.age_days(instant);
        let cycle_position = age_days / self.synodic_month;
        MoonReading {
            phase: MoonPhase::from_cycle_position(cycle_position),
            cycle_position,
            age_days,
        }
    }
}

impl Default for LunarModel {
    fn default() -> Self {
        Self::new(
            DateTime::<Utc>::UNIX_EPOCH.naive_utc() + TimeDelta::seconds(REFERENCE_NEW_MOON_UNIX),
            SYNODIC_MONTH,
        )
    }
}

/// Classifies `instant` with the default lunar model.
pub fn moon_phase(instant: NaiveDateTime) -> MoonPhase {
    LunarModel::default().phase_at(instant)
}
