//! Configuration for the date converter.

use chrono::NaiveDate;
use lunaria_moon::LunarModel;

use crate::error::ConvertError;
use crate::position::DayCount;

/// Configuration for a [`DateConverter`](crate::DateConverter).
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use lunaria_converter::{ConverterConfig, DayCount};
///
/// let config = ConverterConfig::new(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
///     .with_day_count(DayCount::Legacy);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConverterConfig {
    /// Gregorian date of day 1, month 0 of the base year.
    epoch: NaiveDate,
    /// Offset-to-day rule.
    day_count: DayCount,
    /// Lunar model used for phase classification.
    lunar: LunarModel,
}

impl ConverterConfig {
    /// Creates a configuration anchored at `epoch`.
    ///
    /// Defaults: `day_count = Ordinal`, default lunar model.
    pub fn new(epoch: NaiveDate) -> Self {
        Self {
            epoch,
            day_count: DayCount::default(),
            lunar: LunarModel::default(),
        }
    }

    /// Creates a configuration anchored at January 1 of `base_year`.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::DateOutOfRange`] if that date is not representable.
    pub fn for_base_year(base_year: i32) -> Result<Self, ConvertError> {
        NaiveDate::from_ymd_opt(base_year, 1, 1)
            .map(Self::new)
            .ok_or(ConvertError::DateOutOfRange {
                ritual_year: i64::from(base_year),
                month_index: 0,
                day_number: 1,
            })
    }

    /// Sets the epoch.
    pub fn with_epoch(mut self, epoch: NaiveDate) -> Self {
        self.epoch = epoch;
        self
    }

    /// Sets the offset-to-day rule.
    pub fn with_day_count(mut self, day_count: DayCount) -> Self {
        self.day_count = day_count;
        self
    }

    /// Sets the lunar model.
    pub fn with_lunar_model(mut self, lunar: LunarModel) -> Self {
        self.lunar = lunar;
        self
    }

    /// Returns the epoch.
    pub fn epoch(&self) -> NaiveDate {
        self.epoch
    }

    /// Returns the offset-to-day rule.
    pub fn day_count(&self) -> DayCount {
        self.day_count
    }

    /// Returns the lunar model.
    pub fn lunar(&self) -> &LunarModel {
        &self.lunar
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), ConvertError> {
        self.lunar.validate()?;
        Ok(())
    }
}
