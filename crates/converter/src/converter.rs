//! Bidirectional conversion between Gregorian dates and ritual dates.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use lunaria_calendar::{RitualYearTemplate, standard_patrons};
use lunaria_guidance::GuidanceTable;
use lunaria_moon::MoonPhase;
use tracing::debug;

use crate::config::ConverterConfig;
use crate::error::ConvertError;
use crate::position::{RitualPosition, days_since_epoch, locate};
use crate::ritual_date::RitualDate;

/// Converts Gregorian dates to enriched [`RitualDate`] records and back.
///
/// Holds a shared, immutable template. Conversions take `&self` and touch
/// no mutable state, so one converter can serve any number of threads.
#[derive(Debug, Clone)]
pub struct DateConverter {
    template: Arc<RitualYearTemplate>,
    guidance: GuidanceTable,
    config: ConverterConfig,
}

impl DateConverter {
    /// Creates a converter over `template` with the standard guidance table.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::Calendar`] if the template breaks the 13×28
    /// shape and [`ConvertError::Moon`] if the lunar model is invalid.
    pub fn new(
        template: Arc<RitualYearTemplate>,
        config: ConverterConfig,
    ) -> Result<Self, ConvertError> {
        template.validate()?;
        config.validate()?;
        debug!(
            base_year = template.base_year(),
            epoch = %config.epoch(),
            day_count = ?config.day_count(),
            "date converter ready"
        );
        Ok(Self {
            template,
            guidance: GuidanceTable::standard(),
            config,
        })
    }

    /// Creates a converter for `base_year` from the standard patron table,
    /// with the epoch on January 1 of that year.
    pub fn standard(base_year: i32) -> Result<Self, ConvertError> {
        let template = lunaria_calendar::generate_template(base_year, &standard_patrons())?;
        Self::new(Arc::new(template), ConverterConfig::for_base_year(base_year)?)
    }

    /// Replaces the guidance table.
    pub fn with_guidance(mut self, guidance: GuidanceTable) -> Self {
        self.guidance = guidance;
        self
    }

    /// Returns the template.
    pub fn template(&self) -> &RitualYearTemplate {
        &self.template
    }

    /// Returns the shared template handle.
    pub fn shared_template(&self) -> Arc<RitualYearTemplate> {
        Arc::clone(&self.template)
    }

    /// Returns the guidance table.
    pub fn guidance(&self) -> &GuidanceTable {
        &self.guidance
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Returns the template's base year.
    pub fn base_year(&self) -> i32 {
        self.template.base_year()
    }

    /// Returns the ritual position of `date` without building the full record.
    pub fn locate(&self, date: NaiveDate) -> RitualPosition {
        let days = date.signed_duration_since(self.config.epoch()).num_days();
        locate(days, self.base_year(), self.config.day_count())
    }

    /// Converts `date`, evaluating the moon at 00:00 UTC.
    pub fn convert(&self, date: NaiveDate) -> RitualDate {
        self.convert_at(date.and_time(NaiveTime::MIN))
    }

    /// Converts the date part of `instant`, evaluating the moon at `instant` itself.
    pub fn convert_at(&self, instant: NaiveDateTime) -> RitualDate {
        let date = instant.date();
        let pos = self.locate(date);
        let moon_phase = self.moon_phase(instant);

        // The template shape was validated in `new`, so both indices are in range.
        let month = &self.template.months()[usize::from(pos.month_index)];
        let day = &month.days()[usize::from(pos.day_number) - 1];

        let prayer = match day.prayer() {
            Some(p) => p.to_string(),
            None => self
                .guidance
                .select(month.patron(), moon_phase, pos.day_number),
        };

        RitualDate {
            gregorian_date: date,
            ritual_year: pos.ritual_year,
            month_index: pos.month_index,
            day_number: pos.day_number,
            day_of_ritual_year: pos.day_of_year(),
            month_name: month.name().to_string(),
            day_name: day.day_name().to_string(),
            patron: month.patron().to_string(),
            theme: month.theme().to_string(),
            color: month.color().to_string(),
            taboos: month.taboos().to_vec(),
            activity: day.activity().to_string(),
            offerings: day.offerings().to_vec(),
            moon_phase,
            prayer,
        }
    }

    /// Converts a ritual `(year, month, day)` back to a Gregorian date.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidMonthIndex`] / [`ConvertError::InvalidDayNumber`]
    /// for out-of-range coordinates and [`ConvertError::DateOutOfRange`] if the
    /// result cannot be represented.
    pub fn convert_inverse(
        &self,
        ritual_year: i64,
        month_index: u8,
        day_number: u8,
    ) -> Result<NaiveDate, ConvertError> {
        let pos = RitualPosition::new(ritual_year, month_index, day_number)?;
        let out_of_range = ConvertError::DateOutOfRange {
            ritual_year,
            month_index,
            day_number,
        };
        days_since_epoch(&pos, self.base_year())
            .and_then(TimeDelta::try_days)
            .and_then(|delta| self.config.epoch().checked_add_signed(delta))
            .ok_or(out_of_range)
    }

    /// Classifies `instant` with the configured lunar model.
    pub fn moon_phase(&self, instant: NaiveDateTime) -> MoonPhase {
        self.config.lunar().phase_at(instant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::DayCount;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn converter() -> DateConverter {
        DateConverter::standard(2025).unwrap()
    }

    #[test]
    fn epoch_is_first_day() {
        let rd = converter().convert(date(2025, 1, 1));
        assert_eq!((rd.ritual_year, rd.month_index, rd.day_number), (2025, 0, 1));
        assert_eq!(rd.day_of_ritual_year, 1);
        assert_eq!(rd.patron, "Aurelia");
    }

    #[test]
    fn twenty_ninth_day_starts_second_month() {
        let rd = converter().convert(date(2025, 1, 29));
        assert_eq!((rd.ritual_year, rd.month_index, rd.day_number), (2025, 1, 1));
        assert_eq!(rd.patron, "Nerys");
        assert_eq!(rd.day_of_ritual_year, 29);
    }

    #[test]
    fn marker_days_keep_precomputed_prayer() {
        let c = converter();
        let rd = c.convert(date(2025, 1, 15));
        assert_eq!(rd.day_number, 15);
        assert!(rd.prayer.starts_with("Full-moon peak"), "{}", rd.prayer);
    }

    #[test]
    fn other_days_use_guidance() {
        let c = converter();
        let rd = c.convert(date(2025, 1, 3));
        assert_eq!(rd.day_number, 3);
        let expected = c.guidance().select("Aurelia", rd.moon_phase, 3);
        assert_eq!(rd.prayer, expected);
    }

    #[test]
    fn convert_at_uses_exact_instant_for_moon() {
        let c = converter();
        let instant = date(2025, 1, 13).and_hms_opt(23, 0, 0).unwrap();
        let rd = c.convert_at(instant);
        assert_eq!(rd.moon_phase, c.moon_phase(instant));
        assert_eq!(rd.gregorian_date, date(2025, 1, 13));
    }

    #[test]
    fn inverse_of_epoch() {
        assert_eq!(converter().convert_inverse(2025, 0, 1).unwrap(), date(2025, 1, 1));
    }

    #[test]
    fn inverse_rejects_bad_indices() {
        let c = converter();
        assert_eq!(
            c.convert_inverse(2025, 13, 1).unwrap_err(),
            ConvertError::InvalidMonthIndex { index: 13 }
        );
        assert_eq!(
            c.convert_inverse(2025, 0, 29).unwrap_err(),
            ConvertError::InvalidDayNumber { day: 29 }
        );
    }

    #[test]
    fn inverse_out_of_range() {
        assert!(matches!(
            converter().convert_inverse(10_000_000, 0, 1),
            Err(ConvertError::DateOutOfRange { .. })
        ));
        assert!(matches!(
            converter().convert_inverse(i64::MIN, 0, 1),
            Err(ConvertError::DateOutOfRange { .. })
        ));
    }

    #[test]
    fn legacy_rule_is_configurable() {
        let c = converter();
        let legacy = DateConverter::new(
            c.shared_template(),
            c.config().clone().with_day_count(DayCount::Legacy),
        )
        .unwrap();
        let rd = legacy.convert(date(2025, 1, 2));
        assert_eq!((rd.month_index, rd.day_number), (0, 1));
    }
}
