//! Deterministic generation of the ritual year template.

use tracing::debug;

use crate::error::CalendarError;
use crate::patron::PatronSpec;
use crate::template::{DAYS_PER_MONTH, Day, MONTHS_PER_YEAR, Month, RitualYearTemplate};

/// Day number of the "full-moon peak" within each month.
pub const FULL_MOON_PEAK_DAY: u8 = 15;

/// Builds the ritual year template for `base_year` from one patron entry per month.
///
/// Day content is a pure function of the day number: the activity cycles
/// through the patron's activity list, and the two offerings are taken two
/// positions apart so consecutive days do not share the same pair. Days 1,
/// 15 and 28 carry a precomputed prayer; all other days are left empty for
/// guidance selection at conversion time.
///
/// # Errors
///
/// Returns [`CalendarError::MonthCount`] unless exactly 13 patrons are given,
/// and [`CalendarError::EmptyActivities`] / [`CalendarError::EmptyOfferings`]
/// if any patron has an empty list.
///
/// # Example
///
/// ```
/// use lunaria_calendar::{generate_template, standard_patrons};
///
/// let template = generate_template(2025, &standard_patrons()).unwrap();
/// assert_eq!(template.total_days(), 364);
/// ```
pub fn generate_template(
    base_year: i32,
    patrons: &[PatronSpec],
) -> Result<RitualYearTemplate, CalendarError> {
    if patrons.len() != usize::from(MONTHS_PER_YEAR) {
        return Err(CalendarError::MonthCount { got: patrons.len() });
    }

    let mut months = Vec::with_capacity(patrons.len());
    for (index, spec) in (0..MONTHS_PER_YEAR).zip(patrons) {
        if spec.activities().is_empty() {
            return Err(CalendarError::EmptyActivities {
                month: index,
                patron: spec.patron().to_string(),
            });
        }
        if spec.offerings().is_empty() {
            return Err(CalendarError::EmptyOfferings {
                month: index,
                patron: spec.patron().to_string(),
            });
        }

        let days = (1..=DAYS_PER_MONTH)
            .map(|d| {
                Day::new(
                    d,
                    activity_for(spec.activities(), d),
                    offerings_for(spec.offerings(), d),
                    special_prayer(spec, d),
                )
            })
            .collect();

        months.push(Month::new(
            index,
            spec.month_name().to_string(),
            spec.patron().to_string(),
            spec.theme().to_string(),
            spec.color().to_string(),
            spec.taboos().to_vec(),
            days,
        ));
    }

    debug!(base_year, n_months = months.len(), "generated ritual year template");
    Ok(RitualYearTemplate::new(base_year, months))
}

fn activity_for(activities: &[String], day: u8) -> String {
    let d = usize::from(day);
    activities[(d - 1) % activities.len()].clone()
}

fn offerings_for(offerings: &[String], day: u8) -> Vec<String> {
    let d = usize::from(day);
    let n = offerings.len();
    vec![offerings[(d - 1) % n].clone(), offerings[(d + 1) % n].clone()]
}

fn special_prayer(spec: &PatronSpec, day: u8) -> Option<String> {
    let patron = spec.patron();
    let month = spec.month_name();
    let theme = spec.theme().to_lowercase();
    match day {
        1 => Some(format!(
            "Cycle beginning: {patron}, open the way as the month of {month} begins. \
             Let {theme} take root in all I do."
        )),
        FULL_MOON_PEAK_DAY => Some(format!(
            "Full-moon peak: {patron}, at the height of {month} I lift my offerings \
             to you. Let {theme} shine fully through me."
        )),
        DAYS_PER_MONTH => Some(format!(
            "Cycle end: {patron}, I close the month of {month} in gratitude. \
             Keep what {theme} has taught me as the wheel turns on."
        )),
        _ => None,
    }
}
