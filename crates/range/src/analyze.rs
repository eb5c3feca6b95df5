//! Range summaries: per-day conversion, frequency counts and festivals.

use std::collections::BTreeMap;

use chrono::{NaiveDate, TimeDelta};
use lunaria_converter::{DateConverter, RitualDate};
use rayon::prelude::*;
use tracing::debug;

use crate::config::RangeConfig;
use crate::error::RangeError;
use crate::summary::{Festival, RangeSummary};

/// Converts every date in `[start, end]` and summarizes the result.
///
/// Days are converted in parallel; the output keeps chronological order.
/// The dominant patron and moon phase are the most frequent values, with
/// ties resolved in favour of the value that appears first in the range.
///
/// # Errors
///
/// Returns [`RangeError::InvertedRange`] if `end < start`,
/// [`RangeError::RangeTooLarge`] if the inclusive interval exceeds
/// `config.max_days()` and [`RangeError::InvalidCap`] for a zero cap.
#[tracing::instrument(skip_all, fields(%start, %end, cap = config.max_days()))]
pub fn summarize_range(
    converter: &DateConverter,
    start: NaiveDate,
    end: NaiveDate,
    config: &RangeConfig,
) -> Result<RangeSummary, RangeError> {
    config.validate()?;
    if end < start {
        return Err(RangeError::InvertedRange { start, end });
    }
    let days = end.signed_duration_since(start).num_days() + 1;
    let cap = config.max_days();
    if days > i64::from(cap) {
        return Err(RangeError::RangeTooLarge { days, cap });
    }

    // Offsets from `start` rather than `iter_days`, which stops before `NaiveDate::MAX`.
    let gregorian: Vec<NaiveDate> = (0..days)
        .filter_map(|i| start.checked_add_signed(TimeDelta::days(i)))
        .collect();
    let dates: Vec<RitualDate> = gregorian.par_iter().map(|d| converter.convert(*d)).collect();

    let (patron_counts, dominant_patron) = tally(dates.iter().map(|d| d.patron.clone()));
    let (moon_phase_counts, dominant_moon_phase) = tally(dates.iter().map(|d| d.moon_phase));
    let festivals: Vec<Festival> = dates.iter().filter_map(Festival::from_ritual_date).collect();

    debug!(
        n_days = dates.len(),
        n_festivals = festivals.len(),
        "range summarized"
    );

    Ok(RangeSummary {
        start,
        end,
        dates,
        patron_counts,
        moon_phase_counts,
        dominant_patron,
        dominant_moon_phase,
        festivals,
    })
}

/// Counts occurrences and picks the most frequent value.
///
/// Ties go to the value whose first occurrence comes earliest.
fn tally<K, I>(values: I) -> (BTreeMap<K, usize>, Option<K>)
where
    K: Ord + Clone,
    I: IntoIterator<Item = K>,
{
    let mut counts: BTreeMap<K, usize> = BTreeMap::new();
    let mut first_seen: Vec<K> = Vec::new();
    for v in values {
        let n = counts.entry(v.clone()).or_insert(0);
        if *n == 0 {
            first_seen.push(v);
        }
        *n += 1;
    }

    let mut best: Option<(&K, usize)> = None;
    for k in &first_seen {
        let n = counts.get(k).copied().unwrap_or(0);
        if best.is_none_or(|(_, b)| n > b) {
            best = Some((k, n));
        }
    }
    let dominant = best.map(|(k, _)| k.clone());
    (counts, dominant)
}
