use chrono::NaiveDate;
use lunaria_converter::DateConverter;
use lunaria_range::{FestivalKind, RangeConfig, RangeError, RangeSummary, summarize_range};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn converter() -> DateConverter {
    DateConverter::standard(2025).unwrap()
}

fn summarize(start: NaiveDate, end: NaiveDate) -> Result<RangeSummary, RangeError> {
    summarize_range(&converter(), start, end, &RangeConfig::default())
}

#[test]
fn thirty_days_is_accepted() {
    let s = summarize(date(2025, 1, 1), date(2025, 1, 30)).unwrap();
    assert_eq!(s.len(), 30);
    assert_eq!(s.dates.first().unwrap().gregorian_date, date(2025, 1, 1));
    assert_eq!(s.dates.last().unwrap().gregorian_date, date(2025, 1, 30));
}

#[test]
fn thirty_one_days_is_rejected() {
    let err = summarize(date(2025, 1, 1), date(2025, 1, 31)).unwrap_err();
    assert_eq!(err, RangeError::RangeTooLarge { days: 31, cap: 30 });
}

#[test]
fn larger_cap_allows_longer_ranges() {
    let config = RangeConfig::default().with_max_days(60);
    let s = summarize_range(&converter(), date(2025, 1, 1), date(2025, 3, 1), &config).unwrap();
    assert_eq!(s.len(), 60);
}

#[test]
fn inverted_range_is_rejected() {
    let err = summarize(date(2025, 2, 1), date(2025, 1, 1)).unwrap_err();
    assert!(matches!(err, RangeError::InvertedRange { .. }));
}

#[test]
fn zero_cap_is_rejected() {
    let d = date(2025, 1, 1);
    let err = summarize_range(&converter(), d, d, &RangeConfig::new(0)).unwrap_err();
    assert_eq!(err, RangeError::InvalidCap { cap: 0 });
}

#[test]
fn single_day_range() {
    let d = date(2025, 1, 15);
    let s = summarize(d, d).unwrap();
    assert_eq!(s.len(), 1);
    assert_eq!(s.dominant_patron.as_deref(), Some("Aurelia"));
    assert_eq!(s.dominant_moon_phase, Some(s.dates[0].moon_phase));
    assert_eq!(s.festivals.len(), 1);
    assert_eq!(s.festivals[0].kind, FestivalKind::FullMoonPeak);
}

#[test]
fn patron_counts_across_month_boundary() {
    let s = summarize(date(2025, 1, 1), date(2025, 1, 30)).unwrap();
    assert_eq!(s.patron_counts.get("Aurelia"), Some(&28));
    assert_eq!(s.patron_counts.get("Nerys"), Some(&2));
    assert_eq!(s.dominant_patron.as_deref(), Some("Aurelia"));
}

#[test]
fn festivals_in_order() {
    let s = summarize(date(2025, 1, 1), date(2025, 1, 30)).unwrap();
    let got: Vec<(NaiveDate, FestivalKind, &str)> = s
        .festivals
        .iter()
        .map(|f| (f.date, f.kind, f.name.as_str()))
        .collect();
    assert_eq!(
        got,
        vec![
            (date(2025, 1, 1), FestivalKind::MonthBeginning, "Beginning of Aurora"),
            (date(2025, 1, 15), FestivalKind::FullMoonPeak, "Full-moon peak of Aurora"),
            (date(2025, 1, 29), FestivalKind::MonthBeginning, "Beginning of Brume"),
        ]
    );
    assert_eq!(s.festivals[2].patron, "Nerys");
    assert_eq!(s.festivals[2].month_index, 1);
}

#[test]
fn patron_tie_goes_to_first_seen() {
    // 14 days of Aurora followed by 14 days of Brume.
    let s = summarize(date(2025, 1, 15), date(2025, 2, 11)).unwrap();
    assert_eq!(s.patron_counts.get("Aurelia"), Some(&14));
    assert_eq!(s.patron_counts.get("Nerys"), Some(&14));
    assert_eq!(s.dominant_patron.as_deref(), Some("Aurelia"));
    assert_eq!(s.festivals.len(), 2);
}

#[test]
fn moon_phase_counts_are_consistent() {
    let s = summarize(date(2025, 3, 1), date(2025, 3, 30)).unwrap();
    let total: usize = s.moon_phase_counts.values().sum();
    assert_eq!(total, s.len());

    let dominant = s.dominant_moon_phase.unwrap();
    let max = s.moon_phase_counts.values().copied().max().unwrap();
    assert_eq!(s.moon_phase_counts[&dominant], max);

    // A 30-day window spans more than one synodic month, so every phase shows up.
    assert_eq!(s.moon_phase_counts.len(), 8);
}

#[test]
fn dates_match_single_conversions() {
    let c = converter();
    let s = summarize_range(&c, date(2025, 12, 20), date(2026, 1, 10), &RangeConfig::default())
        .unwrap();
    for (i, rd) in s.dates.iter().enumerate() {
        let expected = date(2025, 12, 20) + chrono::TimeDelta::days(i as i64);
        assert_eq!(rd, &c.convert(expected));
    }
}

#[test]
fn summary_serializes_to_json() {
    let s = summarize(date(2025, 1, 1), date(2025, 1, 15)).unwrap();
    let json = serde_json::to_value(&s).unwrap();
    assert_eq!(json["start"], "2025-01-01");
    assert_eq!(json["dates"].as_array().unwrap().len(), 15);
    assert_eq!(json["festivals"][0]["kind"], "month_beginning");
    assert_eq!(json["dominant_patron"], "Aurelia");
    assert!(json["moon_phase_counts"].is_object());
}

#[test]
fn range_ending_on_last_representable_date_is_complete() {
    let end = NaiveDate::MAX;
    let start = end.pred_opt().unwrap();
    let s = summarize(start, end).unwrap();
    assert_eq!(s.len(), 2);
    assert_eq!(s.dates.first().unwrap().gregorian_date, start);
    assert_eq!(s.dates.last().unwrap().gregorian_date, end);
}
