//! Concrete conversions anchored at epoch 2025-01-01, base year 2025.

use chrono::NaiveDate;
use lunaria_converter::DateConverter;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn triple(c: &DateConverter, d: NaiveDate) -> (i64, u8, u8) {
    let rd = c.convert(d);
    (rd.ritual_year, rd.month_index, rd.day_number)
}

#[test]
fn epoch_maps_to_first_day() {
    let c = DateConverter::standard(2025).unwrap();
    assert_eq!(triple(&c, date(2025, 1, 1)), (2025, 0, 1));
}

#[test]
fn day_29_starts_second_month() {
    let c = DateConverter::standard(2025).unwrap();
    assert_eq!(triple(&c, date(2025, 1, 28)), (2025, 0, 28));
    assert_eq!(triple(&c, date(2025, 1, 29)), (2025, 1, 1));
}

#[test]
fn gregorian_year_end_drifts_past_ritual_year() {
    let c = DateConverter::standard(2025).unwrap();
    // Gregorian day-of-year 364 closes the ritual year...
    assert_eq!(triple(&c, date(2025, 12, 30)), (2025, 12, 28));
    // ...so December 31 already opens the next one.
    assert_eq!(triple(&c, date(2025, 12, 31)), (2026, 0, 1));
    // A year later the drift has grown by one more day (2026 is not leap).
    assert_eq!(triple(&c, date(2026, 12, 29)), (2026, 12, 28));
}

#[test]
fn leap_day_converts_normally() {
    let c = DateConverter::standard(2024).unwrap();
    // 2024-02-29 is offset 59: month 2, day 4.
    assert_eq!(triple(&c, date(2024, 2, 29)), (2024, 2, 4));
}

#[test]
fn dates_before_epoch_belong_to_earlier_years() {
    let c = DateConverter::standard(2025).unwrap();
    assert_eq!(triple(&c, date(2024, 12, 31)), (2024, 12, 28));
    assert_eq!(triple(&c, date(2024, 1, 3)), (2024, 0, 1));
    assert_eq!(triple(&c, date(2024, 1, 2)), (2023, 12, 28));
}

#[test]
fn far_past_and_future_are_total() {
    let c = DateConverter::standard(2025).unwrap();
    for d in [
        NaiveDate::MIN,
        date(-4000, 3, 1),
        date(1, 1, 1),
        date(9999, 12, 31),
        NaiveDate::MAX,
    ] {
        let rd = c.convert(d);
        assert!(rd.month_index <= 12);
        assert!((1..=28).contains(&rd.day_number));
        assert!((1..=364).contains(&rd.day_of_ritual_year));
    }
}

#[test]
fn record_carries_month_and_day_content() {
    let c = DateConverter::standard(2025).unwrap();
    let rd = c.convert(date(2025, 2, 5));
    let (month, day) = c.template().day(rd.month_index, rd.day_number).unwrap();
    assert_eq!(rd.month_name, month.name());
    assert_eq!(rd.patron, month.patron());
    assert_eq!(rd.theme, month.theme());
    assert_eq!(rd.color, month.color());
    assert_eq!(rd.taboos, month.taboos());
    assert_eq!(rd.activity, day.activity());
    assert_eq!(rd.offerings, day.offerings());
    assert_eq!(rd.day_name, day.day_name());
    assert!(!rd.prayer.is_empty());
}

#[test]
fn every_standard_patron_gets_specialized_guidance() {
    let c = DateConverter::standard(2025).unwrap();
    for month in c.template().months() {
        assert!(
            c.guidance().patron(month.patron()).is_some(),
            "no guidance for {}",
            month.patron()
        );
    }
}

#[test]
fn ritual_date_serializes_to_json() {
    let c = DateConverter::standard(2025).unwrap();
    let rd = c.convert(date(2025, 3, 1));
    let json = serde_json::to_value(&rd).unwrap();
    assert_eq!(json["gregorian_date"], "2025-03-01");
    assert_eq!(json["ritual_year"], 2025);
    assert!(json["moon_phase"].is_string());
    let back: lunaria_converter::RitualDate = serde_json::from_value(json).unwrap();
    assert_eq!(back, rd);
}
