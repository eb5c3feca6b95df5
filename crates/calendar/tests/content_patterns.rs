use lunaria_calendar::{day_name, generate_template, standard_patrons};

#[test]
fn activities_cycle_through_patron_list() {
    let patrons = standard_patrons();
    let t = generate_template(2025, &patrons).unwrap();
    for (month, spec) in t.months().iter().zip(&patrons) {
        let acts = spec.activities();
        for day in month.days() {
            let d = usize::from(day.day_number());
            assert_eq!(day.activity(), acts[(d - 1) % acts.len()]);
        }
    }
}

#[test]
fn offerings_are_two_positions_apart() {
    let patrons = standard_patrons();
    let t = generate_template(2025, &patrons).unwrap();
    for (month, spec) in t.months().iter().zip(&patrons) {
        let offs = spec.offerings();
        for day in month.days() {
            let d = usize::from(day.day_number());
            assert_eq!(day.offerings()[0], offs[(d - 1) % offs.len()]);
            assert_eq!(day.offerings()[1], offs[(d + 1) % offs.len()]);
        }
    }
}

#[test]
fn adjacent_days_differ_in_first_offering() {
    let t = generate_template(2025, &standard_patrons()).unwrap();
    for month in t.months() {
        for pair in month.days().windows(2) {
            assert_ne!(pair[0].offerings()[0], pair[1].offerings()[0]);
        }
    }
}

#[test]
fn prayers_name_the_patron() {
    let t = generate_template(2025, &standard_patrons()).unwrap();
    for month in t.months() {
        for d in [1u8, 15, 28] {
            let prayer = month.day(d).and_then(|day| day.prayer()).unwrap();
            assert!(prayer.contains(month.patron()), "{prayer}");
            assert!(prayer.contains(month.name()), "{prayer}");
        }
    }
}

#[test]
fn day_names_follow_week() {
    let t = generate_template(2025, &standard_patrons()).unwrap();
    for (_, day) in t.iter_days() {
        assert_eq!(day.day_name(), day_name(day.day_number()));
    }
}

#[test]
fn template_serializes_to_json() {
    let t = generate_template(2025, &standard_patrons()).unwrap();
    let json = serde_json::to_string(&t).unwrap();
    assert!(json.contains("\"base_year\":2025"));
    let back: lunaria_calendar::RitualYearTemplate = serde_json::from_str(&json).unwrap();
    assert_eq!(back, t);
}
