use lunaria_guidance::{DAY_PLACEHOLDER, GuidanceTable};
use lunaria_moon::MoonPhase;

const PATRONS: [&str; 13] = [
    "Aurelia", "Nerys", "Sylvan", "Pyra", "Maren", "Caelan", "Helion", "Demeris", "Noctis",
    "Vulkar", "Boreal", "Morwen", "Aion",
];

#[test]
fn standard_covers_thirteen_patrons() {
    let table = GuidanceTable::standard();
    assert_eq!(table.len(), 13);
    for p in PATRONS {
        assert!(table.patron(p).is_some(), "{p} missing");
    }
}

#[test]
fn new_and_full_moon_are_specialized() {
    let table = GuidanceTable::standard();
    for p in PATRONS {
        let g = table.patron(p).unwrap();
        assert!(g.phase_text(MoonPhase::NewMoon).is_some(), "{p}");
        assert!(g.phase_text(MoonPhase::FullMoon).is_some(), "{p}");
        assert!(g.phase_text(MoonPhase::FirstQuarter).is_none(), "{p}");
        assert!(g.default_template().contains(DAY_PLACEHOLDER), "{p}");
    }
}

#[test]
fn selection_mentions_patron_for_every_phase() {
    let table = GuidanceTable::standard();
    for p in PATRONS {
        for phase in MoonPhase::ALL {
            let text = table.select(p, phase, 17);
            assert!(text.contains(p), "{p} / {phase}: {text}");
            assert!(!text.contains(DAY_PLACEHOLDER), "{text}");
        }
    }
}

#[test]
fn selection_is_deterministic() {
    let table = GuidanceTable::standard();
    for phase in MoonPhase::ALL {
        assert_eq!(
            table.select("Noctis", phase, 2),
            table.select("Noctis", phase, 2)
        );
    }
}

#[test]
fn unknown_patron_is_named() {
    let text = GuidanceTable::standard().select("Hecate", MoonPhase::NewMoon, 1);
    assert!(text.contains("Hecate"), "{text}");
}
