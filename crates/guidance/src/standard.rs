//! Built-in guidance for the thirteen standard patrons.

use lunaria_moon::MoonPhase;

use crate::table::{GuidanceTable, PatronGuidance};

struct Entry {
    patron: &'static str,
    new_moon: &'static str,
    full_moon: &'static str,
    default: &'static str,
}

#[rustfmt::skip]
const STANDARD: [Entry; 13] = [
    Entry {
        patron: "Aurelia",
        new_moon: "Aurelia asks for a seed of intention in the dark. Name one thing you will begin.",
        full_moon: "Aurelia's light is full. Look back at what you began and give it room to rise.",
        default: "Day {day} under Aurelia: open one door you have kept closed.",
    },
    Entry {
        patron: "Nerys",
        new_moon: "Nerys veils the sky. Sleep early and let the dream speak first.",
        full_moon: "Nerys shows what the mist hid. Trust the image that returns to you today.",
        default: "Day {day} under Nerys: keep a quiet hour and listen inward.",
    },
    Entry {
        patron: "Sylvan",
        new_moon: "Sylvan plants in the dark. Put something small in the ground or in your plans.",
        full_moon: "Sylvan's canopy is full. Tend what has sprouted and cut back what crowds it.",
        default: "Day {day} under Sylvan: water one root, literal or not.",
    },
    Entry {
        patron: "Pyra",
        new_moon: "Pyra strikes a spark in the dark. Choose the one fear you will face this cycle.",
        full_moon: "Pyra's fire burns high. Act on the courage you have gathered.",
        default: "Day {day} under Pyra: keep your word even when it costs you.",
    },
    Entry {
        patron: "Maren",
        new_moon: "Maren's tide is low. Let go of one feeling you have carried too long.",
        full_moon: "Maren's tide is high. Let the flood of feeling wash through and out.",
        default: "Day {day} under Maren: rinse your hands and your heart.",
    },
    Entry {
        patron: "Caelan",
        new_moon: "Caelan holds the breath before speech. Decide what truly needs saying.",
        full_moon: "Caelan carries every voice tonight. Speak the word you have been holding.",
        default: "Day {day} under Caelan: listen twice before you answer once.",
    },
    Entry {
        patron: "Helion",
        new_moon: "Helion rests below the horizon. Count what you already have.",
        full_moon: "Helion's abundance overflows. Share a meal or a gift freely.",
        default: "Day {day} under Helion: let something you own bless someone else.",
    },
    Entry {
        patron: "Demeris",
        new_moon: "Demeris stores grain for the dark. Put something by for later.",
        full_moon: "Demeris blesses the harvest moon. Give thanks aloud for what fed you.",
        default: "Day {day} under Demeris: waste nothing and thank the hands that gave.",
    },
    Entry {
        patron: "Noctis",
        new_moon: "Noctis is closest when the sky is dark. Sit with what you usually avoid.",
        full_moon: "Noctis casts the sharpest shadows under full light. Look at yours without flinching.",
        default: "Day {day} under Noctis: write one honest line about your shadow.",
    },
    Entry {
        patron: "Vulkar",
        new_moon: "Vulkar banks the forge. Plan the piece before you strike.",
        full_moon: "Vulkar's forge is white-hot. Finish the work you have shaped.",
        default: "Day {day} under Vulkar: mend or make one thing by hand.",
    },
    Entry {
        patron: "Boreal",
        new_moon: "Boreal's night is longest now. Hold still and endure with grace.",
        full_moon: "Boreal's moon lights the snow. Walk out and see how far you have come.",
        default: "Day {day} under Boreal: carry one discomfort without complaint.",
    },
    Entry {
        patron: "Morwen",
        new_moon: "Morwen opens the veil in darkness. Speak the names of your dead.",
        full_moon: "Morwen lights the path of the ancestors. Set a place for them tonight.",
        default: "Day {day} under Morwen: remember one who came before you.",
    },
    Entry {
        patron: "Aion",
        new_moon: "Aion closes the circle in the dark. Release what this year did not need.",
        full_moon: "Aion shows the whole wheel. See the year entire and bless it.",
        default: "Day {day} under Aion: finish something, however small.",
    },
];

impl GuidanceTable {
    /// Returns the built-in table for the thirteen standard patrons.
    ///
    /// Each patron is specialized for the new and full moon; other phases
    /// use the patron's default template.
    pub fn standard() -> Self {
        STANDARD.iter().fold(Self::new(), |table, e| {
            table.with_patron(
                e.patron,
                PatronGuidance::new(e.default)
                    .with_phase(MoonPhase::NewMoon, e.new_moon)
                    .with_phase(MoonPhase::FullMoon, e.full_moon),
            )
        })
    }
}
