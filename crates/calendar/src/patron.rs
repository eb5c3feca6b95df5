//! Patron metadata and the fixed thirteen-month patron table.

/// Metadata and content tables for the patron bound to one month.
///
/// The activity and offering lists are cycled by day number when the
/// template is generated, so they must both be non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatronSpec {
    month_name: String,
    patron: String,
    theme: String,
    color: String,
    taboos: Vec<String>,
    activities: Vec<String>,
    offerings: Vec<String>,
}

impl PatronSpec {
    /// Creates a patron entry with empty taboo, activity and offering lists.
    pub fn new(
        month_name: impl Into<String>,
        patron: impl Into<String>,
        theme: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            month_name: month_name.into(),
            patron: patron.into(),
            theme: theme.into(),
            color: color.into(),
            taboos: Vec::new(),
            activities: Vec::new(),
            offerings: Vec::new(),
        }
    }

    /// Sets the taboos observed during the month.
    pub fn with_taboos<S: Into<String>>(mut self, taboos: impl IntoIterator<Item = S>) -> Self {
        self.taboos = taboos.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the activity phrases cycled over the month's days.
    pub fn with_activities<S: Into<String>>(
        mut self,
        activities: impl IntoIterator<Item = S>,
    ) -> Self {
        self.activities = activities.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the offering phrases cycled over the month's days.
    pub fn with_offerings<S: Into<String>>(
        mut self,
        offerings: impl IntoIterator<Item = S>,
    ) -> Self {
        self.offerings = offerings.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the month name.
    pub fn month_name(&self) -> &str {
        &self.month_name
    }

    /// Returns the patron entity's name.
    pub fn patron(&self) -> &str {
        &self.patron
    }

    /// Returns the month's theme.
    pub fn theme(&self) -> &str {
        &self.theme
    }

    /// Returns the month's color.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Returns the month's taboos.
    pub fn taboos(&self) -> &[String] {
        &self.taboos
    }

    /// Returns the activity phrases.
    pub fn activities(&self) -> &[String] {
        &self.activities
    }

    /// Returns the offering phrases.
    pub fn offerings(&self) -> &[String] {
        &self.offerings
    }
}

struct Entry {
    month: &'static str,
    patron: &'static str,
    theme: &'static str,
    color: &'static str,
    taboos: &'static [&'static str],
    activities: &'static [&'static str],
    offerings: &'static [&'static str],
}

#[rustfmt::skip]
const STANDARD: [Entry; 13] = [
    Entry {
        month: "Aurora",
        patron: "Aurelia",
        theme: "New beginnings",
        color: "Gold",
        taboos: &["Leaving a threshold unswept", "Speaking ill of the year ahead"],
        activities: &[
            "Sweep the threshold and open the windows at dawn",
            "Write one intention for the coming cycle",
            "Light a candle facing east",
            "Walk a path you have never taken",
            "Clear one neglected corner of the home",
            "Greet the sunrise in silence",
            "Begin a task you have postponed",
        ],
        offerings: &["Honey", "Fresh bread", "Marigold petals", "A lit gold candle", "Spring water"],
    },
    Entry {
        month: "Brume",
        patron: "Nerys",
        theme: "Intuition and dreams",
        color: "Silver",
        taboos: &["Waking others from a dream", "Cutting hair after dusk"],
        activities: &[
            "Record last night's dream before speaking",
            "Sit with a bowl of water and watch the surface",
            "Draw a single card and carry its image all day",
            "Walk in fog or rain without a hood",
            "Keep an hour of silence at twilight",
            "Burn mugwort by the bedside",
            "Listen for a word repeated by strangers",
        ],
        offerings: &["Mugwort", "A silver coin", "Milk", "White feathers", "Moonstone"],
    },
    Entry {
        month: "Verdance",
        patron: "Sylvan",
        theme: "Growth",
        color: "Green",
        taboos: &["Breaking a living branch", "Wasting water"],
        activities: &[
            "Plant a seed and name what it stands for",
            "Tend a houseplant or garden bed",
            "Walk barefoot on grass",
            "Gather fallen leaves for the altar",
            "Learn the name of a local tree",
            "Share seeds or cuttings with a neighbor",
            "Water the roots of an old tree",
        ],
        offerings: &["Seeds", "Fresh herbs", "Rainwater", "Oak leaves", "Green apples"],
    },
    Entry {
        month: "Ignis",
        patron: "Pyra",
        theme: "Will and courage",
        color: "Crimson",
        taboos: &["Extinguishing a flame with breath", "Breaking a spoken vow"],
        activities: &[
            "Tend a fire or candle from lighting to ashes",
            "Speak aloud one fear and one answer to it",
            "Move the body until the breath runs hot",
            "Finish a task that demands resolve",
            "Forge or repair something with your hands",
            "Stand watch over a flame at midnight",
            "Refuse one comfort for the whole day",
        ],
        offerings: &["Cinnamon", "Red wine", "Dragon's blood resin", "Chili", "A red candle"],
    },
    Entry {
        month: "Maris",
        patron: "Maren",
        theme: "Emotion and cleansing",
        color: "Sea blue",
        taboos: &["Turning away someone in tears", "Fouling running water"],
        activities: &[
            "Take a salt bath and name what you release",
            "Wash the altar cloths",
            "Write a letter you will never send",
            "Sit beside moving water",
            "Weep or laugh without restraint",
            "Pour a bowl of water onto the earth",
            "Forgive one small debt",
        ],
        offerings: &["Sea salt", "Shells", "Blue glass", "Seaweed", "Clear water"],
    },
    Entry {
        month: "Zephyr",
        patron: "Caelan",
        theme: "Communication",
        color: "Sky blue",
        taboos: &["Telling a careless lie", "Whistling indoors"],
        activities: &[
            "Write to someone you have not spoken to in a year",
            "Read a poem aloud to the open air",
            "Hang ribbons where the wind can reach them",
            "Practice one breath exercise at each hour",
            "Listen more than you speak",
            "Learn a word in another tongue",
            "Let a feather fall and follow where it lands",
        ],
        offerings: &["Feathers", "Incense smoke", "Lavender", "A written verse", "Bells"],
    },
    Entry {
        month: "Solara",
        patron: "Helion",
        theme: "Abundance",
        color: "Amber",
        taboos: &["Hoarding food", "Sleeping through noon"],
        activities: &[
            "Share a meal with someone outside your home",
            "Stand in sunlight at noon",
            "Count and give thanks for ten blessings",
            "Bake something golden",
            "Give away an object you no longer need",
            "Charge water in the sun for the altar",
            "Host or attend a gathering",
        ],
        offerings: &["Sunflower seeds", "Oranges", "Amber resin", "Golden wine", "Sweet cakes"],
    },
    Entry {
        month: "Messis",
        patron: "Demeris",
        theme: "Gratitude",
        color: "Wheat",
        taboos: &["Leaving food unfinished", "Refusing a guest bread"],
        activities: &[
            "Harvest or buy grain and set a portion aside",
            "Braid three stalks of wheat",
            "Thank the hands that grew your food",
            "Preserve something for the dark months",
            "Mend a worn garment",
            "Bake bread and break the first piece for the altar",
            "Walk a field or market at dusk",
        ],
        offerings: &["Wheat", "Barley", "Bread", "Apples", "Cider"],
    },
    Entry {
        month: "Umbra",
        patron: "Noctis",
        theme: "Shadow work",
        color: "Indigo",
        taboos: &["Mocking another's fear", "Lighting a lamp without need"],
        activities: &[
            "Journal on a trait you avoid in yourself",
            "Sit in full darkness for a quarter hour",
            "Scry with a black mirror or dark water",
            "Name one grudge and loosen its hold",
            "Walk under the night sky",
            "Sleep without a light",
            "Read an old journal entry and answer it",
        ],
        offerings: &["Black salt", "Myrrh", "Dark chocolate", "Obsidian", "Plum wine"],
    },
    Entry {
        month: "Ferrum",
        patron: "Vulkar",
        theme: "Craft",
        color: "Iron grey",
        taboos: &["Leaving tools uncleaned", "Boasting of unfinished work"],
        activities: &[
            "Sharpen or oil a tool",
            "Practice a craft for an uninterrupted hour",
            "Repair something broken instead of replacing it",
            "Teach a skill to someone else",
            "Carve or shape a small token",
            "Organize the workspace",
            "Study the work of a master in your craft",
        ],
        offerings: &["Iron nails", "Ash", "Oil", "Coal", "A handmade token"],
    },
    Entry {
        month: "Rime",
        patron: "Boreal",
        theme: "Endurance",
        color: "White",
        taboos: &["Complaining of the cold", "Letting the hearth go out"],
        activities: &[
            "Take a cold rinse at dawn",
            "Fast from one luxury until sundown",
            "Keep a vigil of stillness",
            "Walk in the cold without hurry",
            "Check on someone who lives alone",
            "Stack wood or store provisions",
            "Hold a single breath-count meditation",
        ],
        offerings: &["Snow water", "Pine needles", "Quartz", "Salt", "Clear broth"],
    },
    Entry {
        month: "Velum",
        patron: "Morwen",
        theme: "Ancestors",
        color: "Black",
        taboos: &["Speaking the dead's name in anger", "Sweeping after dark"],
        activities: &[
            "Set a place at the table for the ancestors",
            "Tell a family story aloud",
            "Visit or tend a grave",
            "Cook a recipe passed down to you",
            "Write the names of your dead",
            "Keep a candle burning at the window",
            "Ask an elder about their childhood",
        ],
        offerings: &["Rosemary", "A plate of food", "Photographs", "Whiskey", "Chrysanthemums"],
    },
    Entry {
        month: "Ouroboros",
        patron: "Aion",
        theme: "Completion and renewal",
        color: "Violet",
        taboos: &["Beginning a new venture", "Leaving debts unpaid"],
        activities: &[
            "Review the year's intentions one by one",
            "Close an unfinished matter",
            "Return what you have borrowed",
            "Cleanse the altar completely",
            "Walk a circle and return to the start",
            "Burn the year's written intentions",
            "Rest without any task",
        ],
        offerings: &["Violets", "Sage", "Amethyst", "Red thread", "A spiral of salt"],
    },
];

/// Returns the fixed thirteen patron entries, one per month, in year order.
pub fn standard_patrons() -> Vec<PatronSpec> {
    STANDARD
        .iter()
        .map(|e| {
            PatronSpec::new(e.month, e.patron, e.theme, e.color)
                .with_taboos(e.taboos.iter().copied())
                .with_activities(e.activities.iter().copied())
                .with_offerings(e.offerings.iter().copied())
        })
        .collect()
}
