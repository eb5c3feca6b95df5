//! Patron × moon-phase guidance lookup with layered fallbacks.

use std::collections::BTreeMap;

use lunaria_moon::MoonPhase;
use tracing::trace;

/// Placeholder replaced by the day number in default templates.
pub const DAY_PLACEHOLDER: &str = "{day}";

/// Placeholder replaced by the patron's name in the generic template.
pub const PATRON_PLACEHOLDER: &str = "{patron}";

const GENERIC_TEMPLATE: &str =
    "May {patron} walk beside you on day {day}. Keep the month's taboos and tend your offerings.";

/// Guidance for a single patron.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatronGuidance {
    phases: BTreeMap<MoonPhase, String>,
    default_template: String,
}

impl PatronGuidance {
    /// Creates guidance with only a default template.
    ///
    /// `{day}` in the template is replaced by the day number.
    pub fn new(default_template: impl Into<String>) -> Self {
        Self {
            phases: BTreeMap::new(),
            default_template: default_template.into(),
        }
    }

    /// Adds a phase-specific text.
    pub fn with_phase(mut self, phase: MoonPhase, text: impl Into<String>) -> Self {
        self.phases.insert(phase, text.into());
        self
    }

    /// Returns the phase-specific text, if any.
    pub fn phase_text(&self, phase: MoonPhase) -> Option<&str> {
        self.phases.get(&phase).map(String::as_str)
    }

    /// Returns the default template.
    pub fn default_template(&self) -> &str {
        &self.default_template
    }
}

/// Lookup table from patron name to [`PatronGuidance`].
///
/// Selection never fails: an unspecialized phase falls back to the
/// patron's default template, and an unknown patron falls back to a
/// generic template naming the patron.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuidanceTable {
    patrons: BTreeMap<String, PatronGuidance>,
    generic_template: Option<String>,
}

impl GuidanceTable {
    /// Creates an empty table; every lookup uses the generic template.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the guidance for `patron`.
    pub fn with_patron(mut self, patron: impl Into<String>, guidance: PatronGuidance) -> Self {
        self.patrons.insert(patron.into(), guidance);
        self
    }

    /// Overrides the generic template used for unknown patrons.
    ///
    /// Both `{patron}` and `{day}` are substituted.
    pub fn with_generic_template(mut self, template: impl Into<String>) -> Self {
        self.generic_template = Some(template.into());
        self
    }

    /// Returns the guidance registered for `patron`.
    pub fn patron(&self, patron: &str) -> Option<&PatronGuidance> {
        self.patrons.get(patron)
    }

    /// Returns the number of patrons with registered guidance.
    pub fn len(&self) -> usize {
        self.patrons.len()
    }

    /// Returns `true` if no patron has registered guidance.
    pub fn is_empty(&self) -> bool {
        self.patrons.is_empty()
    }

    /// Selects the guidance text for `(patron, phase)` on `day_number`.
    pub fn select(&self, patron: &str, phase: MoonPhase, day_number: u8) -> String {
        let day = day_number.to_string();
        match self.patrons.get(patron) {
            Some(g) => match g.phase_text(phase) {
                Some(text) => text.to_string(),
                None => g.default_template.replace(DAY_PLACEHOLDER, &day),
            },
            None => {
                trace!(patron, "no guidance registered, using generic template");
                self.generic_template
                    .as_deref()
                    .unwrap_or(GENERIC_TEMPLATE)
                    .replace(PATRON_PLACEHOLDER, patron)
                    .replace(DAY_PLACEHOLDER, &day)
            }
        }
    }
}
