//! # lunaria-guidance
//!
//! Short devotional texts keyed by patron and moon phase.
//!
//! Lookup order: the patron's phase-specific text, then the patron's
//! default template (parameterized by day number), then a generic template
//! naming the patron. Selection is pure and total.
//!
//! ```
//! use lunaria_guidance::GuidanceTable;
//! use lunaria_moon::MoonPhase;
//!
//! let table = GuidanceTable::standard();
//! let text = table.select("Sylvan", MoonPhase::WaxingCrescent, 6);
//! assert!(text.starts_with("Day 6 under Sylvan"));
//! ```

mod standard;
mod table;

pub use table::{DAY_PLACEHOLDER, GuidanceTable, PATRON_PLACEHOLDER, PatronGuidance};
