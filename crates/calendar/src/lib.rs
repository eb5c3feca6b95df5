//! # lunaria-calendar
//!
//! The static thirteen-month ritual year: 13 months of 28 days, each month
//! bound to a patron with a theme, a color and a set of taboos, each day
//! carrying an activity, two offerings and, on marker days, a prayer.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["PatronSpec × 13"] -->|"generate_template()"| B["RitualYearTemplate"]
//!     B -->|".month(i)"| C["Month"]
//!     C -->|".day(d)"| D["Day"]
//!     E["TemplateCache"] -->|".get(base_year)"| B
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use lunaria_calendar::{generate_template, standard_patrons};
//!
//! let template = generate_template(2025, &standard_patrons()).unwrap();
//! let (month, day) = template.day(0, 1).unwrap();
//! assert_eq!(month.patron(), "Aurelia");
//! assert!(day.prayer().is_some());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `patron` | Patron metadata and the fixed thirteen-entry table |
//! | `template` | Template, month and day types with the 13×28 invariant |
//! | `generate` | Deterministic day-content generation |
//! | `cache` | Base-year keyed template cache |
//! | `error` | Error types |

mod cache;
mod error;
mod generate;
mod patron;
mod template;

pub use cache::TemplateCache;
pub use error::CalendarError;
pub use generate::{FULL_MOON_PEAK_DAY, generate_template};
pub use patron::{PatronSpec, standard_patrons};
pub use template::{
    DAY_NAMES, DAYS_PER_MONTH, DAYS_PER_YEAR, Day, MONTHS_PER_YEAR, Month, RitualYearTemplate,
    day_name,
};
