//! # lunaria-range
//!
//! Summaries over bounded intervals of Gregorian dates: every day is
//! converted to its ritual record, then patrons and moon phases are counted
//! and festival days (month beginnings and full-moon peaks) are collected.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["[start, end]"] -->|"cap check"| B["dates"]
//!     B -->|"par_iter convert()"| C["Vec&lt;RitualDate&gt;"]
//!     C --> D["patron / phase counts"]
//!     C --> E["festivals"]
//!     D --> F["RangeSummary"]
//!     E --> F
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use lunaria_converter::DateConverter;
//! use lunaria_range::{RangeConfig, summarize_range};
//!
//! let converter = DateConverter::standard(2025).unwrap();
//! let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2025, 1, 30).unwrap();
//! let summary = summarize_range(&converter, start, end, &RangeConfig::default()).unwrap();
//! assert_eq!(summary.len(), 30);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `analyze` | [`summarize_range`] |
//! | `summary` | Output records and festival kinds |
//! | `config` | Day cap |
//! | `error` | Error types |

mod analyze;
mod config;
mod error;
mod summary;

pub use analyze::summarize_range;
pub use config::{DEFAULT_MAX_DAYS, RangeConfig};
pub use error::RangeError;
pub use summary::{Festival, FestivalKind, RangeSummary};
