//! # lunaria-converter
//!
//! Epoch-anchored mapping between Gregorian dates and the 364-day ritual
//! calendar. Forward conversion composes the static template with the moon
//! phase and guidance selection into a [`RitualDate`]; the inverse turns a
//! ritual `(year, month, day)` back into a Gregorian date.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["NaiveDate"] -->|"locate()"| B["RitualPosition"]
//!     B -->|"template lookup"| C["Month + Day"]
//!     D["LunarModel"] --> E["MoonPhase"]
//!     C --> F["RitualDate"]
//!     E --> F
//!     G["GuidanceTable"] -->|"prayer fallback"| F
//!     B -->|"days_since_epoch()"| A
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use lunaria_converter::DateConverter;
//!
//! let converter = DateConverter::standard(2025).unwrap();
//! let rd = converter.convert(NaiveDate::from_ymd_opt(2025, 1, 29).unwrap());
//! assert_eq!((rd.month_index, rd.day_number), (1, 1));
//!
//! let back = converter.convert_inverse(rd.ritual_year, rd.month_index, rd.day_number).unwrap();
//! assert_eq!(back, rd.gregorian_date);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `position` | Day-offset arithmetic and the two day-count rules |
//! | `config` | Epoch, day-count rule and lunar model |
//! | `converter` | The converter itself |
//! | `ritual_date` | The enriched conversion record |
//! | `error` | Error types |

mod config;
mod converter;
mod error;
mod position;
mod ritual_date;

pub use config::ConverterConfig;
pub use converter::DateConverter;
pub use error::ConvertError;
pub use position::{DayCount, RitualPosition, days_since_epoch, locate};
pub use ritual_date::RitualDate;
