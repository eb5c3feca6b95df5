//! # lunaria-moon
//!
//! Classifies any instant into one of eight lunar phases using a mean
//! synodic month and one reference new moon. This is a stylized
//! approximation, not an ephemeris.
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use lunaria_moon::{LunarModel, MoonPhase};
//!
//! let model = LunarModel::default();
//! let t = NaiveDate::from_ymd_opt(2000, 1, 21).unwrap().and_hms_opt(12, 0, 0).unwrap();
//! assert_eq!(model.phase_at(t), MoonPhase::FullMoon);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `phase` | The eight phases and their bucket boundaries |
//! | `model` | Reference instant, cycle length and cycle position |
//! | `error` | Error types |

mod error;
mod model;
mod phase;

pub use error::MoonError;
pub use model::{LunarModel, MoonReading, REFERENCE_NEW_MOON_UNIX, SYNODIC_MONTH, moon_phase};
pub use phase::MoonPhase;
