//! The eight named lunar phases and their cycle-position buckets.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the eight lunar phases.
///
/// Variants are declared in cyclic order starting at the new moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoonPhase {
    /// Cycle position in `[0.97, 1.0) ∪ [0.0, 0.03)`.
    NewMoon,
    /// Cycle position in `[0.03, 0.22)`.
    WaxingCrescent,
    /// Cycle position in `[0.22, 0.28)`.
    FirstQuarter,
    /// Cycle position in `[0.28, 0.47)`.
    WaxingGibbous,
    /// Cycle position in `[0.47, 0.53)`.
    FullMoon,
    /// Cycle position in `[0.53, 0.72)`.
    WaningGibbous,
    /// Cycle position in `[0.72, 0.78)`.
    LastQuarter,
    /// Cycle position in `[0.78, 0.97)`.
    WaningCrescent,
}

impl MoonPhase {
    /// All phases in cyclic order, starting at the new moon.
    pub const ALL: [Self; 8] = [
        Self::NewMoon,
        Self::WaxingCrescent,
        Self::FirstQuarter,
        Self::WaxingGibbous,
        Self::FullMoon,
        Self::WaningGibbous,
        Self::LastQuarter,
        Self::WaningCrescent,
    ];

    /// Classifies a cycle position into a phase.
    ///
    /// Positions are expected in `[0, 1)`; a value of exactly `1.0`, which
    /// floating-point remainder can produce for tiny negative offsets, is
    /// treated as a new moon.
    pub fn from_cycle_position(position: f64) -> Self {
        if position >= 0.97 || position < 0.03 {
            Self::NewMoon
        } else if position < 0.22 {
            Self::WaxingCrescent
        } else if position < 0.28 {
            Self::FirstQuarter
        } else if position < 0.47 {
            Self::WaxingGibbous
        } else if position < 0.53 {
            Self::FullMoon
        } else if position < 0.72 {
            Self::WaningGibbous
        } else if position < 0.78 {
            Self::LastQuarter
        } else {
            Self::WaningCrescent
        }
    }

    /// Returns the human-readable name, e.g. `"Waxing Crescent"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::NewMoon => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::FullMoon => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }

    /// Returns the phase that follows this one in the cycle.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Returns `true` for the four principal phases (new, quarters, full).
    pub fn is_principal(self) -> bool {
        matches!(
            self,
            Self::NewMoon | Self::FirstQuarter | Self::FullMoon | Self::LastQuarter
        )
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
