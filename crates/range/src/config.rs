//! Configuration for range analysis.

use crate::error::RangeError;

/// Default cap on the number of days in one range query.
pub const DEFAULT_MAX_DAYS: u32 = 30;

/// Configuration for [`summarize_range`](crate::summarize_range).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeConfig {
    /// Maximum number of days (inclusive interval length) per query.
    max_days: u32,
}

impl RangeConfig {
    /// Creates a configuration with the given cap.
    pub fn new(max_days: u32) -> Self {
        Self { max_days }
    }

    /// Sets the cap.
    pub fn with_max_days(mut self, max_days: u32) -> Self {
        self.max_days = max_days;
        self
    }

    /// Returns the cap.
    pub fn max_days(&self) -> u32 {
        self.max_days
    }

    /// Validates this configuration.
    ///
    /// Returns an error if the cap is zero.
    pub fn validate(&self) -> Result<(), RangeError> {
        if self.max_days == 0 {
            return Err(RangeError::InvalidCap { cap: self.max_days });
        }
        Ok(())
    }
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DAYS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cap_is_thirty() {
        assert_eq!(RangeConfig::default().max_days(), 30);
        assert!(RangeConfig::default().validate().is_ok());
    }

    #[test]
    fn builder_overrides_cap() {
        assert_eq!(RangeConfig::default().with_max_days(90).max_days(), 90);
    }

    #[test]
    fn zero_cap_is_invalid() {
        assert_eq!(
            RangeConfig::new(0).validate(),
            Err(RangeError::InvalidCap { cap: 0 })
        );
    }
}
