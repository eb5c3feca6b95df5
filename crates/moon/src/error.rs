//! Error types for the lunaria-moon crate.

/// Error type for lunar model configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MoonError {
    /// Returned when the synodic month length is non-finite or non-positive.
    #[error("synodic month must be finite and positive, got {days}")]
    InvalidSynodicMonth {
        /// The rejected length in days.
        days: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_synodic_month() {
        let err = MoonError::InvalidSynodicMonth { days: -1.0 };
        assert_eq!(
            err.to_string(),
            "synodic month must be finite and positive, got -1"
        );
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<MoonError>();
    }
}
