//! Error types for the widget crate.

use pietimer_core::ObjectError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised by PieTimer widgets.
#[derive(Error, Debug)]
pub enum PieTimerError {
    /// A cycle duration of zero or less was requested. The previous duration
    /// is kept.
    #[error("cycle duration must be greater than zero, got {millis} ms")]
    InvalidDuration { millis: i64 },

    /// Building a widget from configuration failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Attaching the widget to the object tree failed.
    #[error(transparent)]
    Object(#[from] ObjectError),
}

/// Result type for widget operations.
pub type Result<T> = std::result::Result<T, PieTimerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_duration_message() {
        let err = PieTimerError::InvalidDuration { millis: -3 };
        assert_eq!(err.to_string(), "cycle duration must be greater than zero, got -3 ms");
    }

    #[test]
    fn test_object_error_is_transparent() {
        let err = PieTimerError::from(ObjectError::CircularParentage);
        assert!(matches!(err, PieTimerError::Object(ObjectError::CircularParentage)));
        assert_eq!(err.to_string(), ObjectError::CircularParentage.to_string());
    }
}
