//! Common error infrastructure for cultivation-core.
//!
//! The engine is a total math layer: clamping, sentinels and no-ops replace
//! errors almost everywhere. The few operations that can refuse a request
//! (a premature breakthrough, for instance) return typed errors that
//! implement [`EngineError`] so callers can classify them uniformly.

use crate::state::Realm;

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The request can succeed later once state changes (more progress, etc.).
    Recoverable,

    /// The request can never succeed for this input.
    Validation,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all cultivation-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait EngineError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Reasons a breakthrough attempt is refused.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BreakthroughError {
    #[error("cultivation progress {progress:.1} has not reached the breakthrough threshold")]
    NotReady { progress: f64 },

    #[error("{realm} is the peak realm; there is nothing left to break through to")]
    PeakRealm { realm: Realm },
}

impl EngineError for BreakthroughError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotReady { .. } => ErrorSeverity::Recoverable,
            Self::PeakRealm { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotReady { .. } => "BREAKTHROUGH_NOT_READY",
            Self::PeakRealm { .. } => "BREAKTHROUGH_PEAK_REALM",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakthrough_errors_are_classified() {
        let not_ready = BreakthroughError::NotReady { progress: 42.0 };
        assert!(not_ready.severity().is_recoverable());
        assert_eq!(not_ready.error_code(), "BREAKTHROUGH_NOT_READY");
        assert_eq!(
            not_ready.to_string(),
            "cultivation progress 42.0 has not reached the breakthrough threshold"
        );

        let peak = BreakthroughError::PeakRealm {
            realm: Realm::ImmortalAscension,
        };
        assert_eq!(peak.severity(), ErrorSeverity::Validation);
        assert!(peak.to_string().starts_with("Immortal Ascension"));
    }
}
