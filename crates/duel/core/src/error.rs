//! Common error infrastructure for duel-core.
//!
//! The enumeration itself never fails: exhaustion is a normal result signalled
//! by the `Invalid` marker. Errors only arise from inputs the caller hands in
//! directly, such as a hand-built `previous` trace or an oversized dice budget.
//! Domain-specific errors live next to the code that raises them.

/// Severity level of an error, used for categorization and logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input that should be rejected without retry.
    ///
    /// Examples: malformed trace, dice budget over the configured limit
    Validation,

    /// Unexpected state inconsistency. Indicates a bug.
    ///
    /// Examples: replayed action no longer eligible in the rebuilt state
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all duel-core errors.
pub trait DuelError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
