//! Error types for the comparison core.

/// Errors produced by diff session configuration.
///
/// The search itself raises no faults: degenerate inputs (either or both
/// sequences empty) are valid and produce well-defined results.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DiffError {
    /// The route-recording ceiling must be positive; a zero ceiling would
    /// silently disable the memory bound.
    #[error("route ceiling must be positive, got {0}")]
    InvalidRouteCeiling(usize),

    /// The session has already composed; configuration is read-only
    /// afterward.
    #[error("session already composed; options must be set before composition")]
    AlreadyComposed,
}

/// Convenience alias for diff results.
pub type DiffResult<T> = std::result::Result<T, DiffError>;
