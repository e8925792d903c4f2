//! Error types for patch application.

/// Errors produced when replaying an edit script or hunk list against a
/// base sequence that diverges from the script's source.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PatchError {
    /// A common- or delete-tagged element does not match the base sequence
    /// at the stated position.
    #[error("apply mismatch: base element at position {position} does not match the script")]
    Mismatch { position: usize },

    /// The script consumes more elements than the base sequence holds.
    #[error("apply mismatch: script consumes past the end of the base at position {position}")]
    UnexpectedEnd { position: usize },

    /// A full-script replay left base elements unconsumed.
    #[error("apply mismatch: script consumed {consumed} of {len} base elements")]
    TrailingInput { consumed: usize, len: usize },

    /// A hunk starts before the previous hunk ended, or beyond the base.
    #[error("hunk out of bounds: a-side start {a_start} not applicable at position {position}")]
    HunkOutOfBounds { a_start: usize, position: usize },
}

/// Convenience alias for patch results.
pub type PatchResult<T> = std::result::Result<T, PatchError>;
