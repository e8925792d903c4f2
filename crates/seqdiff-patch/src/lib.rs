//! Patch application: replay an edit script against a base sequence.
//!
//! Consumes the descriptive data produced by `seqdiff-core` (a full SES) or
//! `seqdiff-unified` (a hunk list) and reconstructs the target sequence from
//! the base. Replay verifies the base as it goes: a common- or delete-tagged
//! element that does not match the base at its stated position fails with a
//! [`PatchError`] instead of producing a silently wrong result.
//!
//! # Key Functions
//!
//! - [`apply`] — Replay a complete SES against the base
//! - [`apply_hunks`] — Replay a unified hunk list, copying untouched regions

pub mod error;

use seqdiff_core::{EditKind, SesElement};
use seqdiff_unified::UnifiedHunk;

pub use error::{PatchError, PatchResult};

/// Replay a complete edit script against `base`, producing the target
/// sequence.
///
/// The script must cover the whole base: every base element is consumed by
/// exactly one delete- or common-tagged entry, in order.
pub fn apply<T>(base: &[T], ses: &[SesElement<T>]) -> PatchResult<Vec<T>>
where
    T: Clone + PartialEq,
{
    let mut out = Vec::new();
    let mut consumed = 0usize;

    for elem in ses {
        consumed = replay_element(base, elem, consumed, &mut out)?;
    }

    if consumed != base.len() {
        return Err(PatchError::TrailingInput {
            consumed,
            len: base.len(),
        });
    }

    Ok(out)
}

/// Replay a unified hunk list against `base`, producing the target sequence.
///
/// Regions of the base not covered by any hunk are copied through verbatim;
/// each hunk's changes are verified the same way [`apply`] verifies a full
/// script. Hunks must be in order and within bounds.
pub fn apply_hunks<T>(base: &[T], hunks: &[UnifiedHunk<T>]) -> PatchResult<Vec<T>>
where
    T: Clone + PartialEq,
{
    let mut out = Vec::new();
    let mut consumed = 0usize;

    for hunk in hunks {
        // A zero-length a-side marks a pure insertion after position
        // `a_start`; otherwise the hunk begins at the 1-based `a_start`.
        let start = if hunk.a_len == 0 {
            hunk.a_start
        } else {
            hunk.a_start - 1
        };
        if start < consumed || start > base.len() {
            return Err(PatchError::HunkOutOfBounds {
                a_start: hunk.a_start,
                position: consumed,
            });
        }

        out.extend_from_slice(&base[consumed..start]);
        consumed = start;

        for elem in &hunk.changes {
            consumed = replay_element(base, elem, consumed, &mut out)?;
        }
    }

    out.extend_from_slice(&base[consumed..]);
    Ok(out)
}

/// Replay one script element at base position `consumed`, returning the new
/// position.
fn replay_element<T>(
    base: &[T],
    elem: &SesElement<T>,
    consumed: usize,
    out: &mut Vec<T>,
) -> PatchResult<usize>
where
    T: Clone + PartialEq,
{
    match elem.kind {
        EditKind::Add => {
            out.push(elem.value.clone());
            Ok(consumed)
        }
        EditKind::Delete | EditKind::Common => {
            let base_elem = base
                .get(consumed)
                .ok_or(PatchError::UnexpectedEnd { position: consumed })?;
            if *base_elem != elem.value {
                return Err(PatchError::Mismatch { position: consumed });
            }
            if elem.kind == EditKind::Common {
                out.push(base_elem.clone());
            }
            Ok(consumed + 1)
        }
    }
}
