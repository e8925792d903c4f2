//! Grouping SES change runs into unified hunks.

use seqdiff_core::{EditKind, SesElement};
use serde::{Deserialize, Serialize};

/// A contiguous block of changes with surrounding context.
///
/// Starts are 1-based positions into the original sequences; a side that
/// contributes no elements instead carries the position just before the
/// hunk (`0` at the very front). Lengths count the elements of the block
/// drawn from each side, context included.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnifiedHunk<T> {
    /// 1-based start in `a`; the preceding position when `a_len` is zero.
    pub a_start: usize,
    /// Number of block elements drawn from `a` (commons and deletes).
    pub a_len: usize,
    /// 1-based start in `b`; the preceding position when `b_len` is zero.
    pub b_start: usize,
    /// Number of block elements drawn from `b` (commons and adds).
    pub b_len: usize,
    /// The SES run covered by this hunk, context elements included.
    pub changes: Vec<SesElement<T>>,
}

/// Group an SES into unified hunks.
///
/// Each run of non-common elements becomes a hunk padded with up to
/// `context_size` common elements on each side; runs whose padded contexts
/// would meet or overlap (separated by at most `2 * context_size` commons)
/// merge into a single hunk. An all-common or empty script yields no hunks.
pub fn unified_hunks<T: Clone>(
    ses: &[SesElement<T>],
    context_size: usize,
) -> Vec<UnifiedHunk<T>> {
    let change_positions: Vec<usize> = ses
        .iter()
        .enumerate()
        .filter(|(_, e)| e.kind != EditKind::Common)
        .map(|(i, _)| i)
        .collect();

    if change_positions.is_empty() {
        return Vec::new();
    }

    // Split change positions into blocks whose contexts stay disjoint.
    let mut blocks: Vec<(usize, usize)> = Vec::new();
    let mut first = change_positions[0];
    let mut last = change_positions[0];
    for &pos in &change_positions[1..] {
        if pos - last - 1 > 2 * context_size {
            blocks.push((first, last));
            first = pos;
        }
        last = pos;
    }
    blocks.push((first, last));

    blocks
        .into_iter()
        .map(|(first, last)| {
            let lo = first.saturating_sub(context_size);
            let hi = (last + context_size).min(ses.len() - 1);
            build_hunk(ses, lo, hi)
        })
        .collect()
}

fn build_hunk<T: Clone>(ses: &[SesElement<T>], lo: usize, hi: usize) -> UnifiedHunk<T> {
    let changes = &ses[lo..=hi];
    let a_len = changes.iter().filter(|e| e.kind != EditKind::Add).count();
    let b_len = changes.iter().filter(|e| e.kind != EditKind::Delete).count();

    // A side that contributes no elements carries the position just before
    // the hunk instead, which is the count of its elements consumed by the
    // preceding script prefix.
    let a_start = if a_len == 0 {
        ses[..lo].iter().filter(|e| e.kind != EditKind::Add).count()
    } else {
        changes
            .iter()
            .find(|e| e.a_index > 0)
            .map(|e| e.a_index)
            .unwrap_or(0)
    };
    let b_start = if b_len == 0 {
        ses[..lo]
            .iter()
            .filter(|e| e.kind != EditKind::Delete)
            .count()
    } else {
        changes
            .iter()
            .find(|e| e.b_index > 0)
            .map(|e| e.b_index)
            .unwrap_or(0)
    };

    UnifiedHunk {
        a_start,
        a_len,
        b_start,
        b_len,
        changes: changes.to_vec(),
    }
}
