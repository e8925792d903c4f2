//! Diff session: construction, composition, and result accessors.
//!
//! A [`Diff`] owns working copies of both sequences, normalized so the
//! search always runs shorter-vs-longer, and accumulates the edit distance,
//! LCS, and SES across one or more search passes. A pass that exceeds the
//! route-recording ceiling commits the prefix it managed to reconstruct and
//! restarts on the unconsumed suffix, so composition is bounded in memory
//! regardless of input size.

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::error::{DiffError, DiffResult};
use crate::options::DiffOptions;
use crate::search::{PassOutcome, SearchPass};
use crate::ses::{EditKind, SesElement};

/// A single sequence comparison.
///
/// Create once per pair, optionally configure, call [`compose`](Self::compose),
/// then read the results. Sessions hold private mutable search state and are
/// not meant for concurrent reuse; diff independent pairs with independent
/// sessions.
///
/// ```
/// use seqdiff_core::{Diff, EditKind};
///
/// let a: Vec<char> = "abc".chars().collect();
/// let b: Vec<char> = "abd".chars().collect();
/// let mut diff = Diff::new(&a, &b);
/// diff.compose();
///
/// assert_eq!(diff.edit_distance(), 2);
/// assert_eq!(diff.lcs(), ['a', 'b']);
/// assert_eq!(diff.ses().len(), 4);
/// assert_eq!(diff.ses()[2].kind, EditKind::Delete);
/// ```
pub struct Diff<T, C> {
    /// Working shorter sequence (the original `b` when `reversed`).
    a: Vec<T>,
    /// Working longer sequence.
    b: Vec<T>,
    /// Consumed prefix of `a`, cumulative across restarts.
    ox: usize,
    /// Consumed prefix of `b`, cumulative across restarts.
    oy: usize,
    edit_distance: usize,
    lcs: Vec<T>,
    ses: Vec<SesElement<T>>,
    /// Set when the original `a` was at least as long as `b` and the pair
    /// was swapped; the sole orientation branch lives in the replay's
    /// emission point.
    reversed: bool,
    options: DiffOptions,
    composed: bool,
    cmp: C,
}

impl<T: Clone + Ord> Diff<T, fn(&T, &T) -> Ordering> {
    /// Build a session over the natural ordering of `T`.
    pub fn new(a: &[T], b: &[T]) -> Self {
        Self::with_comparator(a, b, T::cmp as fn(&T, &T) -> Ordering)
    }
}

impl<T, C> Diff<T, C>
where
    T: Clone,
    C: Fn(&T, &T) -> Ordering,
{
    /// Build a session with a caller-supplied three-way comparator.
    ///
    /// The comparator is used both for match-testing and as the primary key
    /// of the total order over emitted elements; it must be a lawful,
    /// equivalence-compatible ordering. Violations produce undefined output
    /// and are not runtime-checked.
    pub fn with_comparator(a: &[T], b: &[T], cmp: C) -> Self {
        let reversed = a.len() >= b.len();
        let (a, b) = if reversed {
            (b.to_vec(), a.to_vec())
        } else {
            (a.to_vec(), b.to_vec())
        };

        Self {
            a,
            b,
            ox: 0,
            oy: 0,
            edit_distance: 0,
            lcs: Vec::new(),
            ses: Vec::new(),
            reversed,
            options: DiffOptions::default(),
            composed: false,
            cmp,
        }
    }

    /// Replace the session configuration. Rejects an invalid configuration
    /// (zero route ceiling) or a session that has already composed, in both
    /// cases without touching the session.
    pub fn set_options(&mut self, options: DiffOptions) -> DiffResult<()> {
        if self.composed {
            return Err(DiffError::AlreadyComposed);
        }
        options.validate()?;
        self.options = options;
        Ok(())
    }

    /// The current session configuration.
    pub fn options(&self) -> &DiffOptions {
        &self.options
    }

    /// Edit distance between `a` and `b`. Valid after [`compose`](Self::compose).
    pub fn edit_distance(&self) -> usize {
        self.edit_distance
    }

    /// Longest Common Subsequence, in order, with elements drawn from the
    /// original `a`. Empty in distance-only mode.
    pub fn lcs(&self) -> &[T] {
        &self.lcs
    }

    /// Shortest Edit Script, in order. Indices refer to the caller's
    /// original, unswapped sequences. Empty in distance-only mode.
    pub fn ses(&self) -> &[SesElement<T>] {
        &self.ses
    }

    /// Run the comparison to completion.
    ///
    /// Executes search passes until the whole input is consumed: a pass that
    /// reaches the target diagonal is replayed into SES and LCS entries; a
    /// pass cut short by the route ceiling commits its reconstructed prefix
    /// and the loop re-runs on the remaining suffixes. Each restart strictly
    /// shrinks the remaining input, so the loop terminates.
    pub fn compose(&mut self) {
        if self.composed {
            return;
        }
        self.composed = true;

        loop {
            let wa = &self.a[self.ox..];
            let wb = &self.b[self.oy..];
            trace!(m = wa.len(), n = wb.len(), "starting search pass");

            let mut pass = SearchPass::new(
                wa.len(),
                wb.len(),
                !self.options.distance_only,
                self.options.route_ceiling,
            );
            let outcome = pass.run(wa, wb, &self.cmp);

            let p = match outcome {
                PassOutcome::Reached { p } | PassOutcome::CeilingHit { p } => p,
            };
            self.edit_distance += (wb.len() - wa.len()) + 2 * p;

            if self.options.distance_only {
                return;
            }

            let waypoints = pass.backtrack();
            if self.replay(&waypoints) {
                return;
            }

            debug!(
                consumed_a = self.ox,
                consumed_b = self.oy,
                "route ceiling cut the pass short; restarting on the suffix"
            );
        }
    }

    /// Forward-replay the recorded chain from the origin to its furthest
    /// waypoint, emitting SES elements and LCS entries.
    ///
    /// Returns `true` when the replay consumed the working sequences
    /// entirely; otherwise advances the consumed-prefix offsets to the
    /// stall point and returns `false` so the caller restarts.
    fn replay(&mut self, waypoints: &[(usize, usize)]) -> bool {
        let m = self.a.len() - self.ox;
        let n = self.b.len() - self.oy;

        // Logical cursors are 1-based, graph cursors 0-based, both within
        // the working suffix.
        let mut x = 1usize;
        let mut y = 1usize;
        let mut px = 0usize;
        let mut py = 0usize;

        for &(wx, wy) in waypoints.iter().rev() {
            while px < wx || py < wy {
                let waypoint_k = wy as isize - wx as isize;
                let cursor_k = py as isize - px as isize;

                if waypoint_k > cursor_k {
                    // Consume one element of the longer sequence: an
                    // insertion in canonical orientation.
                    let value = self.b[self.oy + py].clone();
                    self.ses.push(if self.reversed {
                        SesElement {
                            value,
                            kind: EditKind::Delete,
                            a_index: self.oy + y,
                            b_index: 0,
                        }
                    } else {
                        SesElement {
                            value,
                            kind: EditKind::Add,
                            a_index: 0,
                            b_index: self.oy + y,
                        }
                    });
                    y += 1;
                    py += 1;
                } else if waypoint_k < cursor_k {
                    // Consume one element of the shorter sequence: a
                    // deletion in canonical orientation.
                    let value = self.a[self.ox + px].clone();
                    self.ses.push(if self.reversed {
                        SesElement {
                            value,
                            kind: EditKind::Add,
                            a_index: 0,
                            b_index: self.ox + x,
                        }
                    } else {
                        SesElement {
                            value,
                            kind: EditKind::Delete,
                            a_index: self.ox + x,
                            b_index: 0,
                        }
                    });
                    x += 1;
                    px += 1;
                } else {
                    // Equal diagonals: the two elements match by the snake
                    // invariant. LCS entries are always drawn from the
                    // original `a`, which is the working `b` when reversed.
                    let value = if self.reversed {
                        self.b[self.oy + py].clone()
                    } else {
                        self.a[self.ox + px].clone()
                    };
                    self.lcs.push(value.clone());
                    self.ses.push(if self.reversed {
                        SesElement {
                            value,
                            kind: EditKind::Common,
                            a_index: self.oy + y,
                            b_index: self.ox + x,
                        }
                    } else {
                        SesElement {
                            value,
                            kind: EditKind::Common,
                            a_index: self.ox + x,
                            b_index: self.oy + y,
                        }
                    });
                    x += 1;
                    y += 1;
                    px += 1;
                    py += 1;
                }
            }
        }

        if x > m && y > n {
            true
        } else {
            self.ox += x - 1;
            self.oy += y - 1;
            false
        }
    }
}
