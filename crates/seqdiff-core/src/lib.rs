//! O(NP) sequence comparison core.
//!
//! Computes the edit distance, the Longest Common Subsequence (LCS), and the
//! Shortest Edit Script (SES) between two ordered sequences of comparable
//! elements, using the furthest-reaching-point search of Wu, Manber and
//! Myers ("An O(NP) Sequence Comparison Algorithm").
//!
//! # Key Types
//!
//! - [`Diff`] — A single-comparison session: construct, [`compose`](Diff::compose), read results
//! - [`SesElement`] / [`EditKind`] — One tagged entry of a shortest edit script
//! - [`DiffOptions`] — Distance-only mode, route-recording ceiling, context-size hint
//! - [`DiffError`] — Configuration failures
//!
//! The search runs in O((m+n)·D) time where D is the edit distance, and
//! records its path through the edit graph as a compact back-pointer chain.
//! When path recording grows past the configured ceiling, the session
//! commits the prefix already reconstructed and restarts on the unconsumed
//! suffix, bounding memory on arbitrarily large inputs.

pub mod error;
pub mod options;
pub mod ses;
pub mod session;

mod search;

pub use error::{DiffError, DiffResult};
pub use options::{DiffOptions, DEFAULT_CONTEXT_SIZE, DEFAULT_ROUTE_CEILING};
pub use ses::{EditKind, SesElement};
pub use session::Diff;
