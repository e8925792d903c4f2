//! Session configuration.

use serde::{Deserialize, Serialize};

use crate::error::{DiffError, DiffResult};

/// Default ceiling on recorded route points per search pass.
///
/// Chosen to bound worst-case memory while rarely triggering on realistic
/// inputs; sessions that exceed it fall back to multi-pass composition.
pub const DEFAULT_ROUTE_CEILING: usize = 2_000_000;

/// Default number of surrounding common elements per unified hunk.
pub const DEFAULT_CONTEXT_SIZE: usize = 3;

/// Tunables for a diff session.
///
/// Must be set before [`Diff::compose`](crate::Diff::compose); configuration
/// has no effect on a session that has already composed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffOptions {
    /// Compute only the edit distance, skipping all path recording and
    /// reconstruction. Halves memory; `lcs` and `ses` stay empty.
    pub distance_only: bool,
    /// Maximum number of route points recorded per search pass. When a pass
    /// exceeds it, the session commits the reconstructed prefix and restarts
    /// on the unconsumed suffix.
    pub route_ceiling: usize,
    /// Context-size hint forwarded to unified-hunk builders. Unused by the
    /// core itself.
    pub context_size: usize,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            distance_only: false,
            route_ceiling: DEFAULT_ROUTE_CEILING,
            context_size: DEFAULT_CONTEXT_SIZE,
        }
    }
}

impl DiffOptions {
    /// Check the configuration, rejecting a non-positive route ceiling.
    pub fn validate(&self) -> DiffResult<()> {
        if self.route_ceiling == 0 {
            return Err(DiffError::InvalidRouteCeiling(self.route_ceiling));
        }
        Ok(())
    }
}
