//! Edit-graph search: the furthest-reaching-point radius sweep.
//!
//! One [`SearchPass`] covers one invocation of the O(NP) search over a
//! working pair of sequences, the first never longer than the second. The
//! pass owns the diagonal front, the per-diagonal route indices, and the
//! route-point arena; the session replays the recorded chain afterwards.

use std::cmp::Ordering;

use tracing::trace;

/// A recorded edit-graph waypoint plus the arena index of its predecessor.
///
/// `back == -1` terminates the chain. Integer indices into a single growable
/// arena stand in for an explicit per-diagonal path matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct RoutePoint {
    pub x: usize,
    pub y: usize,
    pub back: isize,
}

/// Why a search pass stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PassOutcome {
    /// The furthest-reaching point on the target diagonal covered the
    /// longer sequence; the pass found its edit distance `delta + 2p`.
    Reached { p: usize },
    /// Route recording grew past the configured ceiling; the session must
    /// commit the reconstructed prefix and restart on the suffix.
    CeilingHit { p: usize },
}

/// Per-pass search state.
///
/// `front[k]` holds the furthest reachable `y` on diagonal `k = x - y`
/// (`-1` when unreached); diagonals are mapped to array slots by a fixed
/// offset of `m + 1`.
pub(crate) struct SearchPass {
    front: Vec<isize>,
    route_index: Vec<isize>,
    routes: Vec<RoutePoint>,
    m: usize,
    n: usize,
    offset: usize,
    delta: usize,
    record_routes: bool,
    route_ceiling: usize,
}

impl SearchPass {
    /// `m` and `n` are the working lengths of the shorter and longer
    /// sequence; `m <= n` is a precondition of the sweep order.
    pub fn new(m: usize, n: usize, record_routes: bool, route_ceiling: usize) -> Self {
        debug_assert!(m <= n, "search requires the first operand no longer than the second");
        let size = m + n + 3;
        Self {
            front: vec![-1; size],
            route_index: vec![-1; size],
            routes: Vec::new(),
            m,
            n,
            offset: m + 1,
            delta: n - m,
            record_routes,
            route_ceiling,
        }
    }

    /// Run radius sweeps until the target diagonal reaches the end of the
    /// longer sequence or the route arena exceeds its ceiling.
    ///
    /// Each sweep recomputes diagonals `-p ..= delta-1` ascending, then
    /// `delta+p ..= delta+1` descending, then `delta`, so both predecessors
    /// of every diagonal are already current for this radius.
    pub fn run<T, C>(&mut self, a: &[T], b: &[T], cmp: &C) -> PassOutcome
    where
        C: Fn(&T, &T) -> Ordering,
    {
        let delta = self.delta as isize;
        let target = delta as usize + self.offset;

        let mut p = 0usize;
        loop {
            let radius = p as isize;

            let mut k = -radius;
            while k <= delta - 1 {
                self.snake(k, a, b, cmp);
                k += 1;
            }
            let mut k = delta + radius;
            while k >= delta + 1 {
                self.snake(k, a, b, cmp);
                k -= 1;
            }
            self.snake(delta, a, b, cmp);

            if self.front[target] >= self.n as isize {
                trace!(p, routes = self.routes.len(), "search pass reached target diagonal");
                return PassOutcome::Reached { p };
            }
            if self.record_routes && self.routes.len() > self.route_ceiling {
                trace!(p, routes = self.routes.len(), "route arena exceeded ceiling");
                return PassOutcome::CeilingHit { p };
            }

            p += 1;
        }
    }

    /// Update diagonal `k` from its two predecessors, then extend the snake:
    /// greedily follow the diagonal while elements compare equal.
    fn snake<T, C>(&mut self, k: isize, a: &[T], b: &[T], cmp: &C)
    where
        C: Fn(&T, &T) -> Ordering,
    {
        let slot = (k + self.offset as isize) as usize;
        let down = self.front[slot - 1] + 1;
        let right = self.front[slot + 1];
        let back = if down > right {
            self.route_index[slot - 1]
        } else {
            self.route_index[slot + 1]
        };

        let mut y = down.max(right);
        let mut x = y - k;
        while (x as usize) < self.m
            && (y as usize) < self.n
            && cmp(&a[x as usize], &b[y as usize]) == Ordering::Equal
        {
            x += 1;
            y += 1;
        }

        if self.record_routes {
            self.route_index[slot] = self.routes.len() as isize;
            self.routes.push(RoutePoint {
                x: x as usize,
                y: y as usize,
                back,
            });
        }

        self.front[slot] = y;
    }

    /// Waypoints of the recorded chain ending on the target diagonal,
    /// ordered furthest point first. Empty when recording was disabled.
    pub fn backtrack(&self) -> Vec<(usize, usize)> {
        let mut waypoints = Vec::new();
        let mut r = self.route_index[self.delta + self.offset];
        while r != -1 {
            let point = self.routes[r as usize];
            waypoints.push((point.x, point.y));
            r = point.back;
        }
        waypoints
    }
}
