use std::collections::HashMap;

use gridpath_core::{Grid, OutOfBounds, Point};

use crate::distance::Heuristic;
use crate::frontier::Frontier;
use crate::traits::Pather;

/// Counters describing one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Points whose neighbours were examined.
    pub expanded: u64,
    /// Entries pushed onto the frontier, duplicates included.
    pub pushed: u64,
    /// Popped entries discarded because a cheaper entry for the same point
    /// had been pushed after them.
    pub stale_skipped: u64,
}

/// Result of [`PathFinder::search`]: the path, if any, and how it was found.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Search {
    /// Start-to-goal path including both endpoints, or `None` when the goal
    /// cannot be reached.
    pub path: Option<Vec<Point>>,
    /// Frontier work done while searching.
    pub stats: SearchStats,
}

/// A* shortest-path search on a 4-connected, unit-cost grid.
///
/// `PathFinder` holds only configuration. Every query builds its score
/// maps and frontier from scratch and drops them on return, so one value
/// may serve any number of grids and threads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PathFinder {
    pub heuristic: Heuristic,
}

impl PathFinder {
    /// A finder using the [`Euclidean`](Heuristic::Euclidean) heuristic.
    pub const fn new() -> Self {
        Self {
            heuristic: Heuristic::Euclidean,
        }
    }

    /// Set the heuristic (builder).
    pub const fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Compute the shortest path from `start` to `goal` with the default
    /// configuration.
    ///
    /// Returns `Ok(None)` when no path exists. Fails with [`OutOfBounds`]
    /// if either endpoint lies outside `grid`.
    pub fn find(
        grid: &Grid,
        start: Point,
        goal: Point,
    ) -> Result<Option<Vec<Point>>, OutOfBounds> {
        Self::new().path(grid, start, goal)
    }

    /// Like [`find`](Self::find), using this finder's heuristic.
    pub fn path(
        &self,
        grid: &Grid,
        start: Point,
        goal: Point,
    ) -> Result<Option<Vec<Point>>, OutOfBounds> {
        Ok(self.search(grid, start, goal)?.path)
    }

    /// Like [`path`](Self::path), also reporting [`SearchStats`].
    pub fn search(&self, grid: &Grid, start: Point, goal: Point) -> Result<Search, OutOfBounds> {
        grid.check(start)?;
        grid.check(goal)?;
        Ok(self.search_pather(grid, start, goal))
    }

    /// Run A* over an arbitrary [`Pather`].
    ///
    /// No bounds checking is done here: `pather` must only report points it
    /// considers valid. Neither endpoint is tested for traversability; the
    /// start is always expanded, and the goal is reached only if some
    /// neighbour enumeration reports it (or it equals the start).
    pub fn search_pather<P: Pather + ?Sized>(
        &self,
        pather: &P,
        start: Point,
        goal: Point,
    ) -> Search {
        log::debug!(
            "astar: searching {start} -> {goal} with {:?} heuristic",
            self.heuristic
        );

        let mut g_score: HashMap<Point, u32> = HashMap::new();
        let mut came_from: HashMap<Point, Point> = HashMap::new();
        let mut open = Frontier::new();
        let mut stats = SearchStats::default();
        let mut nbuf = Vec::with_capacity(4);

        g_score.insert(start, 0);
        open.push(start, 0, self.heuristic.estimate(start, goal));

        let mut path = None;
        while let Some(entry) = open.pop() {
            let current = entry.pos;

            // Skip stale entries.
            if g_score.get(&current).is_some_and(|&g| entry.g > g) {
                stats.stale_skipped += 1;
                continue;
            }

            if current == goal {
                path = Some(reconstruct(&came_from, goal));
                break;
            }

            stats.expanded += 1;
            log::trace!("astar: expand {current} g={} f={}", entry.g, entry.f);

            let tentative_g = entry.g + 1;
            nbuf.clear();
            pather.neighbors(current, &mut nbuf);

            for &np in nbuf.iter() {
                if g_score.get(&np).is_some_and(|&g| tentative_g >= g) {
                    continue;
                }
                came_from.insert(np, current);
                g_score.insert(np, tentative_g);
                let f = f64::from(tentative_g) + self.heuristic.estimate(np, goal);
                open.push(np, tentative_g, f);
            }
        }
        stats.pushed = open.pushed();

        match &path {
            Some(p) => log::debug!(
                "astar: found path of {} cells ({} expanded, {} pushed, {} stale)",
                p.len(),
                stats.expanded,
                stats.pushed,
                stats.stale_skipped
            ),
            None => log::debug!(
                "astar: no path from {start} to {goal} ({} expanded)",
                stats.expanded
            ),
        }
        Search { path, stats }
    }
}

/// Walk predecessors back from `goal` to the point that has none (the
/// start), then reverse into start-to-goal order.
fn reconstruct(came_from: &HashMap<Point, Point>, goal: Point) -> Vec<Point> {
    let mut path = vec![goal];
    let mut cur = goal;
    while let Some(&prev) = came_from.get(&cur) {
        path.push(prev);
        cur = prev;
    }
    path.reverse();
    path
}
