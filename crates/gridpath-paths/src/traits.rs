use gridpath_core::{Grid, Point};

use crate::neighbors;

/// Minimal pathfinding interface — provides neighbor enumeration.
///
/// Every move between a point and a neighbour it reports costs 1.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// In-bounds, traversable cardinal neighbours, in [`CARDINAL`](crate::CARDINAL)
/// order. The traversability of `p` itself is not consulted.
impl Pather for Grid {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in neighbors::cardinal(p) {
            if self.is_traversable(n) == Ok(true) {
                buf.push(n);
            }
        }
    }
}
