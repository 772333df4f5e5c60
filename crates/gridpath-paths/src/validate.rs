use std::collections::HashSet;

use gridpath_core::{Grid, Point};

/// Whether `path` is a walkable 4-connected path on `grid`.
///
/// A valid path is non-empty, stays in bounds, moves one cardinal step at a
/// time and never revisits a cell. Interior cells must be traversable; the
/// two endpoints are exempt, as the search does not test them either.
pub fn is_valid_path(grid: &Grid, path: &[Point]) -> bool {
    let Some(last) = path.len().checked_sub(1) else {
        return false;
    };

    let mut seen = HashSet::with_capacity(path.len());
    for (i, &p) in path.iter().enumerate() {
        let Ok(open) = grid.is_traversable(p) else {
            return false;
        };
        if !open && i != 0 && i != last {
            return false;
        }
        if !seen.insert(p) {
            return false;
        }
    }

    path.windows(2).all(|w| w[0].is_cardinal_neighbor(w[1]))
}
