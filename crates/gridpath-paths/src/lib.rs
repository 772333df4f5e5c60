//! A* shortest-path search on 4-connected obstacle grids.
//!
//! Build a [`Grid`](gridpath_core::Grid), mark obstacles, then ask
//! [`PathFinder::find`] for a route:
//!
//! ```
//! use gridpath_core::{Grid, Point};
//! use gridpath_paths::PathFinder;
//!
//! let mut grid = Grid::new(5, 5);
//! for y in 0..4 {
//!     grid.set_obstacle(Point::new(2, y)).unwrap();
//! }
//! let path = PathFinder::find(&grid, Point::new(0, 0), Point::new(4, 0))
//!     .unwrap()
//!     .expect("the wall has a gap at y = 4");
//! assert!(path.contains(&Point::new(2, 4)));
//! ```
//!
//! Moves are up, down, left and right at unit cost. The frontier is ordered
//! by f-score with ties going to the entry pushed first, so results are
//! reproducible. The heuristic defaults to Euclidean distance and can be
//! changed through [`PathFinder::with_heuristic`].
//!
//! A point whose cost improves after it was queued gets a second frontier
//! entry; the outdated one is recognised by its recorded g-score when popped
//! and skipped (lazy deletion).

mod astar;
mod distance;
mod frontier;
mod neighbors;
mod traits;
mod validate;

pub use astar::{PathFinder, Search, SearchStats};
pub use distance::{Heuristic, chebyshev, euclidean, manhattan};
pub use neighbors::{CARDINAL, cardinal};
pub use traits::Pather;
pub use validate::is_valid_path;
