//! The [`Grid`] type — a dense 2D field of [`Cell`]s with obstacle flags.
//!
//! A `Grid` exclusively owns its cells. Unlike a shared-buffer view, it has
//! no interior mutability: marking obstacles takes `&mut self`, so a grid
//! can be read by any number of concurrent searches but never mutated while
//! one is in flight.

use std::fmt;
use std::str::FromStr;

use crate::error::{OutOfBounds, ParseGridError};
use crate::geom::{Point, Range};
use crate::map::GridMap;

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// A single grid cell: its position and whether it can be walked on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pos: Point,
    traversable: bool,
}

impl Cell {
    #[inline]
    const fn open(pos: Point) -> Self {
        Self {
            pos,
            traversable: true,
        }
    }

    /// Position of the cell. Always equals its storage position in the grid.
    #[inline]
    pub const fn pos(&self) -> Point {
        self.pos
    }

    /// Whether the cell can be walked on.
    #[inline]
    pub const fn is_traversable(&self) -> bool {
        self.traversable
    }
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A fixed-size 2D grid of [`Cell`]s stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    bounds: Range,
}

impl Grid {
    /// Largest cell count accepted from serialized input.
    pub const MAX_CELLS: usize = 1 << 24;

    /// Create a new grid of the given dimensions with every cell traversable.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is not strictly positive.
    pub fn new(width: i32, height: i32) -> Self {
        assert!(
            width > 0 && height > 0,
            "grid dimensions must be positive, got {width}x{height}"
        );
        let bounds = Range::new(0, 0, width, height);
        let cells = bounds.iter().map(Cell::open).collect();
        Self { cells, bounds }
    }

    /// The bounding range `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Size of the grid as a `Point`.
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    /// Width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether `p` is inside this grid's bounds.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Check that `p` is in bounds, returning it unchanged if so.
    #[inline]
    pub fn check(&self, p: Point) -> Result<Point, OutOfBounds> {
        if self.bounds.contains(p) {
            Ok(p)
        } else {
            Err(OutOfBounds {
                pos: p,
                bounds: self.bounds,
            })
        }
    }

    #[inline]
    fn index(&self, p: Point) -> Result<usize, OutOfBounds> {
        let p = self.check(p)?;
        Ok((p.y as usize) * (self.width() as usize) + (p.x as usize))
    }

    /// The cell at `p`.
    pub fn cell(&self, p: Point) -> Result<&Cell, OutOfBounds> {
        let i = self.index(p)?;
        Ok(&self.cells[i])
    }

    /// Whether the cell at `p` can be walked on.
    #[inline]
    pub fn is_traversable(&self, p: Point) -> Result<bool, OutOfBounds> {
        self.cell(p).map(Cell::is_traversable)
    }

    /// Mark the cell at `p` as an obstacle. Marking twice is a no-op.
    pub fn set_obstacle(&mut self, p: Point) -> Result<(), OutOfBounds> {
        let i = self.index(p)?;
        self.cells[i].traversable = false;
        log::trace!("obstacle set at {p}");
        Ok(())
    }

    /// Make the cell at `p` traversable again.
    pub fn clear_obstacle(&mut self, p: Point) -> Result<(), OutOfBounds> {
        let i = self.index(p)?;
        self.cells[i].traversable = true;
        Ok(())
    }

    /// Mark every point in `points` as an obstacle.
    ///
    /// Stops at the first out-of-bounds point; obstacles marked before it
    /// stay marked.
    pub fn set_obstacles<I>(&mut self, points: I) -> Result<(), OutOfBounds>
    where
        I: IntoIterator<Item = Point>,
    {
        for p in points {
            self.set_obstacle(p)?;
        }
        Ok(())
    }

    /// Row-major iterator over all cells.
    pub fn cells(&self) -> impl ExactSizeIterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    /// Row-major iterator over the positions of blocked cells.
    pub fn obstacles(&self) -> impl Iterator<Item = Point> + '_ {
        self.cells
            .iter()
            .filter(|c| !c.traversable)
            .map(Cell::pos)
    }

    /// Number of blocked cells.
    pub fn obstacle_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.traversable).count()
    }
}

/// Renders the grid as an ASCII map: `.` for open cells, `#` for obstacles.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self.width() as usize;
        for (y, row) in self.cells.chunks(w).enumerate() {
            if y > 0 {
                f.write_str("\n")?;
            }
            for c in row {
                let ch = if c.traversable { GridMap::OPEN } else { GridMap::OBSTACLE };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

/// Parses an ASCII map of `.` and `#`. See [`GridMap::parse`] for the format;
/// start and goal markers are accepted and read as open cells.
impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GridMap::parse(s).map(|m| m.grid)
    }
}

// ---------------------------------------------------------------------------
// serde
// ---------------------------------------------------------------------------

/// Serialized form: only dimensions and blocked positions are stored.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GridRepr {
    width: i32,
    height: i32,
    obstacles: Vec<Point>,
}

#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let repr = GridRepr {
            width: self.width(),
            height: self.height(),
            obstacles: self.obstacles().collect(),
        };
        serde::Serialize::serialize(&repr, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        let repr = <GridRepr as serde::Deserialize>::deserialize(deserializer)?;
        if repr.width <= 0 || repr.height <= 0 {
            return Err(D::Error::custom(format!(
                "grid dimensions must be positive, got {}x{}",
                repr.width, repr.height
            )));
        }
        let cells = (repr.width as usize).checked_mul(repr.height as usize);
        if cells.is_none_or(|n| n > Grid::MAX_CELLS) {
            return Err(D::Error::custom(format!(
                "grid of {}x{} exceeds {} cells",
                repr.width,
                repr.height,
                Grid::MAX_CELLS
            )));
        }
        let mut grid = Grid::new(repr.width, repr.height);
        grid.set_obstacles(repr.obstacles).map_err(D::Error::custom)?;
        Ok(grid)
    }
}
