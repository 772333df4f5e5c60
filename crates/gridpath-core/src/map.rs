//! ASCII grid maps.
//!
//! A [`GridMap`] parses text such as
//!
//! ```text
//! S.#..
//! ..#..
//! ....G
//! ```
//!
//! into a [`Grid`] plus optional start and goal points. Each line is one row
//! (y grows downwards) and all lines must have the same width.

use crate::error::ParseGridError;
use crate::geom::Point;
use crate::grid::Grid;

/// A grid parsed from text, with the endpoints marked in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMap {
    pub grid: Grid,
    pub start: Option<Point>,
    pub goal: Option<Point>,
}

impl GridMap {
    /// Traversable cell.
    pub const OPEN: char = '.';
    /// Blocked cell.
    pub const OBSTACLE: char = '#';
    /// Start marker (traversable).
    pub const START: char = 'S';
    /// Goal marker (traversable).
    pub const GOAL: char = 'G';

    /// Parse a map.
    ///
    /// Leading and trailing whitespace of the whole string is trimmed, but
    /// not of individual lines. `S` and `G` may each appear at most once.
    pub fn parse(s: &str) -> Result<Self, ParseGridError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseGridError::Empty);
        }

        let rows: Vec<&str> = s.lines().collect();
        let width = rows[0].chars().count();
        for (line, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(ParseGridError::InconsistentWidth {
                    line,
                    expected: width,
                    found,
                });
            }
        }

        let mut grid = Grid::new(width as i32, rows.len() as i32);
        let mut start = None;
        let mut goal = None;

        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                match ch {
                    Self::OPEN => {}
                    Self::OBSTACLE => grid.set_obstacle(pos)?,
                    Self::START => mark(&mut start, Self::START, pos)?,
                    Self::GOAL => mark(&mut goal, Self::GOAL, pos)?,
                    _ => return Err(ParseGridError::InvalidChar { ch, pos }),
                }
            }
        }

        log::debug!(
            "parsed {}x{} grid map with {} obstacles",
            grid.width(),
            grid.height(),
            grid.obstacle_count()
        );
        Ok(Self { grid, start, goal })
    }
}

fn mark(slot: &mut Option<Point>, marker: char, pos: Point) -> Result<(), ParseGridError> {
    if slot.is_some() {
        return Err(ParseGridError::MultipleMarkers { marker, pos });
    }
    *slot = Some(pos);
    Ok(())
}

impl std::str::FromStr for GridMap {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
