use gridpath_core::Point;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Euclidean (L2) distance between two points.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = f64::from(a.x - b.x);
    let dy = f64::from(a.y - b.y);
    dx.hypot(dy)
}

/// Remaining-cost estimate used to order the A* frontier.
///
/// All variants are admissible on a 4-connected unit-cost grid, so every
/// choice yields a shortest path; they differ in how many cells get
/// expanded and in which of several equal-length paths is returned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Heuristic {
    /// Straight-line distance.
    #[default]
    Euclidean,
    /// Sum of axis distances; exact on an open grid.
    Manhattan,
    /// Largest axis distance.
    Chebyshev,
}

impl Heuristic {
    /// Estimate the cost from `from` to `to`.
    #[inline]
    pub fn estimate(self, from: Point, to: Point) -> f64 {
        match self {
            Self::Euclidean => euclidean(from, to),
            Self::Manhattan => f64::from(manhattan(from, to)),
            Self::Chebyshev => f64::from(chebyshev(from, to)),
        }
    }
}
