//! Property tests for the search over random obstacle grids.

use std::collections::{HashMap, VecDeque};

use gridpath_core::{Grid, Point};
use gridpath_paths::{Heuristic, Pather, PathFinder, is_valid_path, manhattan};
use proptest::prelude::*;

/// A random grid with a start and goal inside it.
#[derive(Debug, Clone)]
struct Case {
    grid: Grid,
    start: Point,
    goal: Point,
}

fn point_in(w: i32, h: i32) -> impl Strategy<Value = Point> {
    (0..w, 0..h).prop_map(|(x, y)| Point::new(x, y))
}

fn case() -> impl Strategy<Value = Case> {
    (1..12i32, 1..12i32).prop_flat_map(|(w, h)| {
        (
            prop::collection::vec(point_in(w, h), 0..(w * h) as usize),
            point_in(w, h),
            point_in(w, h),
        )
            .prop_map(move |(obstacles, start, goal)| {
                let mut grid = Grid::new(w, h);
                grid.set_obstacles(obstacles).unwrap();
                Case { grid, start, goal }
            })
    })
}

fn heuristic() -> impl Strategy<Value = Heuristic> {
    prop_oneof![
        Just(Heuristic::Euclidean),
        Just(Heuristic::Manhattan),
        Just(Heuristic::Chebyshev),
    ]
}

/// Reference shortest path length (in cells) by breadth-first search.
fn bfs_len(grid: &Grid, start: Point, goal: Point) -> Option<usize> {
    let mut dist = HashMap::from([(start, 1usize)]);
    let mut queue = VecDeque::from([start]);
    let mut buf = Vec::new();
    while let Some(cur) = queue.pop_front() {
        let d = dist[&cur];
        if cur == goal {
            return Some(d);
        }
        buf.clear();
        grid.neighbors(cur, &mut buf);
        for &n in &buf {
            if !dist.contains_key(&n) {
                dist.insert(n, d + 1);
                queue.push_back(n);
            }
        }
    }
    None
}

proptest! {
    #[test]
    fn open_grid_is_manhattan_optimal(
        (w, h, s, t) in (1..16i32, 1..16i32)
            .prop_flat_map(|(w, h)| (Just(w), Just(h), point_in(w, h), point_in(w, h))),
        heur in heuristic(),
    ) {
        let grid = Grid::new(w, h);
        let path = PathFinder::new().with_heuristic(heur).path(&grid, s, t).unwrap().unwrap();
        prop_assert_eq!(path.len(), manhattan(s, t) as usize + 1);
    }

    #[test]
    fn start_to_itself(c in case()) {
        prop_assert_eq!(
            PathFinder::find(&c.grid, c.start, c.start).unwrap(),
            Some(vec![c.start])
        );
    }

    #[test]
    fn paths_are_well_formed(c in case(), heur in heuristic()) {
        let finder = PathFinder::new().with_heuristic(heur);
        if let Some(path) = finder.path(&c.grid, c.start, c.goal).unwrap() {
            prop_assert_eq!(path.first(), Some(&c.start));
            prop_assert_eq!(path.last(), Some(&c.goal));
            prop_assert!(is_valid_path(&c.grid, &path), "invalid path {:?}", path);
        }
    }

    #[test]
    fn matches_breadth_first_length(c in case(), heur in heuristic()) {
        let finder = PathFinder::new().with_heuristic(heur);
        let found = finder.path(&c.grid, c.start, c.goal).unwrap();
        prop_assert_eq!(found.map(|p| p.len()), bfs_len(&c.grid, c.start, c.goal));
    }

    #[test]
    fn deterministic(c in case()) {
        let a = PathFinder::new().search(&c.grid, c.start, c.goal).unwrap();
        let b = PathFinder::new().search(&c.grid, c.start, c.goal).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn extra_obstacle_never_shortens(c in case(), extra in (0..12i32, 0..12i32)) {
        let extra = Point::new(extra.0 % c.grid.width(), extra.1 % c.grid.height());
        let before = PathFinder::find(&c.grid, c.start, c.goal).unwrap();
        let mut blocked = c.grid.clone();
        blocked.set_obstacle(extra).unwrap();
        let after = PathFinder::find(&blocked, c.start, c.goal).unwrap();
        match (before, after) {
            (Some(b), Some(a)) => prop_assert!(a.len() >= b.len()),
            (None, after) => prop_assert!(after.is_none()),
            (Some(_), None) => {}
        }
    }

    #[test]
    fn out_of_bounds_rejected(c in case(), dx in 0..5i32, dy in -5..0i32) {
        let outside = Point::new(c.grid.width() + dx, dy);
        prop_assert!(PathFinder::find(&c.grid, outside, c.goal).is_err());
        prop_assert!(PathFinder::find(&c.grid, c.start, outside).is_err());
        let mut grid = c.grid.clone();
        prop_assert_eq!(grid.set_obstacle(outside).unwrap_err().pos, outside);
    }
}
