use gridpath_core::Point;

/// Cardinal step offsets in expansion order: +x, -x, +y, -y.
///
/// The search pushes neighbours in this order, so it fixes which of several
/// equally good paths is returned.
pub const CARDINAL: [Point; 4] = [
    Point::new(1, 0),
    Point::new(-1, 0),
    Point::new(0, 1),
    Point::new(0, -1),
];

/// The four cardinal neighbours of `p` in [`CARDINAL`] order.
///
/// No bounds filtering is done; callers drop the ones they cannot enter.
#[inline]
pub fn cardinal(p: Point) -> [Point; 4] {
    CARDINAL.map(|d| p + d)
}
