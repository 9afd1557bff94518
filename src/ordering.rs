//! Orderings over collections of shapes.
//!
//! Both orders are total (floats are compared with [`f64::total_cmp`]) and are
//! meant for stable sorts such as [`slice::sort_by`], so shapes with equal keys
//! keep their insertion order.

use std::cmp::Ordering;

use crate::geometry::Shape;

/// Sort key used in place of an unknown area.
///
/// Unknown-area shapes compare as if they had the largest representable area,
/// so they never sort ahead of shapes whose area is known.
pub const UNKNOWN_AREA_SORT_KEY: f64 = f64::MAX;

/// Compares two shapes by area, ascending.
///
/// Known areas always come first, even an infinite one, so an unknown area
/// never overtakes a known one through its sort key.
#[must_use]
pub fn by_area<S: Shape + ?Sized>(a: &S, b: &S) -> Ordering {
    let (a, b) = (a.area(), b.area());
    b.is_known()
        .cmp(&a.is_known())
        .then_with(|| a.sort_key().total_cmp(&b.sort_key()))
}

/// Compares two shapes by perimeter, then by area, ascending.
#[must_use]
pub fn by_perimeter_then_area<S: Shape + ?Sized>(a: &S, b: &S) -> Ordering {
    a.perimeter()
        .total_cmp(&b.perimeter())
        .then_with(|| by_area(a, b))
}

/// Stable in-place sort by area.
pub fn sort_by_area<S: Shape>(shapes: &mut [S]) {
    shapes.sort_by(by_area);
}

/// Stable in-place sort by perimeter, then area.
pub fn sort_by_perimeter_then_area<S: Shape>(shapes: &mut [S]) {
    shapes.sort_by(by_perimeter_then_area);
}
